use crate::{
    algorithm::propagation::propagate,
    math::random::{RandomSelector, RandomSource},
    spatial::grid::{DungeonGrid, Position},
    spatial::tiles::{PatternCatalogue, PatternId},
};

/// Find the undecided interior cell with the fewest remaining patterns
///
/// Decided cells (one pattern) and contradictions (no pattern) are skipped.
/// Ties go to the first cell in row-major order. `None` means every interior
/// cell is decided and solving is finished.
pub fn select_next_cell(grid: &DungeonGrid) -> Option<Position> {
    let mut best: Option<(usize, Position)> = None;

    for position in grid.interior_positions() {
        let entropy = grid.possibilities(position).map_or(0, |set| set.len());
        if entropy <= 1 {
            continue;
        }
        if best.is_none_or(|(lowest, _)| entropy < lowest) {
            best = Some((entropy, position));
        }
    }

    best.map(|(_, position)| position)
}

/// Fix a cell to one of its possible patterns and propagate the consequences
///
/// The pattern is drawn uniformly from the cell's current set and committed
/// both as the singleton possibility and as the map tile. Returns `None`
/// without touching the grid when the set is empty.
pub fn collapse<S: RandomSource>(
    grid: &mut DungeonGrid,
    catalogue: &PatternCatalogue,
    selector: &mut RandomSelector<S>,
    position: Position,
) -> Option<PatternId> {
    let candidates = grid.possibilities(position)?.to_vec();
    let pattern = *selector.pick(&candidates)?;
    let kind = catalogue.kind(pattern)?;

    grid.commit(position, kind, catalogue);
    propagate(grid, catalogue, position);

    Some(pattern)
}
