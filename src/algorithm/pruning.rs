use crate::{
    io::configuration::DEAD_END_BLOCKED_SIDES,
    spatial::grid::{DungeonGrid, Position},
    spatial::tiles::{PatternCatalogue, TileKind},
};

/// Whether a walkable cell has at most one open side
pub fn is_dead_end(grid: &DungeonGrid, position: Position) -> bool {
    grid.is_walkable(position) && grid.blocked_sides(position) >= DEAD_END_BLOCKED_SIDES
}

/// Fill interior dead ends back into walls until a full pass changes nothing
///
/// Border cells are never rewritten. Cells are rewritten in place during a
/// pass, so a later cell in the same pass already sees earlier fills.
/// Returns the number of cells filled.
pub fn remove_dead_ends(grid: &mut DungeonGrid, catalogue: &PatternCatalogue) -> usize {
    let mut filled = 0;

    loop {
        let mut changed = false;
        for position in grid.interior_positions() {
            if is_dead_end(grid, position) {
                grid.commit(position, TileKind::Wall, catalogue);
                filled += 1;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    filled
}
