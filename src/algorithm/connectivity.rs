use crate::{
    io::configuration::HALL_NEIGHBOR_LIMIT,
    math::random::{RandomSelector, RandomSource},
    spatial::grid::{DungeonGrid, Position},
    spatial::regions::RegionMap,
    spatial::tiles::{PatternCatalogue, TileKind},
};

/// Interior walls that could be opened into corridors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectorCandidates {
    /// Walls touching two or more distinct regions
    pub primary: Vec<Position>,
    /// Other walls with fewer than three corridor neighbours
    pub secondary: Vec<Position>,
}

/// Classify every interior wall as a primary or secondary connector
pub fn find_connectors(grid: &DungeonGrid, regions: &RegionMap) -> ConnectorCandidates {
    let mut candidates = ConnectorCandidates::default();

    for position in grid.interior_positions() {
        if grid.tile(position) != Some(TileKind::Wall) {
            continue;
        }

        let mut adjacent_regions: Vec<usize> = Vec::with_capacity(4);
        let mut adjacent_halls = 0;
        for neighbor in grid.neighbors(position) {
            if let Some(region) = regions.region_at(neighbor)
                && !adjacent_regions.contains(&region)
            {
                adjacent_regions.push(region);
            }
            if grid.tile(neighbor) == Some(TileKind::Hall) {
                adjacent_halls += 1;
            }
        }

        if adjacent_regions.len() > 1 {
            candidates.primary.push(position);
        } else if adjacent_halls < HALL_NEIGHBOR_LIMIT {
            candidates.secondary.push(position);
        }
    }

    candidates
}

/// Choose the next wall to open, preferring walls that bridge regions
///
/// Without a bridging wall, a random batch of at most `sample_size`
/// secondary connectors is drawn and one member of it is chosen.
pub fn choose_connector<S: RandomSource>(
    candidates: &ConnectorCandidates,
    selector: &mut RandomSelector<S>,
    sample_size: usize,
) -> Option<Position> {
    if !candidates.primary.is_empty() {
        return selector.pick(&candidates.primary).copied();
    }
    let batch = selector.sample(&candidates.secondary, sample_size);
    selector.pick(&batch).copied()
}

/// Open walls into corridors until the walkable area forms one region
///
/// Returns the number of corridor tiles carved. Stops early only if no
/// interior wall is left to open.
pub fn connect_regions<S: RandomSource>(
    grid: &mut DungeonGrid,
    catalogue: &PatternCatalogue,
    selector: &mut RandomSelector<S>,
    sample_size: usize,
) -> usize {
    let mut regions = RegionMap::compute(grid);
    let mut carved = 0;

    while regions.count() > 1 {
        let candidates = find_connectors(grid, &regions);
        let Some(connector) = choose_connector(&candidates, selector, sample_size) else {
            tracing::warn!(
                regions = regions.count(),
                "no wall left to open, map stays disconnected"
            );
            break;
        };

        tracing::trace!(
            row = connector[0],
            col = connector[1],
            bridging = !candidates.primary.is_empty(),
            "opening corridor"
        );
        grid.commit(connector, TileKind::Hall, catalogue);
        carved += 1;

        regions = RegionMap::compute(grid);
    }

    carved
}
