use crate::{
    io::error::{AlgorithmError, Result, invalid_input},
    math::random::{RandomSelector, RandomSource},
    spatial::grid::Position,
    spatial::tiles::TileKind,
};

/// Starting cells for the player and enemies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnPositions {
    /// Player start as `[row, col]`
    pub player: Position,
    /// Enemy starts as `[row, col]`, all distinct from each other and the player
    pub enemies: Vec<Position>,
}

/// Manhattan distance between two cells
pub const fn manhattan_distance(a: Position, b: Position) -> usize {
    a[0].abs_diff(b[0]) + a[1].abs_diff(b[1])
}

/// Every floor or corridor cell of a text map in row-major order
pub fn walkable_cells(map: &str) -> Vec<Position> {
    map.split('\n')
        .enumerate()
        .flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, glyph)| TileKind::is_walkable_glyph(glyph))
                .map(move |(col, _)| [row, col])
        })
        .collect()
}

/// Pick a player start and up to `enemy_count` enemy starts
///
/// The player gets a uniformly random walkable cell. Enemies are drawn without
/// replacement from the remaining cells at least `min_distance` away from the
/// player; when too few such cells exist every remaining cell is eligible.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank map and `NoWalkableCells` when the map
/// has no floor or corridor tile
pub fn choose_positions<S: RandomSource>(
    map: &str,
    enemy_count: usize,
    min_distance: usize,
    selector: &mut RandomSelector<S>,
) -> Result<SpawnPositions> {
    if map.trim().is_empty() {
        return Err(invalid_input("map", &map, &"must be a non-empty string"));
    }

    let mut candidates = walkable_cells(map);
    let Some(player_index) = selector.index(candidates.len()) else {
        let rows = map.split('\n').count();
        let cols = map.split('\n').map(|line| line.chars().count()).max().unwrap_or(0);
        return Err(AlgorithmError::NoWalkableCells {
            grid_dimensions: (rows, cols),
        });
    };
    let player = candidates.remove(player_index);

    let wanted = enemy_count.min(candidates.len());
    let distant: Vec<Position> = candidates
        .iter()
        .copied()
        .filter(|&cell| manhattan_distance(cell, player) >= min_distance)
        .collect();
    let mut pool = if distant.len() < wanted {
        candidates
    } else {
        distant
    };

    let mut enemies = Vec::with_capacity(wanted);
    for _ in 0..wanted {
        let Some(enemy) = selector.take(&mut pool) else {
            break;
        };
        enemies.push(enemy);
    }

    Ok(SpawnPositions { player, enemies })
}
