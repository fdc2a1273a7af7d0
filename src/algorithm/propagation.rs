use std::collections::VecDeque;

use crate::spatial::grid::{DungeonGrid, Position};
use crate::spatial::tiles::PatternCatalogue;

/// Restore arc consistency around a freshly decided cell
///
/// Breadth-first relaxation: a neighbour keeps pattern `p` only if every
/// pattern still possible at the current cell admits `p`. Any strict
/// reduction replaces the neighbour's set and enqueues it, so constraints
/// cascade even when the neighbour is left with several options. Unchanged
/// neighbours are not revisited. Sets only ever shrink, which bounds the
/// number of enqueues.
///
/// Returns the number of reductions made.
pub fn propagate(grid: &mut DungeonGrid, catalogue: &PatternCatalogue, origin: Position) -> usize {
    let mut queue = VecDeque::from([origin]);
    let mut reductions = 0;

    while let Some(current) = queue.pop_front() {
        let Some(source) = grid.possibilities(current).cloned() else {
            continue;
        };

        let neighbors: Vec<Position> = grid.neighbors(current).collect();
        for neighbor in neighbors {
            let Some(existing) = grid.possibilities(neighbor) else {
                continue;
            };

            let allowed = existing.filtered(|candidate| {
                source
                    .iter()
                    .all(|pattern| catalogue.admits(pattern, candidate))
            });

            if allowed.len() < existing.len() {
                grid.set_possibilities(neighbor, allowed);
                queue.push_back(neighbor);
                reductions += 1;
            }
        }
    }

    reductions
}
