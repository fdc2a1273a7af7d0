//! Connected walkable regions labelled by flood fill

use ndarray::Array2;
use std::collections::VecDeque;

use crate::spatial::grid::{DungeonGrid, Position};

/// Region label for every cell; `None` for walls and other blocked cells
///
/// Built fresh whenever connectivity is evaluated and never persisted.
#[derive(Debug, Clone)]
pub struct RegionMap {
    labels: Array2<Option<usize>>,
    count: usize,
}

impl RegionMap {
    /// Label every maximal 4-connected component of walkable cells
    ///
    /// Regions are numbered in row-major order of their first cell. Fills may
    /// start on border cells, so a walkable border cell that touches no
    /// interior floor still gets a region of its own.
    pub fn compute(grid: &DungeonGrid) -> Self {
        let mut labels = Array2::from_elem(grid.dimensions, None);
        let mut count = 0;

        for start in grid.positions() {
            let unlabelled = labels.get(start).is_some_and(Option::is_none);
            if unlabelled && grid.is_walkable(start) {
                flood_fill(grid, &mut labels, start, count);
                count += 1;
            }
        }

        Self { labels, count }
    }

    /// Number of distinct regions
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Region label of a cell, `None` for blocked or out-of-range cells
    pub fn region_at(&self, position: Position) -> Option<usize> {
        self.labels.get(position).copied().flatten()
    }
}

// Iterative breadth-first fill of one region
fn flood_fill(
    grid: &DungeonGrid,
    labels: &mut Array2<Option<usize>>,
    start: Position,
    region: usize,
) {
    let mut queue = VecDeque::from([start]);
    if let Some(label) = labels.get_mut(start) {
        *label = Some(region);
    }

    while let Some(current) = queue.pop_front() {
        for neighbor in grid.neighbors(current) {
            if !grid.is_walkable(neighbor) {
                continue;
            }
            if let Some(label) = labels.get_mut(neighbor)
                && label.is_none()
            {
                *label = Some(region);
                queue.push_back(neighbor);
            }
        }
    }
}
