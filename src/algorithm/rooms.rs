use crate::{
    io::configuration::{GeneratorConfig, ROOM_ANCHOR_SPAN_REDUCTION},
    math::random::{RandomSelector, RandomSource},
    spatial::grid::DungeonGrid,
    spatial::tiles::{PatternCatalogue, TileKind},
};
use std::ops::Range;

/// Rectangular room after clipping to the grid interior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    /// Top-left floor cell as `[row, col]`
    pub origin: [usize; 2],
    /// Floor rows covered
    pub height: usize,
    /// Floor columns covered
    pub width: usize,
}

impl Room {
    /// Build a room anchored at `origin`, clipped one cell inside the border
    pub fn clipped(origin: [usize; 2], height: usize, width: usize, grid: &DungeonGrid) -> Self {
        let row_end = (origin[0] + height).min(grid.rows().saturating_sub(1));
        let col_end = (origin[1] + width).min(grid.cols().saturating_sub(1));
        Self {
            origin,
            height: row_end.saturating_sub(origin[0]),
            width: col_end.saturating_sub(origin[1]),
        }
    }

    /// Rows of floor cells
    pub const fn rows(&self) -> Range<usize> {
        self.origin[0]..self.origin[0] + self.height
    }

    /// Columns of floor cells
    pub const fn cols(&self) -> Range<usize> {
        self.origin[1]..self.origin[1] + self.width
    }

    /// Whether the room covers a cell
    pub const fn contains(&self, position: [usize; 2]) -> bool {
        position[0] >= self.origin[0]
            && position[0] < self.origin[0] + self.height
            && position[1] >= self.origin[1]
            && position[1] < self.origin[1] + self.width
    }
}

/// Anchor coordinates allowed along one axis of length `extent`
///
/// Axes of at least 12 cells keep anchors `margin` cells from the top/left
/// edge with a span of `extent - 12`, never less than one. Shorter axes fall
/// back to any interior coordinate.
pub fn anchor_range(extent: usize, margin: usize) -> Range<usize> {
    if extent >= ROOM_ANCHOR_SPAN_REDUCTION {
        let span = (extent - ROOM_ANCHOR_SPAN_REDUCTION).max(1);
        margin..margin + span
    } else {
        1..extent.saturating_sub(1)
    }
}

/// Carve one room: floor interior plus a wall ring over still-empty cells
pub fn carve_room(grid: &mut DungeonGrid, catalogue: &PatternCatalogue, room: &Room) {
    let ring_rows = room.origin[0].saturating_sub(1)..room.origin[0] + room.height + 1;
    let ring_cols = room.origin[1].saturating_sub(1)..room.origin[1] + room.width + 1;
    for row in ring_rows {
        for col in ring_cols.clone() {
            let position = [row, col];
            if room.contains(position) {
                grid.commit(position, TileKind::Floor, catalogue);
            } else if grid.tile(position) == Some(TileKind::Empty) {
                grid.commit(position, TileKind::Wall, catalogue);
            }
        }
    }
}

/// Place the configured number of random rooms before solving
///
/// Rooms may overlap; later rooms overwrite earlier floor and walls.
/// Returns the rooms actually carved.
pub fn seed_rooms<S: RandomSource>(
    grid: &mut DungeonGrid,
    catalogue: &PatternCatalogue,
    selector: &mut RandomSelector<S>,
    config: &GeneratorConfig,
) -> Vec<Room> {
    let row_anchors = anchor_range(grid.rows(), config.room_anchor_margin);
    let col_anchors = anchor_range(grid.cols(), config.room_anchor_margin);
    if row_anchors.is_empty() || col_anchors.is_empty() {
        return Vec::new();
    }

    let mut rooms = Vec::with_capacity(config.room_attempts);
    for _ in 0..config.room_attempts {
        let row = selector.range_inclusive(row_anchors.start, row_anchors.end - 1);
        let col = selector.range_inclusive(col_anchors.start, col_anchors.end - 1);
        let height = selector.range_inclusive(config.room_min_size, config.room_max_size);
        let width = selector.range_inclusive(config.room_min_size, config.room_max_size);

        let room = Room::clipped([row, col], height, width, grid);
        carve_room(grid, catalogue, &room);
        rooms.push(room);
    }

    rooms
}
