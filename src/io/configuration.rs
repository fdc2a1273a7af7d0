//! Algorithm constants and runtime configuration defaults

use crate::io::error::{Result, invalid_input};

// Room seeding
/// Number of rooms placed before constraint solving
pub const DEFAULT_ROOM_ATTEMPTS: usize = 10;
/// Smallest room side length
pub const ROOM_MIN_SIZE: usize = 3;
/// Largest room side length
pub const ROOM_MAX_SIZE: usize = 6;
/// Distance between the map edge and the first possible room anchor
pub const ROOM_ANCHOR_MARGIN: usize = 5;
/// Amount subtracted from a map side to get the span of room anchors
pub const ROOM_ANCHOR_SPAN_REDUCTION: usize = 12;

// Connectivity repair
/// Maximum number of secondary connectors drawn into one batch
pub const SECONDARY_CONNECTOR_SAMPLE: usize = 9;
/// Walls with this many corridor neighbours are no longer secondary connectors
pub const HALL_NEIGHBOR_LIMIT: usize = 3;

// Dead-end pruning
/// Blocked sides at which a walkable cell counts as a dead end
pub const DEAD_END_BLOCKED_SIDES: usize = 3;

// Spawn placement
/// Default minimum Manhattan distance between player and enemies
pub const DEFAULT_MIN_ENEMY_DISTANCE: usize = 5;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default map width in tiles
pub const DEFAULT_WIDTH: usize = 40;
/// Default map height in tiles
pub const DEFAULT_HEIGHT: usize = 30;
/// Default number of maps generated per run
pub const DEFAULT_MAP_COUNT: usize = 1;
/// Default upscale factor
pub const DEFAULT_SCALE: usize = 1;

// Output settings
/// Prefix of generated map files
pub const OUTPUT_PREFIX: &str = "dungeon";
/// Side length in pixels of one tile in PNG previews
pub const PNG_CELL_PIXELS: u32 = 8;
/// Smallest batch that gets a progress bar
pub const MIN_MAPS_FOR_PROGRESS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Tunables read by the generation pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of rooms carved before solving
    pub room_attempts: usize,
    /// Smallest room side length (inclusive)
    pub room_min_size: usize,
    /// Largest room side length (inclusive)
    pub room_max_size: usize,
    /// Distance from the map edge to the first room anchor on large maps
    pub room_anchor_margin: usize,
    /// Batch size when falling back to secondary connectors
    pub connector_sample_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            room_attempts: DEFAULT_ROOM_ATTEMPTS,
            room_min_size: ROOM_MIN_SIZE,
            room_max_size: ROOM_MAX_SIZE,
            room_anchor_margin: ROOM_ANCHOR_MARGIN,
            connector_sample_size: SECONDARY_CONNECTOR_SAMPLE,
        }
    }
}

impl GeneratorConfig {
    /// Configuration that skips room seeding entirely
    #[must_use]
    pub fn without_rooms() -> Self {
        Self {
            room_attempts: 0,
            ..Self::default()
        }
    }

    /// Check that the tunables describe a usable configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if room sizes are zero or inverted, or if the
    /// connector sample size is zero
    pub fn validate(&self) -> Result<()> {
        if self.room_min_size == 0 {
            return Err(invalid_input(
                "room_min_size",
                &self.room_min_size,
                &"must be at least 1",
            ));
        }
        if self.room_max_size < self.room_min_size {
            return Err(invalid_input(
                "room_max_size",
                &self.room_max_size,
                &format!("must not be smaller than room_min_size ({})", self.room_min_size),
            ));
        }
        if self.connector_sample_size == 0 {
            return Err(invalid_input(
                "connector_sample_size",
                &self.connector_sample_size,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}
