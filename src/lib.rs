//! Wave function collapse dungeon generator
//!
//! Rooms are carved first, the remaining cells are solved with minimum-entropy
//! collapse and constraint propagation, disconnected areas are joined with
//! corridors, and dead ends are filled. The result is a rectangular text map
//! of walls (`#`), floors (`.`) and corridors (`+`) that is fully connected
//! and enclosed by walls.

#![forbid(unsafe_code)]

/// Constraint solving, room seeding, connectivity repair and pruning
pub mod algorithm;
/// Command-line interface, configuration, errors and file output
pub mod io;
/// Randomness abstractions
pub mod math;
/// Upscaling and spawn selection for finished maps
pub mod postprocess;
/// Grid, tile and region data structures
pub mod spatial;

pub use algorithm::executor::{
    DungeonGenerator, GeneratedDungeon, GenerationStats, generate, generate_with,
};
pub use io::configuration::GeneratorConfig;
pub use io::error::{AlgorithmError, Result};
pub use postprocess::{SpawnPositions, choose_positions, upscale};
