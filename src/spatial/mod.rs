//! Spatial data structures for the dungeon map
//!
//! This module contains spatial-related functionality including:
//! - Tile kinds and the pattern adjacency catalogue
//! - Grid state management and text conversion
//! - Walkable region labelling

/// Grid state management and neighbour iteration
pub mod grid;
/// Walkable region flood fill
pub mod regions;
/// Tile kinds and pattern catalogue
pub mod tiles;

pub use grid::{DungeonGrid, Position};
pub use tiles::{PatternCatalogue, TileKind};
