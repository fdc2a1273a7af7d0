//! Transforms applied to finished text maps before gameplay uses them

/// Integer upscaling of text maps
pub mod scale;
/// Player and enemy spawn selection
pub mod spawn;

pub use scale::upscale;
pub use spawn::{SpawnPositions, choose_positions};
