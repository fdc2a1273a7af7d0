/// Command-line parsing and batch map output
pub mod cli;
/// Algorithm constants and generator tunables
pub mod configuration;
/// Error types
pub mod error;
/// PNG map previews
pub mod image;
/// Batch progress display
pub mod progress;
