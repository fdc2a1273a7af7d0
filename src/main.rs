//! CLI entry point for the dungeon generator

use clap::Parser;
use wfc_dungeon::io::cli::{Cli, MapProcessor};

fn main() -> wfc_dungeon::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut processor = MapProcessor::new(cli);
    processor.process()
}
