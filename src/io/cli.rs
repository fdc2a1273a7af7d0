//! Command-line interface for batch dungeon generation

use crate::algorithm::executor::{GenerationStats, generate_with};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_MAP_COUNT, DEFAULT_MIN_ENEMY_DISTANCE, DEFAULT_ROOM_ATTEMPTS,
    DEFAULT_SCALE, DEFAULT_SEED, DEFAULT_WIDTH, GeneratorConfig, OUTPUT_PREFIX, PNG_CELL_PIXELS,
};
use crate::io::error::{AlgorithmError, Result};
use crate::io::image::export_map_as_png;
use crate::io::progress::ProgressManager;
use crate::math::random::{RandomSelector, RngSource};
use crate::postprocess::{SpawnPositions, choose_positions, upscale};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "wfc-dungeon")]
#[command(
    author,
    version,
    about = "Generate connected dungeon maps with wave function collapse"
)]
/// Command-line arguments for the dungeon generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Map width in tiles
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Map height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed of the first map; later maps use consecutive seeds
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of maps to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAP_COUNT)]
    pub count: usize,

    /// Integer upscale factor applied to every map
    #[arg(short = 'x', long, default_value_t = DEFAULT_SCALE)]
    pub scale: usize,

    /// Choose spawn positions for this many enemies plus the player
    #[arg(short, long)]
    pub enemies: Option<usize>,

    /// Minimum Manhattan distance between player and enemies
    #[arg(short = 'd', long, default_value_t = DEFAULT_MIN_ENEMY_DISTANCE)]
    pub min_distance: usize,

    /// Number of rooms seeded before solving
    #[arg(short, long, default_value_t = DEFAULT_ROOM_ATTEMPTS)]
    pub rooms: usize,

    /// Directory receiving map files instead of stdout
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Also write a PNG preview of every map (requires --output)
    #[arg(short, long)]
    pub png: bool,

    /// Suppress progress and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every generation phase
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Most detailed log level to emit
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    /// Generator tunables derived from the arguments
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            room_attempts: self.rooms,
            ..GeneratorConfig::default()
        }
    }
}

/// One finished map ready for output
#[derive(Debug, Clone)]
pub struct RenderedMap {
    /// Seed the map was generated from
    pub seed: u64,
    /// Upscaled text map
    pub map: String,
    /// Spawn positions on the upscaled map, when requested
    pub spawns: Option<SpawnPositions>,
    /// Counters of the generation run
    pub stats: GenerationStats,
}

/// Format spawn positions as `player r c` / `enemy r c` lines
pub fn format_spawns(spawns: &SpawnPositions) -> String {
    let mut lines = vec![format!("player {} {}", spawns.player[0], spawns.player[1])];
    lines.extend(
        spawns
            .enemies
            .iter()
            .map(|enemy| format!("enemy {} {}", enemy[0], enemy[1])),
    );
    lines.join("\n")
}

/// Orchestrates generation of a batch of maps with progress tracking
pub struct MapProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MapProcessor {
    /// Create a new processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.count));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate, write and report every requested map
    ///
    /// # Errors
    ///
    /// Returns an error if generation rejects the arguments or an output
    /// file cannot be written
    pub fn process(&mut self) -> Result<()> {
        if let Some(output_dir) = &self.cli.output {
            std::fs::create_dir_all(output_dir).map_err(|e| AlgorithmError::FileSystem {
                path: output_dir.clone(),
                operation: "create directory",
                source: e,
            })?;
        } else if self.cli.png {
            tracing::warn!("--png ignored without --output");
        }

        for index in 0..self.cli.count {
            let seed = self.cli.seed.wrapping_add(index as u64);
            let rendered = self.render_map(seed)?;
            self.emit(&rendered, index)?;

            if let Some(ref pm) = self.progress_manager {
                pm.complete_map(seed);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Generate one map from `seed` and apply scaling and spawn selection
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unusable dimensions, room settings or scale,
    /// and `NoWalkableCells` if spawns are requested on a map without floor
    pub fn render_map(&self, seed: u64) -> Result<RenderedMap> {
        let mut rng = StdRng::seed_from_u64(seed);
        let dungeon = generate_with(
            self.cli.width,
            self.cli.height,
            self.cli.generator_config(),
            RngSource(&mut rng),
        )?;
        tracing::info!(seed, stats = ?dungeon.stats, "map generated");

        let map = upscale(&dungeon.to_ascii(), self.cli.scale)?;
        let spawns = match self.cli.enemies {
            Some(enemy_count) => Some(choose_positions(
                &map,
                enemy_count,
                self.cli.min_distance,
                &mut RandomSelector::new(RngSource(&mut rng)),
            )?),
            None => None,
        };

        Ok(RenderedMap {
            seed,
            map,
            spawns,
            stats: dungeon.stats,
        })
    }

    fn emit(&self, rendered: &RenderedMap, index: usize) -> Result<()> {
        match &self.cli.output {
            Some(output_dir) => self.write_files(rendered, output_dir),
            None => {
                Self::print(rendered, index);
                Ok(())
            }
        }
    }

    // Allow print for map output on stdout
    #[allow(clippy::print_stdout)]
    fn print(rendered: &RenderedMap, index: usize) {
        if index > 0 {
            println!();
        }
        println!("{}", rendered.map);
        if let Some(spawns) = &rendered.spawns {
            println!("{}", format_spawns(spawns));
        }
    }

    fn write_files(&self, rendered: &RenderedMap, output_dir: &Path) -> Result<()> {
        let map_path = Self::get_output_path(output_dir, rendered.seed, "txt");
        write_text(&map_path, &rendered.map)?;

        if let Some(spawns) = &rendered.spawns {
            let spawn_path = Self::get_spawn_path(output_dir, rendered.seed);
            write_text(&spawn_path, &format_spawns(spawns))?;
        }

        if self.cli.png {
            let png_path = Self::get_output_path(output_dir, rendered.seed, "png");
            export_map_as_png(&rendered.map, &png_path, PNG_CELL_PIXELS)?;
        }

        Ok(())
    }

    /// Path of a map artefact for `seed` with the given extension
    pub fn get_output_path(output_dir: &Path, seed: u64, extension: &str) -> PathBuf {
        output_dir.join(format!("{OUTPUT_PREFIX}_{seed}.{extension}"))
    }

    /// Path of the spawn listing for `seed`
    pub fn get_spawn_path(output_dir: &Path, seed: u64) -> PathBuf {
        output_dir.join(format!("{OUTPUT_PREFIX}_{seed}_spawns.txt"))
    }
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source: e,
    })
}
