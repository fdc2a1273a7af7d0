use crate::{
    algorithm::connectivity::connect_regions,
    algorithm::pruning::remove_dead_ends,
    algorithm::rooms::seed_rooms,
    algorithm::selection::{collapse, select_next_cell},
    io::configuration::{GeneratorConfig, MAX_GRID_DIMENSION},
    io::error::{Result, invalid_input},
    math::random::{RandomSelector, RandomSource, RngSource},
    spatial::grid::DungeonGrid,
    spatial::regions::RegionMap,
    spatial::tiles::{PatternCatalogue, TileKind},
};
use rand::{SeedableRng, rngs::StdRng};

/// Counters describing what one generation run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Rooms carved during seeding
    pub rooms_carved: usize,
    /// Cells fixed by the collapse loop
    pub collapses: usize,
    /// Cells whose possibility set emptied before they could be collapsed
    pub contradictions: usize,
    /// Walkable regions found before connectivity repair
    pub regions_before_repair: usize,
    /// Walls opened into corridors during repair
    pub corridors_carved: usize,
    /// Dead-end cells filled back into walls
    pub dead_ends_filled: usize,
}

/// Finished map together with the statistics of the run that built it
#[derive(Debug, Clone)]
pub struct GeneratedDungeon {
    /// Final grid; contains no `Empty` cells
    pub grid: DungeonGrid,
    /// What the pipeline did
    pub stats: GenerationStats,
}

impl GeneratedDungeon {
    /// Text map with rows separated by newlines
    pub fn to_ascii(&self) -> String {
        self.grid.to_ascii()
    }
}

/// Single-use dungeon generator
///
/// Owns the grid for the duration of one run. `run` consumes the generator,
/// so every map needs a fresh instance.
pub struct DungeonGenerator<S: RandomSource> {
    /// Grid being rewritten by the pipeline
    pub grid: DungeonGrid,
    /// Pattern rules used by the solver
    pub catalogue: PatternCatalogue,
    /// Pipeline tunables
    pub config: GeneratorConfig,
    /// Random number generator for every stochastic choice
    pub random_selector: RandomSelector<S>,
    /// Counters accumulated so far
    pub stats: GenerationStats,
    seeded: bool,
}

impl<S: RandomSource> DungeonGenerator<S> {
    /// Create a generator for an undecided `width` x `height` map
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`, or if the configuration is inconsistent
    pub fn new(width: usize, height: usize, config: GeneratorConfig, source: S) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;
        config.validate()?;

        let catalogue = PatternCatalogue::dungeon();
        let grid = DungeonGrid::new(height, width, &catalogue);
        Ok(Self::assemble(grid, catalogue, config, source, false))
    }

    /// Run the pipeline on a pre-built grid without seeding rooms
    ///
    /// Cells already committed in `grid` are treated as decided.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the configuration is inconsistent
    pub fn from_grid(grid: DungeonGrid, config: GeneratorConfig, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(
            grid,
            PatternCatalogue::dungeon(),
            config,
            source,
            true,
        ))
    }

    const fn assemble(
        grid: DungeonGrid,
        catalogue: PatternCatalogue,
        config: GeneratorConfig,
        source: S,
        seeded: bool,
    ) -> Self {
        Self {
            grid,
            catalogue,
            config,
            random_selector: RandomSelector::new(source),
            stats: GenerationStats {
                rooms_carved: 0,
                collapses: 0,
                contradictions: 0,
                regions_before_repair: 0,
                corridors_carved: 0,
                dead_ends_filled: 0,
            },
            seeded,
        }
    }

    /// Carve the configured rooms, at most once per generator
    pub fn seed_rooms(&mut self) {
        if self.seeded {
            return;
        }
        let rooms = seed_rooms(
            &mut self.grid,
            &self.catalogue,
            &mut self.random_selector,
            &self.config,
        );
        self.stats.rooms_carved = rooms.len();
        self.seeded = true;
        tracing::debug!(rooms = rooms.len(), "rooms seeded");
    }

    /// Collapse minimum-entropy cells until none is undecided
    pub fn solve(&mut self) {
        while let Some(position) = select_next_cell(&self.grid) {
            if collapse(
                &mut self.grid,
                &self.catalogue,
                &mut self.random_selector,
                position,
            )
            .is_none()
            {
                // Unreachable for sets with two or more patterns
                break;
            }
            self.stats.collapses += 1;
        }
        tracing::debug!(collapses = self.stats.collapses, "constraint solving finished");
    }

    /// Force leftover `Empty` cells to wall and repair contradictions
    ///
    /// A cell whose possibility set emptied is a contradiction. Undecided ones
    /// become walls; committed ones keep their tile and get the matching
    /// singleton set back, so every cell ends decided and consistent.
    pub fn resolve_leftovers(&mut self) {
        let mut contradictions = 0;
        for position in self.grid.positions() {
            let contradiction = self
                .grid
                .possibilities(position)
                .is_some_and(|set| set.is_empty());
            if contradiction {
                contradictions += 1;
            }

            let kind = match self.grid.tile(position) {
                Some(TileKind::Empty) => TileKind::Wall,
                Some(kind) if contradiction => kind,
                _ => continue,
            };
            self.grid.commit(position, kind, &self.catalogue);
        }

        self.stats.contradictions = contradictions;
        if contradictions > 0 {
            tracing::debug!(contradictions, "contradictory cells coerced");
        }
    }

    /// Open corridors until the walkable area is a single region
    pub fn connect(&mut self) {
        self.stats.regions_before_repair = RegionMap::compute(&self.grid).count();
        self.stats.corridors_carved = connect_regions(
            &mut self.grid,
            &self.catalogue,
            &mut self.random_selector,
            self.config.connector_sample_size,
        );
        tracing::debug!(
            regions = self.stats.regions_before_repair,
            corridors = self.stats.corridors_carved,
            "regions connected"
        );
    }

    /// Fill dead ends until a fixed point is reached
    pub fn prune(&mut self) {
        self.stats.dead_ends_filled = remove_dead_ends(&mut self.grid, &self.catalogue);
        tracing::debug!(filled = self.stats.dead_ends_filled, "dead ends removed");
    }

    /// Run every stage in order and hand back the finished map
    pub fn run(mut self) -> GeneratedDungeon {
        let span = tracing::debug_span!(
            "generate",
            rows = self.grid.rows(),
            cols = self.grid.cols()
        );
        let _entered = span.enter();

        self.seed_rooms();
        self.solve();
        self.resolve_leftovers();
        self.connect();
        self.prune();

        GeneratedDungeon {
            grid: self.grid,
            stats: self.stats,
        }
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 || value > MAX_GRID_DIMENSION {
        return Err(invalid_input(
            parameter,
            &value,
            &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

/// Generate a map with an explicit configuration and random source
///
/// # Errors
///
/// Returns `InvalidInput` for unusable dimensions or configuration
pub fn generate_with<S: RandomSource>(
    width: usize,
    height: usize,
    config: GeneratorConfig,
    source: S,
) -> Result<GeneratedDungeon> {
    Ok(DungeonGenerator::new(width, height, config, source)?.run())
}

/// Generate a `width` x `height` text map from a seed with default settings
///
/// # Errors
///
/// Returns `InvalidInput` if a dimension is zero or too large
pub fn generate(width: usize, height: usize, seed: u64) -> Result<String> {
    let source = RngSource(StdRng::seed_from_u64(seed));
    let dungeon = generate_with(width, height, GeneratorConfig::default(), source)?;
    tracing::info!(
        width,
        height,
        seed,
        corridors = dungeon.stats.corridors_carved,
        "dungeon generated"
    );
    Ok(dungeon.to_ascii())
}
