//! Grid state for dungeon generation
//!
//! Pairs the committed tile map with the per-cell possibility sets of the
//! constraint solver. A cell is decided once its possibility set holds exactly
//! one pattern, and that pattern's kind is the committed tile. Cells refer to
//! each other only through `[row, col]` coordinates looked up against the grid.

use ndarray::Array2;

use crate::algorithm::bitset::PatternSet;
use crate::io::error::{Result, invalid_input};
use crate::spatial::tiles::{PatternCatalogue, TileKind};

/// Grid coordinates as `[row, col]`
pub type Position = [usize; 2];

/// Orthogonal neighbour offsets: up, down, left, right
pub const DIRECTIONS: [[isize; 2]; 4] = [[-1, 0], [1, 0], [0, -1], [0, 1]];

/// Tile map and solver state for one generation run
#[derive(Debug, Clone)]
pub struct DungeonGrid {
    /// Committed tile at every cell
    pub tiles: Array2<TileKind>,

    /// Patterns still possible at every cell
    pub possibilities: Array2<PatternSet>,

    /// Current grid dimensions (rows, cols)
    pub dimensions: (usize, usize),
}

impl DungeonGrid {
    /// Create an undecided grid enclosed by a wall border
    ///
    /// Interior cells start `Empty` with every pattern possible; border cells
    /// are committed walls with the singleton wall possibility.
    pub fn new(rows: usize, cols: usize, catalogue: &PatternCatalogue) -> Self {
        let is_border =
            |row: usize, col: usize| row == 0 || col == 0 || row + 1 == rows || col + 1 == cols;

        let tiles = Array2::from_shape_fn((rows, cols), |(row, col)| {
            if is_border(row, col) {
                TileKind::Wall
            } else {
                TileKind::Empty
            }
        });
        let possibilities = Array2::from_shape_fn((rows, cols), |(row, col)| {
            if is_border(row, col) {
                catalogue.decided(TileKind::Wall)
            } else {
                catalogue.all_patterns()
            }
        });

        Self {
            tiles,
            possibilities,
            dimensions: (rows, cols),
        }
    }

    /// Parse a text map into a grid
    ///
    /// Committed glyphs receive their singleton possibility set; spaces parse
    /// as `Empty` cells with every pattern still possible.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the text is blank, rows differ in length, or
    /// a glyph is not one of `#`, `.`, `+` or space
    pub fn from_ascii(text: &str, catalogue: &PatternCatalogue) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(invalid_input("map", &text, &"must be a non-empty string"));
        }

        let lines: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, Vec::len);

        let mut kinds = Vec::with_capacity(rows * cols);
        for (row, line) in lines.iter().enumerate() {
            if line.len() != cols {
                return Err(invalid_input(
                    "map",
                    &format!("row {row}"),
                    &format!("has {} columns, expected {cols}", line.len()),
                ));
            }
            for &glyph in line {
                let kind = TileKind::from_glyph(glyph).ok_or_else(|| {
                    invalid_input("map", &glyph, &format!("unknown glyph in row {row}"))
                })?;
                kinds.push(kind);
            }
        }

        let tiles = Array2::from_shape_vec((rows, cols), kinds)
            .map_err(|e| invalid_input("map", &format!("{rows}x{cols}"), &e))?;
        let possibilities = tiles.map(|&kind| match kind {
            TileKind::Empty => catalogue.all_patterns(),
            committed => catalogue.decided(committed),
        });

        Ok(Self {
            tiles,
            possibilities,
            dimensions: (rows, cols),
        })
    }

    /// Serialize the committed tiles, one line per row
    pub fn to_ascii(&self) -> String {
        self.tiles
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|kind| kind.glyph()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Get the number of rows in the grid
    pub const fn rows(&self) -> usize {
        self.dimensions.0
    }

    /// Get the number of columns in the grid
    pub const fn cols(&self) -> usize {
        self.dimensions.1
    }

    /// The single boundary predicate: non-wrapping, signed coordinates
    pub const fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows() && (col as usize) < self.cols()
    }

    /// Whether a position lies on the outer ring of the grid
    pub const fn is_border(&self, position: Position) -> bool {
        position[0] == 0
            || position[1] == 0
            || position[0] + 1 == self.rows()
            || position[1] + 1 == self.cols()
    }

    /// Move one cell in `direction`, or `None` when that leaves the grid
    pub fn step(&self, position: Position, direction: [isize; 2]) -> Option<Position> {
        let row = position[0] as isize + direction[0];
        let col = position[1] as isize + direction[1];
        self.in_bounds(row, col)
            .then_some([row as usize, col as usize])
    }

    /// In-bounds orthogonal neighbours of a position
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&direction| self.step(position, direction))
    }

    /// Row-major iterator over every cell
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.cols();
        (0..self.rows()).flat_map(move |row| (0..cols).map(move |col| [row, col]))
    }

    /// Row-major iterator over every non-border cell
    pub fn interior_positions(&self) -> impl Iterator<Item = Position> + use<> {
        let row_end = self.rows().saturating_sub(1);
        let col_end = self.cols().saturating_sub(1);
        (1..row_end).flat_map(move |row| (1..col_end).map(move |col| [row, col]))
    }

    /// Committed tile at a position
    pub fn tile(&self, position: Position) -> Option<TileKind> {
        self.tiles.get(position).copied()
    }

    /// Overwrite the committed tile at a position
    pub fn set_tile(&mut self, position: Position, kind: TileKind) {
        if let Some(tile) = self.tiles.get_mut(position) {
            *tile = kind;
        }
    }

    /// Possibility set at a position
    pub fn possibilities(&self, position: Position) -> Option<&PatternSet> {
        self.possibilities.get(position)
    }

    /// Replace the possibility set at a position
    pub fn set_possibilities(&mut self, position: Position, set: PatternSet) {
        if let Some(cell) = self.possibilities.get_mut(position) {
            *cell = set;
        }
    }

    /// Commit a tile and its singleton possibility set together
    pub fn commit(&mut self, position: Position, kind: TileKind, catalogue: &PatternCatalogue) {
        self.set_tile(position, kind);
        self.set_possibilities(position, catalogue.decided(kind));
    }

    /// Whether a position is a walkable tile
    pub fn is_walkable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(TileKind::is_walkable)
    }

    /// Count orthogonal sides that are walls or leave the grid
    pub fn blocked_sides(&self, position: Position) -> usize {
        DIRECTIONS
            .iter()
            .filter(|&&direction| {
                self.step(position, direction)
                    .and_then(|neighbor| self.tile(neighbor))
                    .is_none_or(|kind| kind == TileKind::Wall)
            })
            .count()
    }

    /// Number of cells holding a given kind
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&tile| tile == kind).count()
    }
}
