//! Tile kinds, their map glyphs, and the pattern adjacency catalogue
//!
//! The catalogue is a fixed bijection between pattern IDs and placeable tile
//! kinds plus a directed compatibility relation. The relation is not
//! symmetric: a wall admits a neighbouring corridor but a floor admits only
//! floor, so propagation must always read it from the source cell's side.

use crate::algorithm::bitset::PatternSet;

/// Index into the pattern catalogue
pub type PatternId = usize;

/// Kind of a single map cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Impassable rock
    Wall,
    /// Room interior
    Floor,
    /// Corridor or doorway
    Hall,
    /// Not yet decided; never present in finished maps
    Empty,
}

impl TileKind {
    /// Glyph used in the text map
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
            Self::Hall => '+',
            Self::Empty => ' ',
        }
    }

    /// Parse a text map glyph
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Floor),
            '+' => Some(Self::Hall),
            ' ' => Some(Self::Empty),
            _ => None,
        }
    }

    /// Whether actors can stand on this tile
    pub const fn is_walkable(self) -> bool {
        matches!(self, Self::Floor | Self::Hall)
    }

    /// Whether a glyph denotes a walkable tile
    pub const fn is_walkable_glyph(glyph: char) -> bool {
        matches!(glyph, '.' | '+')
    }
}

/// Pattern ID of the wall pattern
pub const WALL_PATTERN: PatternId = 0;
/// Pattern ID of the floor pattern
pub const FLOOR_PATTERN: PatternId = 1;
/// Pattern ID of the corridor pattern
pub const HALL_PATTERN: PatternId = 2;

/// Fixed catalogue of patterns and which patterns may sit next to each
#[derive(Clone, Debug)]
pub struct PatternCatalogue {
    kinds: Vec<TileKind>,
    valid_neighbors: Vec<PatternSet>,
}

impl Default for PatternCatalogue {
    fn default() -> Self {
        Self::dungeon()
    }
}

impl PatternCatalogue {
    /// The wall/floor/corridor rule set
    ///
    /// Walls accept walls and corridors, floors accept only floors, and
    /// corridors accept anything.
    pub fn dungeon() -> Self {
        let kinds = vec![TileKind::Wall, TileKind::Floor, TileKind::Hall];
        let count = kinds.len();

        let mut wall = PatternSet::empty(count);
        wall.insert(WALL_PATTERN);
        wall.insert(HALL_PATTERN);

        let floor = PatternSet::singleton(count, FLOOR_PATTERN);

        let hall = PatternSet::all(count);

        Self {
            kinds,
            valid_neighbors: vec![wall, floor, hall],
        }
    }

    /// Build a catalogue from explicit kinds and neighbour rules
    ///
    /// Rule sets are truncated or padded to the number of kinds.
    pub fn from_rules(kinds: Vec<TileKind>, rules: &[Vec<PatternId>]) -> Self {
        let count = kinds.len();
        let valid_neighbors = (0..count)
            .map(|pattern| {
                let mut set = PatternSet::empty(count);
                for &neighbor in rules.get(pattern).map_or(&[][..], Vec::as_slice) {
                    set.insert(neighbor);
                }
                set
            })
            .collect();
        Self {
            kinds,
            valid_neighbors,
        }
    }

    /// Number of patterns
    pub const fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the catalogue holds no patterns
    pub const fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Tile kind committed when a pattern is chosen
    pub fn kind(&self, pattern: PatternId) -> Option<TileKind> {
        self.kinds.get(pattern).copied()
    }

    /// Pattern that produces a given tile kind
    pub fn pattern_for(&self, kind: TileKind) -> Option<PatternId> {
        self.kinds.iter().position(|&k| k == kind)
    }

    /// Whether `neighbor` may sit next to a cell holding `pattern`
    pub fn admits(&self, pattern: PatternId, neighbor: PatternId) -> bool {
        self.valid_neighbors
            .get(pattern)
            .is_some_and(|allowed| allowed.contains(neighbor))
    }

    /// Possibility set containing every pattern
    pub fn all_patterns(&self) -> PatternSet {
        PatternSet::all(self.len())
    }

    /// Possibility set decided to the pattern of `kind`
    ///
    /// Kinds without a pattern (such as `Empty`) give an empty set.
    pub fn decided(&self, kind: TileKind) -> PatternSet {
        self.pattern_for(kind).map_or_else(
            || PatternSet::empty(self.len()),
            |pattern| PatternSet::singleton(self.len(), pattern),
        )
    }
}
