//! Tests for dead-end removal

#[cfg(test)]
mod tests {
    use crate::unit::grid_from;
    use wfc_dungeon::algorithm::pruning::{is_dead_end, remove_dead_ends};
    use wfc_dungeon::spatial::regions::RegionMap;
    use wfc_dungeon::spatial::tiles::{PatternCatalogue, TileKind};

    // Tests dead ends are walkable cells with at most one open side
    // Verified by flagging walls with three wall neighbours
    #[test]
    fn test_is_dead_end() {
        let grid = grid_from("#####\n#..##\n#####");

        assert!(is_dead_end(&grid, [1, 1]));
        assert!(is_dead_end(&grid, [1, 2]));
        assert!(!is_dead_end(&grid, [0, 0]));
        assert!(!is_dead_end(&grid, [1, 3]));
    }

    // Tests a cell walled in next to the map edge is a dead end
    // Verified by requiring all four sides to be blocked
    #[test]
    fn test_walled_cell_beside_edge_is_dead_end() {
        let grid = grid_from("###\n#.#\n###");

        assert!(is_dead_end(&grid, [1, 1]));
    }

    // Tests walkable border cells are never filled and keep their neighbours open
    // Verified by scanning every cell instead of the interior
    #[test]
    fn test_border_cells_are_left_alone() {
        let catalogue = PatternCatalogue::dungeon();
        let text = "#.#\n#.#\n#.#";
        let mut grid = grid_from(text);

        assert_eq!(remove_dead_ends(&mut grid, &catalogue), 0);
        assert_eq!(grid.to_ascii(), text);
    }

    // Tests a straight corridor collapses entirely within one pass
    // Verified by rewriting cells only after the pass ends
    #[test]
    fn test_corridor_is_filled() {
        let catalogue = PatternCatalogue::dungeon();
        let mut grid = grid_from("#######\n#.....#\n#######");

        assert_eq!(remove_dead_ends(&mut grid, &catalogue), 5);
        assert_eq!(grid.count(TileKind::Floor), 0);
        assert_eq!(grid.possibilities([1, 3]).map(|set| set.len()), Some(1));
    }

    // Tests loops survive pruning untouched
    // Verified by filling cells with two blocked sides
    #[test]
    fn test_loop_survives() {
        let catalogue = PatternCatalogue::dungeon();
        let text = "#####\n#...#\n#.#.#\n#...#\n#####";
        let mut grid = grid_from(text);

        assert_eq!(remove_dead_ends(&mut grid, &catalogue), 0);
        assert_eq!(grid.to_ascii(), text);
    }

    // Tests a spur off a loop is removed and the loop kept
    // Verified by stopping after the first pass
    #[test]
    fn test_spur_is_removed() {
        let catalogue = PatternCatalogue::dungeon();
        let mut grid = grid_from("######\n#...##\n#.#.##\n#....#\n######");

        assert_eq!(remove_dead_ends(&mut grid, &catalogue), 1);
        assert_eq!(grid.tile([3, 4]), Some(TileKind::Wall));
        assert_eq!(grid.tile([3, 3]), Some(TileKind::Floor));
        assert_eq!(RegionMap::compute(&grid).count(), 1);
    }

    // Tests corridors are pruned like floor
    // Verified by restricting pruning to floor tiles
    #[test]
    fn test_corridor_spur_is_removed() {
        let catalogue = PatternCatalogue::dungeon();
        let mut grid = grid_from("######\n#..+##\n#..###\n######");

        assert_eq!(remove_dead_ends(&mut grid, &catalogue), 1);
        assert_eq!(
            grid.to_ascii(),
            "######\n#..###\n#..###\n######"
        );
    }
}
