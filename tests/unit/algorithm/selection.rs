//! Tests for minimum-entropy selection and cell collapse

#[cfg(test)]
mod tests {
    use crate::unit::{Scripted, grid_from};
    use wfc_dungeon::algorithm::bitset::PatternSet;
    use wfc_dungeon::algorithm::selection::{collapse, select_next_cell};
    use wfc_dungeon::math::random::RandomSelector;
    use wfc_dungeon::spatial::DungeonGrid;
    use wfc_dungeon::spatial::tiles::{FLOOR_PATTERN, PatternCatalogue, TileKind};

    // Tests ties resolve to the first interior cell in row-major order
    // Verified by scanning columns before rows
    #[test]
    fn test_tie_breaks_row_major() {
        let grid = DungeonGrid::new(5, 5, &PatternCatalogue::dungeon());

        assert_eq!(select_next_cell(&grid), Some([1, 1]));
    }

    // Tests the lowest entropy above one wins
    // Verified by selecting the highest entropy cell
    #[test]
    fn test_lowest_entropy_wins() {
        let mut grid = DungeonGrid::new(5, 5, &PatternCatalogue::dungeon());
        let mut pair = PatternSet::empty(3);
        pair.insert(0);
        pair.insert(2);
        grid.set_possibilities([3, 2], pair.clone());
        grid.set_possibilities([3, 3], pair);

        assert_eq!(select_next_cell(&grid), Some([3, 2]));
    }

    // Tests decided and contradictory cells are skipped
    // Verified by accepting entropy zero as a candidate
    #[test]
    fn test_decided_and_empty_cells_are_skipped() {
        let mut grid = grid_from("#####\n#...#\n#####");
        assert_eq!(select_next_cell(&grid), None);

        grid.set_possibilities([1, 2], PatternSet::empty(3));
        assert_eq!(select_next_cell(&grid), None);

        grid.set_possibilities([1, 3], PatternSet::all(3));
        assert_eq!(select_next_cell(&grid), Some([1, 3]));
    }

    // Tests border cells are never offered even when undecided
    // Verified by scanning the full grid instead of the interior
    #[test]
    fn test_border_is_never_selected() {
        let mut grid = grid_from("###\n#.#\n###");
        grid.set_possibilities([0, 1], PatternSet::all(3));

        assert_eq!(select_next_cell(&grid), None);
    }

    // Tests collapse commits the drawn pattern and propagates it
    // Verified by committing the possibility set without the map tile
    #[test]
    fn test_collapse_commits_and_propagates() {
        let catalogue = PatternCatalogue::dungeon();
        let mut grid = DungeonGrid::new(5, 5, &catalogue);
        let mut selector = RandomSelector::new(Scripted::new(&[1]));

        let chosen = collapse(&mut grid, &catalogue, &mut selector, [2, 2]);

        assert_eq!(chosen, Some(FLOOR_PATTERN));
        assert_eq!(grid.tile([2, 2]), Some(TileKind::Floor));
        assert_eq!(
            grid.possibilities([2, 2]).and_then(|set| set.only()),
            Some(FLOOR_PATTERN)
        );
        assert_eq!(
            grid.possibilities([1, 2]).and_then(|set| set.only()),
            Some(FLOOR_PATTERN)
        );
        assert_eq!(grid.tile([1, 2]), Some(TileKind::Empty));
    }

    // Tests a contradictory cell cannot be collapsed and is left alone
    // Verified by defaulting empty sets to the wall pattern
    #[test]
    fn test_collapse_of_empty_set_is_noop() {
        let catalogue = PatternCatalogue::dungeon();
        let mut grid = DungeonGrid::new(5, 5, &catalogue);
        grid.set_possibilities([2, 2], PatternSet::empty(3));
        let mut selector = RandomSelector::new(Scripted::new(&[]));

        assert_eq!(collapse(&mut grid, &catalogue, &mut selector, [2, 2]), None);
        assert_eq!(grid.tile([2, 2]), Some(TileKind::Empty));
    }

    // Tests the solver loop terminates with every interior cell decided
    // Verified by returning decided cells from select_next_cell
    #[test]
    fn test_collapse_loop_decides_everything() {
        let catalogue = PatternCatalogue::dungeon();
        let mut grid = DungeonGrid::new(8, 9, &catalogue);
        let mut selector = RandomSelector::seeded(11);

        let mut steps = 0;
        while let Some(position) = select_next_cell(&grid) {
            assert!(collapse(&mut grid, &catalogue, &mut selector, position).is_some());
            steps += 1;
            assert!(steps <= 8 * 9, "Collapse loop failed to terminate");
        }

        for position in grid.interior_positions() {
            assert!(grid.possibilities(position).is_some_and(|set| set.len() <= 1));
        }
    }
}
