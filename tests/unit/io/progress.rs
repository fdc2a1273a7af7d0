//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use wfc_dungeon::io::progress::ProgressManager;

    // Tests a single map gets no progress bar
    // Verified by lowering the batch threshold to one
    #[test]
    fn test_single_map_is_silent() {
        let pm = ProgressManager::new(1);

        assert!(!pm.is_visible());
        pm.complete_map(42);
        pm.finish();
        assert_eq!(pm.completed(), 0);
    }

    // Tests batches count every finished map
    // Verified by skipping the increment in complete_map
    #[test]
    fn test_batch_counts_maps() {
        let pm = ProgressManager::new(3);

        assert!(pm.is_visible());
        for seed in 0..3 {
            pm.complete_map(seed);
        }
        pm.finish();
        assert_eq!(pm.completed(), 3);
    }
}
