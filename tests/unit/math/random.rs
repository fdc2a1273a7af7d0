//! Tests for the random selection helpers

#[cfg(test)]
mod tests {
    use crate::unit::Scripted;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;
    use wfc_dungeon::math::random::{RandomSelector, RandomSource, RngSource};

    // Tests empty ranges yield no index and consume no draw
    // Verified by drawing before checking the length
    #[test]
    fn test_index_of_empty_range() {
        let mut script = Scripted::new(&[4]);
        let mut selector = RandomSelector::new(&mut script);

        assert_eq!(selector.index(0), None);
        assert_eq!(selector.pick::<u8>(&[]), None);
        assert_eq!(script.remaining(), 1);
    }

    // Tests inclusive ranges cover both ends and collapse when inverted
    // Verified by using an exclusive upper bound
    #[test]
    fn test_range_inclusive() {
        let mut selector = RandomSelector::new(Scripted::new(&[0, 3, 9]));

        assert_eq!(selector.range_inclusive(3, 6), 3);
        assert_eq!(selector.range_inclusive(3, 6), 6);
        assert_eq!(selector.range_inclusive(5, 5), 5);
        assert_eq!(selector.range_inclusive(7, 2), 7);
    }

    // Tests samples are distinct and clipped to the pool size
    // Verified by sampling with replacement
    #[test]
    fn test_sample_is_distinct_and_clipped() {
        let mut selector = RandomSelector::seeded(17);
        let items: Vec<usize> = (0..12).collect();

        let batch = selector.sample(&items, 9);
        let unique: HashSet<_> = batch.iter().copied().collect();
        assert_eq!(batch.len(), 9);
        assert_eq!(unique.len(), 9);

        assert_eq!(selector.sample(&[1, 2, 3], 9).len(), 3);
        assert!(selector.sample::<usize>(&[], 9).is_empty());
    }

    // Tests take removes exactly the drawn element
    // Verified by returning a copy without removing it
    #[test]
    fn test_take_removes_element() {
        let mut selector = RandomSelector::new(Scripted::new(&[1]));
        let mut items = vec!['a', 'b', 'c'];

        assert_eq!(selector.take(&mut items), Some('b'));
        assert_eq!(items.len(), 2);
        assert!(!items.contains(&'b'));

        let mut empty: Vec<char> = Vec::new();
        assert_eq!(selector.take(&mut empty), None);
    }

    // Tests equal seeds replay the same draws
    // Verified by seeding from entropy
    #[test]
    fn test_seeded_selectors_agree() {
        let mut first = RandomSelector::seeded(99);
        let mut second = RandomSelector::seeded(99);

        let a: Vec<_> = (0..50).map(|_| first.index(1000)).collect();
        let b: Vec<_> = (0..50).map(|_| second.index(1000)).collect();
        assert_eq!(a, b);
    }

    // Tests the rand adapter stays inside the requested range
    // Verified by using an inclusive upper bound in the adapter
    #[test]
    fn test_rng_source_range() {
        let mut source = RngSource(StdRng::seed_from_u64(3));

        for upper in 1..40 {
            assert!(source.below(upper) < upper);
        }
        assert_eq!(source.below(1), 0);
    }
}
