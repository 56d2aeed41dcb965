use proptest::prelude::*;
use swipekey::geometry::{path_length, resample, Point};
use swipekey::trie::Trie;

fn arb_point() -> impl Strategy<Value = Point> {
    (-100.0..100.0f32, -100.0..100.0f32).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn resample_returns_exactly_n_points(
        path in proptest::collection::vec(arb_point(), 1..40),
        n in 1usize..80
    ) {
        let out = resample(&path, n);
        prop_assert_eq!(out.len(), n);
        for p in &out {
            prop_assert!(p.x.is_finite() && p.y.is_finite());
        }
    }

    #[test]
    fn resample_preserves_endpoints(
        path in proptest::collection::vec(arb_point(), 2..40),
        n in 2usize..80
    ) {
        let out = resample(&path, n);
        let total = path_length(&path);
        // Degenerate zero-length paths collapse to the first point.
        let tol = 1e-3 * total.max(1.0);
        prop_assert!(out[0].dist(&path[0]) <= tol);
        if total > 1e-3 {
            prop_assert!(out[n - 1].dist(path.last().unwrap()) <= tol);
        }
    }

    #[test]
    fn resampled_length_never_exceeds_original(
        path in proptest::collection::vec(arb_point(), 2..40),
        n in 2usize..80
    ) {
        // Resampling picks points on the polyline, so the shortcut through
        // them cannot be longer than the original arc.
        let out = resample(&path, n);
        let orig = path_length(&path);
        prop_assert!(path_length(&out) <= orig * 1.001 + 1e-3);
    }

    #[test]
    fn inserted_words_match_themselves_at_zero_cost(
        words in proptest::collection::vec("[a-z]{1,8}", 1..20)
    ) {
        let mut trie = Trie::new();
        for (i, w) in words.iter().enumerate() {
            trie.insert(w, i);
        }
        for w in &words {
            let hits = trie.search_correction(w, 0);
            prop_assert!(
                hits.iter().any(|(word, d)| word == w && *d == 0),
                "'{}' not found at distance 0", w
            );
            for (_, d) in &hits {
                prop_assert_eq!(*d, 0);
            }
        }
    }

    #[test]
    fn correction_results_grow_with_budget(
        words in proptest::collection::vec("[a-z]{1,8}", 1..20),
        query in "[a-z]{0,8}",
        cost in 0usize..3
    ) {
        let mut trie = Trie::new();
        for w in &words {
            trie.insert(w, ());
        }
        let smaller = trie.search_correction(&query, cost).len();
        let larger = trie.search_correction(&query, cost + 1).len();
        prop_assert!(larger >= smaller);
    }

    #[test]
    fn prediction_is_superset_of_correction(
        words in proptest::collection::vec("[a-z]{1,8}", 1..20),
        query in "[a-z]{1,8}",
        cost in 0usize..3
    ) {
        let mut trie = Trie::new();
        for w in &words {
            trie.insert(w, ());
        }
        // Any word within the edit budget also sits under a matched prefix
        // (itself), so prediction can only add words.
        let corrections = trie.search_correction(&query, cost);
        let predictions = trie.search_prediction(&query, cost);
        for (w, _) in &corrections {
            prop_assert!(
                predictions.iter().any(|(p, _)| p == w),
                "'{}' corrected but not predicted", w
            );
        }
    }

    #[test]
    fn reinsertion_never_duplicates(
        words in proptest::collection::vec("[a-z]{1,8}", 1..30)
    ) {
        let mut trie = Trie::new();
        for w in &words {
            trie.insert(w, ());
            trie.insert(w, ());
        }
        let mut unique: Vec<&String> = words.iter().collect();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(trie.len(), unique.len());
    }
}
