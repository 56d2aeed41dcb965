use rstest::rstest;
use swipekey::trie::Trie;

fn sample_trie() -> Trie<u32> {
    let mut trie = Trie::new();
    for (i, w) in ["cat", "car", "can", "cart", "dog", "do"].iter().enumerate() {
        trie.insert(w, i as u32);
    }
    trie
}

#[test]
fn test_exact_lookup() {
    let trie = sample_trie();
    assert_eq!(trie.get("cat"), Some(&0));
    assert_eq!(trie.get("cart"), Some(&3));
    assert_eq!(trie.get("ca"), None, "Prefix of a word is not a word");
    assert_eq!(trie.get("catx"), None);
}

#[test]
fn test_reinsert_is_idempotent() {
    let mut trie = sample_trie();
    assert_eq!(trie.len(), 6);

    trie.insert("cat", 99);
    assert_eq!(trie.len(), 6, "Overwrite must not duplicate the word list");
    assert_eq!(trie.get("cat"), Some(&99));
    assert_eq!(trie.words().iter().filter(|w| *w == "cat").count(), 1);
}

#[test]
fn test_words_preserve_insertion_order() {
    let trie = sample_trie();
    assert_eq!(trie.words(), &["cat", "car", "can", "cart", "dog", "do"]);
}

#[test]
fn test_correction_zero_cost_is_exact() {
    let trie = sample_trie();
    let hits = trie.search_correction("cat", 0);
    assert_eq!(hits, vec![("cat".to_string(), 0)]);
}

#[test]
fn test_correction_finds_substitution() {
    let trie = sample_trie();
    let mut hits = trie.search_correction("cac", 1);
    hits.sort();
    assert_eq!(
        hits,
        vec![
            ("can".to_string(), 1),
            ("car".to_string(), 1),
            ("cat".to_string(), 1)
        ]
    );
}

#[rstest]
#[case("cat", 0)]
#[case("cat", 1)]
#[case("cac", 0)]
#[case("xyz", 0)]
#[case("", 0)]
fn test_correction_monotonic_in_cost(#[case] query: &str, #[case] max_cost: usize) {
    let trie = sample_trie();
    let smaller = trie.search_correction(query, max_cost).len();
    let larger = trie.search_correction(query, max_cost + 1).len();
    assert!(
        larger >= smaller,
        "Result set shrank when the budget grew: {} -> {}",
        smaller,
        larger
    );
}

#[test]
fn test_correction_reports_distances() {
    let trie = sample_trie();
    let hits = trie.search_correction("cart", 2);
    let get = |w: &str| hits.iter().find(|(h, _)| h == w).map(|(_, d)| *d);

    assert_eq!(get("cart"), Some(0));
    assert_eq!(get("car"), Some(1), "One deletion");
    assert_eq!(get("cat"), Some(1), "One deletion");
    assert_eq!(get("can"), Some(2));
    assert_eq!(get("dog"), None);
}

#[test]
fn test_prediction_completes_prefix() {
    let trie = sample_trie();
    let hits = trie.search_prediction("ca", 0);
    let mut words: Vec<&str> = hits.iter().map(|(w, _)| w.as_str()).collect();
    words.sort();
    assert_eq!(words, vec!["can", "car", "cart", "cat"]);
    assert!(hits.iter().all(|(_, d)| *d == 0));
}

#[test]
fn test_prediction_reports_prefix_cost_not_word_cost() {
    let trie = sample_trie();
    // "ct" matches prefix "ca" at cost 1; every completion inherits cost 1
    // even though e.g. distance("ct", "cart") is 2.
    let hits = trie.search_prediction("ct", 1);
    let cart = hits.iter().find(|(w, _)| w == "cart");
    assert_eq!(cart, Some(&("cart".to_string(), 1)));
}

#[test]
fn test_prediction_keeps_minimum_cost() {
    let trie = sample_trie();
    // "cat" itself matches at 0; the prefix "ca" also matches at 1 and
    // would re-report "cat". The cheaper cost must win.
    let hits = trie.search_prediction("cat", 2);
    let cat = hits.iter().find(|(w, _)| w == "cat");
    assert_eq!(cat, Some(&("cat".to_string(), 0)));
}

#[test]
fn test_prediction_empty_query_covers_vocabulary() {
    let trie = sample_trie();
    let hits = trie.search_prediction("", 1);
    assert_eq!(hits.len(), trie.len());
}

#[test]
fn test_empty_trie_searches() {
    let trie: Trie<u32> = Trie::new();
    assert!(trie.search_correction("cat", 2).is_empty());
    assert!(trie.search_prediction("cat", 2).is_empty());
    assert!(trie.is_empty());
}
