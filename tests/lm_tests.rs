use swipekey::config::ScoringWeights;
use swipekey::lm::SessionModel;

#[test]
fn test_new_session_is_seeded() {
    let model = SessionModel::new();
    assert_eq!(model.committed_count(), 1);
    assert_eq!(model.unigram_count("the"), 1);
    assert_eq!(model.unigram_count("cat"), 0);
    assert_eq!(model.bigram_count("the", "cat"), 0);
}

#[test]
fn test_observe_updates_counters() {
    let mut model = SessionModel::new();
    model.observe("cat", None);
    model.observe("sat", Some("cat"));
    model.observe("sat", Some("cat"));

    assert_eq!(model.committed_count(), 4);
    assert_eq!(model.unigram_count("cat"), 1);
    assert_eq!(model.unigram_count("sat"), 2);
    assert_eq!(model.bigram_count("cat", "sat"), 2);
    assert_eq!(model.bigram_count("sat", "cat"), 0);
}

#[test]
fn test_observe_without_previous_word_skips_bigram() {
    let mut model = SessionModel::new();
    model.observe("cat", None);
    model.observe("cat", Some(""));
    assert_eq!(model.bigram_count("", "cat"), 0);
}

#[test]
fn test_probability_is_never_zero() {
    let model = SessionModel::new();
    let weights = ScoringWeights::default();
    // Unseen word, no context, zero static frequency: smoothing must still
    // leave a usable probability.
    let p = model.probability("zyxw", None, 0.0, &weights);
    assert!(p > 0.0);
}

#[test]
fn test_static_frequency_lifts_probability() {
    let model = SessionModel::new();
    let weights = ScoringWeights::default();
    let low = model.probability("cat", None, 0.1, &weights);
    let high = model.probability("cat", None, 0.9, &weights);
    assert!(high > low);
    assert!((high - low - 0.5 * 0.8).abs() < 1e-9, "Static term is linear");
}

#[test]
fn test_repeated_word_gains_unigram_weight() {
    let mut model = SessionModel::new();
    let weights = ScoringWeights::default();
    let before = model.probability("cat", None, 0.0, &weights);

    for _ in 0..10 {
        model.observe("cat", None);
    }
    let after = model.probability("cat", None, 0.0, &weights);
    assert!(after > before);
}

#[test]
fn test_bigram_context_beats_no_context() {
    let mut model = SessionModel::new();
    let weights = ScoringWeights::default();

    model.observe("the", None);
    for _ in 0..5 {
        model.observe("cat", Some("the"));
    }

    let with_context = model.probability("cat", Some("the"), 0.0, &weights);
    let wrong_context = model.probability("cat", Some("dog"), 0.0, &weights);
    assert!(with_context > wrong_context);
}
