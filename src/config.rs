use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub params: RankerParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone)]
pub struct RankerParams {
    /// Maximum edit distance for correction and prediction search.
    #[arg(long, default_value_t = 2)]
    pub max_edit_cost: usize,

    /// Number of candidates shown in the suggestion row.
    #[arg(long, default_value_t = 6)]
    pub suggestion_count: usize,
}

/// Empirical ranking constants. The defaults are the values the engine was
/// tuned with; none of them is derived from first principles.
#[derive(Args, Debug, Clone)]
pub struct ScoringWeights {
    // === LANGUAGE MODEL INTERPOLATION ===
    #[arg(long, default_value_t = 0.4)]
    pub weight_bigram: f64,
    #[arg(long, default_value_t = 0.1)]
    pub weight_unigram: f64,
    #[arg(long, default_value_t = 0.5)]
    pub weight_static: f64,

    // === GESTURE SCORING ===

    // score = exp(-mean_point_distance / gesture_decay) * p(word | prev)
    #[arg(long, default_value_t = 2.0)]
    pub gesture_decay: f64,

    // Pre-filter: a stored path length must fall inside
    // [length_ratio_min, length_ratio_max] x gesture length.
    #[arg(long, default_value_t = 0.8)]
    pub length_ratio_min: f32,
    #[arg(long, default_value_t = 1.4)]
    pub length_ratio_max: f32,

    // === TYPED SCORING ===

    // score = edit_decay_base^distance * p(word | prev); a base well below 1
    // makes exact matches dominate while 1-2 edit typos still surface.
    #[arg(long, default_value_t = 0.001)]
    pub edit_decay_base: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            params: RankerParams::default(),
            weights: ScoringWeights::default(),
        }
    }
}

impl Default for RankerParams {
    fn default() -> Self {
        Self {
            max_edit_cost: 2,
            suggestion_count: 6,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            weight_bigram: 0.4,
            weight_unigram: 0.1,
            weight_static: 0.5,
            gesture_decay: 2.0,
            length_ratio_min: 0.8,
            length_ratio_max: 1.4,
            edit_decay_base: 0.001,
        }
    }
}
