use crate::reports;
use clap::Args;
use std::str::FromStr;
use strum_macros::{Display, EnumString};
use swipekey::config::Config;
use swipekey::engine::Engine;

#[derive(Debug, Clone, Copy, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum SuggestMode {
    Correction,
    Prediction,
}

#[derive(Args, Debug, Clone)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub config: Config,

    /// The typed prefix to correct or complete.
    pub prefix: String,

    /// Previously committed word, for the bigram model.
    #[arg(short, long)]
    pub prev: Option<String>,

    /// correction (fix what was typed) or prediction (complete it).
    #[arg(short, long, default_value = "prediction")]
    pub mode: String,
}

pub fn run(args: SuggestArgs, engine: &Engine) {
    let mode = SuggestMode::from_str(&args.mode).unwrap_or_else(|_| {
        eprintln!("Unknown mode '{}', using prediction", args.mode);
        SuggestMode::Prediction
    });

    let prev = args.prev.as_deref();
    let max_cost = args.config.params.max_edit_cost;
    let candidates = match mode {
        SuggestMode::Correction => engine.correct(&args.prefix, prev, max_cost),
        SuggestMode::Prediction => engine.predict(&args.prefix, prev, max_cost),
    };

    let title = format!("{} candidates for '{}'", mode, args.prefix);
    reports::print_candidates(&title, &candidates, args.config.params.suggestion_count);
}
