use crate::reports;
use clap::Args;
use std::fs;
use std::process;
use swipekey::config::Config;
use swipekey::engine::Engine;
use swipekey::geometry::Point;

#[derive(Args, Debug, Clone)]
pub struct GestureArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON trace file: an array of [x, y] sample points.
    pub trace: String,

    /// Previously committed word, for the bigram model.
    #[arg(short, long)]
    pub prev: Option<String>,
}

pub fn run(args: GestureArgs, engine: &Engine) {
    let content = fs::read_to_string(&args.trace).unwrap_or_else(|e| {
        eprintln!("Failed to read trace '{}': {}", args.trace, e);
        process::exit(1);
    });
    let raw: Vec<[f32; 2]> = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Failed to parse trace '{}': {}", args.trace, e);
        process::exit(1);
    });
    let gesture: Vec<Point> = raw.iter().map(|p| Point::new(p[0], p[1])).collect();

    let candidates = engine.score_gesture(&gesture, args.prev.as_deref());

    let title = format!("gesture candidates ({} samples)", gesture.len());
    reports::print_candidates(&title, &candidates, args.config.params.suggestion_count);
}
