use clap::{Parser, Subcommand};
use std::process;
use std::str::FromStr;
use swipekey::engine::Engine;
use swipekey::geometry::KeyLayout;
use swipekey::layouts::KnownLayout;
use swipekey::vocab;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Tab-separated `word \t count` unigram file.
    #[arg(global = true, short, long, default_value = "data/1grams.tsv")]
    vocab: String,

    /// File holding the corpus total count.
    #[arg(global = true, short, long, default_value = "data/0grams")]
    total: String,

    /// Built-in layout name (qwerty, azerty, dvorak).
    #[arg(global = true, short, long, default_value = "qwerty")]
    layout: String,

    /// JSON layout definition file; overrides --layout.
    #[arg(global = true, long)]
    layout_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Suggest(cmd::suggest::SuggestArgs),
    Gesture(cmd::gesture::GestureArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let layout = match &cli.layout_file {
        Some(path) => KeyLayout::load_from_file(path).unwrap_or_else(|e| {
            eprintln!("Failed to load layout '{}': {}", path, e);
            process::exit(1);
        }),
        None => match KnownLayout::from_str(&cli.layout) {
            Ok(known) => known.key_layout(),
            Err(_) => {
                eprintln!("Unknown layout '{}'", cli.layout);
                process::exit(1);
            }
        },
    };

    let config = match &cli.command {
        Commands::Suggest(args) => args.config.clone(),
        Commands::Gesture(args) => args.config.clone(),
    };

    let entries = vocab::load_vocabulary(&cli.vocab, &cli.total).unwrap_or_else(|e| {
        eprintln!("Failed to load vocabulary: {}", e);
        process::exit(1);
    });

    let mut engine = Engine::new(layout, config);
    engine.load_vocabulary(entries);

    match cli.command {
        Commands::Suggest(args) => cmd::suggest::run(args, &engine),
        Commands::Gesture(args) => cmd::gesture::run(args, &engine),
    }
}
