use crate::error::{SkResult, SwipeKeyError};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Reads tab-separated `word \t count` records. Words containing anything
/// non-alphabetic are skipped (they can never be given a keyboard path),
/// as are malformed rows.
pub fn read_unigrams<R: Read>(reader: R) -> SkResult<Vec<(String, u64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    let mut skipped = 0;

    for result in rdr.records() {
        let rec = match result {
            Ok(rec) => rec,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        if rec.len() < 2 {
            skipped += 1;
            continue;
        }

        let word = rec[0].trim().to_lowercase();
        if word.is_empty() || !word.chars().all(|c| c.is_alphabetic()) {
            skipped += 1;
            continue;
        }

        let count: u64 = match rec[1].trim().parse() {
            Ok(v) => v,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        entries.push((word, count));
    }

    if skipped > 0 {
        debug!("Skipped {} non-word or malformed unigram rows", skipped);
    }

    Ok(entries)
}

pub fn load_unigrams<P: AsRef<Path>>(path: P) -> SkResult<Vec<(String, u64)>> {
    let file = File::open(&path)?;
    read_unigrams(file)
}

/// The corpus total: a single count in its own file.
pub fn load_total<P: AsRef<Path>>(path: P) -> SkResult<f64> {
    let content = fs::read_to_string(&path)?;
    let total: f64 = content.trim().parse().map_err(|_| {
        SwipeKeyError::Vocabulary(format!(
            "'{}' does not contain a corpus total",
            path.as_ref().display()
        ))
    })?;
    if total <= 0.0 {
        return Err(SwipeKeyError::Vocabulary(format!(
            "Corpus total must be positive, got {}",
            total
        )));
    }
    Ok(total)
}

/// Loads `(word, static_frequency)` pairs from a unigram TSV and its corpus
/// total, the two-file format the engine's dictionaries ship in.
pub fn load_vocabulary<P1: AsRef<Path>, P2: AsRef<Path>>(
    unigram_path: P1,
    total_path: P2,
) -> SkResult<Vec<(String, f64)>> {
    let total = load_total(total_path)?;
    let unigrams = load_unigrams(unigram_path)?;
    info!(
        "Loaded {} vocabulary words (corpus total {})",
        unigrams.len(),
        total
    );
    Ok(unigrams
        .into_iter()
        .map(|(w, c)| (w, c as f64 / total))
        .collect())
}
