use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use swipekey::engine::Candidate;

pub fn print_candidates(title: &str, candidates: &[Candidate], limit: usize) {
    println!("\n{}", title);

    if candidates.is_empty() {
        println!("  (no candidates)");
        return;
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["#", "Word", "Score"]);

    for (i, c) in candidates.iter().take(limit).enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(&c.word),
            Cell::new(format!("{:.3e}", c.score)).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
    if candidates.len() > limit {
        println!("  ... {} more below the cut", candidates.len() - limit);
    }
}
