// Colored terminal output for comparison scores and rankings.
//
// This module handles all terminal-specific formatting: colors, tables,
// band labels. The main.rs command bodies delegate here.

use colored::Colorize;

use crate::output::truncate_chars;
use crate::pipeline::rank::RankedMatch;

/// Score at or above which two texts are considered strongly similar.
const STRONG_BAND: f64 = 0.8;
/// Score at or above which similarity is called moderate.
const MODERATE_BAND: f64 = 0.5;

/// Display a single comparison result.
pub fn display_comparison(source: &str, target: &str, model: &str, score: f64) {
    println!("\n{}", format!("=== Similarity ({model}) ===").bold());
    println!("  Source: \"{}\"", truncate_chars(source, 60));
    println!("  Target: \"{}\"", truncate_chars(target, 60));
    println!("  Score:  {:.4}  ({})", score, colorize_band(score));
}

/// Display a ranked candidate list.
pub fn display_ranking(source: &str, model: &str, matches: &[RankedMatch]) {
    if matches.is_empty() {
        println!("No candidate texts to rank.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Ranking ({} candidates, {model}) ===", matches.len()).bold()
    );
    println!("  Source: \"{}\"", truncate_chars(source, 60));
    println!();

    // Header
    println!(
        "  {:>4}  {:>7}  {:<9}  {}",
        "Rank".dimmed(),
        "Score".dimmed(),
        "Band".dimmed(),
        "Text".dimmed(),
    );
    println!("  {}", "-".repeat(72).dimmed());

    for (i, m) in matches.iter().enumerate() {
        println!(
            "  {:>4}. {:>7.4}  {:<9}  \"{}\"",
            i + 1,
            m.score,
            colorize_band(m.score),
            truncate_chars(&m.text, 48),
        );
    }
}

/// Color a score's similarity band label.
fn colorize_band(score: f64) -> String {
    if score >= STRONG_BAND {
        "strong".green().bold().to_string()
    } else if score >= MODERATE_BAND {
        "moderate".yellow().to_string()
    } else {
        "weak".dimmed().to_string()
    }
}
