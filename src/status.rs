// Model storage status — which models are downloaded, where, and how big.

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Local};

use crate::model::catalog;

/// Display model storage status to the terminal.
pub fn show(model_dir: &Path, default_model: &str) -> Result<()> {
    println!("Model directory: {}", model_dir.display());
    if !model_dir.exists() {
        println!("  (not created yet — run `semblance download-model`)");
    }
    println!();

    for spec in &catalog::KNOWN_MODELS {
        let marker = if spec.name == default_model { "*" } else { " " };

        if catalog::model_files_present(model_dir, spec.name) {
            let model_path = catalog::model_dir(model_dir, spec.name).join(catalog::MODEL_FILE);
            let meta = std::fs::metadata(&model_path);

            let size = meta
                .as_ref()
                .map(|m| format_bytes(m.len()))
                .unwrap_or_else(|_| "unknown".to_string());

            let downloaded = meta
                .ok()
                .and_then(|m| m.modified().ok())
                .map(|t| {
                    let local: DateTime<Local> = t.into();
                    local.format("%Y-%m-%d %H:%M").to_string()
                })
                .unwrap_or_else(|| "unknown".to_string());

            println!(
                "{} {:<42} {:>10}  downloaded {}",
                marker, spec.name, size, downloaded
            );
        } else {
            println!(
                "{} {:<42} {:>10}  not downloaded (~{} MB)",
                marker, spec.name, "-", spec.approx_size_mb
            );
        }
    }

    println!();
    println!("* = default model (set SEMBLANCE_MODEL to change)");
    Ok(())
}

/// Format a byte count in human-readable units.
fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
