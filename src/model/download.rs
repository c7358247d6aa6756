// Model download helper.
//
// Fetches a model's ONNX export and tokenizer from its Hugging Face repo
// into the per-model storage directory. Files that already exist are
// skipped, so re-running after a partial failure only fetches what's
// missing.

use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::catalog::{self, ModelSpec};

/// Base URL for fetching raw files out of a Hugging Face repo.
const HF_RESOLVE_URL: &str = "https://huggingface.co";

/// Download one model's files (model.onnx + tokenizer.json).
///
/// Shows a progress bar for the large model file. Skips files that already
/// exist. Creates directories as needed.
pub async fn download_model(base_dir: &Path, spec: &ModelSpec) -> Result<()> {
    let dir = catalog::model_dir(base_dir, spec.name);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create model directory: {}", dir.display()))?;

    println!("\n{}:", spec.name);

    let tokenizer_path = dir.join(catalog::TOKENIZER_FILE);
    if tokenizer_path.exists() {
        info!(model = spec.name, "Tokenizer already exists, skipping");
        println!("  {} (already exists)", catalog::TOKENIZER_FILE);
    } else {
        println!("  Downloading {}...", catalog::TOKENIZER_FILE);
        download_file(
            &format!(
                "{}/{}/resolve/main/{}",
                HF_RESOLVE_URL,
                spec.hf_repo,
                catalog::TOKENIZER_FILE
            ),
            &tokenizer_path,
            false,
        )
        .await?;
    }

    let model_path = dir.join(catalog::MODEL_FILE);
    if model_path.exists() {
        info!(model = spec.name, "Model already exists, skipping");
        println!("  {} (already exists)", catalog::MODEL_FILE);
    } else {
        println!(
            "  Downloading {} (~{} MB)...",
            catalog::MODEL_FILE,
            spec.approx_size_mb
        );
        download_file(
            &format!(
                "{}/{}/resolve/main/{}",
                HF_RESOLVE_URL, spec.hf_repo, spec.remote_model_file
            ),
            &model_path,
            true,
        )
        .await?;
    }

    Ok(())
}

/// Download a single file from a URL to a local path.
/// If `show_progress` is true, display a progress bar.
async fn download_file(url: &str, dest: &Path, show_progress: bool) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Download failed with status {}: {}", response.status(), url);
    }

    let total_size = response.content_length();

    // Set up progress bar if requested and we know the size
    let pb = if show_progress {
        let pb = if let Some(size) = total_size {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("    [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                    .expect("valid template")
                    .progress_chars("=> "),
            );
            pb
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("    {spinner} {bytes}")
                    .expect("valid template"),
            );
            pb
        };
        Some(pb)
    } else {
        None
    };

    let bytes = response
        .bytes()
        .await
        .context("Failed to read response body")?;

    if let Some(ref pb) = pb {
        pb.set_position(bytes.len() as u64);
    }

    std::fs::write(dest, &bytes).with_context(|| format!("Failed to write {}", dest.display()))?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    info!("Downloaded {} to {}", url, dest.display());
    Ok(())
}
