use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use semblance::comparer::TextComparer;
use semblance::config::Config;
use semblance::model::catalog;

/// Semblance: semantic text similarity scoring.
///
/// Scores how close two texts are in meaning using a locally-run
/// sentence-embedding model — no API calls at comparison time.
#[derive(Parser)]
#[command(name = "semblance", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two texts and print their similarity score
    Compare {
        /// The source text
        source: String,

        /// The target text to compare against
        target: String,

        /// Embedding model to use (default: configured model)
        #[arg(long)]
        model: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank candidate texts by similarity to a source text
    Rank {
        /// The source text
        source: String,

        /// Candidate texts to rank
        #[arg(required = true)]
        targets: Vec<String>,

        /// Embedding model to use (default: configured model)
        #[arg(long)]
        model: Option<String>,

        /// Number of candidate batches to embed in parallel (default: 4)
        #[arg(long, default_value = "4")]
        concurrency: u32,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Download an embedding model's files (~90 MB for the default model)
    DownloadModel {
        /// Model to download (default: configured model)
        #[arg(long)]
        model: Option<String>,

        /// Download every model in the catalog
        #[arg(long)]
        all: bool,
    },

    /// Show model storage status (downloaded models, sizes, default)
    Status,
}

/// Shape of `compare --json` output.
#[derive(Serialize)]
struct ComparisonOutput {
    model: String,
    source: String,
    target: String,
    score: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("semblance=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            source,
            target,
            model,
            json,
        } => {
            let config = Config::load()?;
            let model_name = model.unwrap_or_else(|| config.model.clone());
            config.require_model(&model_name)?;

            let mut comparer = TextComparer::new(&config.model_dir);
            comparer.load_model(&model_name)?;

            let score = comparer.compare(&source, &target, None).await?;

            if json {
                let output = ComparisonOutput {
                    model: model_name,
                    source,
                    target,
                    score,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                semblance::output::terminal::display_comparison(
                    &source,
                    &target,
                    &model_name,
                    score,
                );
            }
        }

        Commands::Rank {
            source,
            targets,
            model,
            concurrency,
            json,
        } => {
            let config = Config::load()?;
            let model_name = model.unwrap_or_else(|| config.model.clone());
            config.require_model(&model_name)?;

            let mut comparer = TextComparer::new(&config.model_dir);
            comparer.load_model(&model_name)?;
            let embedder = comparer.embedder()?;

            info!(candidates = targets.len(), model = %model_name, "Ranking candidates");

            let matches = semblance::pipeline::rank::rank(
                embedder.as_ref(),
                &source,
                &targets,
                concurrency as usize,
            )
            .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                semblance::output::terminal::display_ranking(&source, &model_name, &matches);
            }
        }

        Commands::DownloadModel { model, all } => {
            let config = Config::load()?;

            println!("Downloading embedding models...");
            println!("  Destination: {}", config.model_dir.display());

            if all {
                for spec in &catalog::KNOWN_MODELS {
                    semblance::model::download::download_model(&config.model_dir, spec).await?;
                }
            } else {
                let name = model.unwrap_or_else(|| config.model.clone());
                let spec = catalog::lookup(&name)?;
                semblance::model::download::download_model(&config.model_dir, spec).await?;
            }

            println!("\n{}", "Models downloaded successfully.".bold());
            println!("You can now run `semblance compare <source> <target>`.");
        }

        Commands::Status => {
            let config = Config::load()?;
            semblance::status::show(&config.model_dir, &config.model)?;
        }
    }

    Ok(())
}
