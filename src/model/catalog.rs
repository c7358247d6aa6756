// Catalog of known sentence-embedding models.
//
// Models are referred to by short name everywhere (CLI flags, config, the
// comparer's cache) and resolved here to a Hugging Face repo, an embedding
// dimension, and an on-disk directory. Each model lives in its own
// subdirectory of the storage root so several can coexist.

use std::path::{Path, PathBuf};

use anyhow::Result;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";

/// On-disk file names within a model's directory.
pub const MODEL_FILE: &str = "model.onnx";
pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// A known sentence-embedding model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSpec {
    /// Short name used in CLI flags and config (also the storage subdirectory)
    pub name: &'static str,
    /// Hugging Face repo the files are fetched from
    pub hf_repo: &'static str,
    /// Path of the ONNX export within the repo (tokenizer.json sits at the root)
    pub remote_model_file: &'static str,
    /// Embedding dimension the model produces
    pub dimension: usize,
    /// Approximate download size, for the status display
    pub approx_size_mb: u32,
}

/// Sentence-transformer models with official ONNX exports.
pub static KNOWN_MODELS: [ModelSpec; 4] = [
    ModelSpec {
        name: "all-MiniLM-L6-v2",
        hf_repo: "sentence-transformers/all-MiniLM-L6-v2",
        remote_model_file: "onnx/model.onnx",
        dimension: 384,
        approx_size_mb: 90,
    },
    ModelSpec {
        name: "all-MiniLM-L12-v2",
        hf_repo: "sentence-transformers/all-MiniLM-L12-v2",
        remote_model_file: "onnx/model.onnx",
        dimension: 384,
        approx_size_mb: 130,
    },
    ModelSpec {
        name: "paraphrase-multilingual-MiniLM-L12-v2",
        hf_repo: "sentence-transformers/paraphrase-multilingual-MiniLM-L12-v2",
        remote_model_file: "onnx/model.onnx",
        dimension: 384,
        approx_size_mb: 450,
    },
    ModelSpec {
        name: "all-mpnet-base-v2",
        hf_repo: "sentence-transformers/all-mpnet-base-v2",
        remote_model_file: "onnx/model.onnx",
        dimension: 768,
        approx_size_mb: 420,
    },
];

/// Resolve a model name against the catalog.
pub fn lookup(name: &str) -> Result<&'static ModelSpec> {
    if name.is_empty() {
        anyhow::bail!("Model name cannot be empty");
    }
    KNOWN_MODELS.iter().find(|m| m.name == name).ok_or_else(|| {
        let known: Vec<&str> = KNOWN_MODELS.iter().map(|m| m.name).collect();
        anyhow::anyhow!(
            "Unknown model '{}'. Known models: {}",
            name,
            known.join(", ")
        )
    })
}

/// Returns the default root directory for storing model files.
/// Uses the platform data directory: ~/.local/share/semblance/models/ on Linux.
pub fn default_model_base_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("semblance")
        .join("models")
}

/// Directory holding a single model's files.
pub fn model_dir(base: &Path, name: &str) -> PathBuf {
    base.join(name)
}

/// Check whether both required files for a model exist.
pub fn model_files_present(base: &Path, name: &str) -> bool {
    let dir = model_dir(base, name);
    dir.join(MODEL_FILE).exists() && dir.join(TOKENIZER_FILE).exists()
}
