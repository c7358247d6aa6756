use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::model::catalog;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Root directory for downloaded model files
    pub model_dir: PathBuf,
    /// Model used when no --model flag is passed (catalog name)
    pub model: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default: the model dir falls back to the platform
    /// data directory, the model to the catalog default.
    pub fn load() -> Result<Self> {
        let model_dir = env::var("SEMBLANCE_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| catalog::default_model_base_dir());

        let model =
            env::var("SEMBLANCE_MODEL").unwrap_or_else(|_| catalog::DEFAULT_MODEL.to_string());

        Ok(Self { model_dir, model })
    }

    /// Check that the named model is known and its files are on disk.
    /// Call this before any operation that needs to embed text.
    pub fn require_model(&self, name: &str) -> Result<()> {
        let spec = catalog::lookup(name)?;
        if !catalog::model_files_present(&self.model_dir, spec.name) {
            anyhow::bail!(
                "Model files for '{}' not found in {}\n\
                 Run `semblance download-model --model {}` to download them.",
                spec.name,
                catalog::model_dir(&self.model_dir, spec.name).display(),
                spec.name
            );
        }
        Ok(())
    }
}
