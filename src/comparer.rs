// Text comparison surface.
//
// TextComparer owns a cache of loaded embedding models keyed by model name,
// tracks which one is active, and scores pairs of texts with cosine
// similarity. Loading a model is expensive (ONNX session construction), so
// once loaded a model stays cached for the lifetime of the comparer and
// switching back to it is free.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::embedding::onnx::OnnxEmbedder;
use crate::embedding::traits::TextEmbedder;
use crate::embedding::vector::cosine_similarity;
use crate::model::catalog;

/// Compares texts using a loaded sentence-embedding model.
pub struct TextComparer {
    model_base_dir: PathBuf,
    /// Loaded models, keyed by catalog name. Entries are never evicted.
    models: HashMap<String, Arc<dyn TextEmbedder>>,
    /// Name of the model used by `compare` when none is passed explicitly.
    active: Option<String>,
}

impl TextComparer {
    /// Create a comparer with no model loaded. `model_base_dir` is the
    /// storage root that `download-model` populates.
    pub fn new(model_base_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_base_dir: model_base_dir.into(),
            models: HashMap::new(),
            active: None,
        }
    }

    /// Name of the currently active model, if any.
    pub fn active_model(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Insert a pre-built embedder into the cache without touching the
    /// catalog or the filesystem. Used to plug in non-ONNX backends; does
    /// not change the active model until `load_model` selects it by name.
    pub fn register_model(&mut self, name: &str, embedder: Arc<dyn TextEmbedder>) {
        self.models.insert(name.to_string(), embedder);
    }

    /// Make the named model active, loading it from disk on first use.
    ///
    /// Already-loaded models are reused from the cache. Fresh loads resolve
    /// the name against the catalog and read the model files from the
    /// storage root, so the model must have been downloaded first.
    pub fn load_model(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            anyhow::bail!("Model name cannot be empty");
        }

        if self.models.contains_key(name) {
            debug!(model = name, "Reusing cached embedding model");
            self.active = Some(name.to_string());
            return Ok(());
        }

        let spec = catalog::lookup(name)?;
        let dir = catalog::model_dir(&self.model_base_dir, spec.name);
        let embedder = OnnxEmbedder::load(&dir, spec.dimension)?;

        self.models.insert(name.to_string(), Arc::new(embedder));
        self.active = Some(name.to_string());
        info!(model = name, "Loaded embedding model");
        Ok(())
    }

    /// Handle to the active model's embedder, for callers that batch their
    /// own work (the ranking pipeline).
    pub fn embedder(&self) -> Result<Arc<dyn TextEmbedder>> {
        let name = self
            .active
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("No model loaded. Call load_model first."))?;
        self.models
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Active model '{}' missing from cache", name))
    }

    /// Compare two texts and return their similarity score in [0.0, 1.0],
    /// where 1.0 means identical meaning.
    ///
    /// If `model` is given and differs from the active model, it is loaded
    /// (or pulled from the cache) first. Both texts are embedded in a single
    /// batch, then scored with cosine similarity.
    pub async fn compare(
        &mut self,
        source: &str,
        target: &str,
        model: Option<&str>,
    ) -> Result<f64> {
        if source.is_empty() || target.is_empty() {
            anyhow::bail!("Source and target texts cannot be empty");
        }

        if let Some(name) = model {
            if self.active.as_deref() != Some(name) {
                self.load_model(name)?;
            }
        }

        let embedder = self.embedder()?;
        let embeddings = embedder
            .embed_batch(&[source.to_string(), target.to_string()])
            .await?;
        if embeddings.len() != 2 {
            anyhow::bail!(
                "Embedding backend returned {} vectors for 2 texts",
                embeddings.len()
            );
        }
        let score = cosine_similarity(&embeddings[0], &embeddings[1]);

        debug!(score, "Compared texts");
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_model_empty_name() {
        let mut comparer = TextComparer::new("/tmp/semblance-test-models");
        let err = comparer.load_model("").unwrap_err().to_string();
        assert!(err.contains("cannot be empty"));
        assert!(comparer.active_model().is_none());
    }

    #[test]
    fn test_load_model_unknown_name() {
        let mut comparer = TextComparer::new("/tmp/semblance-test-models");
        let err = comparer.load_model("not-a-model").unwrap_err().to_string();
        assert!(err.contains("Unknown model"));
    }

    #[test]
    fn test_embedder_without_load_fails() {
        let comparer = TextComparer::new("/tmp/semblance-test-models");
        let err = comparer.embedder().err().unwrap().to_string();
        assert!(err.contains("No model loaded"));
    }

    #[tokio::test]
    async fn test_compare_rejects_empty_texts() {
        let mut comparer = TextComparer::new("/tmp/semblance-test-models");
        let err = comparer.compare("", "hello", None).await.unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
        let err = comparer.compare("hello", "", None).await.unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[tokio::test]
    async fn test_compare_without_model_fails() {
        let mut comparer = TextComparer::new("/tmp/semblance-test-models");
        let err = comparer.compare("hello", "world", None).await.unwrap_err();
        assert!(err.to_string().contains("No model loaded"));
    }
}
