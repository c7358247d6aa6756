// Embedder trait — the swap-ready abstraction.
//
// This trait defines the interface for turning text into dense vectors.
// The default implementation runs a local ONNX sentence transformer;
// tests use deterministic stubs.

use anyhow::Result;
use async_trait::async_trait;

/// Trait for embedding text into fixed-dimension vectors. Implementations
/// must be async because inference is offloaded to blocking threads (or, for
/// future backends, to HTTP APIs).
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// The dimension of the vectors this backend produces.
    fn dimension(&self) -> usize;

    /// Embed multiple texts, returning vectors in the same order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f64>>>;

    /// Embed a single text. Default implementation wraps a batch of one.
    async fn embed(&self, text: &str) -> Result<Vec<f64>> {
        let mut embeddings = self.embed_batch(&[text.to_string()]).await?;
        if embeddings.is_empty() {
            anyhow::bail!("Embedding backend returned no result for a single-text batch");
        }
        Ok(embeddings.remove(0))
    }
}
