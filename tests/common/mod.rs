// Shared test support: a deterministic embedder that needs no model files.
//
// Embeds text as a letter-frequency histogram. Identical texts embed
// identically (cosine 1.0), texts sharing vocabulary land closer than
// unrelated ones, and digits are ignored.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;

use semblance::embedding::traits::TextEmbedder;

pub const DIMENSION: usize = 26;

#[derive(Default)]
pub struct StubEmbedder {
    /// Number of embed_batch calls, for cache/batching assertions.
    pub batch_calls: AtomicUsize,
}

#[async_trait]
impl TextEmbedder for StubEmbedder {
    fn dimension(&self) -> usize {
        DIMENSION
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f64>>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(texts.iter().map(|t| embed_text(t)).collect())
    }
}

pub fn embed_text(text: &str) -> Vec<f64> {
    let mut v = vec![0.0; DIMENSION];
    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() {
            v[(c as u8 - b'a') as usize] += 1.0;
        }
    }
    v
}
