// Ranking pipeline: score one source text against many candidates.
//
// The source is embedded once; candidates are embedded in fixed-size
// batches run concurrently (bounded by `concurrency`) and scored against
// the source embedding. Results come back sorted by descending score.

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::debug;

use crate::embedding::traits::TextEmbedder;
use crate::embedding::vector::cosine_similarity;

/// How many candidate texts go into a single inference batch. Batches are
/// padded to their longest member, so smaller batches waste less compute
/// on mixed-length inputs.
const BATCH_SIZE: usize = 16;

/// One scored candidate from a ranking run.
#[derive(Debug, Clone, Serialize)]
pub struct RankedMatch {
    /// Position of this candidate in the input list
    pub index: usize,
    pub text: String,
    pub score: f64,
}

/// Rank `targets` by similarity to `source`.
///
/// Returns matches sorted by descending score; ties keep input order.
/// An empty target list yields an empty result.
pub async fn rank(
    embedder: &dyn TextEmbedder,
    source: &str,
    targets: &[String],
    concurrency: usize,
) -> Result<Vec<RankedMatch>> {
    if source.is_empty() {
        anyhow::bail!("Source text cannot be empty");
    }
    if targets.is_empty() {
        return Ok(Vec::new());
    }

    let source_embedding = embedder.embed(source).await?;

    // Each batch remembers the index of its first candidate so results can
    // be stitched back together after unordered completion.
    let batches: Vec<(usize, Vec<String>)> = targets
        .chunks(BATCH_SIZE)
        .enumerate()
        .map(|(i, chunk)| (i * BATCH_SIZE, chunk.to_vec()))
        .collect();

    let batch_results: Vec<Result<(usize, Vec<Vec<f64>>)>> =
        stream::iter(batches.into_iter().map(|(offset, batch)| async move {
            let embeddings = embedder
                .embed_batch(&batch)
                .await
                .with_context(|| format!("Failed to embed candidate batch at offset {offset}"))?;
            Ok((offset, embeddings))
        }))
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    let mut matches = Vec::with_capacity(targets.len());
    for result in batch_results {
        let (offset, embeddings) = result?;
        for (i, embedding) in embeddings.iter().enumerate() {
            let index = offset + i;
            matches.push(RankedMatch {
                index,
                text: targets[index].clone(),
                score: cosine_similarity(&source_embedding, embedding),
            });
        }
    }

    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });

    debug!(candidates = matches.len(), "Ranked candidates");
    Ok(matches)
}
