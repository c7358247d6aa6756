// Comparison pipelines built on top of the embedder.

pub mod rank;
