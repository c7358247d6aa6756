// Text embedding — trait-based abstraction over embedding backends.
//
// The TextEmbedder trait defines the interface. OnnxEmbedder implements it
// with a local sentence-transformer model; tests swap in deterministic stubs.

pub mod onnx;
pub mod traits;
pub mod vector;
