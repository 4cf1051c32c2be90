//! # learnpath-index
//!
//! Embedding-backed course similarity search.
//!
//! A [`CourseIndex`] embeds every course in the corpus once at ingest
//! time and ranks courses against free-text queries by cosine
//! similarity. The embedding provider is injected: an ONNX sentence
//! encoder when a model file is configured, a deterministic mock
//! otherwise, so the index works on machines without the model while
//! flagging that its scores carry no semantic signal.

pub mod cache;
pub mod index;
pub mod providers;
pub mod similarity;

pub use index::CourseIndex;
pub use providers::{create_provider, MockEmbedder, OnnxEmbedder};
