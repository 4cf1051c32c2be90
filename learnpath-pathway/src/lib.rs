//! # learnpath-pathway
//!
//! Assembles learning pathways: builds features for one learner, looks
//! up their persona, retrieves courses through the configured strategy
//! (curated catalog or semantic index), and wraps everything in the
//! response envelopes the boundary hands back.

pub mod catalog;
pub mod engine;
pub mod retrieval;

pub use catalog::CuratedCatalog;
pub use engine::PathwayEngine;
pub use retrieval::{create_retriever, CuratedRetriever, SemanticRetriever};
