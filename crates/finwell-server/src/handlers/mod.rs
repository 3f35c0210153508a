//! HTTP request handlers
//!
//! One submodule per API area: scoring and graph retrieval.

pub mod graph;
pub mod score;

// Re-export all handlers for use in router
pub use graph::*;
pub use score::*;
