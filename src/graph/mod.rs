//! Graph storage.
//!
//! A [`Graph`] holds a fixed vertex count and a dense adjacency relation in a
//! single contiguous buffer. It only supports edge insertion and lookup; the
//! layout engine reads it and never mutates it.

mod adjacency;
mod edge;

pub use adjacency::Graph;
pub use edge::Edge;
