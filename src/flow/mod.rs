//! The flow graph data model: blocks, branches, and the mutable graph.

pub mod block;
pub mod graph;

pub use block::*;
pub use graph::*;
