//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions of the flujo crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flujo::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let payload = std::fs::read_to_string("path/to/flow.json")?;
//! let graph = flujo::codec::deserialize(&payload)?;
//!
//! let mut sim = Simulation::new();
//! sim.start(&graph);
//! if let SimState::AtBlock(_) = sim.state() {
//!     sim.step(&graph, StepInput::Text("Ana"))?;
//! }
//! # Ok(())
//! # }
//! ```

// Flow graph model
pub use crate::flow::{Block, BlockId, BlockKind, Choice, FlowGraph};

// Identity service
pub use crate::id::{AliasMatch, IdAllocator, resolve_alias, short_alias};

// Simulation engine
pub use crate::sim::{
    Role, SimState, Simulation, StepInput, TranscriptEntry, VariableStore, WalkEnd, WalkReport,
    WalkStep, walk,
};

// Interpolation
pub use crate::interpolate::render;

// Codec and persistence
pub use crate::codec::{deserialize, serialize, serialize_pretty};
pub use crate::storage::{KeyValueStore, MemoryStore, load_session, save_session};

// Error types
pub use crate::error::{ImportError, StepError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
