//! # Flujo - Chatbot Flow Graph and Simulation Engine
//!
//! **Flujo** models branching conversational scripts as a directed graph of
//! typed blocks (messages, questions, conditionals) wired together by
//! explicit next-block references. The graph can be edited with
//! integrity-preserving mutation operations, persisted and restored as JSON
//! with validated, all-or-nothing import, and run through a stepwise
//! simulation that captures user input into variables and substitutes them
//! back into block text.
//!
//! ## Core Workflow
//!
//! 1.  **Build or import a flow**: mutate a [`flow::FlowGraph`] through its
//!     editing operations, or restore one with [`codec::deserialize`].
//! 2.  **Simulate interactively**: drive a [`sim::Simulation`] with user
//!     input; it walks the graph, captures variables, renders
//!     `{variableName}` placeholders, and produces a bot/user transcript.
//! 3.  **Or preview non-interactively**: [`sim::walk`] plays a whole flow at
//!     once, always taking the first declared branch of each conditional.
//!
//! Unwired or dangling references are normal editing states, never panics:
//! traversal reports them as a stalled run and the editor keeps working.
//!
//! ## Quick Start
//!
//! ```rust
//! use flujo::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut graph = FlowGraph::new();
//!
//!     let ask = graph.add_block(BlockKind::question());
//!     graph.update_content(ask, "What is your name?");
//!     graph.set_variable(ask, Some("name".to_string()));
//!
//!     let greet = graph.add_block(BlockKind::Message);
//!     graph.update_content(greet, "Hello {name}!");
//!     graph.set_next(ask, Some(greet));
//!
//!     let mut sim = Simulation::new();
//!     sim.start(&graph);
//!     sim.step(&graph, StepInput::Text("Ana"))?;
//!
//!     assert_eq!(sim.state(), SimState::Terminated);
//!     assert_eq!(sim.transcript().last().map(|e| e.text.as_str()), Some("Hello Ana!"));
//!
//!     // Persist and restore the flow without loss.
//!     let payload = serialize(&graph)?;
//!     let restored = deserialize(&payload)?;
//!     assert_eq!(graph, restored);
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod error;
pub mod flow;
pub mod id;
pub mod interpolate;
pub mod prelude;
pub mod sim;
pub mod storage;
