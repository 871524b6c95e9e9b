//! Session persistence over an environment-provided key-value store.
//!
//! The core does not care where flows physically live. Whatever the host
//! can offer, be it browser storage, a dotfile, or a database row, it only
//! has to implement [`KeyValueStore`]. File transfer is likewise the host's job:
//! the core produces and consumes content strings, the UI owns the actual
//! read/download affordances.

use crate::codec;
use crate::error::ImportError;
use crate::flow::FlowGraph;
use ahash::AHashMap;

/// Key under which the working flow is kept between sessions.
pub const SESSION_KEY: &str = "flujo.flow";

/// Suggested filename for the export/download affordance.
pub const EXPORT_FILENAME: &str = "chatbot-flow.json";

/// The minimal persistence surface required from the environment.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Writes the graph to the store under [`SESSION_KEY`].
pub fn save_session(
    store: &mut dyn KeyValueStore,
    graph: &FlowGraph,
) -> Result<(), serde_json::Error> {
    let payload = codec::serialize(graph)?;
    store.set(SESSION_KEY, &payload);
    Ok(())
}

/// Restores the graph saved under [`SESSION_KEY`], if any.
///
/// A stored payload that no longer validates is reported as an error rather
/// than silently replaced; an absent key is simply `Ok(None)`.
pub fn load_session(store: &dyn KeyValueStore) -> Result<Option<FlowGraph>, ImportError> {
    match store.get(SESSION_KEY) {
        Some(payload) => codec::deserialize(&payload).map(Some),
        None => Ok(None),
    }
}

/// In-memory [`KeyValueStore`], used by tests and the CLI.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: AHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
