//! Block identity: allocation of unique ids and the human-facing short
//! alias scheme.
//!
//! Full ids are what the graph uses internally. The short alias is a lossy
//! display form for manual entry in the editor; it can collide, so
//! resolution reports ambiguity instead of silently picking a block. The
//! traversal engine never depends on aliases.

use crate::flow::{BlockId, FlowGraph};
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of trailing decimal digits kept by [`short_alias`].
const ALIAS_DIGITS: u32 = 4;

/// A monotonic source of block ids.
///
/// Fresh allocators seed from the Unix epoch in milliseconds, so ids behave
/// like timestamps and are never handed out twice within a session, even
/// after the block that held one is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: BlockId,
}

impl IdAllocator {
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as BlockId)
            .unwrap_or(1);
        Self::starting_at(seed.max(1))
    }

    /// An allocator whose next id is exactly `next`; used when resuming
    /// after an import and for deterministic tests.
    pub fn starting_at(next: BlockId) -> Self {
        Self { next: next.max(1) }
    }

    pub fn allocate(&mut self) -> BlockId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// The truncated display form of an id: its last four decimal digits, zero
/// padded. Lossy by design and only ever compared against typed user input.
pub fn short_alias(id: BlockId) -> String {
    format!("{:0width$}", id % 10u64.pow(ALIAS_DIGITS), width = ALIAS_DIGITS as usize)
}

/// The outcome of resolving a typed short alias against a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasMatch {
    /// The first block in graph order whose alias matched.
    pub id: BlockId,
    /// More than one block shares this alias; the editor should warn before
    /// wiring anything to `id`.
    pub ambiguous: bool,
}

/// Finds the block whose [`short_alias`] equals `alias`.
///
/// First match in insertion order wins. When several blocks share the alias
/// the match is still returned, flagged as ambiguous.
pub fn resolve_alias(graph: &FlowGraph, alias: &str) -> Option<AliasMatch> {
    let alias = alias.trim();
    let mut matches = graph
        .blocks()
        .iter()
        .filter(|b| short_alias(b.id) == alias);

    let first = matches.next()?;
    Some(AliasMatch {
        id: first.id,
        ambiguous: matches.next().is_some(),
    })
}
