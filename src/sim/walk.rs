use crate::flow::{BlockId, BlockKind, FlowGraph};
use ahash::AHashSet;

/// How a non-interactive walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEnd {
    /// A block had no successor, or the walk looped back onto itself.
    Terminated,
    /// A successor reference pointed at a block that does not exist.
    Stalled { missing: BlockId },
}

/// One visited block in a walk, raw content included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkStep {
    pub id: BlockId,
    pub content: String,
}

/// The full trace of a non-interactive walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkReport {
    pub steps: Vec<WalkStep>,
    pub end: WalkEnd,
}

/// Previews a whole conversation without any input.
///
/// Starts at the graph's first block and follows `next_id`, except at
/// conditionals with at least one option, where the first declared option's
/// target is taken: the first option is the documented default branch. A
/// conditional with no options falls back to its own `next_id`. Content is
/// reported verbatim: no input means no variables to substitute.
///
/// A per-walk visited set bounds the trace at one visit per block, so walks
/// over cyclic flows terminate.
pub fn walk(graph: &FlowGraph) -> WalkReport {
    let mut steps = Vec::new();
    let mut visited: AHashSet<BlockId> = AHashSet::new();

    let mut current = graph.first().map(|b| b.id);
    let end = loop {
        let Some(id) = current else {
            break WalkEnd::Terminated;
        };
        let Some(block) = graph.find(id) else {
            break WalkEnd::Stalled { missing: id };
        };
        if !visited.insert(id) {
            break WalkEnd::Terminated;
        }
        steps.push(WalkStep {
            id,
            content: block.content.clone(),
        });
        current = match &block.kind {
            BlockKind::Conditional { options, .. } if !options.is_empty() => options[0].next_id,
            _ => block.next_id,
        };
    };

    WalkReport { steps, end }
}
