use super::{Block, BlockId, BlockKind, Choice};
use crate::id::IdAllocator;

/// The in-memory collection of blocks and the edges between them.
///
/// Blocks are kept in insertion order; the first block is the fixed entry
/// point of every simulation. All mutation goes through the methods here so
/// that referential integrity is preserved: deleting a block also clears
/// every reference to it, and destructive text writes are guarded.
///
/// Edge targets are deliberately *not* validated at write time. A half-wired
/// flow is a normal intermediate editing state; dangling references are
/// resolved (to "no next") by the readers instead.
#[derive(Debug, Clone)]
pub struct FlowGraph {
    blocks: Vec<Block>,
    ids: IdAllocator,
}

impl FlowGraph {
    /// An empty graph with a session-fresh id allocator.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Rebuilds a graph from an already-identified block list, resuming id
    /// allocation past the highest id present.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        let max_id = blocks.iter().map(|b| b.id).max().unwrap_or(0);
        Self {
            blocks,
            ids: IdAllocator::starting_at(max_id + 1),
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The simulation entry point: the first block in insertion order.
    pub fn first(&self) -> Option<&Block> {
        self.blocks.first()
    }

    pub fn find(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    fn find_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    /// Appends a new block of the given kind and returns its fresh id.
    pub fn add_block(&mut self, kind: BlockKind) -> BlockId {
        let id = self.ids.allocate();
        self.blocks.push(Block::new(id, kind));
        id
    }

    /// Replaces a block's content. Empty or whitespace-only text is ignored
    /// so that clearing an input field mid-edit cannot blank a block.
    ///
    /// Returns `true` when the write was applied.
    pub fn update_content(&mut self, id: BlockId, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        match self.find_mut(id) {
            Some(block) => {
                block.content = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Sets a block's direct successor. The target is taken as-is; it may
    /// reference a block that does not (or no longer) exist.
    pub fn set_next(&mut self, id: BlockId, target: Option<BlockId>) {
        if let Some(block) = self.find_mut(id) {
            block.next_id = target;
        }
    }

    /// Sets or clears the capture variable of a question or conditional.
    /// Blank names normalize to `None`. No-op on other block types.
    pub fn set_variable(&mut self, id: BlockId, name: Option<String>) -> bool {
        let name = name.filter(|n| !n.trim().is_empty());
        match self.find_mut(id) {
            Some(block) => match &mut block.kind {
                BlockKind::Question { variable } | BlockKind::Conditional { variable, .. } => {
                    *variable = name;
                    true
                }
                BlockKind::Message | BlockKind::Answer => false,
            },
            None => false,
        }
    }

    /// Appends an unlabeled, unwired branch to a conditional block.
    pub fn add_option(&mut self, id: BlockId) -> bool {
        match self.find_mut(id) {
            Some(Block {
                kind: BlockKind::Conditional { options, .. },
                ..
            }) => {
                options.push(Choice::new("", None));
                true
            }
            _ => false,
        }
    }

    /// Relabels one branch of a conditional. Blank labels are rejected (the
    /// same guard as [`FlowGraph::update_content`]), as are out-of-bounds
    /// indices.
    pub fn set_option_label(&mut self, id: BlockId, index: usize, label: &str) -> bool {
        if label.trim().is_empty() {
            return false;
        }
        match self.option_mut(id, index) {
            Some(choice) => {
                choice.label = label.to_string();
                true
            }
            None => false,
        }
    }

    /// Rewires one branch of a conditional; the target is unvalidated.
    pub fn set_option_target(&mut self, id: BlockId, index: usize, target: Option<BlockId>) -> bool {
        match self.option_mut(id, index) {
            Some(choice) => {
                choice.next_id = target;
                true
            }
            None => false,
        }
    }

    fn option_mut(&mut self, id: BlockId, index: usize) -> Option<&mut Choice> {
        match self.find_mut(id) {
            Some(Block {
                kind: BlockKind::Conditional { options, .. },
                ..
            }) => options.get_mut(index),
            _ => None,
        }
    }

    /// Removes a block and clears every `next_id` and branch target elsewhere
    /// in the graph that pointed to it. Cleanup is part of the delete
    /// contract, not something callers have to remember.
    pub fn delete_block(&mut self, id: BlockId) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|b| b.id != id);
        if self.blocks.len() == before {
            return false;
        }
        for block in &mut self.blocks {
            if block.next_id == Some(id) {
                block.next_id = None;
            }
            if let BlockKind::Conditional { options, .. } = &mut block.kind {
                for choice in options {
                    if choice.next_id == Some(id) {
                        choice.next_id = None;
                    }
                }
            }
        }
        true
    }
}

impl Default for FlowGraph {
    fn default() -> Self {
        Self::new()
    }
}

// Equality is structural over the block sequence; the allocator position is
// session state, not part of the flow.
impl PartialEq for FlowGraph {
    fn eq(&self, other: &Self) -> bool {
        self.blocks == other.blocks
    }
}

impl Eq for FlowGraph {}
