use std::fmt;

/// Unique identifier of a block within a flow graph.
///
/// Serialized as a plain JSON number. Identifiers are never reused within a
/// session, even after the block they named has been deleted.
pub type BlockId = u64;

/// One labeled branch of a conditional block.
///
/// The label doubles as the match key for free-text input during interactive
/// simulation. A `None` target means the branch is not wired yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub next_id: Option<BlockId>,
}

impl Choice {
    pub fn new(label: impl Into<String>, next_id: Option<BlockId>) -> Self {
        Self {
            label: label.into(),
            next_id,
        }
    }
}

/// The type-specific payload of a block.
///
/// Only the fields a given type actually uses are carried: a message has
/// nothing beyond its content, questions capture into an optional variable,
/// and conditionals additionally own their ordered branch list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Bot output, then follow `next_id`.
    Message,
    /// A canned response; traversal-equivalent to [`BlockKind::Message`].
    Answer,
    /// Awaits free-text input, optionally captured into a variable.
    Question { variable: Option<String> },
    /// Branches on an option chosen by label; ignores the block's `next_id`.
    Conditional {
        variable: Option<String>,
        options: Vec<Choice>,
    },
}

impl BlockKind {
    /// Fresh conditional payload with no branches wired yet.
    pub fn conditional() -> Self {
        BlockKind::Conditional {
            variable: None,
            options: Vec::new(),
        }
    }

    /// Fresh question payload with no capture variable.
    pub fn question() -> Self {
        BlockKind::Question { variable: None }
    }

    /// The wire/display name of this type.
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockKind::Message => "message",
            BlockKind::Answer => "answer",
            BlockKind::Question { .. } => "question",
            BlockKind::Conditional { .. } => "conditional",
        }
    }

    /// The capture variable, for the types that have one.
    pub fn variable(&self) -> Option<&str> {
        match self {
            BlockKind::Question { variable } | BlockKind::Conditional { variable, .. } => {
                variable.as_deref()
            }
            BlockKind::Message | BlockKind::Answer => None,
        }
    }

    /// The branch list; empty for every non-conditional type.
    pub fn options(&self) -> &[Choice] {
        match self {
            BlockKind::Conditional { options, .. } => options,
            _ => &[],
        }
    }

    /// Whether this type awaits user input during interactive simulation.
    pub fn awaits_input(&self) -> bool {
        matches!(
            self,
            BlockKind::Question { .. } | BlockKind::Conditional { .. }
        )
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A node in the flow graph: one conversational step.
///
/// `next_id` is the direct successor used by non-conditional types; it may
/// point at a deleted or never-created block, which readers must treat as
/// "no next" rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub content: String,
    pub next_id: Option<BlockId>,
    pub kind: BlockKind,
}

impl Block {
    pub fn new(id: BlockId, kind: BlockKind) -> Self {
        Self {
            id,
            content: String::new(),
            next_id: None,
            kind,
        }
    }
}
