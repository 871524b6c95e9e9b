//! Common test utilities for building flow graphs with fixed block ids.
use flujo::prelude::*;

/// A block with explicit id, content, and successor.
#[allow(dead_code)]
pub fn block(id: BlockId, kind: BlockKind, content: &str, next_id: Option<BlockId>) -> Block {
    Block {
        id,
        content: content.to_string(),
        next_id,
        kind,
    }
}

/// `question(1) -> message(2)`: asks for a name, greets with it.
#[allow(dead_code)]
pub fn name_flow() -> FlowGraph {
    FlowGraph::from_blocks(vec![
        block(
            1,
            BlockKind::Question {
                variable: Some("name".to_string()),
            },
            "Name?",
            Some(2),
        ),
        block(2, BlockKind::Message, "Hi {name}", None),
    ])
}

/// A conditional fork: "Yes" -> message(3), "No" -> message(4).
#[allow(dead_code)]
pub fn branching_flow() -> FlowGraph {
    FlowGraph::from_blocks(vec![
        block(
            1,
            BlockKind::Conditional {
                variable: Some("mood".to_string()),
                options: vec![Choice::new("Yes", Some(3)), Choice::new("No", Some(4))],
            },
            "Do you like it?",
            None,
        ),
        block(3, BlockKind::Message, "Great!", None),
        block(4, BlockKind::Message, "Too bad.", None),
    ])
}

/// Two message blocks that point at each other.
#[allow(dead_code)]
pub fn cyclic_flow() -> FlowGraph {
    FlowGraph::from_blocks(vec![
        block(1, BlockKind::Message, "ping", Some(2)),
        block(2, BlockKind::Message, "pong", Some(1)),
    ])
}

/// One graph exercising every block type and field combination.
#[allow(dead_code)]
pub fn full_flow() -> FlowGraph {
    FlowGraph::from_blocks(vec![
        block(10, BlockKind::Message, "Welcome", Some(11)),
        block(
            11,
            BlockKind::Question {
                variable: Some("city".to_string()),
            },
            "Which city?",
            Some(12),
        ),
        block(
            12,
            BlockKind::Conditional {
                variable: None,
                options: vec![
                    Choice::new("Continue", Some(13)),
                    Choice::new("Stop", None),
                ],
            },
            "Keep going?",
            None,
        ),
        block(13, BlockKind::Answer, "Visiting {city}, noted.", None),
        block(14, BlockKind::Question { variable: None }, "Anything else?", None),
    ])
}
