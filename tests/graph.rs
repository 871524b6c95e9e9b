//! Contract tests for the block graph mutation operations.
mod common;
use common::*;
use flujo::prelude::*;

#[test]
fn test_add_block_assigns_fresh_increasing_ids() {
    let mut graph = FlowGraph::new();
    let a = graph.add_block(BlockKind::Message);
    let b = graph.add_block(BlockKind::question());
    let c = graph.add_block(BlockKind::conditional());

    assert!(b > a);
    assert!(c > b);
    assert_eq!(graph.len(), 3);

    let added = graph.find(c).unwrap();
    assert_eq!(added.content, "");
    assert_eq!(added.next_id, None);
    assert!(added.kind.options().is_empty());
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let mut graph = FlowGraph::new();
    let a = graph.add_block(BlockKind::Message);
    let b = graph.add_block(BlockKind::Message);
    assert!(graph.delete_block(b));

    let c = graph.add_block(BlockKind::Message);
    assert_ne!(c, b);
    assert!(c > b);
    assert!(graph.find(a).is_some());
}

#[test]
fn test_update_content_rejects_blank_text() {
    let mut graph = FlowGraph::new();
    let id = graph.add_block(BlockKind::Message);
    assert!(graph.update_content(id, "Hello"));

    assert!(!graph.update_content(id, ""));
    assert!(!graph.update_content(id, "   "));
    assert!(!graph.update_content(id, "\n\t"));
    assert_eq!(graph.find(id).unwrap().content, "Hello");
}

#[test]
fn test_update_content_unknown_block_is_noop() {
    let mut graph = FlowGraph::new();
    assert!(!graph.update_content(42, "text"));
}

#[test]
fn test_set_next_accepts_dangling_targets() {
    let mut graph = FlowGraph::new();
    let id = graph.add_block(BlockKind::Message);
    graph.set_next(id, Some(9999));
    assert_eq!(graph.find(id).unwrap().next_id, Some(9999));

    graph.set_next(id, None);
    assert_eq!(graph.find(id).unwrap().next_id, None);
}

#[test]
fn test_set_variable_only_on_capturing_kinds() {
    let mut graph = FlowGraph::new();
    let question = graph.add_block(BlockKind::question());
    let message = graph.add_block(BlockKind::Message);

    assert!(graph.set_variable(question, Some("answer".to_string())));
    assert_eq!(graph.find(question).unwrap().kind.variable(), Some("answer"));

    assert!(!graph.set_variable(message, Some("answer".to_string())));
    assert_eq!(graph.find(message).unwrap().kind.variable(), None);
}

#[test]
fn test_set_variable_blank_clears() {
    let mut graph = FlowGraph::new();
    let id = graph.add_block(BlockKind::question());
    graph.set_variable(id, Some("name".to_string()));
    assert!(graph.set_variable(id, Some("   ".to_string())));
    assert_eq!(graph.find(id).unwrap().kind.variable(), None);
}

#[test]
fn test_add_option_only_on_conditionals() {
    let mut graph = FlowGraph::new();
    let cond = graph.add_block(BlockKind::conditional());
    let msg = graph.add_block(BlockKind::Message);

    assert!(graph.add_option(cond));
    assert!(graph.add_option(cond));
    assert_eq!(graph.find(cond).unwrap().kind.options().len(), 2);

    assert!(!graph.add_option(msg));
    assert!(graph.find(msg).unwrap().kind.options().is_empty());
}

#[test]
fn test_set_option_label_guards_blank_and_bounds() {
    let mut graph = FlowGraph::new();
    let cond = graph.add_block(BlockKind::conditional());
    graph.add_option(cond);

    assert!(graph.set_option_label(cond, 0, "Yes"));
    assert!(!graph.set_option_label(cond, 0, "  "));
    assert_eq!(graph.find(cond).unwrap().kind.options()[0].label, "Yes");

    // Out of bounds is a no-op, not a panic.
    assert!(!graph.set_option_label(cond, 5, "Maybe"));
}

#[test]
fn test_set_option_target_allows_dangling() {
    let mut graph = FlowGraph::new();
    let cond = graph.add_block(BlockKind::conditional());
    graph.add_option(cond);

    assert!(graph.set_option_target(cond, 0, Some(404)));
    assert_eq!(graph.find(cond).unwrap().kind.options()[0].next_id, Some(404));
    assert!(!graph.set_option_target(cond, 1, Some(404)));
}

#[test]
fn test_delete_block_cascades_reference_cleanup() {
    let mut graph = branching_flow();
    assert!(graph.delete_block(3));

    assert!(graph.find(3).is_none());
    for block in graph.blocks() {
        assert_ne!(block.next_id, Some(3));
        for choice in block.kind.options() {
            assert_ne!(choice.next_id, Some(3));
        }
    }
    // The other branch is untouched.
    let options = graph.find(1).unwrap().kind.options();
    assert_eq!(options[0].next_id, None);
    assert_eq!(options[1].next_id, Some(4));
}

#[test]
fn test_delete_block_clears_plain_next_links() {
    let mut graph = name_flow();
    assert!(graph.delete_block(2));
    assert_eq!(graph.find(1).unwrap().next_id, None);
}

#[test]
fn test_delete_unknown_block_is_noop() {
    let mut graph = name_flow();
    assert!(!graph.delete_block(99));
    assert_eq!(graph.len(), 2);
}

#[test]
fn test_from_blocks_resumes_allocation_past_max_id() {
    let mut graph = full_flow();
    let fresh = graph.add_block(BlockKind::Message);
    assert!(fresh > 14);
}
