//! JSON interchange for flow graphs.
//!
//! The wire format is a flat array of camelCase block objects, matching
//! what hand-edited and previously exported flow files look like. The raw
//! serde structs here are only a transport shape; they are converted to the
//! typed model on the way in and validated so that a rejected import never
//! disturbs the caller's current graph.

use crate::error::ImportError;
use crate::flow::{Block, BlockId, BlockKind, Choice, FlowGraph};
use ahash::AHashSet;
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlock {
    #[serde(default)]
    id: Option<BlockId>,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    content: String,
    // Always emitted, null when unwired.
    #[serde(default)]
    next_id: Option<BlockId>,
    // Double option: outer None = key absent (message/answer), inner None =
    // explicit null (question/conditional with no capture variable).
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_or_null"
    )]
    variable_name: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<RawChoice>>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChoice {
    #[serde(default)]
    label: String,
    #[serde(default)]
    next_id: Option<BlockId>,
}

/// Keeps `null` distinguishable from an absent key.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

fn to_raw(block: &Block) -> RawBlock {
    let (variable_name, options) = match &block.kind {
        BlockKind::Message | BlockKind::Answer => (None, None),
        BlockKind::Question { variable } => (Some(variable.clone()), None),
        BlockKind::Conditional { variable, options } => (
            Some(variable.clone()),
            Some(
                options
                    .iter()
                    .map(|c| RawChoice {
                        label: c.label.clone(),
                        next_id: c.next_id,
                    })
                    .collect(),
            ),
        ),
    };
    RawBlock {
        id: Some(block.id),
        type_name: block.kind.type_name().to_string(),
        content: block.content.clone(),
        next_id: block.next_id,
        variable_name,
        options,
    }
}

fn from_raw(raw: RawBlock, index: usize) -> Result<Block, ImportError> {
    let id = match raw.id {
        Some(id) if id != 0 => id,
        _ => return Err(ImportError::MissingId { index }),
    };
    let variable = raw.variable_name.flatten().filter(|v| !v.is_empty());
    let kind = match raw.type_name.as_str() {
        "message" => BlockKind::Message,
        "answer" => BlockKind::Answer,
        "question" => BlockKind::Question { variable },
        "conditional" => BlockKind::Conditional {
            variable,
            options: raw
                .options
                .unwrap_or_default()
                .into_iter()
                .map(|c| Choice::new(c.label, c.next_id))
                .collect(),
        },
        other => {
            return Err(ImportError::UnknownType {
                id,
                type_name: other.to_string(),
            });
        }
    };
    Ok(Block {
        id,
        content: raw.content,
        next_id: raw.next_id,
        kind,
    })
}

/// Serializes a graph to its canonical compact JSON form.
pub fn serialize(graph: &FlowGraph) -> Result<String, serde_json::Error> {
    serde_json::to_string(&raw_blocks(graph))
}

/// Serializes a graph to indented JSON, the form used for file export.
pub fn serialize_pretty(graph: &FlowGraph) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&raw_blocks(graph))
}

fn raw_blocks(graph: &FlowGraph) -> Vec<RawBlock> {
    graph.blocks().iter().map(to_raw).collect()
}

/// Parses and validates a serialized flow, producing a new graph.
///
/// Validation requires the payload to be a JSON array whose every element
/// parses as a block with a usable id and a recognized type, with no id
/// repeated. All-or-nothing: any failure returns an [`ImportError`] and no
/// graph, so the caller's current state survives a bad file untouched. The
/// returned graph resumes id allocation past the highest imported id.
pub fn deserialize(payload: &str) -> Result<FlowGraph, ImportError> {
    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(|e| ImportError::JsonParse(e.to_string()))?;
    let serde_json::Value::Array(entries) = value else {
        return Err(ImportError::NotAnArray);
    };

    let mut blocks = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let raw: RawBlock = serde_json::from_value(entry).map_err(|e| {
            ImportError::InvalidBlock {
                index,
                reason: e.to_string(),
            }
        })?;
        blocks.push(from_raw(raw, index)?);
    }

    let mut seen: AHashSet<BlockId> = AHashSet::with_capacity(blocks.len());
    let duplicates: Vec<BlockId> = blocks
        .iter()
        .map(|b| b.id)
        .filter(|id| !seen.insert(*id))
        .unique()
        .collect();
    if !duplicates.is_empty() {
        return Err(ImportError::DuplicateIds(
            duplicates.iter().map(|id| id.to_string()).join(", "),
        ));
    }

    Ok(FlowGraph::from_blocks(blocks))
}
