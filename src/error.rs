use crate::flow::BlockId;
use thiserror::Error;

/// Errors raised while importing a serialized flow.
///
/// Import is all-or-nothing: when any of these is returned, no graph was
/// produced and the caller's current graph is untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Failed to parse flow JSON: {0}")]
    JsonParse(String),

    #[error("Flow payload must be a JSON array of blocks")]
    NotAnArray,

    #[error("Block at index {index} is invalid: {reason}")]
    InvalidBlock { index: usize, reason: String },

    #[error("Block at index {index} is missing a usable id")]
    MissingId { index: usize },

    #[error("Block '{id}' has an unrecognized type: '{type_name}'")]
    UnknownType { id: BlockId, type_name: String },

    #[error("Duplicate block ids in payload: {0}")]
    DuplicateIds(String),
}

/// Recoverable rejections of an interactive simulation step.
///
/// None of these end the run; the simulation stays exactly where it was and
/// waits for usable input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error("No active block; start a simulation before stepping")]
    NoActiveBlock,

    #[error("The current block expects a typed text answer")]
    ExpectedText,

    #[error("'{0}' does not match any option of the current block")]
    UnmatchedChoice(String),
}
