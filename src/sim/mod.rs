//! The traversal engine: a state machine that walks a flow graph one step
//! at a time, capturing variables and building a transcript.
//!
//! Two modes exist. The interactive [`Simulation`] waits for user input at
//! questions and conditionals and auto-plays chains of message blocks in
//! between. The non-interactive [`walk`](crate::sim::walk) previews a whole
//! flow without input by always taking the first declared branch.

use crate::error::StepError;
use crate::flow::{BlockId, BlockKind, Choice, FlowGraph};
use crate::interpolate::render;
use ahash::AHashSet;

mod vars;
mod walk;

pub use vars::VariableStore;
pub use walk::{WalkEnd, WalkReport, WalkStep, walk};

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Bot,
    User,
}

/// One line of the simulated conversation, for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub role: Role,
    pub text: String,
}

impl TranscriptEntry {
    fn bot(text: String) -> Self {
        Self {
            role: Role::Bot,
            text,
        }
    }

    fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }
}

/// Where a simulation currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SimState {
    /// No run is active.
    #[default]
    Idle,
    /// Waiting for input at the given block (always a question or
    /// conditional; message chains never rest here).
    AtBlock(BlockId),
    /// The run ended normally: a block had no successor, or the walk looped
    /// back onto a block already visited in this run.
    Terminated,
    /// The run ended abnormally: a reference pointed at a block that does
    /// not exist. Distinct from [`SimState::Terminated`] for diagnostics.
    Stalled { missing: BlockId },
}

/// The input handed to [`Simulation::step`].
#[derive(Debug, Clone, Copy)]
pub enum StepInput<'a> {
    /// Free-text entry; answers a question, or names an option label of a
    /// conditional.
    Text(&'a str),
    /// Direct selection of an option, as a button-driven UI would supply.
    /// Still validated by label against the current block's options.
    Choice(&'a Choice),
}

/// One interactive simulation run over a flow graph.
///
/// The graph is borrowed per call rather than owned, so the editor can keep
/// mutating its graph between runs. All run state (current position,
/// captured variables, visited set, transcript) lives here and is reset by
/// [`Simulation::start`].
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    state: SimState,
    variables: VariableStore,
    visited: AHashSet<BlockId>,
    transcript: Vec<TranscriptEntry>,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn variables(&self) -> &VariableStore {
        &self.variables
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Whether the run has ended, normally or otherwise.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, SimState::Terminated | SimState::Stalled { .. })
    }

    /// Begins a fresh run at the graph's first block, discarding any state
    /// from a previous run. An empty graph leaves the simulation idle.
    pub fn start(&mut self, graph: &FlowGraph) {
        self.variables.clear();
        self.visited.clear();
        self.transcript.clear();
        match graph.first() {
            Some(entry) => self.enter(graph, Some(entry.id)),
            None => self.state = SimState::Idle,
        }
    }

    /// Advances the run by one user interaction.
    ///
    /// Questions require [`StepInput::Text`] and capture it when the block
    /// names a variable. Conditionals accept either input form and match it
    /// by label equality against their options; an unmatched label is
    /// rejected without any state change, leaving the run waiting for valid
    /// input. Dangling successors end the run [`SimState::Stalled`] rather
    /// than erroring.
    pub fn step(&mut self, graph: &FlowGraph, input: StepInput<'_>) -> Result<(), StepError> {
        let SimState::AtBlock(current_id) = self.state else {
            return Err(StepError::NoActiveBlock);
        };
        let Some(block) = graph.find(current_id) else {
            // The block was deleted out from under the run.
            self.state = SimState::Stalled {
                missing: current_id,
            };
            return Ok(());
        };

        match &block.kind {
            BlockKind::Message | BlockKind::Answer => {
                let text = render(&block.content, &self.variables);
                self.transcript.push(TranscriptEntry::bot(text));
                self.enter(graph, block.next_id);
                Ok(())
            }
            BlockKind::Question { variable } => {
                let StepInput::Text(answer) = input else {
                    return Err(StepError::ExpectedText);
                };
                let prompt = render(&block.content, &self.variables);
                self.transcript.push(TranscriptEntry::bot(prompt));
                self.transcript.push(TranscriptEntry::user(answer));
                if let Some(name) = variable {
                    self.variables.set(name.clone(), answer);
                }
                self.enter(graph, block.next_id);
                Ok(())
            }
            BlockKind::Conditional { variable, options } => {
                let label = match input {
                    StepInput::Text(text) => text,
                    StepInput::Choice(choice) => choice.label.as_str(),
                };
                let Some(chosen) = options.iter().find(|o| o.label == label) else {
                    return Err(StepError::UnmatchedChoice(label.to_string()));
                };
                let prompt = render(&block.content, &self.variables);
                self.transcript.push(TranscriptEntry::bot(prompt));
                self.transcript.push(TranscriptEntry::user(&chosen.label));
                if let Some(name) = variable {
                    self.variables.set(name.clone(), label);
                }
                self.enter(graph, chosen.next_id);
                Ok(())
            }
        }
    }

    /// Follows `next` until the run needs input or ends, emitting message
    /// content along the way. Revisiting a block ends the run: flows are not
    /// guaranteed acyclic, so termination is enforced here.
    fn enter(&mut self, graph: &FlowGraph, next: Option<BlockId>) {
        let mut next = next;
        loop {
            let Some(id) = next else {
                self.state = SimState::Terminated;
                return;
            };
            let Some(block) = graph.find(id) else {
                self.state = SimState::Stalled { missing: id };
                return;
            };
            if !self.visited.insert(id) {
                self.state = SimState::Terminated;
                return;
            }
            match &block.kind {
                BlockKind::Message | BlockKind::Answer => {
                    let text = render(&block.content, &self.variables);
                    self.transcript.push(TranscriptEntry::bot(text));
                    next = block.next_id;
                }
                BlockKind::Question { .. } | BlockKind::Conditional { .. } => {
                    self.state = SimState::AtBlock(id);
                    return;
                }
            }
        }
    }
}
