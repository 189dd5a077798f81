//! Event payloads broadcast by the history engine.
//!
//! External state holders mirror the engine through these snapshots
//! instead of holding a reference into its internals: every successful
//! mutation delivers a complete, immutable copy of the visible state, and
//! every rejected operation delivers the error plus the attempted input on
//! the same channel.

use crate::chess_types::{Position, TerminalResult};
use crate::errors::TrainerError;
use crate::history::ply::Ply;

/// Which mutating operation produced a state snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateSource {
    Move,
    Undo,
    Redo,
    Reset,
    Load,
}

/// Complete snapshot of the engine's visible state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateUpdate {
    pub position: Position,
    /// Applied moves up to the cursor, long-form, space-joined.
    pub move_log: String,
    /// Plies up to and including the cursor. Plies kept only for `redo`
    /// are not visible here.
    pub visible_history: Vec<Ply>,
    pub cursor: isize,
    pub is_terminal: bool,
    pub terminal_result: Option<TerminalResult>,
    pub source: UpdateSource,
}

/// Event delivered to subscribed listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    State(StateUpdate),
    Error {
        error: TrainerError,
        /// The attempted input, when the operation had one.
        input: Option<String>,
    },
}

pub type EventListener = Box<dyn FnMut(&EngineEvent)>;
