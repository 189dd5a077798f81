//! Errors used throughout the trainer core.
//!
//! This module defines the canonical error type returned by the history
//! engine and the rules-oracle contract. Engine-level failures are never
//! thrown across the public API; they travel on the engine's event channel
//! so listeners can react to rejected input the same way they react to
//! accepted input.

use thiserror::Error;

/// Unified error type for the trainer core.
///
/// Each variant corresponds to a specific, identifiable failure mode and
/// carries the offending input where useful so callers can log or display
/// precise diagnostics. Catalog coverage gaps and superseded catalog
/// responses are deliberately *not* represented here: the former is a data
/// flag on the catalog itself, the latter is discarded silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrainerError {
    /// The input handed to `initialize` failed oracle validation.
    ///
    /// Payload: the raw position string that was rejected.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// A move failed normalization or oracle validation from the current
    /// position.
    ///
    /// Payload: the move input as the caller supplied it.
    #[error("invalid move: {0}")]
    InvalidMove(String),

    /// `undo` was called with the cursor already at the root.
    #[error("no history to undo")]
    NoHistoryToUndo,

    /// `redo` was called with the cursor already at the last recorded ply.
    #[error("no history to redo")]
    NoHistoryToRedo,

    /// `go_to_ply` was given an index outside `[-1, len - 1]`.
    ///
    /// Payload: the offending index.
    #[error("ply index {0} out of range")]
    IndexOutOfRange(isize),
}
