//! Rules-oracle contract.
//!
//! The trainer core does not implement chess rules. It requires a correct
//! rules oracle behind this trait: validate/canonicalize a position, apply
//! a move intent, and report terminal status. Different oracle backends
//! can be swapped behind the trait without touching the history engine.

use crate::chess_types::{Color, Move, Position, TerminalStatus};
use crate::errors::TrainerError;
use crate::notation::move_intent::MoveIntent;

pub trait RulesOracle {
    /// Validate raw position input and return its canonical form, or
    /// `TrainerError::InvalidPosition`.
    fn canonicalize(&self, raw: &str) -> Result<Position, TrainerError>;

    /// Validate a move intent against `position` and apply it, returning
    /// the concrete move and the resulting position, or
    /// `TrainerError::InvalidMove`.
    fn apply(
        &self,
        position: &Position,
        intent: &MoveIntent,
    ) -> Result<(Move, Position), TrainerError>;

    /// Terminal flags for `position` (checkmate, stalemate, draw,
    /// insufficient material).
    fn terminal_status(&self, position: &Position) -> TerminalStatus;

    /// Which side moves next in `position`.
    fn side_to_move(&self, position: &Position) -> Color;

    /// All legal moves from `position`.
    fn legal_moves(&self, position: &Position) -> Vec<Move>;
}
