//! Single recorded half-move.

use crate::chess_types::{Move, Position};

/// One half-move: the move plus the positions immediately before and
/// after it. Immutable once created; plies are only destroyed by branch
/// truncation on a later `apply_move` or by `initialize`/`reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ply {
    pub mv: Move,
    pub position_before: Position,
    pub position_after: Position,
    pub sequence_index: usize,
}
