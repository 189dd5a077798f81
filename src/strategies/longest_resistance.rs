//! Longest-resistance move selection.
//!
//! The defender's policy for lost positions: among losing candidates,
//! delay the forced loss as long as possible. Exact mate distance is the
//! dominant signal when every losing candidate carries one; otherwise the
//! whole class is ranked by zeroing distance alone. Positions that are
//! not lost fall back to the objective rules (fastest win, any draw), so
//! the strategy is safe to drive either side of a training session.

use crate::catalog::catalog_types::MoveCatalog;
use crate::chess_types::Move;
use crate::strategies::ranking;
use crate::strategies::strategy_trait::SelectionStrategy;

#[derive(Debug, Clone, Copy, Default)]
pub struct LongestResistanceStrategy;

impl LongestResistanceStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionStrategy for LongestResistanceStrategy {
    fn name(&self) -> &str {
        "longest-resistance"
    }

    fn choose(&mut self, catalog: &MoveCatalog) -> Option<Move> {
        if !catalog.has_candidates() {
            return None;
        }
        let candidates = &catalog.candidates;
        ranking::fastest_win(candidates)
            .or_else(|| ranking::first_draw(candidates))
            .or_else(|| ranking::longest_loss(candidates))
            .map(|c| c.mv.clone())
    }
}
