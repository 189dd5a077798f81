//! Objectively best move selection.
//!
//! Picks the fastest forced win, else any drawing move, else the losing
//! move that resists longest. Deferring the lost case to the resistance
//! rule means this strategy never plays a needlessly fast loss.

use crate::catalog::catalog_types::MoveCatalog;
use crate::chess_types::Move;
use crate::strategies::ranking;
use crate::strategies::strategy_trait::SelectionStrategy;

#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectiveBestStrategy;

impl ObjectiveBestStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionStrategy for ObjectiveBestStrategy {
    fn name(&self) -> &str {
        "objective-best"
    }

    fn choose(&mut self, catalog: &MoveCatalog) -> Option<Move> {
        if !catalog.has_candidates() {
            return None;
        }
        ranking::objective_best(&catalog.candidates).map(|c| c.mv.clone())
    }
}
