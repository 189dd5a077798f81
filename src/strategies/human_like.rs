//! Human-like imperfect move selection.
//!
//! With probability `strength` the strategy plays the objectively best
//! candidate; otherwise it picks uniformly among the top few candidates of
//! the best-first order it establishes itself. `strength = 1` is
//! deterministic best play, `strength = 0` is uniform over the window.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::catalog_types::MoveCatalog;
use crate::chess_types::Move;
use crate::strategies::ranking;
use crate::strategies::strategy_trait::SelectionStrategy;

/// Default size of the imperfect-pick window. Tunable per instance.
pub const DEFAULT_TOP_WINDOW: usize = 3;

pub struct HumanLikeStrategy<R: Rng = StdRng> {
    strength: f64,
    top_window: usize,
    rng: R,
}

impl HumanLikeStrategy<StdRng> {
    /// OS-seeded strategy with the default window.
    pub fn new(strength: f64) -> Self {
        Self::with_rng(strength, StdRng::from_os_rng())
    }
}

impl<R: Rng> HumanLikeStrategy<R> {
    /// Build with a caller-supplied RNG (tests seed a `StdRng`).
    pub fn with_rng(strength: f64, rng: R) -> Self {
        Self {
            strength: strength.clamp(0.0, 1.0),
            top_window: DEFAULT_TOP_WINDOW,
            rng,
        }
    }

    pub fn with_top_window(mut self, top_window: usize) -> Self {
        self.top_window = top_window.max(1);
        self
    }

    #[inline]
    pub fn strength(&self) -> f64 {
        self.strength
    }
}

impl<R: Rng> SelectionStrategy for HumanLikeStrategy<R> {
    fn name(&self) -> &str {
        "human-like"
    }

    fn choose(&mut self, catalog: &MoveCatalog) -> Option<Move> {
        if !catalog.has_candidates() {
            return None;
        }

        let ordered = ranking::best_first_order(&catalog.candidates);
        if self.rng.random_bool(self.strength) {
            return ordered.first().map(|c| c.mv.clone());
        }

        let window = &ordered[..ordered.len().min(self.top_window)];
        window.choose(&mut self.rng).map(|c| c.mv.clone())
    }
}
