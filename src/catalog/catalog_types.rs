//! Move-catalog data shapes.
//!
//! A catalog is the set of candidate moves for one position, each
//! annotated with perfect-play facts from the tablebase: outcome class and
//! the two distance metrics. The metrics stay independently nullable on
//! the same record; they are never collapsed into one score because the
//! longest-resistance rule must not compare a DTM-based rank against a
//! DTZ-based rank across candidates.

use crate::chess_types::Move;

/// Win/Draw/Loss classification from the perspective of the side to move
/// in the queried position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeClass {
    Win,
    Draw,
    Loss,
}

/// One candidate move with its perfect-play annotations.
///
/// `dtm` (exact distance to mate) is only populated for small piece
/// counts; `dtz` (distance to the next capture/pawn-move zeroing event) is
/// populated whenever the catalog is available at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMove {
    pub mv: Move,
    pub outcome: OutcomeClass,
    pub dtz: Option<i32>,
    pub dtm: Option<i32>,
}

/// Catalog response for one position.
///
/// `available == false` means the position is outside the provider's
/// coverage (typically too many pieces); that is a data flag, never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCatalog {
    pub available: bool,
    pub candidates: Vec<CandidateMove>,
}

impl MoveCatalog {
    pub fn new(candidates: Vec<CandidateMove>) -> Self {
        Self {
            available: true,
            candidates,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            candidates: Vec::new(),
        }
    }

    /// True when the catalog can actually feed a selection strategy.
    #[inline]
    pub fn has_candidates(&self) -> bool {
        self.available && !self.candidates.is_empty()
    }
}
