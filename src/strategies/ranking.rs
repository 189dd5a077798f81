//! Shared ranking primitives over catalog candidates.
//!
//! Both named strategies are built from the same three class rules, so the
//! rules live here once: fastest forced win, first drawing candidate in
//! catalog order, and longest resistance among losing candidates. The
//! loss rule is all-or-nothing about DTM: candidates are ranked by mate
//! distance only when every losing candidate carries one, otherwise the
//! whole class falls back to zeroing distance. DTM-based and DTZ-based
//! ranks are never mixed inside one decision.

use std::cmp::Reverse;

use crate::catalog::catalog_types::{CandidateMove, OutcomeClass};

/// Minimal-DTZ candidate among the Win class, if any.
pub fn fastest_win(candidates: &[CandidateMove]) -> Option<&CandidateMove> {
    candidates
        .iter()
        .filter(|c| c.outcome == OutcomeClass::Win)
        .min_by_key(|c| c.dtz.unwrap_or(i32::MAX))
}

/// First Draw-class candidate in catalog order, if any. Any drawing move
/// is as good as any other.
pub fn first_draw(candidates: &[CandidateMove]) -> Option<&CandidateMove> {
    candidates
        .iter()
        .find(|c| c.outcome == OutcomeClass::Draw)
}

/// Loss-class candidate that delays the loss longest, if any.
pub fn longest_loss(candidates: &[CandidateMove]) -> Option<&CandidateMove> {
    let losses: Vec<&CandidateMove> = candidates
        .iter()
        .filter(|c| c.outcome == OutcomeClass::Loss)
        .collect();

    if losses.iter().all(|c| c.dtm.is_some()) {
        // Exact mate distance dominates; zeroing distance breaks ties.
        losses
            .iter()
            .copied()
            .min_by_key(|c| Reverse((dtm_magnitude(c), dtz_magnitude(c))))
    } else {
        losses.iter().copied().min_by_key(|c| Reverse(dtz_magnitude(c)))
    }
}

/// The objectively best candidate: fastest win, else any draw, else the
/// longest resistance. Equals the head of `best_first_order`.
pub fn objective_best(candidates: &[CandidateMove]) -> Option<&CandidateMove> {
    fastest_win(candidates)
        .or_else(|| first_draw(candidates))
        .or_else(|| longest_loss(candidates))
}

/// Full best-first ordering of the catalog: wins by ascending DTZ, then
/// draws in catalog order, then losses by descending resistance.
pub fn best_first_order(candidates: &[CandidateMove]) -> Vec<&CandidateMove> {
    let mut wins: Vec<&CandidateMove> = candidates
        .iter()
        .filter(|c| c.outcome == OutcomeClass::Win)
        .collect();
    wins.sort_by_key(|c| c.dtz.unwrap_or(i32::MAX));

    let draws = candidates
        .iter()
        .filter(|c| c.outcome == OutcomeClass::Draw);

    let mut losses: Vec<&CandidateMove> = candidates
        .iter()
        .filter(|c| c.outcome == OutcomeClass::Loss)
        .collect();
    if losses.iter().all(|c| c.dtm.is_some()) {
        losses.sort_by_key(|c| Reverse((dtm_magnitude(c), dtz_magnitude(c))));
    } else {
        losses.sort_by_key(|c| Reverse(dtz_magnitude(c)));
    }

    wins.into_iter().chain(draws).chain(losses).collect()
}

fn dtm_magnitude(candidate: &CandidateMove) -> u32 {
    candidate.dtm.map_or(0, i32::unsigned_abs)
}

fn dtz_magnitude(candidate: &CandidateMove) -> u32 {
    candidate.dtz.map_or(0, i32::unsigned_abs)
}
