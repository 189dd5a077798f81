//! Core library for a chess endgame trainer.
//!
//! This crate owns the two subsystems a trainer cannot outsource: the
//! position-history engine (branching-but-linearized ply history with
//! undo/redo and snapshot events) and the tablebase-driven move-selection
//! strategies (objective best, longest resistance, human-like). Board
//! rules, the tablebase network client, and every UI or persistence
//! concern stay outside, plugged in through the `oracle` and `catalog`
//! traits.

pub mod cache {
    pub mod canonical_lru;
}

pub mod catalog {
    pub mod catalog_types;
    pub mod provider;
    pub mod session;
}

pub mod history {
    pub mod engine;
    pub mod events;
    pub mod ply;
}

pub mod notation {
    pub mod move_intent;
    pub mod normalizer;
}

pub mod oracle {
    pub mod oracle_trait;
}

pub mod strategies {
    pub mod human_like;
    pub mod longest_resistance;
    pub mod objective_best;
    pub mod ranking;
    pub mod strategy_trait;
}

pub mod chess_types;
pub mod errors;
