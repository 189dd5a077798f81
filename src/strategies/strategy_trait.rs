//! Strategy abstraction for tablebase-driven move selection.
//!
//! Defines the common interface so different behavioral policies can be
//! selected at runtime behind a single trait. Strategies are pure
//! consumers of a `MoveCatalog`: they establish their own candidate order
//! and never assume the provider pre-sorted anything.

use crate::catalog::catalog_types::MoveCatalog;
use crate::chess_types::Move;

pub trait SelectionStrategy {
    fn name(&self) -> &str;

    /// Pick one move from the catalog, or `None` when the catalog is
    /// unavailable or empty. "No tablebase data" and "tablebase data says
    /// no moves" are distinguished by re-checking `catalog.available`.
    fn choose(&mut self, catalog: &MoveCatalog) -> Option<Move>;
}
