//! Move-catalog provider contract.
//!
//! The network client that queries the tablebase lives outside this crate;
//! only its return shape is pinned down here. Coverage gaps must surface
//! as `MoveCatalog::unavailable()`, never as a failure: timeouts and retry
//! policy are the provider's own concern.

use crate::catalog::catalog_types::MoveCatalog;
use crate::chess_types::Position;

pub trait MoveCatalogProvider {
    /// Fetch the catalog for `position`. Positions beyond the provider's
    /// piece-count bound report `available: false`.
    fn fetch(&mut self, position: &Position) -> MoveCatalog;
}
