//! Stale-response guard for in-flight catalog requests.
//!
//! Catalog fetches are the one asynchronous edge of this core, and network
//! responses may resolve out of order. The session enforces the required
//! policy: at most one in-flight request per logical context, and a
//! response is applied only when its ticket is still the newest *and* was
//! issued for the position that is current at resolution time. Everything
//! else is discarded silently; a discarded response is not an error, it
//! simply yields no decision.

use log::debug;

use crate::catalog::catalog_types::MoveCatalog;
use crate::chess_types::Position;

/// Handle for one outstanding catalog request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogTicket {
    token: u64,
    position: Position,
}

impl CatalogTicket {
    /// The position the request was issued for.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }
}

/// Tracks the newest catalog request via a monotonically increasing token.
#[derive(Debug, Default)]
pub struct CatalogSession {
    next_token: u64,
    active: Option<u64>,
}

impl CatalogSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new request, superseding any outstanding one.
    pub fn begin(&mut self, position: &Position) -> CatalogTicket {
        self.next_token += 1;
        self.active = Some(self.next_token);
        CatalogTicket {
            token: self.next_token,
            position: position.clone(),
        }
    }

    /// Resolve a response. Returns the catalog only when `ticket` is still
    /// the newest request and `current_position` (the position current at
    /// resolution time, not arrival order) matches the one the ticket was
    /// issued for. Superseded or mismatched responses are dropped.
    pub fn accept(
        &mut self,
        ticket: &CatalogTicket,
        current_position: &Position,
        catalog: MoveCatalog,
    ) -> Option<MoveCatalog> {
        if self.active != Some(ticket.token) {
            debug!("discarding superseded catalog response for {}", ticket.position);
            return None;
        }
        if ticket.position != *current_position {
            debug!(
                "discarding catalog response for {}; current position is {current_position}",
                ticket.position
            );
            self.active = None;
            return None;
        }
        self.active = None;
        Some(catalog)
    }

    /// Drop any outstanding request (for example when the user navigates).
    pub fn invalidate(&mut self) {
        self.active = None;
    }

    #[inline]
    pub fn has_outstanding(&self) -> bool {
        self.active.is_some()
    }
}
