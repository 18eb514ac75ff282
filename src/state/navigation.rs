//! Location history.
//!
//! Navigating pushes an entry, search commits replace the current one, and going
//! back pops. Never empty.

use crate::model::Route;
use tracing::debug;

/// Visited locations, oldest first; the last entry is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<Route>,
}

impl History {
    /// History holding only `start`.
    pub fn new(start: Route) -> Self {
        Self {
            entries: vec![start],
        }
    }

    /// The current location.
    pub fn current(&self) -> &Route {
        // `entries` is never empty: `back` refuses to pop the last entry.
        &self.entries[self.entries.len() - 1]
    }

    /// Number of entries, current included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there is an entry before the current one.
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Make `route` current, keeping the old one to go back to.
    pub fn push(&mut self, route: Route) {
        debug!(location = %route, "push");
        self.entries.push(route);
    }

    /// Swap the current entry without adding one.
    pub fn replace(&mut self, route: Route) {
        debug!(location = %route, "replace");
        if let Some(last) = self.entries.last_mut() {
            *last = route;
        }
    }

    /// Pop the current entry, returning the one now current. `None` at the start.
    pub fn back(&mut self) -> Option<&Route> {
        if !self.can_go_back() {
            return None;
        }
        self.entries.pop();
        Some(self.current())
    }
}
