//! newsdesk
//!
//! Terminal news browser: top headlines, category feeds, article pages and a
//! debounced full-text search whose term is mirrored in the current location.
//!
//! The state machine in [`state`] is pure and synchronous; [`view`] is the
//! impure shell that owns the terminal and the fetch worker channel.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
