//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `redirect` - Redirect responders (Axum HTTP, in-memory recording)

pub mod redirect;

pub use redirect::{checkout_redirect, HttpRedirect, RecordingRedirect};
