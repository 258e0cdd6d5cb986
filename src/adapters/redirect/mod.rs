//! Redirect adapters.
//!
//! Implements the `RedirectResponder` port:
//! - `HttpRedirect` - turns the redirect into a `302 Found` axum response
//! - `RecordingRedirect` - in-memory responder for tests

mod http_redirect;
mod recording_redirect;

pub use http_redirect::{checkout_redirect, HttpRedirect};
pub use recording_redirect::RecordingRedirect;
