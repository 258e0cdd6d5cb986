//! Redirect port for handing the buyer over to PayPal.
//!
//! The hosting framework supplies the implementation. Issuing a redirect ends
//! the handling of the current request: the caller returns whatever the
//! responder produced instead of rendering its own response.

use thiserror::Error;

/// Port for sending the current client to another location.
pub trait RedirectResponder {
    /// Redirect the current client to `location`.
    ///
    /// A responder accepts at most one redirect per request.
    fn redirect(&mut self, location: &str) -> Result<(), RedirectError>;
}

/// Errors raised while issuing a redirect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedirectError {
    #[error("Redirect already issued to {location}")]
    AlreadyRedirected { location: String },

    #[error("Invalid redirect location '{location}': {reason}")]
    InvalidLocation { location: String, reason: String },

    #[error("Redirect unavailable: {0}")]
    Unavailable(String),
}

impl RedirectError {
    /// Create an invalid location error.
    pub fn invalid_location(location: impl Into<String>, reason: impl Into<String>) -> Self {
        RedirectError::InvalidLocation {
            location: location.into(),
            reason: reason.into(),
        }
    }
}
