//! Recording redirect responder for testing.
//!
//! Keeps every location it is asked to redirect to and can be told to fail
//! the next redirect.
//!
//! ```ignore
//! let mut responder = RecordingRedirect::new();
//! response.authorize_redirect(&mut responder)?;
//! assert_eq!(responder.last_location(), Some(response.redirect_url().as_str()));
//! ```

use crate::ports::{RedirectError, RedirectResponder};

#[derive(Debug, Default)]
pub struct RecordingRedirect {
    /// Locations redirected to, in order.
    locations: Vec<String>,

    /// Error to return on the next call.
    next_error: Option<RedirectError>,
}

impl RecordingRedirect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next redirect with `error`.
    pub fn fail_with(&mut self, error: RedirectError) {
        self.next_error = Some(error);
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn last_location(&self) -> Option<&str> {
        self.locations.last().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.locations.clear();
        self.next_error = None;
    }
}

impl RedirectResponder for RecordingRedirect {
    fn redirect(&mut self, location: &str) -> Result<(), RedirectError> {
        if let Some(error) = self.next_error.take() {
            return Err(error);
        }

        self.locations.push(location.to_string());
        Ok(())
    }
}
