//! HTTP redirect adapter.
//!
//! Implements the `RedirectResponder` port for Axum handlers. The handler
//! authorizes the redirect, then returns the adapter as its response:
//!
//! ```ignore
//! async fn start_checkout(State(state): State<AppState>) -> Response {
//!     let response = state.paypal.response(state.gateway.set_express_checkout().await);
//!     match checkout_redirect(&response) {
//!         Ok(redirect) => redirect,
//!         Err(err) => err.into_response(),
//!     }
//! }
//! ```

use axum::response::{IntoResponse, Response};
use http::header::{HeaderValue, LOCATION};
use http::StatusCode;

use crate::domain::checkout::CheckoutResponse;
use crate::ports::{RedirectError, RedirectResponder};

/// Redirect responder producing a `302 Found` response.
///
/// Accepts a single redirect; the location must be a valid header value.
#[derive(Debug, Default)]
pub struct HttpRedirect {
    location: Option<HeaderValue>,
}

impl HttpRedirect {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded location, if a redirect was issued.
    pub fn location(&self) -> Option<&str> {
        self.location.as_ref().and_then(|value| value.to_str().ok())
    }

    pub fn is_redirected(&self) -> bool {
        self.location.is_some()
    }
}

impl RedirectResponder for HttpRedirect {
    fn redirect(&mut self, location: &str) -> Result<(), RedirectError> {
        if let Some(existing) = &self.location {
            return Err(RedirectError::AlreadyRedirected {
                location: String::from_utf8_lossy(existing.as_bytes()).into_owned(),
            });
        }

        let value = HeaderValue::from_str(location).map_err(|e| {
            tracing::warn!(error = %e, "Rejected redirect location");
            RedirectError::invalid_location(location, e.to_string())
        })?;

        self.location = Some(value);
        Ok(())
    }
}

impl IntoResponse for HttpRedirect {
    fn into_response(self) -> Response {
        match self.location {
            Some(location) => (StatusCode::FOUND, [(LOCATION, location)]).into_response(),
            None => {
                tracing::error!("Redirect response requested but no redirect was issued");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl IntoResponse for RedirectError {
    fn into_response(self) -> Response {
        let status = match self {
            RedirectError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

/// Authorize `response` and build the redirect the handler should return.
pub fn checkout_redirect(response: &CheckoutResponse) -> Result<Response, RedirectError> {
    let mut redirect = HttpRedirect::new();
    response.authorize_redirect(&mut redirect)?;
    Ok(redirect.into_response())
}
