//! Parsed Express Checkout API response.

use std::collections::HashMap;

use crate::ports::{RedirectError, RedirectResponder};

use super::ack::AckCode;
use super::coercion::{coerce_integer, parse_timestamp};
use super::endpoint::CheckoutEndpoint;
use super::nvp::{decode_nvp, normalize_name};

/// Decoded response of a single Express Checkout API call.
///
/// Built once from the raw NVP body returned by the transport, or marked
/// absent when the transport reported failure instead of a body. Parameter
/// names are case-insensitive.
///
/// # Example
///
/// ```
/// use paypal_express_checkout::domain::checkout::CheckoutResponse;
///
/// let mut response = CheckoutResponse::new("ACK=Success&TOKEN=EC-123");
/// response.set_sandbox(true);
///
/// assert!(response.is_success());
/// assert_eq!(response.parameter("token"), Some("EC-123"));
/// assert_eq!(
///     response.redirect_url(),
///     "https://www.sandbox.paypal.com/webscr?cmd=_express-checkout&token=EC-123"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutResponse {
    raw: Option<String>,
    parameters: HashMap<String, String>,
    endpoint: CheckoutEndpoint,
}

impl CheckoutResponse {
    /// Decode a raw NVP body.
    pub fn new(raw: impl Into<String>) -> Self {
        let mut response = Self::absent();
        response.set_response(raw);
        response
    }

    /// A response for a call that produced no body at all.
    ///
    /// Every status query on it reports failure.
    pub fn absent() -> Self {
        Self {
            raw: None,
            parameters: HashMap::new(),
            endpoint: CheckoutEndpoint::default(),
        }
    }

    /// Build from a transport result where `None` marks a failed call.
    pub fn from_result(result: Option<&str>) -> Self {
        result.map_or_else(Self::absent, Self::new)
    }

    /// Replace the raw body and decode it again.
    ///
    /// The sandbox setting is kept.
    pub fn set_response(&mut self, raw: impl Into<String>) -> &mut Self {
        let raw = raw.into();
        self.parameters = decode_nvp(&raw);
        self.raw = Some(raw);

        tracing::debug!(
            parameter_count = self.parameters.len(),
            sandbox = self.is_sandbox(),
            "Decoded express checkout response"
        );

        self
    }

    /// Choose between the sandbox and production checkout pages.
    pub fn set_sandbox(&mut self, sandbox: bool) -> &mut Self {
        self.endpoint = CheckoutEndpoint::from_sandbox(sandbox);
        self
    }

    pub fn is_sandbox(&self) -> bool {
        self.endpoint.is_sandbox()
    }

    pub fn endpoint(&self) -> CheckoutEndpoint {
        self.endpoint
    }

    /// The body this response was decoded from, `None` when absent.
    pub fn raw_response(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// True when the transport produced no body.
    pub fn is_absent(&self) -> bool {
        self.raw.is_none()
    }

    /// Look up a parameter by name, ignoring case.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(&normalize_name(name)).map(String::as_str)
    }

    /// All decoded parameters, keyed by uppercase name.
    pub fn parameters(&self) -> &HashMap<String, String> {
        &self.parameters
    }

    /// True when `ACK` mentions `Success`. Covers `SuccessWithWarning`.
    pub fn is_success(&self) -> bool {
        if self.is_absent() {
            tracing::warn!("Success check on an absent express checkout response");
            return false;
        }

        self.ack().is_some_and(|ack| ack.contains("Success"))
    }

    /// True when the response is absent or `ACK` mentions `Failure`.
    ///
    /// Not the complement of [`is_success`](Self::is_success): a present
    /// response without `ACK` is neither.
    pub fn is_failure(&self) -> bool {
        if self.is_absent() {
            tracing::warn!("Failure check on an absent express checkout response");
            return true;
        }

        self.ack().is_some_and(|ack| ack.contains("Failure"))
    }

    /// Raw `ACK` value.
    pub fn ack(&self) -> Option<&str> {
        self.parameter("ACK")
    }

    /// `ACK` as a typed code.
    pub fn ack_code(&self) -> Option<AckCode> {
        self.ack().map(AckCode::from)
    }

    /// `CORRELATIONID`, PayPal's identifier for the call.
    pub fn correlation_id(&self) -> Option<&str> {
        self.parameter("CORRELATIONID")
    }

    pub fn token(&self) -> Option<&str> {
        self.parameter("TOKEN")
    }

    /// API version echoed back, coerced to an integer (non-numeric is 0).
    pub fn version(&self) -> Option<i64> {
        self.parameter("VERSION").map(coerce_integer)
    }

    /// API build number, coerced the same way as [`version`](Self::version).
    pub fn build(&self) -> Option<i64> {
        self.parameter("BUILD").map(coerce_integer)
    }

    /// `TIMESTAMP` as Unix seconds.
    ///
    /// `None` when the field is missing or cannot be read as a date.
    pub fn timestamp(&self) -> Option<i64> {
        let value = self.parameter("TIMESTAMP")?;
        let parsed = parse_timestamp(value);

        if parsed.is_none() {
            tracing::warn!(timestamp = %value, "Unparsable express checkout timestamp");
        }

        parsed
    }

    /// Base URL of the checkout page for the current sandbox setting.
    pub fn checkout_endpoint(&self) -> &'static str {
        self.endpoint.base_url()
    }

    /// Checkout page URL for this response's token.
    ///
    /// A missing `TOKEN` contributes an empty string, leaving the URL
    /// ending in `token=`.
    pub fn redirect_url(&self) -> String {
        self.endpoint.redirect_url(self.token().unwrap_or_default())
    }

    /// Send the buyer to the checkout page through `responder`.
    ///
    /// Once this returns `Ok`, the caller must stop handling the request and
    /// hand back what the responder produced.
    pub fn authorize_redirect<R>(&self, responder: &mut R) -> Result<(), RedirectError>
    where
        R: RedirectResponder + ?Sized,
    {
        tracing::info!(
            endpoint = %self.endpoint,
            has_token = self.token().is_some(),
            "Redirecting buyer to express checkout"
        );

        responder.redirect(&self.redirect_url())
    }
}

impl Default for CheckoutResponse {
    /// An empty, but present, response.
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl From<&str> for CheckoutResponse {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for CheckoutResponse {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
