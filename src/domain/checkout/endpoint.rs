//! Hosted checkout page endpoints.

use serde::{Deserialize, Serialize};

/// Production checkout page, ready for a token to be appended.
pub const PRODUCTION_CHECKOUT_URL: &str =
    "https://www.paypal.com/cgi-bin/webscr?cmd=_express-checkout&token=";

/// Sandbox checkout page, ready for a token to be appended.
pub const SANDBOX_CHECKOUT_URL: &str =
    "https://www.sandbox.paypal.com/webscr?cmd=_express-checkout&token=";

/// Which PayPal environment the buyer is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutEndpoint {
    #[default]
    Production,
    Sandbox,
}

impl CheckoutEndpoint {
    /// Select the endpoint from a sandbox flag.
    pub fn from_sandbox(sandbox: bool) -> Self {
        if sandbox {
            CheckoutEndpoint::Sandbox
        } else {
            CheckoutEndpoint::Production
        }
    }

    pub fn is_sandbox(&self) -> bool {
        matches!(self, CheckoutEndpoint::Sandbox)
    }

    /// Base URL, ending in `token=`.
    pub fn base_url(&self) -> &'static str {
        match self {
            CheckoutEndpoint::Production => PRODUCTION_CHECKOUT_URL,
            CheckoutEndpoint::Sandbox => SANDBOX_CHECKOUT_URL,
        }
    }

    /// Build the checkout URL for `token`.
    ///
    /// The token is appended as-is; PayPal tokens are URL-safe (`EC-...`).
    pub fn redirect_url(&self, token: &str) -> String {
        format!("{}{}", self.base_url(), token)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutEndpoint::Production => "production",
            CheckoutEndpoint::Sandbox => "sandbox",
        }
    }
}

impl std::fmt::Display for CheckoutEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_production() {
        assert_eq!(CheckoutEndpoint::default(), CheckoutEndpoint::Production);
    }

    #[test]
    fn from_sandbox_flag() {
        assert_eq!(CheckoutEndpoint::from_sandbox(true), CheckoutEndpoint::Sandbox);
        assert_eq!(CheckoutEndpoint::from_sandbox(false), CheckoutEndpoint::Production);
    }

    #[test]
    fn base_urls_point_at_express_checkout() {
        assert_eq!(
            CheckoutEndpoint::Production.base_url(),
            "https://www.paypal.com/cgi-bin/webscr?cmd=_express-checkout&token="
        );
        assert_eq!(
            CheckoutEndpoint::Sandbox.base_url(),
            "https://www.sandbox.paypal.com/webscr?cmd=_express-checkout&token="
        );
    }

    #[test]
    fn redirect_url_appends_token() {
        assert_eq!(
            CheckoutEndpoint::Sandbox.redirect_url("EC-123"),
            "https://www.sandbox.paypal.com/webscr?cmd=_express-checkout&token=EC-123"
        );
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&CheckoutEndpoint::Sandbox).unwrap();
        assert_eq!(json, "\"sandbox\"");
    }
}
