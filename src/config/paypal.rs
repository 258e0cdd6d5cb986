//! PayPal configuration

use serde::Deserialize;

use crate::domain::checkout::{CheckoutEndpoint, CheckoutResponse};

/// PayPal Express Checkout configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaypalConfig {
    /// Send buyers to the sandbox checkout page
    #[serde(default)]
    pub sandbox: bool,
}

impl PaypalConfig {
    /// Checkout endpoint selected by the sandbox flag
    pub fn endpoint(&self) -> CheckoutEndpoint {
        CheckoutEndpoint::from_sandbox(self.sandbox)
    }

    /// Decode a transport result with the configured sandbox flag applied
    ///
    /// `None` marks a call that produced no body.
    pub fn response(&self, raw: Option<&str>) -> CheckoutResponse {
        let mut response = CheckoutResponse::from_result(raw);
        response.set_sandbox(self.sandbox);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_production() {
        let config = PaypalConfig::default();
        assert!(!config.sandbox);
        assert_eq!(config.endpoint(), CheckoutEndpoint::Production);
    }

    #[test]
    fn test_sandbox_endpoint() {
        let config = PaypalConfig { sandbox: true };
        assert_eq!(config.endpoint(), CheckoutEndpoint::Sandbox);
    }

    #[test]
    fn test_response_applies_sandbox() {
        let config = PaypalConfig { sandbox: true };
        let response = config.response(Some("ACK=Success&TOKEN=EC-123"));

        assert!(response.is_sandbox());
        assert!(response.redirect_url().starts_with("https://www.sandbox.paypal.com/"));
    }

    #[test]
    fn test_response_without_body_is_absent() {
        let config = PaypalConfig::default();
        let response = config.response(None);

        assert!(response.is_absent());
        assert!(response.is_failure());
    }

    #[test]
    fn test_deserialization() {
        let config: PaypalConfig = serde_json::from_str(r#"{ "sandbox": true }"#).unwrap();
        assert!(config.sandbox);

        let config: PaypalConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.sandbox);
    }
}
