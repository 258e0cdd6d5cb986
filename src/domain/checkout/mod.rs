//! Express Checkout domain module.
//!
//! Decodes the NVP responses PayPal returns from Express Checkout calls and
//! builds the URL that sends the buyer to the hosted checkout page.
//!
//! # Module Structure
//!
//! - `nvp` - Permissive name/value pair decoding
//! - `coercion` - Integer and timestamp conversions for NVP values
//! - `ack` - AckCode acknowledgement status
//! - `endpoint` - CheckoutEndpoint production/sandbox pages
//! - `response` - CheckoutResponse parsed API response

mod ack;
mod coercion;
mod endpoint;
mod nvp;
mod response;

pub use ack::AckCode;
pub use coercion::{coerce_integer, parse_timestamp};
pub use endpoint::{CheckoutEndpoint, PRODUCTION_CHECKOUT_URL, SANDBOX_CHECKOUT_URL};
pub use nvp::decode_nvp;
pub use response::CheckoutResponse;
