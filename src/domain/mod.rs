//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `checkout` - Express Checkout response decoding and redirect URLs
pub mod checkout;
