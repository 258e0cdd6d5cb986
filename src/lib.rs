//! PayPal Express Checkout response adapter
//!
//! Decodes the NVP bodies returned by Express Checkout API calls into a
//! queryable response and sends buyers on to PayPal's hosted checkout page.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
