//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RedirectResponder` - Hands the client over to another location

mod redirect_responder;

pub use redirect_responder::{RedirectError, RedirectResponder};
