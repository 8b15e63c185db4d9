//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `router` assembles them.

pub mod assessment;
pub mod chat;
pub mod dashboard;
pub mod error;
pub mod middleware;
pub mod otp;
pub mod router;
pub mod session;

pub use error::{handle_domain_error, ErrorResponse};
pub use router::{api_router, with_server_layers, ApiServices};
