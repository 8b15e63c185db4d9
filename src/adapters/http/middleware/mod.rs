//! HTTP middleware for axum.
//!
//! - `session` - Bearer session resolution and extractors

pub mod session;

pub use session::{
    session_middleware, OptionalSession, RequireSession, SessionRejection, SessionState,
};
