//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - String storage for session records
//! - `ChatResponder` - Assistant reply generation
//! - `OtpRepository` - Issued one-time passcode records

mod chat_responder;
mod key_value_store;
mod otp_repository;

pub use chat_responder::{ChatError, ChatResponder};
pub use key_value_store::{key_segments, KeyValueStore, StorageError};
pub use otp_repository::OtpRepository;
