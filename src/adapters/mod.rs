//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Key-value stores (in-memory, JSON files)
//! - `assistant` - Chat responders
//! - `otp` - Passcode record storage
//! - `http` - REST API

pub mod assistant;
pub mod http;
pub mod otp;
pub mod storage;

pub use assistant::CannedResponder;
pub use otp::InMemoryOtpRepository;
pub use storage::{InMemoryKeyValueStore, JsonFileKeyValueStore};
