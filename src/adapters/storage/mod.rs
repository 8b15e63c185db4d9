//! Storage Adapters
//!
//! Implementations of the `KeyValueStore` port.
//!
//! - **JsonFileKeyValueStore** - One JSON file per key under a base directory
//! - **InMemoryKeyValueStore** - Process-local map (testing/development)

mod in_memory_key_value_store;
mod json_file_key_value_store;

pub use in_memory_key_value_store::InMemoryKeyValueStore;
pub use json_file_key_value_store::JsonFileKeyValueStore;
