//! Assistant adapters - `ChatResponder` implementations.

mod canned_responder;

pub use canned_responder::CannedResponder;
