//! Assistant module - Chat messages and the canned financial assistant.

mod canned;
mod message;

pub use canned::{CannedAssistant, FALLBACK, WELCOME};
pub use message::{ChatMessage, ChatTranscript, Role};
