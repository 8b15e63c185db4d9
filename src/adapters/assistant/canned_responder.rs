//! Canned chat responder.
//!
//! Implements the `ChatResponder` port with the keyword-matching
//! `CannedAssistant`. History is ignored; every reply depends only on the
//! latest input.

use async_trait::async_trait;

use crate::domain::assistant::{CannedAssistant, ChatTranscript};
use crate::ports::{ChatError, ChatResponder};

#[derive(Debug, Clone, Copy, Default)]
pub struct CannedResponder {
    assistant: CannedAssistant,
}

impl CannedResponder {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatResponder for CannedResponder {
    async fn reply(&self, _history: &ChatTranscript, input: &str) -> Result<String, ChatError> {
        Ok(self.assistant.reply(input).to_string())
    }
}
