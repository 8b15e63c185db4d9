//! Chat responder port - Produces assistant replies.
//!
//! The canned keyword assistant is the shipped implementation; a remote
//! language-model responder can be plugged in behind the same trait.

use async_trait::async_trait;

use crate::domain::assistant::ChatTranscript;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while producing a reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("Assistant unavailable: {0}")]
    Unavailable(String),
}

impl From<ChatError> for DomainError {
    fn from(err: ChatError) -> Self {
        DomainError::new(ErrorCode::AssistantUnavailable, err.to_string())
    }
}

/// Port for generating a reply to the latest user input.
#[async_trait]
pub trait ChatResponder: Send + Sync {
    /// Reply to `input` given the prior conversation.
    ///
    /// `history` holds earlier messages only; `input` is not yet in it.
    async fn reply(&self, history: &ChatTranscript, input: &str) -> Result<String, ChatError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_responder_is_object_safe() {
        fn _accepts_dyn(_responder: &dyn ChatResponder) {}
    }

    #[test]
    fn chat_error_maps_to_assistant_unavailable() {
        let err: DomainError = ChatError::Unavailable("timeout".to_string()).into();
        assert_eq!(err.code(), ErrorCode::AssistantUnavailable);
    }
}
