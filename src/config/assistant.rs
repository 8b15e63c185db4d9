//! Chat assistant configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::handlers::assistant::DEFAULT_MAX_CONVERSATIONS;

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Messages kept per session transcript
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Session transcripts kept in memory; the least recently used is evicted
    #[serde(default = "default_max_conversations")]
    pub max_conversations: usize,
}

impl AssistantConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_history > 1000 {
            return Err(ValidationError::InvalidChatHistory(self.max_history));
        }
        if self.max_conversations == 0 {
            return Err(ValidationError::MissingRequired("assistant.max_conversations"));
        }
        Ok(())
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            max_history: default_max_history(),
            max_conversations: default_max_conversations(),
        }
    }
}

fn default_max_history() -> usize {
    50
}

fn default_max_conversations() -> usize {
    DEFAULT_MAX_CONVERSATIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AssistantConfig::default();
        assert_eq!(config.max_history, 50);
        assert_eq!(config.max_conversations, DEFAULT_MAX_CONVERSATIONS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_conversation_limit_is_rejected() {
        let config = AssistantConfig {
            max_conversations: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("assistant.max_conversations"))
        );
    }
}
