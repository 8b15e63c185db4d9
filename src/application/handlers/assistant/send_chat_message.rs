//! SendChatMessageHandler - Command handler for chat messages.
//!
//! Each signed-in session keeps a bounded transcript in memory; anonymous
//! messages are answered without history. The number of live conversations
//! is capped and the least recently used one is evicted first.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::assistant::{ChatMessage, ChatTranscript};
use crate::domain::foundation::{DomainError, SessionId};
use crate::ports::ChatResponder;

/// Conversations kept in memory before eviction starts.
pub const DEFAULT_MAX_CONVERSATIONS: usize = 10_000;

/// Command to send a chat message.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub session_id: Option<SessionId>,
    pub message: String,
}

/// The user's message and the assistant's reply.
#[derive(Debug, Clone)]
pub struct SendChatMessageResult {
    pub user_message: ChatMessage,
    pub reply: ChatMessage,
}

struct Conversation {
    /// Identifies this conversation; a forgotten and restarted session gets a new one.
    epoch: u64,
    last_used: u64,
    transcript: ChatTranscript,
}

#[derive(Default)]
struct Conversations {
    clock: u64,
    by_session: HashMap<SessionId, Conversation>,
}

impl Conversations {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

pub struct SendChatMessageHandler {
    responder: Arc<dyn ChatResponder>,
    conversations: Mutex<Conversations>,
    max_history: usize,
    max_conversations: usize,
}

impl SendChatMessageHandler {
    pub fn new(responder: Arc<dyn ChatResponder>, max_history: usize) -> Self {
        Self {
            responder,
            conversations: Mutex::new(Conversations::default()),
            max_history,
            max_conversations: DEFAULT_MAX_CONVERSATIONS,
        }
    }

    pub fn with_max_conversations(mut self, max_conversations: usize) -> Self {
        self.max_conversations = max_conversations.max(1);
        self
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if the message is blank
    /// - `AssistantUnavailable` if the responder fails
    pub async fn handle(
        &self,
        cmd: SendChatMessageCommand,
    ) -> Result<SendChatMessageResult, DomainError> {
        let user_message = ChatMessage::user(cmd.message)?;

        let (history, epoch) = match cmd.session_id {
            Some(id) => {
                let (history, epoch) = self.open(id).await;
                (history, Some(epoch))
            }
            None => (ChatTranscript::with_capacity(0), None),
        };

        let text = self
            .responder
            .reply(&history, user_message.content())
            .await
            .map_err(|e| {
                tracing::error!("chat responder failed: {}", e);
                e
            })?;
        let reply = ChatMessage::assistant(text)?;

        if let (Some(id), Some(epoch)) = (cmd.session_id, epoch) {
            let mut conversations = self.conversations.lock().await;
            match conversations.by_session.get_mut(&id) {
                Some(conversation) if conversation.epoch == epoch => {
                    conversation.transcript.push(user_message.clone());
                    conversation.transcript.push(reply.clone());
                }
                _ => {
                    tracing::debug!(session_id = %id, "conversation ended before reply; exchange not recorded");
                }
            }
        }

        Ok(SendChatMessageResult {
            user_message,
            reply,
        })
    }

    /// Returns the history snapshot and epoch, starting a conversation if needed.
    async fn open(&self, session_id: SessionId) -> (ChatTranscript, u64) {
        let mut conversations = self.conversations.lock().await;
        let now = conversations.tick();

        if let Some(conversation) = conversations.by_session.get_mut(&session_id) {
            conversation.last_used = now;
            return (conversation.transcript.clone(), conversation.epoch);
        }

        if conversations.by_session.len() >= self.max_conversations {
            let stalest = conversations
                .by_session
                .iter()
                .min_by_key(|(_, c)| c.last_used)
                .map(|(id, _)| *id);
            if let Some(stalest) = stalest {
                conversations.by_session.remove(&stalest);
                tracing::debug!(session_id = %stalest, "evicted idle conversation");
            }
        }

        let transcript = ChatTranscript::with_capacity(self.max_history);
        conversations.by_session.insert(
            session_id,
            Conversation {
                epoch: now,
                last_used: now,
                transcript: transcript.clone(),
            },
        );
        (transcript, now)
    }

    /// Current history for a session (empty if it has not chatted).
    pub async fn transcript(&self, session_id: SessionId) -> ChatTranscript {
        self.conversations
            .lock()
            .await
            .by_session
            .get(&session_id)
            .map(|c| c.transcript.clone())
            .unwrap_or_else(|| ChatTranscript::with_capacity(self.max_history))
    }

    /// Drops a session's history. Replies still in flight are not recorded.
    pub async fn forget(&self, session_id: SessionId) {
        self.conversations.lock().await.by_session.remove(&session_id);
    }
}
