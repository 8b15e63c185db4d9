//! Chat assistant handlers.

mod send_chat_message;

pub use send_chat_message::{
    SendChatMessageCommand, SendChatMessageHandler, SendChatMessageResult,
    DEFAULT_MAX_CONVERSATIONS,
};
