//! Chat sessions for the two conversational screens.
//!
//! Both variants keep an append-only [`MessageLog`](log::MessageLog) seeded
//! with a greeting, append user messages synchronously, and schedule one
//! scripted reply per exchange through the shared
//! [`ReplyScheduler`](crate::reply::ReplyScheduler). Dropping a session
//! cancels its outstanding replies.

pub mod chatbot;
pub mod expert;
pub mod input;
pub mod log;

use mindcare_types::error::ChatError;
use mindcare_types::message::{Message, MessageId};
use uuid::Uuid;

use crate::reply::PendingReply;

/// Behaviour common to the chatbot and the expert chat.
pub trait Conversation {
    /// Session identity, used to route fired replies.
    fn id(&self) -> Uuid;

    /// Messages in insertion order.
    fn messages(&self) -> &[Message];

    /// Append free text and schedule the reply.
    ///
    /// Whitespace-only text is rejected with [`ChatError::EmptyInput`];
    /// nothing is appended and nothing is scheduled.
    fn send_text(&mut self, text: &str) -> Result<MessageId, ChatError>;

    /// Apply a reply whose delay has elapsed.
    ///
    /// Returns the id of the appended message, or `None` if the reply belongs
    /// to a different session.
    fn deliver(&mut self, reply: PendingReply) -> Option<MessageId>;

    /// Number of scheduled replies that have not landed yet.
    fn pending_replies(&self) -> usize;
}

/// Shared empty-input guard.
fn ensure_sendable(text: &str) -> Result<(), ChatError> {
    if text.trim().is_empty() {
        return Err(ChatError::EmptyInput);
    }
    Ok(())
}
