//! Append-only message log.

use chrono::Utc;
use mindcare_types::message::{Message, MessageId, Sender};

/// Ordered, append-only list of messages with a dedicated id counter.
///
/// Ids come from `next_id` at the moment of the append, so replies that land
/// out of trigger order still receive unique, increasing ids.
#[derive(Debug, Clone)]
pub struct MessageLog {
    messages: Vec<Message>,
    next_id: u64,
}

impl MessageLog {
    /// Create an empty log. The first appended message gets id 1.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a message stamped with the current time and return its id.
    pub fn push(
        &mut self,
        text: impl Into<String>,
        sender: Sender,
        reply_to: Option<MessageId>,
    ) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(Message {
            id,
            text: text.into(),
            sender,
            timestamp: Utc::now(),
            reply_to,
        });
        id
    }

    /// All messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Find a message by id.
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        // Ids are increasing, so the slice is sorted by id.
        self.messages
            .binary_search_by_key(&id, |m| m.id)
            .ok()
            .map(|idx| &self.messages[idx])
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_is_empty() {
        let log = MessageLog::new();
        assert!(log.is_empty());
        assert!(log.last().is_none());
    }

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut log = MessageLog::new();
        let a = log.push("one", Sender::Bot, None);
        let b = log.push("two", Sender::User, None);
        let c = log.push("three", Sender::Bot, Some(b));
        assert_eq!(a, MessageId(1));
        assert_eq!(b, MessageId(2));
        assert_eq!(c, MessageId(3));
        assert_eq!(log.len(), 3);
        assert_eq!(log.last().unwrap().reply_to, Some(b));
    }

    #[test]
    fn test_get_by_id() {
        let mut log = MessageLog::new();
        log.push("greeting", Sender::Expert, None);
        let id = log.push("question", Sender::User, None);
        assert_eq!(log.get(id).unwrap().text, "question");
        assert!(log.get(MessageId(99)).is_none());
    }

    #[test]
    fn test_text_is_stored_verbatim() {
        let mut log = MessageLog::new();
        let id = log.push("  spaced out  ", Sender::User, None);
        assert_eq!(log.get(id).unwrap().text, "  spaced out  ");
    }
}
