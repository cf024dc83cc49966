//! Chat message types for MindCare.
//!
//! A conversation is an append-only list of [`Message`]s. Each message is
//! immutable once created and carries an id assigned by the owning log at
//! append time.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Identity of a message within one conversation.
///
/// Ids are strictly increasing in append order. They are handed out by a
/// dedicated counter, never derived from the current list length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
    Expert,
}

impl Sender {
    /// Whether this message was typed (or picked) by the person using the app.
    pub fn is_user(&self) -> bool {
        matches!(self, Sender::User)
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
            Sender::Expert => write!(f, "expert"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Sender::User),
            "bot" => Ok(Sender::Bot),
            "expert" => Ok(Sender::Expert),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    /// The user message this reply answers (scripted replies only).
    pub reply_to: Option<MessageId>,
}

impl Message {
    /// Creation time rendered in the local time zone with a strftime pattern.
    ///
    /// The pattern must already be validated; see
    /// `mindcare_infra::config::resolve_time_format`.
    pub fn display_time(&self, format: &str) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format(format)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u64, sender: Sender) -> Message {
        Message {
            id: MessageId(id),
            text: "hello".to_string(),
            sender,
            timestamp: Utc::now(),
            reply_to: None,
        }
    }

    #[test]
    fn test_sender_roundtrip() {
        for sender in [Sender::User, Sender::Bot, Sender::Expert] {
            let parsed: Sender = sender.to_string().parse().unwrap();
            assert_eq!(sender, parsed);
        }
    }

    #[test]
    fn test_sender_rejects_unknown() {
        let err = "robot".parse::<Sender>().unwrap_err();
        assert!(err.contains("robot"));
    }

    #[test]
    fn test_message_id_ordering() {
        assert!(MessageId(1) < MessageId(2));
        assert_eq!(MessageId(7).to_string(), "7");
    }

    #[test]
    fn test_message_serialize() {
        let msg = sample(3, Sender::Expert);
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"id\":3"));
        assert!(json.contains("\"sender\":\"expert\""));
        assert!(json.contains("\"reply_to\":null"));
    }

    #[test]
    fn test_display_time_hour_minute() {
        let msg = sample(1, Sender::User);
        let rendered = msg.display_time("%H:%M");
        assert_eq!(rendered.len(), 5);
        assert_eq!(rendered.as_bytes()[2], b':');
    }

    #[test]
    fn test_is_user() {
        assert!(Sender::User.is_user());
        assert!(!Sender::Bot.is_user());
        assert!(!Sender::Expert.is_user());
    }
}
