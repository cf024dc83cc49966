//! Deferred scripted replies.
//!
//! A user action appends its message synchronously and schedules a
//! [`PendingReply`]. The [`ReplyScheduler`] holds it back for the simulated
//! "thinking" delay, then hands it to the event loop that owns the session.
//! Only the event loop mutates session state.

pub mod scheduler;

pub use scheduler::ReplyScheduler;

use mindcare_types::message::MessageId;
use mindcare_types::script::Emotion;
use uuid::Uuid;

use crate::script;

/// What a scheduled reply will say, keyed by its trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyBody {
    /// Answer to an emotion quick reply; reveals the follow-up options.
    Emotion(Emotion),
    /// Answer to a follow-up quick reply, looked up by label.
    FollowUp(String),
    /// Generic acknowledgement of free text.
    Acknowledge,
    /// Expert reply at this index of `script::EXPERT_RESPONSES`.
    Expert(usize),
}

impl ReplyBody {
    /// Resolve the scripted text.
    pub fn text(&self) -> &'static str {
        match self {
            ReplyBody::Emotion(emotion) => script::emotion_response(*emotion),
            ReplyBody::FollowUp(label) => script::follow_up_response(label),
            ReplyBody::Acknowledge => script::ACKNOWLEDGEMENT,
            ReplyBody::Expert(index) => {
                script::EXPERT_RESPONSES[index % script::EXPERT_RESPONSES.len()]
            }
        }
    }
}

/// A reply waiting for its delay to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// Session that scheduled the reply.
    pub session_id: Uuid,
    /// User message that triggered it.
    pub trigger: MessageId,
    pub body: ReplyBody,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_body_text() {
        assert_eq!(
            ReplyBody::Emotion(Emotion::Angry).text(),
            script::emotion_response(Emotion::Angry)
        );
        assert_eq!(ReplyBody::Acknowledge.text(), script::ACKNOWLEDGEMENT);
        assert_eq!(
            ReplyBody::FollowUp("unknown".to_string()).text(),
            script::FOLLOW_UP_FALLBACK
        );
        assert_eq!(ReplyBody::Expert(2).text(), script::EXPERT_RESPONSES[2]);
    }

    #[test]
    fn test_expert_index_wraps() {
        assert_eq!(ReplyBody::Expert(5).text(), script::EXPERT_RESPONSES[1]);
    }
}
