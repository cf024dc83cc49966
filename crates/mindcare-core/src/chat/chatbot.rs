//! Scripted chatbot session.
//!
//! The chatbot walks through emotion and follow-up quick replies:
//!
//! ```text
//! AwaitingEmotion --select_emotion--> EmotionPending --reply--> AwaitingFollowUp
//!                                                                     |
//!                                                        select_follow_up
//!                                                                     v
//!                                                                 Freeform
//! ```
//!
//! Free text is accepted in every phase and never changes it.

use mindcare_types::config::ReplyDelays;
use mindcare_types::error::ChatError;
use mindcare_types::message::{Message, MessageId, Sender};
use mindcare_types::script::{Emotion, QuickReplySet};
use tracing::{debug, info};
use uuid::Uuid;

use super::log::MessageLog;
use super::{ensure_sendable, Conversation};
use crate::reply::{PendingReply, ReplyBody, ReplyScheduler};
use crate::script;

/// Which quick replies the chatbot is offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatbotPhase {
    /// Initial phase: the four emotion buttons are shown.
    AwaitingEmotion,
    /// An emotion was picked and its answer is still being "typed".
    EmotionPending,
    /// The three follow-up buttons are shown.
    AwaitingFollowUp,
    /// No quick replies remain.
    Freeform,
}

impl ChatbotPhase {
    /// The visible quick-reply set, if any.
    pub fn quick_replies(&self) -> Option<QuickReplySet> {
        match self {
            ChatbotPhase::AwaitingEmotion => Some(QuickReplySet::Emotions),
            ChatbotPhase::AwaitingFollowUp => Some(QuickReplySet::FollowUps),
            ChatbotPhase::EmotionPending | ChatbotPhase::Freeform => None,
        }
    }
}

/// The automated chatbot conversation.
pub struct ChatbotSession {
    id: Uuid,
    log: MessageLog,
    phase: ChatbotPhase,
    scheduler: ReplyScheduler,
    delays: ReplyDelays,
    pending: usize,
}

impl ChatbotSession {
    /// Start a session showing the greeting and the emotion buttons.
    pub fn new(scheduler: ReplyScheduler, delays: ReplyDelays) -> Self {
        let mut log = MessageLog::new();
        log.push(script::CHATBOT_GREETING, Sender::Bot, None);
        let id = Uuid::now_v7();
        debug!(session_id = %id, "chatbot session started");
        Self {
            id,
            log,
            phase: ChatbotPhase::AwaitingEmotion,
            scheduler,
            delays,
            pending: 0,
        }
    }

    pub fn phase(&self) -> ChatbotPhase {
        self.phase
    }

    /// Shorthand for `phase().quick_replies()`.
    pub fn quick_replies(&self) -> Option<QuickReplySet> {
        self.phase.quick_replies()
    }

    /// Answer the emotion prompt.
    ///
    /// The emotion buttons disappear immediately; the follow-up buttons
    /// appear once the bot's answer lands.
    pub fn select_emotion(&mut self, emotion: Emotion) -> Result<MessageId, ChatError> {
        if self.phase != ChatbotPhase::AwaitingEmotion {
            return Err(ChatError::QuickReplyHidden(QuickReplySet::Emotions));
        }
        let trigger = self
            .log
            .push(script::emotion_utterance(emotion), Sender::User, None);
        self.phase = ChatbotPhase::EmotionPending;
        info!(session_id = %self.id, emotion = %emotion, "emotion selected");
        self.schedule(trigger, ReplyBody::Emotion(emotion), self.delays.emotion());
        Ok(trigger)
    }

    /// Pick a follow-up option by its label.
    ///
    /// Labels outside the offered set are accepted and answered with the
    /// generic fallback.
    pub fn select_follow_up(&mut self, label: &str) -> Result<MessageId, ChatError> {
        if self.phase != ChatbotPhase::AwaitingFollowUp {
            return Err(ChatError::QuickReplyHidden(QuickReplySet::FollowUps));
        }
        let trigger = self.log.push(label, Sender::User, None);
        self.phase = ChatbotPhase::Freeform;
        info!(session_id = %self.id, option = label, "follow-up selected");
        self.schedule(
            trigger,
            ReplyBody::FollowUp(label.to_string()),
            self.delays.follow_up(),
        );
        Ok(trigger)
    }

    fn schedule(&mut self, trigger: MessageId, body: ReplyBody, delay: std::time::Duration) {
        self.pending += 1;
        self.scheduler.schedule(
            PendingReply {
                session_id: self.id,
                trigger,
                body,
            },
            delay,
        );
    }
}

impl Conversation for ChatbotSession {
    fn id(&self) -> Uuid {
        self.id
    }

    fn messages(&self) -> &[Message] {
        self.log.messages()
    }

    fn send_text(&mut self, text: &str) -> Result<MessageId, ChatError> {
        ensure_sendable(text)?;
        let trigger = self.log.push(text, Sender::User, None);
        debug!(session_id = %self.id, message_id = %trigger, "free text sent");
        self.schedule(trigger, ReplyBody::Acknowledge, self.delays.text());
        Ok(trigger)
    }

    fn deliver(&mut self, reply: PendingReply) -> Option<MessageId> {
        if reply.session_id != self.id {
            return None;
        }
        self.pending = self.pending.saturating_sub(1);
        let id = self
            .log
            .push(reply.body.text(), Sender::Bot, Some(reply.trigger));
        if matches!(reply.body, ReplyBody::Emotion(_)) {
            self.phase = ChatbotPhase::AwaitingFollowUp;
        }
        debug!(session_id = %self.id, message_id = %id, trigger = %reply.trigger, "bot reply delivered");
        Some(id)
    }

    fn pending_replies(&self) -> usize {
        self.pending
    }
}

impl Drop for ChatbotSession {
    fn drop(&mut self) {
        self.scheduler.cancel_session(self.id);
    }
}

impl std::fmt::Debug for ChatbotSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatbotSession")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("messages", &self.log.len())
            .field("pending", &self.pending)
            .finish()
    }
}
