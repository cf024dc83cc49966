//! Simulated expert chat.
//!
//! Free text only. Each message is answered after the expert delay with a
//! reply drawn uniformly from `script::EXPERT_RESPONSES`, independently of
//! earlier turns.

use mindcare_types::config::ReplyDelays;
use mindcare_types::error::ChatError;
use mindcare_types::message::{Message, MessageId, Sender};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;
use uuid::Uuid;

use super::log::MessageLog;
use super::{ensure_sendable, Conversation};
use crate::reply::{PendingReply, ReplyBody, ReplyScheduler};
use crate::script;

/// The expert conversation, generic over its random source.
pub struct ExpertSession<R: Rng = StdRng> {
    id: Uuid,
    log: MessageLog,
    scheduler: ReplyScheduler,
    delays: ReplyDelays,
    rng: R,
    pending: usize,
}

impl<R: Rng> ExpertSession<R> {
    /// Start a session showing the expert's introduction.
    pub fn new(scheduler: ReplyScheduler, delays: ReplyDelays, rng: R) -> Self {
        let mut log = MessageLog::new();
        log.push(script::EXPERT_GREETING, Sender::Expert, None);
        let id = Uuid::now_v7();
        debug!(session_id = %id, "expert session started");
        Self {
            id,
            log,
            scheduler,
            delays,
            rng,
            pending: 0,
        }
    }

    /// Uniform draw over the fixed reply list.
    fn pick_reply(&mut self) -> usize {
        self.rng.random_range(0..script::EXPERT_RESPONSES.len())
    }
}

impl<R: Rng> Conversation for ExpertSession<R> {
    fn id(&self) -> Uuid {
        self.id
    }

    fn messages(&self) -> &[Message] {
        self.log.messages()
    }

    fn send_text(&mut self, text: &str) -> Result<MessageId, ChatError> {
        ensure_sendable(text)?;
        let trigger = self.log.push(text, Sender::User, None);
        let index = self.pick_reply();
        self.pending += 1;
        debug!(session_id = %self.id, message_id = %trigger, reply_index = index, "expert reply drawn");
        self.scheduler.schedule(
            PendingReply {
                session_id: self.id,
                trigger,
                body: ReplyBody::Expert(index),
            },
            self.delays.expert(),
        );
        Ok(trigger)
    }

    fn deliver(&mut self, reply: PendingReply) -> Option<MessageId> {
        if reply.session_id != self.id {
            return None;
        }
        self.pending = self.pending.saturating_sub(1);
        let id = self
            .log
            .push(reply.body.text(), Sender::Expert, Some(reply.trigger));
        debug!(session_id = %self.id, message_id = %id, "expert reply delivered");
        Some(id)
    }

    fn pending_replies(&self) -> usize {
        self.pending
    }
}

impl<R: Rng> Drop for ExpertSession<R> {
    fn drop(&mut self) {
        self.scheduler.cancel_session(self.id);
    }
}

impl<R: Rng> std::fmt::Debug for ExpertSession<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpertSession")
            .field("id", &self.id)
            .field("messages", &self.log.len())
            .field("pending", &self.pending)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn seeded(seed: u64) -> (ExpertSession, UnboundedReceiver<PendingReply>) {
        let (scheduler, rx) = ReplyScheduler::new();
        let session = ExpertSession::new(
            scheduler,
            ReplyDelays::default(),
            StdRng::seed_from_u64(seed),
        );
        (session, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn starts_with_expert_greeting() {
        let (session, _rx) = seeded(1);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Expert);
        assert_eq!(session.messages()[0].text, script::EXPERT_GREETING);
    }

    #[tokio::test(start_paused = true)]
    async fn hundred_replies_stay_within_script() {
        let (mut session, mut rx) = seeded(7);
        for i in 0..100 {
            let trigger = session.send_text(&format!("message {i}")).unwrap();
            let reply = rx.recv().await.unwrap();
            assert_eq!(reply.trigger, trigger);
            let id = session.deliver(reply).unwrap();

            let message = session.messages().last().unwrap();
            assert_eq!(message.id, id);
            assert_eq!(message.sender, Sender::Expert);
            assert!(script::EXPERT_RESPONSES.contains(&message.text.as_str()));
        }
        assert_eq!(session.messages().len(), 201);
    }

    #[tokio::test(start_paused = true)]
    async fn same_seed_same_replies() {
        let (mut a, mut rx_a) = seeded(42);
        let (mut b, mut rx_b) = seeded(42);
        for _ in 0..10 {
            a.send_text("hi").unwrap();
            b.send_text("hi").unwrap();
            let reply_a = rx_a.recv().await.unwrap();
            let reply_b = rx_b.recv().await.unwrap();
            assert_eq!(reply_a.body, reply_b.body);
            a.deliver(reply_a);
            b.deliver(reply_b);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn reply_waits_for_expert_delay() {
        let (mut session, mut rx) = seeded(3);
        session.send_text("I feel anxious").unwrap();
        assert_eq!(session.pending_replies(), 1);

        tokio::time::advance(Duration::from_millis(1_999)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_millis(1)).await;
        let reply = rx.recv().await.unwrap();
        session.deliver(reply);
        assert_eq!(session.pending_replies(), 0);
        assert_eq!(session.messages().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn whitespace_is_rejected() {
        let (mut session, mut rx) = seeded(3);
        assert_eq!(session.send_text("  "), Err(ChatError::EmptyInput));
        assert_eq!(session.messages().len(), 1);
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn user_message_precedes_reply() {
        let (mut session, mut rx) = seeded(9);
        let trigger = session.send_text("hello").unwrap();
        let reply = session.deliver(rx.recv().await.unwrap()).unwrap();

        let messages = session.messages();
        let user_idx = messages.iter().position(|m| m.id == trigger).unwrap();
        let reply_idx = messages.iter().position(|m| m.id == reply).unwrap();
        assert!(user_idx < reply_idx);
        assert_eq!(messages[reply_idx].reply_to, Some(trigger));
    }
}
