//! Cancellable delayed delivery of scripted replies.
//!
//! Each schedule spawns one tokio task that sleeps for the reply delay and
//! then sends the [`PendingReply`] over an unbounded channel. Tasks are
//! cancelled through a per-session `CancellationToken`; each exchange gets a
//! child token so the whole session can be cancelled at once on teardown.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

use super::PendingReply;

/// Cloneable handle shared by the router and every session it mounts.
#[derive(Clone)]
pub struct ReplyScheduler {
    inner: Arc<SchedulerInner>,
}

struct SchedulerInner {
    sender: mpsc::UnboundedSender<PendingReply>,
    /// Cancellation tokens keyed by session id.
    sessions: DashMap<Uuid, CancellationToken>,
    /// Parent of every session token.
    root: CancellationToken,
}

impl ReplyScheduler {
    /// Create a scheduler and the receiver the event loop drains.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PendingReply>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            inner: Arc::new(SchedulerInner {
                sender,
                sessions: DashMap::new(),
                root: CancellationToken::new(),
            }),
        };
        (scheduler, receiver)
    }

    /// Deliver `reply` after `delay` unless its session is cancelled first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&self, reply: PendingReply, delay: Duration) {
        let token = self
            .inner
            .sessions
            .entry(reply.session_id)
            .or_insert_with(|| self.inner.root.child_token())
            .child_token();
        let sender = self.inner.sender.clone();
        // Deadline is fixed here, not when the task is first polled.
        let deadline = Instant::now() + delay;

        debug!(
            session_id = %reply.session_id,
            trigger = %reply.trigger,
            delay_ms = delay.as_millis() as u64,
            "reply scheduled"
        );

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!(session_id = %reply.session_id, trigger = %reply.trigger, "reply cancelled");
                }
                _ = tokio::time::sleep_until(deadline) => {
                    let session_id = reply.session_id;
                    if sender.send(reply).is_err() {
                        debug!(session_id = %session_id, "reply receiver dropped");
                    }
                }
            }
        });
    }

    /// Cancel every outstanding reply of a session.
    pub fn cancel_session(&self, session_id: Uuid) {
        if let Some((_, token)) = self.inner.sessions.remove(&session_id) {
            token.cancel();
            debug!(session_id = %session_id, "session replies cancelled");
        }
    }

    /// Whether the scheduler has an open cancellation scope for a session.
    pub fn is_tracking(&self, session_id: Uuid) -> bool {
        self.inner.sessions.contains_key(&session_id)
    }

    /// Cancel every outstanding reply of every session.
    pub fn shutdown(&self) {
        self.inner.root.cancel();
        self.inner.sessions.clear();
    }
}

impl std::fmt::Debug for ReplyScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyScheduler")
            .field("sessions", &self.inner.sessions.len())
            .field("shut_down", &self.inner.root.is_cancelled())
            .finish()
    }
}
