//! Screen router.
//!
//! Holds the current [`Screen`] and the single view mounted for it. Moving to
//! a different screen drops the previous view, which cancels its pending
//! replies, and mounts a fresh one: chat history does not survive navigating
//! away and back. There is no history stack.

use mindcare_types::config::ReplyDelays;
use mindcare_types::message::MessageId;
use mindcare_types::screen::Screen;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::chat::chatbot::ChatbotSession;
use crate::chat::expert::ExpertSession;
use crate::chat::Conversation;
use crate::reply::{PendingReply, ReplyScheduler};

/// The view mounted for the current screen.
#[derive(Debug)]
pub enum ActiveView {
    Landing,
    Chatbot(ChatbotSession),
    Expert(ExpertSession),
}

impl ActiveView {
    pub fn screen(&self) -> Screen {
        match self {
            ActiveView::Landing => Screen::Landing,
            ActiveView::Chatbot(_) => Screen::Chatbot,
            ActiveView::Expert(_) => Screen::ExpertChat,
        }
    }
}

/// Owns the current screen and its view.
#[derive(Debug)]
pub struct ScreenRouter {
    view: ActiveView,
    scheduler: ReplyScheduler,
    delays: ReplyDelays,
    /// Seeds each mounted expert session's picker.
    rng: StdRng,
}

impl ScreenRouter {
    /// Start on the landing screen.
    ///
    /// With `seed`, every expert session's reply sequence is reproducible.
    pub fn new(scheduler: ReplyScheduler, delays: ReplyDelays, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            view: ActiveView::Landing,
            scheduler,
            delays,
            rng,
        }
    }

    /// The screen currently shown.
    pub fn current(&self) -> Screen {
        self.view.screen()
    }

    /// Show `screen`.
    ///
    /// Returns `true` when a new view was mounted, `false` when `screen` was
    /// already shown (its state is kept).
    pub fn navigate(&mut self, screen: Screen) -> bool {
        let from = self.current();
        if from == screen {
            debug!(screen = %screen, "already on screen");
            return false;
        }
        // Assigning drops the old view, cancelling its replies.
        self.view = self.mount(screen);
        info!(from = %from, to = %screen, "navigated");
        true
    }

    fn mount(&mut self, screen: Screen) -> ActiveView {
        match screen {
            Screen::Landing => ActiveView::Landing,
            Screen::Chatbot => {
                ActiveView::Chatbot(ChatbotSession::new(self.scheduler.clone(), self.delays))
            }
            Screen::ExpertChat => ActiveView::Expert(ExpertSession::new(
                self.scheduler.clone(),
                self.delays,
                StdRng::from_rng(&mut self.rng),
            )),
        }
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ActiveView {
        &mut self.view
    }

    /// The mounted chatbot, if the chatbot screen is shown.
    pub fn chatbot_mut(&mut self) -> Option<&mut ChatbotSession> {
        match &mut self.view {
            ActiveView::Chatbot(session) => Some(session),
            _ => None,
        }
    }

    /// The mounted conversation of either kind.
    pub fn conversation(&self) -> Option<&dyn Conversation> {
        match &self.view {
            ActiveView::Landing => None,
            ActiveView::Chatbot(session) => Some(session as &dyn Conversation),
            ActiveView::Expert(session) => Some(session as &dyn Conversation),
        }
    }

    pub fn conversation_mut(&mut self) -> Option<&mut dyn Conversation> {
        match &mut self.view {
            ActiveView::Landing => None,
            ActiveView::Chatbot(session) => Some(session as &mut dyn Conversation),
            ActiveView::Expert(session) => Some(session as &mut dyn Conversation),
        }
    }

    /// Apply a fired reply to the mounted session.
    ///
    /// Replies whose session is no longer mounted are discarded.
    pub fn deliver(&mut self, reply: PendingReply) -> Option<MessageId> {
        let session_id = reply.session_id;
        let delivered = self
            .conversation_mut()
            .and_then(|conversation| conversation.deliver(reply));
        if delivered.is_none() {
            debug!(session_id = %session_id, "discarded reply for unmounted session");
        }
        delivered
    }

    /// Cancel every outstanding reply. Called when the app exits.
    pub fn shutdown(&self) {
        self.scheduler.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script;
    use mindcare_types::script::Emotion;
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn router() -> (ScreenRouter, UnboundedReceiver<PendingReply>) {
        let (scheduler, rx) = ReplyScheduler::new();
        (ScreenRouter::new(scheduler, ReplyDelays::default(), Some(11)), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn starts_on_landing() {
        let (router, _rx) = router();
        assert_eq!(router.current(), Screen::Landing);
        assert!(router.conversation().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn current_screen_tracks_last_request() {
        let (mut router, _rx) = router();
        let requests = [
            Screen::Chatbot,
            Screen::Chatbot,
            Screen::ExpertChat,
            Screen::Landing,
            Screen::Landing,
            Screen::ExpertChat,
            Screen::Chatbot,
        ];
        for screen in requests {
            router.navigate(screen);
            assert_eq!(router.current(), screen);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn revisiting_chat_resets_history() {
        let (mut router, mut rx) = router();
        router.navigate(Screen::Chatbot);
        router.chatbot_mut().unwrap().select_emotion(Emotion::Happy).unwrap();
        let reply = rx.recv().await.unwrap();
        router.deliver(reply).unwrap();
        assert_eq!(router.conversation().unwrap().messages().len(), 3);

        router.navigate(Screen::Landing);
        router.navigate(Screen::Chatbot);
        let messages = router.conversation().unwrap().messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, script::CHATBOT_GREETING);
    }

    #[tokio::test(start_paused = true)]
    async fn renavigating_to_same_screen_keeps_state() {
        let (mut router, _rx) = router();
        router.navigate(Screen::ExpertChat);
        router.conversation_mut().unwrap().send_text("hi").unwrap();
        assert!(!router.navigate(Screen::ExpertChat));
        assert_eq!(router.conversation().unwrap().messages().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_screen_cancels_pending_replies() {
        let (mut router, mut rx) = router();
        router.navigate(Screen::ExpertChat);
        router.conversation_mut().unwrap().send_text("are you there?").unwrap();
        router.navigate(Screen::Chatbot);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(router.conversation().unwrap().messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_reply_is_discarded() {
        let (mut router, _rx) = router();
        router.navigate(Screen::Chatbot);
        let stale = PendingReply {
            session_id: uuid::Uuid::now_v7(),
            trigger: MessageId(2),
            body: crate::reply::ReplyBody::Acknowledge,
        };
        assert!(router.deliver(stale).is_none());

        router.navigate(Screen::Landing);
        let stale = PendingReply {
            session_id: uuid::Uuid::now_v7(),
            trigger: MessageId(2),
            body: crate::reply::ReplyBody::Acknowledge,
        };
        assert!(router.deliver(stale).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn seeded_router_is_reproducible() {
        async fn first_reply(seed: u64) -> String {
            let (scheduler, mut rx) = ReplyScheduler::new();
            let mut router = ScreenRouter::new(scheduler, ReplyDelays::default(), Some(seed));
            router.navigate(Screen::ExpertChat);
            router.conversation_mut().unwrap().send_text("hello").unwrap();
            let reply = rx.recv().await.unwrap();
            router.deliver(reply).unwrap();
            router.conversation().unwrap().messages()[2].text.clone()
        }
        assert_eq!(first_reply(5).await, first_reply(5).await);
    }
}
