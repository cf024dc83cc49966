//! State of the full-screen interface.
//!
//! Wraps the [`ScreenRouter`] with what only the terminal needs: the input
//! field, the highlighted quick reply, and the highlighted landing action.

use mindcare_core::chat::input::InputBuffer;
use mindcare_core::reply::PendingReply;
use mindcare_core::router::{ActiveView, ScreenRouter};
use mindcare_core::script::landing::SERVICE_OPTIONS;
use mindcare_types::error::ChatError;
use mindcare_types::script::{Emotion, QuickReplySet};
use mindcare_types::screen::Screen;

pub struct TuiState {
    pub router: ScreenRouter,
    pub input: InputBuffer,
    /// Highlighted quick reply, clamped to the offered set when used.
    pub quick_reply: usize,
    /// Highlighted service option on the landing screen.
    pub landing_choice: usize,
    pub time_format: String,
    pub quit: bool,
}

impl TuiState {
    pub fn new(router: ScreenRouter, time_format: String) -> Self {
        Self {
            router,
            input: InputBuffer::new(),
            quick_reply: 0,
            landing_choice: 0,
            time_format,
            quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.router.current()
    }

    /// Show `screen`. A new view starts with an empty field.
    pub fn navigate(&mut self, screen: Screen) {
        if self.router.navigate(screen) {
            self.input.clear();
            self.quick_reply = 0;
        }
    }

    /// Apply a fired reply.
    pub fn deliver(&mut self, reply: PendingReply) {
        let before = self.quick_replies();
        self.router.deliver(reply);
        if self.quick_replies() != before {
            self.quick_reply = 0;
        }
    }

    /// The quick-reply set currently offered, if any.
    pub fn quick_replies(&self) -> Option<QuickReplySet> {
        match self.router.view() {
            ActiveView::Chatbot(session) => session.quick_replies(),
            _ => None,
        }
    }

    /// Index of the highlighted quick reply within the offered set.
    pub fn highlighted_quick_reply(&self) -> Option<usize> {
        let len = self.quick_replies()?.labels().len();
        Some(self.quick_reply.min(len.saturating_sub(1)))
    }

    pub fn next_quick_reply(&mut self) {
        if let Some(set) = self.quick_replies() {
            let len = set.labels().len();
            self.quick_reply = (self.quick_reply.min(len - 1) + 1) % len;
        }
    }

    pub fn previous_quick_reply(&mut self) {
        if let Some(set) = self.quick_replies() {
            let len = set.labels().len();
            self.quick_reply = (self.quick_reply.min(len - 1) + len - 1) % len;
        }
    }

    /// Press the highlighted quick reply.
    pub fn press_quick_reply(&mut self) -> Result<(), ChatError> {
        let (Some(set), Some(index)) = (self.quick_replies(), self.highlighted_quick_reply())
        else {
            return Ok(());
        };
        let ActiveView::Chatbot(session) = self.router.view_mut() else {
            return Ok(());
        };
        match set {
            QuickReplySet::Emotions => session.select_emotion(Emotion::ALL[index])?,
            QuickReplySet::FollowUps => session.select_follow_up(set.labels()[index])?,
        };
        self.quick_reply = 0;
        Ok(())
    }

    /// Enter in a chat: send the typed text, or press the highlighted quick
    /// reply when the field is empty.
    pub fn submit(&mut self) {
        if self.input.is_empty() {
            if let Err(e) = self.press_quick_reply() {
                tracing::debug!(error = %e, "quick reply rejected");
            }
            return;
        }
        // Whitespace-only text stays in the field: sending is disabled.
        let Some(text) = self.input.take() else {
            return;
        };
        if let Some(conversation) = self.router.conversation_mut() {
            if let Err(e) = conversation.send_text(&text) {
                tracing::debug!(error = %e, "send rejected");
            }
        }
    }

    /// Whether a scripted reply is still being "typed".
    pub fn typing(&self) -> bool {
        self.router
            .conversation()
            .is_some_and(|conversation| conversation.pending_replies() > 0)
    }

    pub fn next_landing_choice(&mut self) {
        self.landing_choice = (self.landing_choice + 1) % SERVICE_OPTIONS.len();
    }

    pub fn previous_landing_choice(&mut self) {
        self.landing_choice =
            (self.landing_choice + SERVICE_OPTIONS.len() - 1) % SERVICE_OPTIONS.len();
    }

    /// Follow the highlighted landing call to action.
    pub fn activate_landing_choice(&mut self) {
        let target = SERVICE_OPTIONS[self.landing_choice % SERVICE_OPTIONS.len()].target;
        self.navigate(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindcare_core::reply::ReplyScheduler;
    use mindcare_core::script;
    use mindcare_types::config::ReplyDelays;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn state() -> (TuiState, UnboundedReceiver<PendingReply>) {
        let (scheduler, rx) = ReplyScheduler::new();
        let router = ScreenRouter::new(scheduler, ReplyDelays::default(), Some(1));
        (TuiState::new(router, "%H:%M".to_string()), rx)
    }

    fn messages(state: &TuiState) -> usize {
        state.router.conversation().map_or(0, |c| c.messages().len())
    }

    #[tokio::test(start_paused = true)]
    async fn landing_choice_opens_service() {
        let (mut state, _rx) = state();
        state.activate_landing_choice();
        assert_eq!(state.screen(), Screen::Chatbot);

        state.navigate(Screen::Landing);
        state.next_landing_choice();
        state.activate_landing_choice();
        assert_eq!(state.screen(), Screen::ExpertChat);
    }

    #[tokio::test(start_paused = true)]
    async fn enter_on_empty_field_presses_highlighted_emotion() {
        let (mut state, mut rx) = state();
        state.navigate(Screen::Chatbot);
        state.next_quick_reply();
        state.next_quick_reply();
        state.submit();

        let conversation = state.router.conversation().unwrap();
        assert_eq!(conversation.messages()[1].text, "I'm feeling sad");
        assert_eq!(state.quick_replies(), None);

        state.deliver(rx.recv().await.unwrap());
        assert_eq!(state.quick_replies(), Some(QuickReplySet::FollowUps));
        assert_eq!(state.highlighted_quick_reply(), Some(0));
        assert_eq!(
            state.router.conversation().unwrap().messages()[2].text,
            script::emotion_response(Emotion::Sad)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn whitespace_input_is_not_sent() {
        let (mut state, mut rx) = state();
        state.navigate(Screen::ExpertChat);
        state.input.push_str("   ");
        state.submit();

        assert_eq!(messages(&state), 1);
        assert_eq!(state.input.as_str(), "   ");
        assert!(!state.typing());
        tokio::time::sleep(std::time::Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn typed_text_is_sent_and_cleared() {
        let (mut state, mut rx) = state();
        state.navigate(Screen::ExpertChat);
        state.input.push_str("I can't sleep");
        state.submit();

        assert!(state.input.is_empty());
        assert!(state.typing());
        state.deliver(rx.recv().await.unwrap());
        assert!(!state.typing());
        assert_eq!(messages(&state), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn quick_reply_highlight_wraps() {
        let (mut state, _rx) = state();
        state.navigate(Screen::Chatbot);
        state.previous_quick_reply();
        assert_eq!(state.highlighted_quick_reply(), Some(3));
        state.next_quick_reply();
        assert_eq!(state.highlighted_quick_reply(), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_chat_clears_field() {
        let (mut state, _rx) = state();
        state.navigate(Screen::Chatbot);
        state.input.push_str("draft");
        state.navigate(Screen::Chatbot);
        assert_eq!(state.input.as_str(), "draft");
        state.navigate(Screen::ExpertChat);
        assert!(state.input.is_empty());
    }
}
