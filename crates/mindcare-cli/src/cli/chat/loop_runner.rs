//! The line-mode chat loop.
//!
//! One `select!` loop owns the router. It reacts to typed lines and to fired
//! replies from the scheduler channel, so session state is only touched here.

use std::io::Write;

use anyhow::Result;
use console::style;
use mindcare_core::router::{ActiveView, ScreenRouter};
use mindcare_types::error::ChatError;
use mindcare_types::message::MessageId;
use mindcare_types::screen::Screen;
use mindcare_types::script::QuickReplySet;
use rustyline_async::SharedWriter;

use super::banner::welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer;
use crate::state::AppState;

/// What the loop should do after handling a line.
enum Flow {
    Continue,
    Exit,
}

/// Run a line-mode conversation starting on `screen`.
pub async fn run_chat_loop(state: &AppState, screen: Screen, quiet: bool) -> Result<()> {
    let (mut router, mut replies) = state.router();
    router.navigate(screen);

    let (mut chat_input, mut out) = ChatInput::new(renderer::prompt(0))
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;
    let view = LineView {
        time_format: state.time_format().to_string(),
        quiet,
    };

    view.show_screen(&mut out, &router)?;

    loop {
        tokio::select! {
            event = chat_input.read_line() => {
                let flow = match event {
                    InputEvent::Eof => Flow::Exit,
                    InputEvent::Interrupted => {
                        writeln!(out, "  {}", style("Press Ctrl+D to exit, or keep chatting.").dim())?;
                        Flow::Continue
                    }
                    InputEvent::Line(line) => {
                        view.handle_line(&mut out, &mut chat_input, &mut router, &line)?
                    }
                };
                if let Flow::Exit = flow {
                    writeln!(out, "\n  {}", style("Take care of yourself.").dim())?;
                    break;
                }
            }
            Some(reply) = replies.recv() => {
                if let Some(id) = router.deliver(reply) {
                    view.show_message(&mut out, &router, id)?;
                    view.show_quick_replies(&mut out, &router)?;
                }
            }
        }
        chat_input.update_prompt(&renderer::prompt(pending(&router)));
    }

    router.shutdown();
    chat_input.flush();
    Ok(())
}

fn pending(router: &ScreenRouter) -> usize {
    router
        .conversation()
        .map(|conversation| conversation.pending_replies())
        .unwrap_or(0)
}

/// Rendering settings for the loop.
struct LineView {
    time_format: String,
    quiet: bool,
}

impl LineView {
    fn handle_line(
        &self,
        out: &mut SharedWriter,
        chat_input: &mut ChatInput,
        router: &mut ScreenRouter,
        line: &str,
    ) -> Result<Flow> {
        let Some(command) = commands::parse(line) else {
            self.send_text(out, router, line)?;
            return Ok(Flow::Continue);
        };

        match command {
            ChatCommand::Help => write!(out, "{}", commands::help_text())?,
            ChatCommand::Clear => chat_input.clear(),
            ChatCommand::Exit => return Ok(Flow::Exit),
            ChatCommand::History => self.show_history(out, router)?,
            ChatCommand::Home => self.navigate(out, router, Screen::Landing)?,
            ChatCommand::Bot => self.navigate(out, router, Screen::Chatbot)?,
            ChatCommand::Expert => self.navigate(out, router, Screen::ExpertChat)?,
            ChatCommand::Feel(emotion) => {
                let result = match router.chatbot_mut() {
                    Some(session) => session.select_emotion(emotion),
                    None => return self.hint(out, "Emotion quick replies are offered by the chatbot (/bot)."),
                };
                self.show_quick_reply_result(out, router, result)?;
            }
            ChatCommand::Option(label) => {
                let result = match router.chatbot_mut() {
                    Some(session) => session.select_follow_up(&label),
                    None => return self.hint(out, "Follow-up options are offered by the chatbot (/bot)."),
                };
                self.show_quick_reply_result(out, router, result)?;
            }
            ChatCommand::Unknown(detail) => {
                writeln!(
                    out,
                    "\n  {} {}. Type /help for available commands.\n",
                    style("?").yellow().bold(),
                    style(detail).dim()
                )?;
            }
        }
        Ok(Flow::Continue)
    }

    fn send_text(&self, out: &mut SharedWriter, router: &mut ScreenRouter, line: &str) -> Result<()> {
        let Some(conversation) = router.conversation_mut() else {
            if !line.trim().is_empty() {
                self.hint(out, "Pick a service first: /bot or /expert.")?;
            }
            return Ok(());
        };
        match conversation.send_text(line) {
            Ok(id) => tracing::debug!(message_id = %id, "user message sent"),
            // Blank lines are ignored, like a disabled send button.
            Err(ChatError::EmptyInput) => {}
            Err(other) => tracing::debug!(error = %other, "send rejected"),
        }
        Ok(())
    }

    fn show_quick_reply_result(
        &self,
        out: &mut SharedWriter,
        router: &ScreenRouter,
        result: Result<MessageId, ChatError>,
    ) -> Result<()> {
        match result {
            Ok(id) => self.show_message(out, router, id),
            Err(ChatError::QuickReplyHidden(set)) => {
                self.hint(out, &format!("The {set} options are not offered right now."))?;
                Ok(())
            }
            Err(other) => {
                tracing::debug!(error = %other, "quick reply rejected");
                Ok(())
            }
        }
    }

    fn navigate(&self, out: &mut SharedWriter, router: &mut ScreenRouter, screen: Screen) -> Result<()> {
        if router.navigate(screen) {
            self.show_screen(out, router)?;
        }
        Ok(())
    }

    /// Banner plus whatever the new view starts with.
    fn show_screen(&self, out: &mut SharedWriter, router: &ScreenRouter) -> Result<()> {
        if !self.quiet {
            write!(out, "{}", welcome_banner(router.current()))?;
        }
        self.show_history(out, router)
    }

    fn show_history(&self, out: &mut SharedWriter, router: &ScreenRouter) -> Result<()> {
        let Some(conversation) = router.conversation() else {
            return Ok(());
        };
        writeln!(out)?;
        for message in conversation.messages() {
            writeln!(out, "{}", renderer::format_message(message, &self.time_format))?;
        }
        writeln!(out)?;
        if let Some(set) = quick_replies(router) {
            writeln!(out, "{}\n", renderer::format_quick_replies(set))?;
        }
        Ok(())
    }

    fn show_message(&self, out: &mut SharedWriter, router: &ScreenRouter, id: MessageId) -> Result<()> {
        let message = router
            .conversation()
            .and_then(|conversation| conversation.messages().iter().find(|m| m.id == id));
        if let Some(message) = message {
            writeln!(out, "{}", renderer::format_message(message, &self.time_format))?;
        }
        Ok(())
    }

    /// Print the follow-up panel while the chatbot offers it.
    fn show_quick_replies(&self, out: &mut SharedWriter, router: &ScreenRouter) -> Result<()> {
        if let Some(set @ QuickReplySet::FollowUps) = quick_replies(router) {
            writeln!(out, "\n{}\n", renderer::format_quick_replies(set))?;
        }
        Ok(())
    }

    fn hint(&self, out: &mut SharedWriter, text: &str) -> Result<Flow> {
        writeln!(out, "  {} {}", style("i").blue().bold(), style(text).dim())?;
        Ok(Flow::Continue)
    }
}

fn quick_replies(router: &ScreenRouter) -> Option<QuickReplySet> {
    match router.view() {
        ActiveView::Chatbot(session) => session.quick_replies(),
        _ => None,
    }
}
