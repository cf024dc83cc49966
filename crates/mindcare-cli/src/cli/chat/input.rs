//! Async readline input handling for the chat loop.
//!
//! Wraps `rustyline_async::Readline` to provide async line reading with
//! handling of EOF (Ctrl+D) and interrupt (Ctrl+C) signals.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line, exactly as typed.
    Line(String),
    /// End of file (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// Async input handler wrapping rustyline_async.
pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Create the input handler with an initial prompt.
    ///
    /// The returned `SharedWriter` prints above the prompt without
    /// disturbing a half-typed line.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    pub fn update_prompt(&mut self, prompt: &str) {
        let _ = self.rl.update_prompt(prompt);
    }

    /// Read a line of input. Cancel-safe, so it can sit in a `select!`.
    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                if !line.trim().is_empty() {
                    self.rl.add_history_entry(line.clone());
                }
                InputEvent::Line(line)
            }
            Ok(ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }

    /// Clear the terminal screen.
    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }

    /// Restore the terminal before exit.
    pub fn flush(&mut self) {
        let _ = self.rl.flush();
    }
}
