//! Slash command parsing for the chat loop.
//!
//! Commands start with `/`. Besides session controls they stand in for the
//! quick-reply buttons and the navigation bar of the full-screen interface.

use console::style;
use mindcare_types::script::{Emotion, FollowUpOption};

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat.
    Exit,
    /// Reprint the conversation.
    History,
    /// Go to the landing screen.
    Home,
    /// Go to the chatbot.
    Bot,
    /// Go to the expert chat.
    Expert,
    /// Press an emotion quick reply.
    Feel(Emotion),
    /// Press a follow-up quick reply, by label.
    Option(String),
    /// Unknown command or bad argument.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts
        .get(1)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/history" => Some(ChatCommand::History),
        "/home" => Some(ChatCommand::Home),
        "/bot" | "/chatbot" => Some(ChatCommand::Bot),
        "/expert" => Some(ChatCommand::Expert),
        "/feel" => match arg.map(str::parse::<Emotion>) {
            Some(Ok(emotion)) => Some(ChatCommand::Feel(emotion)),
            Some(Err(e)) => Some(ChatCommand::Unknown(e.to_string())),
            None => Some(ChatCommand::Unknown(
                "/feel requires an emotion: happy, stressed, sad, angry".to_string(),
            )),
        },
        "/option" | "/opt" => match arg {
            Some(arg) => Some(ChatCommand::Option(option_label(arg))),
            None => Some(ChatCommand::Unknown(
                "/option requires a number (1-3) or a label".to_string(),
            )),
        },
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// `1`-`3` pick a follow-up by position; anything else is taken as a label.
fn option_label(arg: &str) -> String {
    match arg.parse::<usize>() {
        Ok(n) if (1..=FollowUpOption::ALL.len()).contains(&n) => {
            FollowUpOption::ALL[n - 1].label().to_string()
        }
        _ => arg.to_string(),
    }
}

/// Help text listing all available commands.
pub fn help_text() -> String {
    let rows = [
        ("/help", "Show this help message"),
        ("/feel <emotion>", "Tell the chatbot how you feel"),
        ("/option <1-3>", "Pick a follow-up option"),
        ("/history", "Show the conversation so far"),
        ("/home", "Back to the home screen"),
        ("/bot", "Talk to the chatbot"),
        ("/expert", "Talk to the expert"),
        ("/clear", "Clear the screen"),
        ("/exit", "Leave MindCare"),
    ];

    let mut out = format!("\n  {}\n\n", style("Available commands:").bold());
    for (command, description) in rows {
        out.push_str(&format!(
            "  {}  {}\n",
            style(format!("{command:<16}")).cyan(),
            description
        ));
    }
    out.push_str(&format!(
        "\n  {}\n",
        style("Ctrl+D to exit. Replies arrive while you type.").dim()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse("/home"), Some(ChatCommand::Home));
        assert_eq!(parse("/bot"), Some(ChatCommand::Bot));
        assert_eq!(parse("/EXPERT"), Some(ChatCommand::Expert));
    }

    #[test]
    fn test_parse_feel() {
        assert_eq!(parse("/feel sad"), Some(ChatCommand::Feel(Emotion::Sad)));
        assert_eq!(parse("/feel  Happy "), Some(ChatCommand::Feel(Emotion::Happy)));
        assert!(matches!(parse("/feel"), Some(ChatCommand::Unknown(_))));
        assert_eq!(
            parse("/feel bored"),
            Some(ChatCommand::Unknown("invalid emotion: 'bored'".to_string()))
        );
    }

    #[test]
    fn test_parse_option_by_number() {
        assert_eq!(
            parse("/option 1"),
            Some(ChatCommand::Option("Breathing exercise".to_string()))
        );
        assert_eq!(
            parse("/opt 3"),
            Some(ChatCommand::Option("Daily motivation".to_string()))
        );
    }

    #[test]
    fn test_parse_option_by_label() {
        assert_eq!(
            parse("/option Talk about your feelings"),
            Some(ChatCommand::Option("Talk about your feelings".to_string()))
        );
        // Out-of-range numbers are passed through as labels.
        assert_eq!(parse("/option 4"), Some(ChatCommand::Option("4".to_string())));
        assert!(matches!(parse("/option"), Some(ChatCommand::Unknown(_))));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("hello world"), None);
        assert_eq!(parse("  "), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = console::strip_ansi_codes(&help_text()).to_string();
        for command in ["/feel", "/option", "/history", "/home", "/bot", "/expert", "/exit"] {
            assert!(help.contains(command), "missing {command}");
        }
    }
}
