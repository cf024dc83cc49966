//! Plain-terminal rendering of messages and quick-reply panels.

use console::style;
use mindcare_core::script;
use mindcare_types::message::{Message, Sender};
use mindcare_types::script::QuickReplySet;

/// Display name of a message's author.
pub fn sender_label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "You",
        Sender::Bot => "MindCare",
        Sender::Expert => script::EXPERT_PROFILE.name,
    }
}

/// One message: timestamp, author, then the text with continuation lines
/// indented under it.
pub fn format_message(message: &Message, time_format: &str) -> String {
    let label = sender_label(message.sender);
    let styled_label = match message.sender {
        Sender::User => style(label).green().bold(),
        Sender::Bot => style(label).cyan().bold(),
        Sender::Expert => style(label).magenta().bold(),
    };

    let mut lines = message.text.lines();
    let first = lines.next().unwrap_or_default();
    let mut out = format!(
        "  {} {} {}",
        style(message.display_time(time_format)).dim(),
        styled_label,
        first
    );
    for line in lines {
        out.push_str("\n    ");
        out.push_str(line);
    }
    out
}

/// The quick replies currently offered, with the command that presses each.
pub fn format_quick_replies(set: QuickReplySet) -> String {
    let mut out = format!("  {}", style(set.prompt()).bold());
    for (i, label) in set.labels().into_iter().enumerate() {
        let command = match set {
            QuickReplySet::Emotions => format!("/feel {}", label.to_lowercase()),
            QuickReplySet::FollowUps => format!("/option {}", i + 1),
        };
        out.push_str(&format!(
            "\n    {} {}",
            style(format!("{command:<16}")).yellow(),
            label
        ));
    }
    out
}

/// Prompt, with a typing hint while replies are outstanding.
pub fn prompt(pending: usize) -> String {
    if pending > 0 {
        format!("  {} {} ", style("typing…").dim(), style("You >").green().bold())
    } else {
        format!("  {} ", style("You >").green().bold())
    }
}
