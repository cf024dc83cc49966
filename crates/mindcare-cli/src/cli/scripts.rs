//! `mindcare scripts`: every canned exchange, as a table or JSON.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use mindcare_core::script;
use mindcare_types::script::{Emotion, FollowUpOption};
use serde::Serialize;

/// One scripted exchange: what triggers it and what comes back.
#[derive(Debug, Serialize)]
pub struct ScriptEntry {
    pub screen: &'static str,
    pub trigger: String,
    pub user_message: Option<&'static str>,
    pub response: &'static str,
}

/// Collect the chatbot and expert scripts in display order.
pub fn script_entries() -> Vec<ScriptEntry> {
    let mut entries = Vec::new();

    for emotion in Emotion::ALL {
        entries.push(ScriptEntry {
            screen: "chatbot",
            trigger: format!("emotion: {}", emotion.label()),
            user_message: Some(script::emotion_utterance(emotion)),
            response: script::emotion_response(emotion),
        });
    }

    for option in FollowUpOption::ALL {
        entries.push(ScriptEntry {
            screen: "chatbot",
            trigger: format!("follow-up: {}", option.label()),
            user_message: Some(option.label()),
            response: script::follow_up_script(option),
        });
    }

    entries.push(ScriptEntry {
        screen: "chatbot",
        trigger: "follow-up: (unrecognised)".to_string(),
        user_message: None,
        response: script::FOLLOW_UP_FALLBACK,
    });

    entries.push(ScriptEntry {
        screen: "chatbot",
        trigger: "free text".to_string(),
        user_message: None,
        response: script::ACKNOWLEDGEMENT,
    });

    for (i, response) in script::EXPERT_RESPONSES.into_iter().enumerate() {
        entries.push(ScriptEntry {
            screen: "expert-chat",
            trigger: format!("free text (random #{})", i + 1),
            user_message: None,
            response,
        });
    }

    entries
}

/// Print the script table, or JSON with `--json`.
pub fn list_scripts(json: bool) -> Result<()> {
    let entries = script_entries();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Screen").fg(Color::White),
        Cell::new("Trigger").fg(Color::White),
        Cell::new("User Message").fg(Color::White),
        Cell::new("Response").fg(Color::White),
    ]);

    for entry in &entries {
        let screen_cell = match entry.screen {
            "chatbot" => Cell::new(entry.screen).fg(Color::Cyan),
            _ => Cell::new(entry.screen).fg(Color::Magenta),
        };
        table.add_row(vec![
            screen_cell,
            Cell::new(&entry.trigger).fg(Color::White),
            Cell::new(entry.user_message.unwrap_or("(as typed)")).fg(Color::DarkGrey),
            Cell::new(entry.response),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} scripted response{}",
        style(entries.len()).bold(),
        if entries.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_script_is_listed() {
        let entries = script_entries();
        // 4 emotions + 3 follow-ups + fallback + acknowledgement + 4 expert
        assert_eq!(entries.len(), 13);
        assert!(entries.iter().any(|e| e.response == script::FOLLOW_UP_FALLBACK));
        for response in script::EXPERT_RESPONSES {
            assert!(entries.iter().any(|e| e.response == response));
        }
    }

    #[test]
    fn entries_serialize_to_json() {
        let json = serde_json::to_value(script_entries()).unwrap();
        assert_eq!(json[0]["screen"], "chatbot");
        assert_eq!(json[0]["user_message"], "I'm feeling happy!");
        assert!(json[8]["user_message"].is_null());
    }
}
