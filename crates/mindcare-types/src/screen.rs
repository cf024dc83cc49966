//! Screen identifiers and the navigation bar model.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// The three top-level screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Landing,
    Chatbot,
    ExpertChat,
}

impl Screen {
    /// Title shown in a chat screen header (or the brand name on landing).
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Landing => "MindCare",
            Screen::Chatbot => "MindCare Chatbot",
            Screen::ExpertChat => "Chat with Mental Health Expert",
        }
    }

    /// Whether the screen hosts a conversation.
    pub fn is_chat(&self) -> bool {
        !matches!(self, Screen::Landing)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Landing => write!(f, "landing"),
            Screen::Chatbot => write!(f, "chatbot"),
            Screen::ExpertChat => write!(f, "expert-chat"),
        }
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "landing" | "home" => Ok(Screen::Landing),
            "chatbot" | "bot" => Ok(Screen::Chatbot),
            "expert-chat" | "expert" => Ok(Screen::ExpertChat),
            other => Err(format!("invalid screen: '{other}'")),
        }
    }
}

/// One entry in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub screen: Screen,
}

impl NavItem {
    /// A nav item is highlighted when it points at the current screen.
    pub fn is_active(&self, current: Screen) -> bool {
        self.screen == current
    }
}

/// Navigation bar entries, left to right. "Support" leads back to landing.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", screen: Screen::Landing },
    NavItem { label: "Chatbot", screen: Screen::Chatbot },
    NavItem { label: "Expert Chat", screen: Screen::ExpertChat },
    NavItem { label: "Support", screen: Screen::Landing },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_roundtrip() {
        for screen in [Screen::Landing, Screen::Chatbot, Screen::ExpertChat] {
            let parsed: Screen = screen.to_string().parse().unwrap();
            assert_eq!(screen, parsed);
        }
    }

    #[test]
    fn test_screen_aliases() {
        assert_eq!("bot".parse::<Screen>().unwrap(), Screen::Chatbot);
        assert_eq!("expert".parse::<Screen>().unwrap(), Screen::ExpertChat);
        assert_eq!("home".parse::<Screen>().unwrap(), Screen::Landing);
        assert!("settings".parse::<Screen>().is_err());
    }

    #[test]
    fn test_screen_serde_kebab_case() {
        let json = serde_json::to_string(&Screen::ExpertChat).unwrap();
        assert_eq!(json, "\"expert-chat\"");
    }

    #[test]
    fn test_screen_default() {
        assert_eq!(Screen::default(), Screen::Landing);
        assert!(!Screen::Landing.is_chat());
        assert!(Screen::ExpertChat.is_chat());
    }

    #[test]
    fn test_support_and_home_share_landing() {
        let current = Screen::Landing;
        let active: Vec<&str> = NAV_ITEMS
            .iter()
            .filter(|item| item.is_active(current))
            .map(|item| item.label)
            .collect();
        assert_eq!(active, vec!["Home", "Support"]);
    }
}
