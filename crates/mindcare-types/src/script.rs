//! Quick-reply vocabulary: emotions and follow-up options.
//!
//! These are the closed sets of canned user utterances the chatbot offers as
//! buttons. The matching response text lives in `mindcare_core::script`.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::error::ChatError;

/// An emotion the user can pick from the first quick-reply panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Stressed,
    Sad,
    Angry,
}

impl Emotion {
    /// All emotions in button order.
    pub const ALL: [Emotion; 4] = [
        Emotion::Happy,
        Emotion::Stressed,
        Emotion::Sad,
        Emotion::Angry,
    ];

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Stressed => "Stressed",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emotion::Happy => write!(f, "happy"),
            Emotion::Stressed => write!(f, "stressed"),
            Emotion::Sad => write!(f, "sad"),
            Emotion::Angry => write!(f, "angry"),
        }
    }
}

impl FromStr for Emotion {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Emotion::Happy),
            "stressed" => Ok(Emotion::Stressed),
            "sad" => Ok(Emotion::Sad),
            "angry" => Ok(Emotion::Angry),
            other => Err(ChatError::InvalidEmotion(other.to_string())),
        }
    }
}

/// A follow-up offered once the bot has answered the emotion pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpOption {
    BreathingExercise,
    TalkAboutFeelings,
    DailyMotivation,
}

impl FollowUpOption {
    /// All options in button order.
    pub const ALL: [FollowUpOption; 3] = [
        FollowUpOption::BreathingExercise,
        FollowUpOption::TalkAboutFeelings,
        FollowUpOption::DailyMotivation,
    ];

    /// Button label, which is also the text of the user message it sends.
    pub fn label(&self) -> &'static str {
        match self {
            FollowUpOption::BreathingExercise => "Breathing exercise",
            FollowUpOption::TalkAboutFeelings => "Talk about your feelings",
            FollowUpOption::DailyMotivation => "Daily motivation",
        }
    }

    /// Exact-match lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.label() == label)
    }
}

impl fmt::Display for FollowUpOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which quick-reply button set a screen is offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickReplySet {
    Emotions,
    FollowUps,
}

impl QuickReplySet {
    /// Panel heading.
    pub fn prompt(&self) -> &'static str {
        match self {
            QuickReplySet::Emotions => "Quick response:",
            QuickReplySet::FollowUps => "How can I help you?",
        }
    }

    /// Button labels in display order.
    pub fn labels(&self) -> Vec<&'static str> {
        match self {
            QuickReplySet::Emotions => Emotion::ALL.iter().map(Emotion::label).collect(),
            QuickReplySet::FollowUps => {
                FollowUpOption::ALL.iter().map(FollowUpOption::label).collect()
            }
        }
    }
}

impl fmt::Display for QuickReplySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuickReplySet::Emotions => write!(f, "emotion"),
            QuickReplySet::FollowUps => write!(f, "follow-up"),
        }
    }
}
