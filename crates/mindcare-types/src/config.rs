//! Application configuration types for MindCare.
//!
//! `AppConfig` represents the optional `config.toml` in the data directory.
//! Every field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use std::time::Duration;

/// Default strftime pattern for message timestamps (hour:minute).
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simulated "thinking" latency for each kind of scripted reply.
    #[serde(default)]
    pub delays: ReplyDelays,

    /// strftime pattern used to render message timestamps.
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Seed for the expert reply picker. `None` seeds from the OS.
    #[serde(default)]
    pub expert_seed: Option<u64>,
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            delays: ReplyDelays::default(),
            time_format: default_time_format(),
            expert_seed: None,
        }
    }
}

/// Reply delays in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyDelays {
    #[serde(default = "default_emotion_reply_ms")]
    pub emotion_reply_ms: u64,
    #[serde(default = "default_follow_up_reply_ms")]
    pub follow_up_reply_ms: u64,
    #[serde(default = "default_text_reply_ms")]
    pub text_reply_ms: u64,
    #[serde(default = "default_expert_reply_ms")]
    pub expert_reply_ms: u64,
}

fn default_emotion_reply_ms() -> u64 {
    1_000
}

fn default_follow_up_reply_ms() -> u64 {
    1_200
}

fn default_text_reply_ms() -> u64 {
    1_000
}

fn default_expert_reply_ms() -> u64 {
    2_000
}

impl Default for ReplyDelays {
    fn default() -> Self {
        Self {
            emotion_reply_ms: default_emotion_reply_ms(),
            follow_up_reply_ms: default_follow_up_reply_ms(),
            text_reply_ms: default_text_reply_ms(),
            expert_reply_ms: default_expert_reply_ms(),
        }
    }
}

impl ReplyDelays {
    /// All delays zero: replies are delivered on the next loop iteration.
    pub fn instant() -> Self {
        Self {
            emotion_reply_ms: 0,
            follow_up_reply_ms: 0,
            text_reply_ms: 0,
            expert_reply_ms: 0,
        }
    }

    pub fn emotion(&self) -> Duration {
        Duration::from_millis(self.emotion_reply_ms)
    }

    pub fn follow_up(&self) -> Duration {
        Duration::from_millis(self.follow_up_reply_ms)
    }

    pub fn text(&self) -> Duration {
        Duration::from_millis(self.text_reply_ms)
    }

    pub fn expert(&self) -> Duration {
        Duration::from_millis(self.expert_reply_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.delays.emotion_reply_ms, 1_000);
        assert_eq!(config.delays.follow_up_reply_ms, 1_200);
        assert_eq!(config.delays.text_reply_ms, 1_000);
        assert_eq!(config.delays.expert_reply_ms, 2_000);
        assert_eq!(config.time_format, "%H:%M");
        assert!(config.expert_seed.is_none());
    }

    #[test]
    fn test_app_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_app_config_deserialize_partial_delays() {
        let toml_str = r#"
time_format = "%I:%M %p"
expert_seed = 42

[delays]
expert_reply_ms = 500
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.time_format, "%I:%M %p");
        assert_eq!(config.expert_seed, Some(42));
        assert_eq!(config.delays.expert_reply_ms, 500);
        // Unspecified delays keep their defaults.
        assert_eq!(config.delays.follow_up_reply_ms, 1_200);
    }

    #[test]
    fn test_reply_delays_durations() {
        let delays = ReplyDelays::default();
        assert_eq!(delays.follow_up(), Duration::from_millis(1_200));
        assert_eq!(delays.expert(), Duration::from_secs(2));
        assert_eq!(ReplyDelays::instant().emotion(), Duration::ZERO);
    }
}
