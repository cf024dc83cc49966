//! Configuration loader for MindCare.
//!
//! Reads `config.toml` from the data directory and deserializes it into
//! [`AppConfig`]. Falls back to defaults when the file is missing or
//! malformed, then clamps values the interface cannot use.

use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use mindcare_types::config::{AppConfig, ReplyDelays, DEFAULT_TIME_FORMAT};

use crate::filesystem::config_path;

/// Upper bound for any configured reply delay.
pub const MAX_REPLY_DELAY_MS: u64 = 30_000;

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: [`AppConfig::default()`].
/// - Unreadable or unparsable file: logs a warning and returns the default.
/// - Otherwise the parsed config, passed through [`normalize`].
pub async fn load_config(data_dir: &Path) -> AppConfig {
    let path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => normalize(config),
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            AppConfig::default()
        }
    }
}

/// Clamp delays and replace an unusable time format.
pub fn normalize(mut config: AppConfig) -> AppConfig {
    config.delays = clamp_delays(config.delays);
    config.time_format = resolve_time_format(&config.time_format);
    config
}

fn clamp_delays(delays: ReplyDelays) -> ReplyDelays {
    let clamp = |name: &str, ms: u64| {
        if ms > MAX_REPLY_DELAY_MS {
            tracing::warn!(
                delay_ms = ms,
                "{name} exceeds {MAX_REPLY_DELAY_MS}ms, clamping"
            );
        }
        ms.min(MAX_REPLY_DELAY_MS)
    };
    ReplyDelays {
        emotion_reply_ms: clamp("emotion_reply_ms", delays.emotion_reply_ms),
        follow_up_reply_ms: clamp("follow_up_reply_ms", delays.follow_up_reply_ms),
        text_reply_ms: clamp("text_reply_ms", delays.text_reply_ms),
        expert_reply_ms: clamp("expert_reply_ms", delays.expert_reply_ms),
    }
}

/// Return `format` if chrono accepts it, else [`DEFAULT_TIME_FORMAT`].
pub fn resolve_time_format(format: &str) -> String {
    let invalid = format.trim().is_empty()
        || StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
    if invalid {
        tracing::warn!(
            time_format = format,
            "Invalid time_format, falling back to {DEFAULT_TIME_FORMAT}"
        );
        return DEFAULT_TIME_FORMAT.to_string();
    }
    format.to_string()
}
