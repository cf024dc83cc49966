//! Application state shared by the interfaces.
//!
//! `AppState` holds the resolved data directory and the effective
//! configuration (file values with CLI overrides applied). Each interface
//! builds its own [`ScreenRouter`] from it.

use std::path::PathBuf;

use mindcare_core::reply::{PendingReply, ReplyScheduler};
use mindcare_core::router::ScreenRouter;
use mindcare_infra::config::load_config;
use mindcare_types::config::{AppConfig, ReplyDelays};
use tokio::sync::mpsc::UnboundedReceiver;

/// Values from global CLI flags that take precedence over `config.toml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub no_delay: bool,
}

impl Overrides {
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(seed) = self.seed {
            config.expert_seed = Some(seed);
        }
        if self.no_delay {
            config.delays = ReplyDelays::instant();
        }
        config
    }
}

pub struct AppState {
    pub data_dir: PathBuf,
    pub config: AppConfig,
}

impl AppState {
    /// Ensure the data directory exists and load the configuration.
    pub async fn init(data_dir: PathBuf, overrides: Overrides) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = overrides.apply(load_config(&data_dir).await);
        tracing::debug!(
            data_dir = %data_dir.display(),
            expert_seed = ?config.expert_seed,
            "configuration loaded"
        );

        Ok(Self { data_dir, config })
    }

    /// A router on the landing screen plus the receiver its replies arrive on.
    ///
    /// Must be called from within the tokio runtime.
    pub fn router(&self) -> (ScreenRouter, UnboundedReceiver<PendingReply>) {
        let (scheduler, replies) = ReplyScheduler::new();
        let router = ScreenRouter::new(scheduler, self.config.delays, self.config.expert_seed);
        (router, replies)
    }

    pub fn time_format(&self) -> &str {
        &self.config.time_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overrides_keep_file_values() {
        let config = AppConfig {
            expert_seed: Some(3),
            ..AppConfig::default()
        };
        let applied = Overrides::default().apply(config.clone());
        assert_eq!(applied, config);
    }

    #[test]
    fn flags_override_file_values() {
        let config = AppConfig {
            expert_seed: Some(3),
            ..AppConfig::default()
        };
        let applied = Overrides {
            seed: Some(99),
            no_delay: true,
        }
        .apply(config);
        assert_eq!(applied.expert_seed, Some(99));
        assert_eq!(applied.delays, ReplyDelays::instant());
        assert_eq!(applied.time_format, "%H:%M");
    }
}
