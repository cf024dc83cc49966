//! Data directory layout.
//!
//! ```text
//! {data_dir}/
//!   config.toml     optional, see `crate::config`
//!   mindcare.log    written by the full-screen interface
//! ```

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "MINDCARE_DATA_DIR";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `MINDCARE_DATA_DIR` environment variable
/// 2. `~/.mindcare`
/// 3. `./.mindcare`
pub fn resolve_data_dir() -> PathBuf {
    data_dir_from(std::env::var(DATA_DIR_ENV).ok(), dirs::home_dir())
}

fn data_dir_from(env_dir: Option<String>, home: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = env_dir.filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir);
    }

    if let Some(home) = home {
        return home.join(".mindcare");
    }

    PathBuf::from(".mindcare")
}

/// `{data_dir}/config.toml`
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// `{data_dir}/mindcare.log`
pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join("mindcare.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override_wins() {
        let dir = data_dir_from(Some("/tmp/mc".into()), Some(PathBuf::from("/home/u")));
        assert_eq!(dir, PathBuf::from("/tmp/mc"));
    }

    #[test]
    fn empty_env_is_ignored() {
        let dir = data_dir_from(Some(String::new()), Some(PathBuf::from("/home/u")));
        assert_eq!(dir, PathBuf::from("/home/u/.mindcare"));
    }

    #[test]
    fn falls_back_to_current_dir() {
        assert_eq!(data_dir_from(None, None), PathBuf::from(".mindcare"));
    }

    #[test]
    fn file_layout() {
        let root = Path::new("/data");
        assert_eq!(config_path(root), PathBuf::from("/data/config.toml"));
        assert_eq!(log_path(root), PathBuf::from("/data/mindcare.log"));
    }
}
