//! Tracing subscriber initialization.
//!
//! # Usage
//!
//! ```no_run
//! use mindcare_observe::tracing_setup::{init_tracing, TracingOptions};
//!
//! // Warnings and errors to stderr
//! init_tracing(TracingOptions::default()).unwrap();
//! ```
//!
//! The full-screen interface passes a log file so output never lands on the
//! terminal it is drawing on.

use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Where and how much to log.
#[derive(Debug, Clone, Default)]
pub struct TracingOptions {
    /// Count of `-v` flags.
    pub verbosity: u8,
    /// Only errors.
    pub quiet: bool,
    pub format: LogFormat,
    /// Append to this file instead of writing to stderr.
    pub file: Option<PathBuf>,
}

/// Filter directive for the given verbosity. `RUST_LOG` takes precedence.
pub fn filter_directive(verbosity: u8, quiet: bool) -> &'static str {
    match verbosity {
        0 if quiet => "error",
        0 => "warn",
        1 => "info,mindcare=debug",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or if a global
/// subscriber has already been set.
pub fn init_tracing(
    options: TracingOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(filter_directive(options.verbosity, options.quiet)),
    };

    let (writer, ansi) = match &options.file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file: File = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);

    match options.format {
        LogFormat::Pretty => builder.try_init()?,
        LogFormat::Json => builder.json().try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_filters() {
        assert_eq!(filter_directive(0, true), "error");
        assert_eq!(filter_directive(0, false), "warn");
        assert_eq!(filter_directive(1, false), "info,mindcare=debug");
        assert_eq!(filter_directive(2, true), "debug");
        assert_eq!(filter_directive(5, false), "trace");
    }

    #[test]
    fn unopenable_log_file_is_an_error() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}

        let dir = tempfile::TempDir::new().unwrap();
        // A directory cannot be opened for appending.
        let result = init_tracing(TracingOptions {
            file: Some(dir.path().to_path_buf()),
            ..TracingOptions::default()
        });
        let err = result.unwrap_err();
        assert_send_sync(&err);
    }

    #[test]
    fn default_options_log_to_stderr() {
        let options = TracingOptions::default();
        assert!(options.file.is_none());
        assert_eq!(options.format, LogFormat::Pretty);
    }
}
