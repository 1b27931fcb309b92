//! Tracing setup for the binary.
//!
//! Events always go to stderr in compact form. When a log file is
//! configured they are also appended, as JSON lines, to a daily-rotated file
//! next to the roadmap data.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::format::{Format, Json, JsonFields};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

type JsonFileLayer<S> = fmt::Layer<S, JsonFields, Format<Json>, RollingFileAppender>;

const DEFAULT_LOG_NAME: &str = "sprintmap.log";

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
///
/// Calling this again is a no-op: the first subscriber stays installed.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = log_file.as_deref().map(json_file_layer);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}

fn default_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "warn" };
    EnvFilter::new(format!("sprintmap={}", level))
}

fn json_file_layer<S>(log_path: &Path) -> JsonFileLayer<S> {
    fmt::layer()
        .with_writer(file_appender(log_path))
        .with_ansi(false)
        .json()
}

/// Daily rotation appends the date to the file name.
fn file_appender(log_path: &Path) -> RollingFileAppender {
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Cannot create log directory {}: {}", dir.display(), e);
    }
    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_NAME));
    tracing_appender::rolling::daily(dir, file_name)
}
