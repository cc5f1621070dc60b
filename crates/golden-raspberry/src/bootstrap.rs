use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name looked up by [`discover_data_path`].
pub const DATA_FILE_NAME: &str = "movielist.csv";

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// Output goes to `log_file` when one is given (appending, parent
/// directories created), otherwise to stderr so stdout stays clean for the
/// JSON report.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level_directive(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false),
            )
        }
        None => None,
    };

    let stderr_layer = file_layer.is_none().then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(())
}

/// Map the CLI level names onto `tracing` filter directives.
///
/// Unknown names are passed through unchanged so `EnvFilter` syntax such as
/// `awards_data=debug` still works.
pub fn level_directive(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" => "error".to_string(),
        _ => log_level.to_string(),
    }
}

// ── Data-path discovery ────────────────────────────────────────────────────────

/// Locate the movie list when no path was configured.
///
/// Checks, in order, and returns the first file that exists:
/// 1. `./movielist.csv`
/// 2. `./data/movielist.csv`
/// 3. `~/.golden-raspberry/movielist.csv`
pub fn discover_data_path() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    discover_data_path_in(&cwd, dirs::home_dir().as_deref())
}

/// Same as [`discover_data_path`] with explicit working and home directories.
pub fn discover_data_path_in(cwd: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let mut candidates = vec![
        cwd.join(DATA_FILE_NAME),
        cwd.join("data").join(DATA_FILE_NAME),
    ];
    if let Some(home) = home {
        candidates.push(home.join(".golden-raspberry").join(DATA_FILE_NAME));
    }
    candidates.into_iter().find(|p| p.is_file())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
