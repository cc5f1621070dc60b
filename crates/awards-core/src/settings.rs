use clap::Parser;
use std::path::PathBuf;

use crate::error::Result;
use crate::models::{CsvFormat, DEFAULT_DELIMITER, DEFAULT_QUOTE};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Minimum and maximum award intervals for Golden Raspberry producers
#[derive(Parser, Debug, Clone)]
#[command(
    name = "golden-raspberry",
    about = "Minimum and maximum award intervals for Golden Raspberry producers",
    version
)]
pub struct Settings {
    /// Movie list to load (discovered automatically if not specified)
    #[arg(long, env = "GOLDEN_RASPBERRY_CSV_PATH")]
    pub csv_path: Option<PathBuf>,

    /// Field delimiter of the movie list
    #[arg(long, default_value_t = DEFAULT_DELIMITER, env = "GOLDEN_RASPBERRY_DELIMITER")]
    pub delimiter: char,

    /// Quote character of the movie list
    #[arg(long, default_value_t = DEFAULT_QUOTE, env = "GOLDEN_RASPBERRY_QUOTE_CHAR")]
    pub quote_char: char,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,

    /// Logging level (DEBUG, INFO, WARNING, ERROR) or a tracing filter directive
    #[arg(long, default_value = "INFO")]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and apply derived overrides.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but with an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// Field delimiter and quote marker as a validated [`CsvFormat`].
    pub fn csv_format(&self) -> Result<CsvFormat> {
        CsvFormat::new(self.delimiter, self.quote_char)
    }

    /// `--debug` overrides the log level.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
