//! Error handling for the cleaning pipeline.
//!
//! Only the I/O boundary can really fail: a source that cannot be read, or a
//! sink that cannot be written. Data-quality problems (unparseable numbers,
//! negative values, duplicates) are never errors; rows are dropped instead.
//!
//! ```
//! use sales_cleaner::error::CleanError;
//!
//! fn describe(err: &CleanError) -> &'static str {
//!     match err {
//!         CleanError::SourceRead { .. } => "could not load input",
//!         CleanError::SinkWrite { .. } => "could not save output",
//!         _ => "other failure",
//!     }
//! }
//! ```
//!
//! The [`ResultExt`] trait adds `.with_context()` to any result whose error
//! converts into [`CleanError`], prefixing the message without changing the
//! variant:
//!
//! ```no_run
//! use sales_cleaner::error::ResultExt as _;
//!
//! fn read_settings() -> sales_cleaner::error::Result<String> {
//!     std::fs::read_to_string("settings.json")
//!         .with_context(|| "Failed to read settings".to_owned())
//! }
//! ```

use std::fmt;
use std::path::PathBuf;

/// Main error type for cleaning operations.
#[derive(Debug)]
pub enum CleanError {
    /// Source path missing, unreadable, or malformed
    SourceRead { path: PathBuf, message: String },

    /// Destination could not be written (missing directory, permissions, ...)
    SinkWrite { path: PathBuf, message: String },

    /// Two source columns normalize to the same name
    ColumnCollision { name: String, sources: Vec<String> },

    /// Failure inside the dataframe engine
    DataProcessing(String),

    /// Configuration errors
    Config(String),

    /// I/O errors outside source/sink handling
    Io(std::io::Error),
}

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceRead { path, message } => {
                write!(f, "Failed to read source {}: {message}", path.display())
            }
            Self::SinkWrite { path, message } => {
                write!(f, "Failed to write sink {}: {message}", path.display())
            }
            Self::ColumnCollision { name, sources } => write!(
                f,
                "Columns {} all normalize to '{name}'",
                sources
                    .iter()
                    .map(|s| format!("'{s}'"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CleanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CleanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<polars::error::PolarsError> for CleanError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

impl From<serde_json::Error> for CleanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;

impl CleanError {
    /// Prefixes the error message, keeping the variant.
    #[must_use]
    pub fn with_prefix(self, prefix: &str) -> Self {
        match self {
            Self::SourceRead { path, message } => Self::SourceRead {
                path,
                message: format!("{prefix}: {message}"),
            },
            Self::SinkWrite { path, message } => Self::SinkWrite {
                path,
                message: format!("{prefix}: {message}"),
            },
            Self::DataProcessing(msg) => Self::DataProcessing(format!("{prefix}: {msg}")),
            Self::Config(msg) => Self::Config(format!("{prefix}: {msg}")),
            Self::Io(e) => Self::Io(std::io::Error::new(e.kind(), format!("{prefix}: {e}"))),
            Self::ColumnCollision { .. } => self,
        }
    }
}

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context using a closure (lazy evaluation). The error keeps its
    /// variant.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<CleanError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: CleanError = e.into();
            err.with_prefix(&f())
        })
    }
}
