//! Error types for table filling.
//!
//! [`GridError`] covers every failure that can reach a caller: font metrics
//! that cannot be acquired while templates are built, delimited text that the
//! tokenizer rejects, and unreadable style configuration. Empty input is never
//! an error; fills over no rows simply emit nothing.

use std::path::{Path, PathBuf};

/// Error type for all fallible `cellgrid` operations.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Metrics for a template font could not be acquired while building a
    /// [`StyleSet`](crate::StyleSet).
    #[error("cannot acquire metrics for font '{font}': {message}")]
    Resource {
        /// Name of the font whose metrics were requested.
        font: String,
        /// What went wrong.
        message: String,
    },

    /// Delimited text rejected by the tokenizer, such as a quoted field that
    /// is never closed.
    #[error("malformed delimited input{}: {message}", display_line(.line))]
    Malformed {
        /// 1-based line where the problem starts, when known.
        line: Option<u64>,
        message: String,
        /// The reader's own error, when it reported one.
        #[source]
        source: Option<csv::Error>,
    },

    /// Style configuration could not be parsed.
    #[error("invalid style configuration{}: {message}", display_location(.path))]
    Config {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Description of what was wrong.
        message: String,
    },

    /// I/O error while reading configuration or writing delimited text.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GridError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        GridError::Config {
            path: None,
            message: message.into(),
        }
    }

    pub(crate) fn config_in(path: &Path, message: impl Into<String>) -> Self {
        GridError::Config {
            path: Some(path.to_path_buf()),
            message: message.into(),
        }
    }
}

impl From<csv::Error> for GridError {
    fn from(err: csv::Error) -> Self {
        GridError::Malformed {
            line: err.position().map(|p| p.line()),
            message: err.to_string(),
            source: Some(err),
        }
    }
}

fn display_line(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

fn display_location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
