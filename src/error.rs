//! Crate-level error types.

use std::fmt;

/// Errors produced by the bubbleviz crate.
///
/// The sort engine itself never fails; these cover the ambient surfaces
/// around it (option files, frame output, the browser host).
#[derive(Debug)]
pub enum BubbleVizError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
    /// Browser host failure (missing canvas, rejected callback, ...).
    Web(String),
}

impl fmt::Display for BubbleVizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Web(msg) => write!(f, "web host error: {msg}"),
        }
    }
}

impl std::error::Error for BubbleVizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BubbleVizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
