//! Input error types.

use std::num::ParseIntError;

/// Error raised while reading or evaluating case input.
///
/// Every variant is fatal for the whole run: the session stops at the first
/// one and the binary exits with a failure status.
#[derive(Debug)]
pub enum InputError {
    /// An expected line was empty, or a values line was short
    InvalidData(String),
    /// A token that should be an integer is not one
    Parse {
        token: String,
        source: ParseIntError,
    },
    /// A value outside the accepted range
    Range(i64),
    /// Writing a result line failed
    Io(std::io::Error),
}

/// Payload-free category of an [`InputError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidData,
    Parse,
    Range,
    Io,
}

impl InputError {
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        InputError::InvalidData(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            InputError::InvalidData(_) => ErrorKind::InvalidData,
            InputError::Parse { .. } => ErrorKind::Parse,
            InputError::Range(_) => ErrorKind::Range,
            InputError::Io(_) => ErrorKind::Io,
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::InvalidData(s) => write!(f, "Invalid data: {}", s),
            InputError::Parse { token, source } => {
                write!(f, "Not an integer: '{}' ({})", token, source)
            }
            InputError::Range(v) => write!(
                f,
                "Invalid parameter: {} is outside [{}, {}]",
                v,
                crate::case::VALUE_MIN,
                crate::case::VALUE_MAX
            ),
            InputError::Io(e) => write!(f, "Output error: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Parse { source, .. } => Some(source),
            InputError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        InputError::Io(e)
    }
}
