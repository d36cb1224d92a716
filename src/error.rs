use thiserror::Error;

/// Errors raised while reading a colony or routing ants through it
#[derive(Debug, Error)]
pub enum LemInError {
    /// IO operation failed
    #[error("ERROR: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed line in the colony description
    #[error("ERROR: invalid data format, line {line}: {reason}")]
    InvalidFormat { line: usize, reason: String },

    /// Neither the colony file nor the command line gave an ant count
    #[error("ERROR: invalid data format: missing ant count")]
    MissingAntCount,

    /// No `##start` or no `##end` room was declared
    #[error("ERROR: missing ##start or ##end")]
    MissingEndpoint,

    /// The end room cannot be reached from the start room
    #[error("ERROR: no path found between ##start and ##end")]
    NoPathFound,
}

impl LemInError {
    /// Creates an invalid format error for the given 1-based line.
    pub fn invalid(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            line,
            reason: reason.into(),
        }
    }

    /// Re-anchor an invalid format error to the line it came from.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::InvalidFormat { reason, .. } => Self::InvalidFormat { line, reason },
            other => other,
        }
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, LemInError>;
