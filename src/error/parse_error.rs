#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning tokens into expressions.
///
/// These are only raised in strict mode. The permissive default accepts every
/// token and lets unrecognized ones degrade silently.
pub enum ParseError {
    /// A token classified as a numeral is not one of `cero` to `nueve`.
    UnrecognizedNumeral {
        /// The offending token.
        token:    String,
        /// The 1-based position of the token in the input.
        position: usize,
    },
    /// A token classified as an operation is neither `mas` nor `menos`.
    UnrecognizedOperation {
        /// The offending token.
        token:    String,
        /// The 1-based position of the token in the input.
        position: usize,
    },
}

impl ParseError {
    /// The 1-based position of the token that caused the error.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnrecognizedNumeral { position, .. }
            | Self::UnrecognizedOperation { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedNumeral { token, position } => write!(f,
                                                                    "Error on token {position}: '{token}' is not a numeral between 'cero' and 'nueve'."),
            Self::UnrecognizedOperation { token, position } => write!(f,
                                                                      "Error on token {position}: '{token}' is not an operation, expected 'mas' or 'menos'."),
        }
    }
}

impl std::error::Error for ParseError {}
