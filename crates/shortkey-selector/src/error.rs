use thiserror::Error;

/// Errors raised while parsing a selector string.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum SelectorError {
    /// The selector string (or one of its whitespace-separated compounds)
    /// was empty.
    #[error("empty selector")]
    Empty,

    /// A compound selector token could not be parsed, e.g. a bare `#` or
    /// `.` with no name following it.
    #[error("invalid selector token '{token}'")]
    InvalidToken {
        /// The offending token.
        token: String,
    },
}
