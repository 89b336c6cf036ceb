use std::result::Result as StdResult;

use thiserror::Error;

/// Convenient result type for the dispatcher engine.
pub type Result<T> = StdResult<T, Error>;

/// Unified error type for `shortkey-core`.
///
/// Per §7 of the specification, none of these ever propagate out of
/// [`crate::Engine::process`] — invalid bindings are logged and skipped
/// (§4.1), and handler failures are caught and logged (§4.3). This type
/// exists for the registration-time `Result` and for programming-error
/// cases that are genuinely fatal (a malformed input binding).
#[derive(Debug, Error)]
pub enum Error {
    /// A binding's sequence was empty. Caught during normalization; never
    /// reaches the registry.
    #[error("binding sequence must be non-empty")]
    EmptySequence,

    /// A stroke in a binding's sequence failed to parse.
    #[error("invalid stroke in binding sequence: {0}")]
    InvalidStroke(#[from] shortkey_stroke::StrokeError),

    /// A binding's selector failed to validate.
    #[error("invalid selector: {0}")]
    InvalidSelector(#[from] shortkey_selector::SelectorError),
}
