use thiserror::Error;

/// Errors raised while parsing a chord spec or canonicalizing a raw event.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum StrokeError {
    /// The spec string is empty, or has a dangling `+`.
    #[error("malformed stroke spec '{spec}'")]
    MalformedSpec {
        /// The offending spec string.
        spec: String,
    },

    /// The key component did not match any known key in the configured
    /// layout.
    #[error("unknown key '{spec}'")]
    UnknownKey {
        /// The offending key spec.
        spec: String,
    },

    /// A modifier component did not match any known modifier.
    #[error("unknown modifier '{spec}'")]
    UnknownModifier {
        /// The offending modifier spec.
        spec: String,
    },
}
