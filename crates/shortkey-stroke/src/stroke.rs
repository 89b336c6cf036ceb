use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Chord;

/// An opaque, already-normalized token representing one atomic key press
/// with its modifier set.
///
/// The dispatcher never inspects a `Stroke`'s contents; it only compares
/// strokes for equality. This crate is the one place that knows strokes are
/// backed by a chord's canonical string form.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Stroke(String);

impl Stroke {
    /// Build a stroke from an already-canonical chord.
    pub(crate) fn from_chord(chord: &Chord) -> Self {
        Self(chord.to_canonical_string())
    }

    /// Returns the underlying token as a string slice.
    ///
    /// Exposed for diagnostics/logging; the engine must not parse it back
    /// into a chord — that would violate the "opaque token" contract.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
