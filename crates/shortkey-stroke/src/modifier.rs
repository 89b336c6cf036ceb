use serde::{Deserialize, Serialize};

/// Modifier keys tracked alongside a [`crate::Key`] in a [`crate::Chord`].
///
/// Platform-dependent aliasing (e.g. `cmd` on macOS vs. `meta` elsewhere) is
/// the canonicalizer's job, not this specification's; this crate picks one
/// neutral spelling per modifier and accepts the common aliases on parse.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// Control key.
    Ctrl,
    /// Shift key.
    Shift,
    /// Alt/Option key.
    Alt,
    /// Meta/Command/Super/Windows key.
    Meta,
}

impl Modifier {
    /// Parses a modifier spec, accepting common cross-platform aliases.
    pub fn from_spec(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => Modifier::Ctrl,
            "shift" => Modifier::Shift,
            "alt" | "opt" | "option" => Modifier::Alt,
            "meta" | "cmd" | "command" | "super" | "win" => Modifier::Meta,
            _ => return None,
        })
    }

    /// Canonical ordering used when rendering a chord: `ctrl`, `alt`,
    /// `shift`, `meta`.
    pub(crate) fn order(self) -> u8 {
        match self {
            Modifier::Ctrl => 0,
            Modifier::Alt => 1,
            Modifier::Shift => 2,
            Modifier::Meta => 3,
        }
    }

    /// Canonical spec string, always lowercase.
    pub fn to_spec(self) -> &'static str {
        match self {
            Modifier::Ctrl => "ctrl",
            Modifier::Shift => "shift",
            Modifier::Alt => "alt",
            Modifier::Meta => "meta",
        }
    }
}
