use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use crate::{Key, Modifier, StrokeError};

/// A key chord: a modifier set plus a single key, parsed from a spec string
/// of the form `"ctrl+shift+k"`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Chord {
    /// Modifiers held down for this chord.
    pub modifiers: BTreeSet<Modifier>,
    /// The non-modifier key.
    pub key: Key,
}

impl Chord {
    /// Parses a chord spec of the form `"ctrl+shift+k"`. Case-insensitive;
    /// components are `+`-separated with the key spec last.
    pub fn parse(s: &str) -> Result<Self, StrokeError> {
        let mut parts: Vec<&str> = s.split('+').collect();
        let key_raw = parts.pop().filter(|p| !p.is_empty()).ok_or_else(|| {
            StrokeError::MalformedSpec { spec: s.to_string() }
        })?;
        let key = Key::from_spec(key_raw.trim()).ok_or_else(|| StrokeError::UnknownKey {
            spec: key_raw.to_string(),
        })?;
        let mut modifiers = BTreeSet::new();
        for m in parts {
            let trimmed = m.trim();
            if trimmed.is_empty() {
                return Err(StrokeError::MalformedSpec { spec: s.to_string() });
            }
            let modifier = Modifier::from_spec(trimmed).ok_or_else(|| StrokeError::UnknownModifier {
                spec: trimmed.to_string(),
            })?;
            modifiers.insert(modifier);
        }
        Ok(Self { modifiers, key })
    }

    /// Canonical string form: modifiers in a fixed order, then the key.
    pub fn to_canonical_string(&self) -> String {
        let mut mods: Vec<Modifier> = self.modifiers.iter().copied().collect();
        mods.sort_by_key(|m| m.order());
        let mut parts: Vec<&str> = mods.iter().map(|m| m.to_spec()).collect();
        parts.push(self.key.to_spec());
        parts.join("+")
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}
