use std::collections::HashMap;

use crate::{Chord, Key, Modifier, Stroke, StrokeError};

/// A raw key-press event as delivered by the host, before canonicalization.
///
/// Implemented by the host's event type; `shortkey-core` never constructs
/// one directly, it only receives events through `process()`.
pub trait RawKeyEvent {
    /// The host's identifier for the primary (non-modifier) key, e.g. `"k"`,
    /// `"F5"`, or a raw key name the layout doesn't recognize. An empty
    /// string means the event carries no primary key (a bare modifier
    /// press).
    fn primary_key(&self) -> &str;
    /// Whether the control modifier was held.
    fn ctrl(&self) -> bool;
    /// Whether the shift modifier was held.
    fn shift(&self) -> bool;
    /// Whether the alt/option modifier was held.
    fn alt(&self) -> bool;
    /// Whether the meta/command modifier was held.
    fn meta(&self) -> bool;
}

/// A keyboard layout: a name plus raw-key-identifier aliases the host may
/// deliver instead of this crate's own key spec spellings (e.g. a host that
/// reports `"Return"` where this crate's canonical spec is `"enter"`).
#[derive(Clone, Debug, Default)]
pub struct Layout {
    name: String,
    aliases: HashMap<String, String>,
}

impl Layout {
    /// The default US-English layout, with no raw-identifier remapping
    /// beyond what [`Key::from_spec`] already accepts.
    pub fn us_english() -> Self {
        Self {
            name: "us-english".to_string(),
            aliases: HashMap::new(),
        }
    }

    /// Layout name, for diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a raw host identifier as an alias for a canonical key spec.
    pub fn with_alias(mut self, raw: impl Into<String>, canonical_spec: impl Into<String>) -> Self {
        self.aliases.insert(raw.into(), canonical_spec.into());
        self
    }

    fn resolve_key(&self, raw: &str) -> Option<Key> {
        if let Some(canonical) = self.aliases.get(raw) {
            return Key::from_spec(canonical);
        }
        Key::from_spec(raw)
    }
}

/// Translates a raw host key event into a normalized [`Stroke`].
///
/// Returns `None` when the event is not a shortcut: a bare modifier press,
/// or a primary key the layout does not recognize — the caller treats this
/// identically to an empty canonicalizer result (§7: "unrecognized stroke …
/// treat as non-shortcut, pass-through, no state change").
pub fn canonicalize(event: &impl RawKeyEvent, layout: &Layout) -> Option<Stroke> {
    let raw = event.primary_key();
    if raw.is_empty() {
        return None;
    }
    let key = layout.resolve_key(raw)?;
    let mut modifiers = std::collections::BTreeSet::new();
    if event.ctrl() {
        modifiers.insert(Modifier::Ctrl);
    }
    if event.shift() {
        modifiers.insert(Modifier::Shift);
    }
    if event.alt() {
        modifiers.insert(Modifier::Alt);
    }
    if event.meta() {
        modifiers.insert(Modifier::Meta);
    }
    Some(Stroke::from_chord(&Chord { modifiers, key }))
}

/// Parses a user-authored shortcut-string component into a [`Stroke`].
/// Fails on malformed input — this is the "throws on malformed input"
/// collaborator behavior from §6, realized as `Result` rather than a panic.
pub fn normalize(spec: &str, _layout: &Layout) -> Result<Stroke, StrokeError> {
    let chord = Chord::parse(spec)?;
    Ok(Stroke::from_chord(&chord))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeEvent {
        key: &'static str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    }

    impl RawKeyEvent for FakeEvent {
        fn primary_key(&self) -> &str {
            self.key
        }
        fn ctrl(&self) -> bool {
            self.ctrl
        }
        fn shift(&self) -> bool {
            self.shift
        }
        fn alt(&self) -> bool {
            self.alt
        }
        fn meta(&self) -> bool {
            self.meta
        }
    }

    #[test]
    fn canonicalize_matches_normalize_for_equivalent_input() {
        let layout = Layout::us_english();
        let event = FakeEvent { key: ";", ctrl: true, shift: false, alt: false, meta: false };
        let from_event = canonicalize(&event, &layout).unwrap();
        let from_spec = normalize("ctrl+;", &layout).unwrap();
        assert_eq!(from_event, from_spec);
    }

    #[test]
    fn empty_primary_key_is_not_a_shortcut() {
        let layout = Layout::us_english();
        let event = FakeEvent { key: "", ctrl: true, shift: false, alt: false, meta: false };
        assert!(canonicalize(&event, &layout).is_none());
    }

    #[test]
    fn unrecognized_key_is_not_a_shortcut() {
        let layout = Layout::us_english();
        let event = FakeEvent { key: "Hyper7000", ctrl: false, shift: false, alt: false, meta: false };
        assert!(canonicalize(&event, &layout).is_none());
    }

    #[test]
    fn alias_resolves_to_canonical_key() {
        let layout = Layout::us_english().with_alias("Return", "enter");
        let event = FakeEvent { key: "Return", ctrl: false, shift: false, alt: false, meta: false };
        let stroke = canonicalize(&event, &layout).unwrap();
        assert_eq!(stroke, normalize("enter", &layout).unwrap());
    }

    #[test]
    fn normalize_throws_on_malformed_input() {
        let layout = Layout::us_english();
        assert!(normalize("ctrl+", &layout).is_err());
        assert!(normalize("", &layout).is_err());
    }
}
