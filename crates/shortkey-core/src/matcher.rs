//! Sequence Matcher (§4.2): classifies an accumulated stroke sequence
//! against the registry into exact / partial matches.
//!
//! Grounded on the exact/partial classification in
//! `zed`'s `KeymapMatcher::push_keystroke` (`BindingMatchResult::{Complete,
//! Partial}`): walk the candidate set once, compare prefix-wise, bucket into
//! two lists. The matcher here is a free function over a borrowed snapshot
//! rather than a method on the registry so it stays pure per §4.2 ("no side
//! effects").

use shortkey_stroke::Stroke;

use crate::types::NormalizedBinding;

/// The two non-empty outcome buckets of classifying a sequence; bindings
/// that match neither are silently excluded (§4.2's implicit "none").
pub struct MatchOutcome<'a, A> {
    /// Bindings whose sequence equals `sequence` exactly, in registry order.
    pub exact: Vec<&'a NormalizedBinding<A>>,
    /// Bindings whose sequence has `sequence` as a strict prefix, in
    /// registry order.
    pub partial: Vec<&'a NormalizedBinding<A>>,
}

/// Classifies every binding in `registry` against the accumulated `sequence`.
pub fn classify<'a, A>(
    registry: impl IntoIterator<Item = &'a NormalizedBinding<A>>,
    sequence: &[Stroke],
) -> MatchOutcome<'a, A>
where
    A: 'a,
{
    let mut exact = Vec::new();
    let mut partial = Vec::new();

    for binding in registry {
        let candidate = binding.sequence();
        if candidate.len() < sequence.len() {
            continue;
        }
        if &candidate[..sequence.len()] != sequence {
            continue;
        }
        if candidate.len() == sequence.len() {
            exact.push(binding);
        } else {
            partial.push(binding);
        }
    }

    MatchOutcome { exact, partial }
}

#[cfg(test)]
mod tests {
    use shortkey_selector::Selector;
    use shortkey_stroke::normalize;

    use super::*;
    use std::sync::Arc;

    fn stroke(spec: &str) -> Stroke {
        normalize(spec, &shortkey_stroke::Layout::us_english()).unwrap()
    }

    fn binding(seq: &[&str]) -> NormalizedBinding<()> {
        NormalizedBinding {
            sequence: seq.iter().map(|s| stroke(s)).collect(),
            selector: Selector::parse("*").unwrap(),
            specificity: 0,
            handler: Arc::new(|_| Ok(true)),
            args: (),
        }
    }

    #[test]
    fn classifies_none_exact_partial() {
        let unrelated = binding(&["b"]);
        let exact_match = binding(&["a"]);
        let prefix_of_longer = binding(&["a", "b"]);
        let registry = [unrelated, exact_match, prefix_of_longer];

        let seq = vec![stroke("a")];
        let outcome = classify(registry.iter(), &seq);

        assert_eq!(outcome.exact.len(), 1);
        assert_eq!(outcome.partial.len(), 1);
        assert_eq!(outcome.exact[0].sequence(), &[stroke("a")]);
        assert_eq!(outcome.partial[0].sequence(), &[stroke("a"), stroke("b")]);
    }

    #[test]
    fn unrelated_binding_yields_no_matches() {
        let registry = [binding(&["z"])];
        let seq = vec![stroke("a")];
        let outcome = classify(registry.iter(), &seq);
        assert!(outcome.exact.is_empty());
        assert!(outcome.partial.is_empty());
    }

    #[test]
    fn preserves_registry_order() {
        let first = binding(&["a", "b"]);
        let second = binding(&["a", "c"]);
        let registry = [first, second];
        let seq = vec![stroke("a")];

        let outcome = classify(registry.iter(), &seq);
        assert_eq!(outcome.partial[0].sequence()[1], stroke("b"));
        assert_eq!(outcome.partial[1].sequence()[1], stroke("c"));
    }
}
