use std::sync::Arc;

use shortkey_selector::Selector;
use shortkey_stroke::Stroke;

/// Result returned by a handler: `Ok(true)` consumes the event, `Ok(false)`
/// lets dispatch continue to the next candidate, `Err` is logged via the
/// diagnostic sink and treated as `Ok(false)` (§7: "handler throws during
/// dispatch → catch, log, treat as falsy").
pub type HandlerResult = Result<bool, Box<dyn std::error::Error + Send + Sync>>;

/// A registered command handler: invoked with a binding's `args` when its
/// sequence and selector match.
pub type Handler<A> = Arc<dyn Fn(&A) -> HandlerResult + Send + Sync>;

/// A binding as authored by an application (§3 "Binding (input)").
pub struct Binding<A> {
    /// Ordered, non-empty raw stroke specs, each in the canonicalizer's
    /// authoring grammar (e.g. `"ctrl+k"`).
    pub sequence: Vec<String>,
    /// Selector string in the host document's selector language.
    pub selector: String,
    /// Callable invoked with `args` when the binding fires.
    pub handler: Handler<A>,
    /// Opaque value passed to `handler`.
    pub args: A,
}

impl<A> Binding<A> {
    /// Convenience constructor for a binding with a plain closure handler.
    pub fn new(
        sequence: impl IntoIterator<Item = impl Into<String>>,
        selector: impl Into<String>,
        handler: impl Fn(&A) -> HandlerResult + Send + Sync + 'static,
        args: A,
    ) -> Self {
        Self {
            sequence: sequence.into_iter().map(Into::into).collect(),
            selector: selector.into(),
            handler: Arc::new(handler),
            args,
        }
    }
}

/// A binding after registration-time normalization (§3 "Normalized Binding").
///
/// Cheap to clone: `sequence`/`selector` are small, `handler` is an `Arc`,
/// and `args` is required to be `Clone` so a [`crate::controller`] can
/// snapshot a `deferredExact` candidate list without borrowing the registry.
#[derive(Clone)]
pub struct NormalizedBinding<A> {
    pub(crate) sequence: Vec<Stroke>,
    pub(crate) selector: Selector,
    pub(crate) specificity: u32,
    pub(crate) handler: Handler<A>,
    pub(crate) args: A,
}

impl<A> NormalizedBinding<A> {
    /// The normalized stroke sequence.
    pub fn sequence(&self) -> &[Stroke] {
        &self.sequence
    }

    /// The binding's fixed, registration-time specificity.
    pub fn specificity(&self) -> u32 {
        self.specificity
    }
}

/// Opaque, idempotent revocation capability returned by
/// [`crate::registry::Registry::register`].
///
/// Modeled as an integer batch epoch (§9: "an integer epoch plus a
/// side-table of generations" is an explicitly sanctioned alternative to a
/// closure-over-the-batch capability) rather than a closure, since the
/// registry already needs a batch id to filter entries on revoke.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Handle(pub(crate) u64);
