//! Binding Registry (§4.1): holds normalized bindings, supports batched
//! add/remove through an idempotent [`Handle`].

use shortkey_selector::Selector;
use shortkey_stroke::{Layout, Stroke};

use crate::{
    diagnostic::DiagnosticSink,
    error::{Error, Result},
    types::{Binding, Handle, NormalizedBinding},
};

struct Entry<A> {
    batch: u64,
    binding: NormalizedBinding<A>,
}

/// Flat, insertion-ordered collection of normalized bindings.
///
/// No indexed lookup: the spec explicitly allows a flat collection since
/// the working set is small and matching is linear (§4.1). Order is
/// preserved across revocation, since ties in ranking are broken by
/// registry order ("first-registered wins", §4.3).
pub struct Registry<A> {
    entries: Vec<Entry<A>>,
    next_batch: u64,
}

impl<A> Default for Registry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Registry<A> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_batch: 0,
        }
    }

    /// Normalizes and stores every binding in `bindings` under a single new
    /// batch. Per-binding failures are skipped and warned on; other members
    /// of the batch still register. Returns a handle whose revocation
    /// removes exactly the members that made it in.
    pub fn register(
        &mut self,
        bindings: Vec<Binding<A>>,
        layout: &Layout,
        diagnostics: &dyn DiagnosticSink,
    ) -> Handle {
        let batch = self.next_batch;
        self.next_batch += 1;

        for binding in bindings {
            match normalize(binding, layout) {
                Ok(normalized) => self.entries.push(Entry {
                    batch,
                    binding: normalized,
                }),
                Err(err) => diagnostics.warn(&format!("skipped binding: {err}")),
            }
        }

        Handle(batch)
    }

    /// Removes every binding registered under `handle`'s batch. A no-op if
    /// the batch was already revoked (§4.1: "idempotent").
    pub fn unregister(&mut self, handle: Handle) {
        self.entries.retain(|entry| entry.batch != handle.0);
    }

    /// Iterates over every live binding in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &NormalizedBinding<A>> {
        self.entries.iter().map(|entry| &entry.binding)
    }
}

fn normalize<A>(binding: Binding<A>, layout: &Layout) -> Result<NormalizedBinding<A>> {
    if binding.sequence.is_empty() {
        return Err(Error::EmptySequence);
    }

    let selector = Selector::parse(&binding.selector)?;

    let mut sequence = Vec::with_capacity(binding.sequence.len());
    for spec in &binding.sequence {
        let stroke: Stroke = shortkey_stroke::normalize(spec, layout)?;
        sequence.push(stroke);
    }

    let specificity = selector.specificity();
    Ok(NormalizedBinding {
        sequence,
        selector,
        specificity,
        handler: binding.handler,
        args: binding.args,
    })
}
