//! The public `Engine` API (§6).

use std::sync::Arc;

use shortkey_stroke::Layout;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::{
    controller::{AMBIGUITY_WINDOW, PendingState},
    diagnostic::{DiagnosticSink, TracingSink},
    dispatcher,
    event::HostEvent,
    matcher,
    registry::Registry,
    replay::{self, NullReplaySink, ReplaySink},
    types::{Binding, Handle, NormalizedBinding},
};

/// The dispatcher's matching and scheduling engine.
///
/// Owns a [`Registry`], the [`PendingState`] machine, the configured
/// canonicalizer [`Layout`], the diagnostic sink, and a replay sink the host
/// supplies to observe redelivered events. One engine instance is private
/// to whatever listener installed it (§5: "Nothing in the specification
/// requires a global singleton").
pub struct Engine<A, E: HostEvent> {
    registry: Registry<A>,
    pending: PendingState<A, E>,
    layout: Layout,
    diagnostics: Arc<dyn DiagnosticSink>,
    replay_sink: Arc<dyn ReplaySink<A, E>>,
    timer_tx: mpsc::UnboundedSender<u64>,
    timer_rx: mpsc::UnboundedReceiver<u64>,
}

impl<A, E> Engine<A, E>
where
    A: Clone,
    E: HostEvent,
    E::Node: PartialEq,
{
    /// Constructs an engine with the default US-English layout, a
    /// `tracing`-backed diagnostic sink, and no replay visibility.
    pub fn new() -> Self {
        Self::with_layout(Layout::us_english())
    }

    /// Constructs an engine with a caller-supplied canonicalizer layout.
    pub fn with_layout(layout: Layout) -> Self {
        Self::build(layout, Arc::new(TracingSink), Arc::new(NullReplaySink))
    }

    /// Constructs an engine with every collaborator explicitly supplied —
    /// the constructor integration tests and hosts that care about replay
    /// visibility use.
    pub fn with_collaborators(
        layout: Layout,
        diagnostics: Arc<dyn DiagnosticSink>,
        replay_sink: Arc<dyn ReplaySink<A, E>>,
    ) -> Self {
        Self::build(layout, diagnostics, replay_sink)
    }

    fn build(
        layout: Layout,
        diagnostics: Arc<dyn DiagnosticSink>,
        replay_sink: Arc<dyn ReplaySink<A, E>>,
    ) -> Self {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        Self {
            registry: Registry::new(),
            pending: PendingState::default(),
            layout,
            diagnostics,
            replay_sink,
            timer_tx,
            timer_rx,
        }
    }

    /// Read-only view of the configured layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Registers a batch of bindings (§4.1). Invalid members are skipped and
    /// warned about; the returned handle revokes exactly the members that
    /// made it in.
    pub fn register(&mut self, bindings: Vec<Binding<A>>) -> Handle {
        self.registry
            .register(bindings, &self.layout, self.diagnostics.as_ref())
    }

    /// Revokes a batch. Idempotent (§4.1).
    pub fn unregister(&mut self, handle: Handle) {
        self.registry.unregister(handle);
    }

    /// The host calls this from its own key-press listener (§6). Never
    /// blocks, never panics out to the host (§7: "the engine aspires to
    /// never throw out of `process`").
    pub fn process(&mut self, event: &mut E) {
        if self.pending.replaying {
            return;
        }

        let Some(stroke) = shortkey_stroke::canonicalize(event, &self.layout) else {
            return;
        };
        self.pending.sequence.push(stroke);

        let (exact, partial) = self.classify_snapshot();
        trace!(
            seq_len = self.pending.sequence.len(),
            exact = exact.len(),
            partial = partial.len(),
            "sequence_classified"
        );

        match (exact.is_empty(), partial.is_empty()) {
            (true, true) => self.abort(event),
            (false, true) => self.fire_exact(&exact, event),
            (true, false) => {
                if self.partials_reach_path(&partial, event) {
                    self.enter_pending(None, event);
                } else {
                    self.abort(event);
                }
            }
            (false, false) => {
                if self.partials_reach_path(&partial, event) {
                    self.enter_pending(Some(exact), event);
                } else {
                    self.fire_exact(&exact, event);
                }
            }
        }
    }

    /// Awaits the next ambiguity-timer expiry and drives the commit/abort
    /// transition it triggers (§4.4 "Timer expiry in S1"). Intended to be
    /// raced against the host's own event source, e.g.:
    /// `tokio::select! { e = events.recv() => engine.process(&mut e), _ = engine.wait_for_timer() => {} }`
    /// Returns `false` if the engine will never produce another expiry
    /// (the sender side was dropped, which only happens if `self` itself
    /// was dropped — callers don't observe this in practice).
    pub async fn wait_for_timer(&mut self) -> bool {
        loop {
            match self.timer_rx.recv().await {
                Some(generation) if self.pending.timer.is_some() && generation == self.pending.generation => {
                    self.pending.timer = None;
                    self.commit_on_timeout();
                    return true;
                }
                Some(_) => continue,
                None => return false,
            }
        }
    }

    fn classify_snapshot(&self) -> (Vec<NormalizedBinding<A>>, Vec<NormalizedBinding<A>>) {
        let outcome = matcher::classify(self.registry.iter(), &self.pending.sequence);
        (
            outcome.exact.into_iter().cloned().collect(),
            outcome.partial.into_iter().cloned().collect(),
        )
    }

    fn partials_reach_path(&self, partial: &[NormalizedBinding<A>], event: &E) -> bool {
        let refs: Vec<&NormalizedBinding<A>> = partial.iter().collect();
        dispatcher::path_has_match(&refs, event.target(), &event.current_target())
    }

    fn fire_exact(&mut self, exact: &[NormalizedBinding<A>], event: &mut E) {
        let refs: Vec<&NormalizedBinding<A>> = exact.iter().collect();
        dispatcher::dispatch(&refs, event, self.diagnostics.as_ref());
        debug!("exact_dispatched");
        self.pending.reset();
    }

    fn enter_pending(&mut self, deferred_exact: Option<Vec<NormalizedBinding<A>>>, event: &mut E) {
        event.prevent_default();
        event.stop_propagation();
        self.pending.suppressed.push(event.clone());
        self.pending.deferred_exact = deferred_exact.map(|exact| (exact, event.clone()));
        self.start_timer();
        debug!(
            suppressed = self.pending.suppressed.len(),
            has_deferred = self.pending.deferred_exact.is_some(),
            "entered_pending"
        );
    }

    fn abort(&mut self, _event: &mut E) {
        let suppressed = std::mem::take(&mut self.pending.suppressed);
        self.pending.reset();
        if !suppressed.is_empty() {
            debug!(count = suppressed.len(), "aborting_replay");
            self.replay(suppressed);
        }
        // The current event is left untouched: no prevent_default/stop_propagation.
    }

    fn commit_on_timeout(&mut self) {
        let suppressed = std::mem::take(&mut self.pending.suppressed);
        let deferred = self.pending.deferred_exact.take();
        self.pending.reset();

        match deferred {
            Some((exact, mut event)) => {
                let refs: Vec<&NormalizedBinding<A>> = exact.iter().collect();
                debug!("deferred_exact_committed");
                dispatcher::dispatch(&refs, &mut event, self.diagnostics.as_ref());
            }
            None => {
                debug!(count = suppressed.len(), "timeout_replay");
                self.replay(suppressed);
            }
        }
    }

    fn replay(&mut self, suppressed: Vec<E>) {
        self.pending.replaying = true;
        let sink = self.replay_sink.clone();
        replay::replay_all(suppressed, sink.as_ref(), self);
        self.pending.replaying = false;
    }

    fn start_timer(&mut self) {
        if let Some(old) = self.pending.timer.take() {
            old.cancel();
        }
        self.pending.generation += 1;
        let generation = self.pending.generation;

        let token = CancellationToken::new();
        let cancel = token.clone();
        let tx = self.timer_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(AMBIGUITY_WINDOW) => {
                    let _ = tx.send(generation);
                }
                _ = cancel.cancelled() => {}
            }
        });
        self.pending.timer = Some(token);
    }
}

impl<A, E> Default for Engine<A, E>
where
    A: Clone,
    E: HostEvent,
    E::Node: PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}
