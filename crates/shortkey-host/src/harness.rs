//! A harness that feeds key events to an [`Engine`] and records what was
//! replayed, reused here by the integration tests and the demo binary
//! instead of being duplicated per caller.

use std::sync::{Arc, Mutex};

use shortkey_core::{Binding, CapturingSink, Engine, Handle, ReplaySink};

use crate::key_event::KeyEvent;

struct RecordingReplaySink {
    log: Mutex<Vec<KeyEvent>>,
}

impl<A: Clone> ReplaySink<A, KeyEvent> for RecordingReplaySink {
    fn redeliver(&self, event: KeyEvent, _engine: &mut Engine<A, KeyEvent>) {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).push(event);
    }
}

/// Drives an [`Engine`] against synthetic [`KeyEvent`]s and records every
/// diagnostic and replayed event for assertions.
pub struct Harness<A> {
    engine: Engine<A, KeyEvent>,
    diagnostics: Arc<CapturingSink>,
    replayed: Arc<RecordingReplaySink>,
}

impl<A: Clone> Harness<A> {
    /// Builds a harness with the default layout, a capturing diagnostic
    /// sink, and a replay sink that records every redelivered event.
    pub fn new() -> Self {
        let diagnostics = Arc::new(CapturingSink::new());
        // KeyEvent is !Send (it shares prevent_default/stop_propagation via
        // Rc), so this Arc's contents are never actually sent across threads.
        #[allow(clippy::arc_with_non_send_sync)]
        let replayed = Arc::new(RecordingReplaySink { log: Mutex::new(Vec::new()) });
        let engine = Engine::with_collaborators(
            shortkey_stroke::Layout::us_english(),
            diagnostics.clone(),
            replayed.clone(),
        );
        Self { engine, diagnostics, replayed }
    }

    /// Registers a batch of bindings.
    pub fn register(&mut self, bindings: Vec<Binding<A>>) -> Handle {
        self.engine.register(bindings)
    }

    /// Revokes a batch.
    pub fn unregister(&mut self, handle: Handle) {
        self.engine.unregister(handle);
    }

    /// Delivers `event` to the engine, mutating it in place the way a real
    /// listener invocation would.
    pub fn fire(&mut self, event: &mut KeyEvent) {
        self.engine.process(event);
    }

    /// Awaits the next ambiguity-timer expiry, driving its commit/abort.
    pub async fn wait_for_timer(&mut self) -> bool {
        self.engine.wait_for_timer().await
    }

    /// Registration warnings emitted so far, in order.
    pub fn warnings(&self) -> Vec<String> {
        self.diagnostics.warnings()
    }

    /// Handler errors emitted so far, in order.
    pub fn errors(&self) -> Vec<String> {
        self.diagnostics.errors()
    }

    /// Primary keys of every event replayed so far, in replay order.
    pub fn replayed_keys(&self) -> Vec<String> {
        self.replayed
            .log
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|event| event.key().to_string())
            .collect()
    }
}

impl<A: Clone> Default for Harness<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use shortkey_core::HandlerResult;

    use super::*;
    use crate::{document::NodeHandle, key_event::Modifiers};

    #[test]
    fn harness_drives_a_simple_binding() {
        let root = NodeHandle::root("body");
        let n = root.child("div", Some("n"), &[]);
        let mut harness: Harness<()> = Harness::new();
        harness.register(vec![Binding::new(["ctrl+;"], "#n", |_: &()| -> HandlerResult { Ok(true) }, ())]);

        let mut event = KeyEvent::new(";", Modifiers::ctrl(), n, root);
        harness.fire(&mut event);

        assert!(event.default_prevented());
        assert!(harness.warnings().is_empty());
    }
}
