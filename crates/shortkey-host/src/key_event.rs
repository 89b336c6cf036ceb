//! A fake key-press event implementing the `RawKeyEvent`/`HostEvent`
//! collaborator interfaces, for driving an [`shortkey_core::Engine`] in
//! tests and the demo binary.

use std::{cell::Cell, rc::Rc};

use shortkey_core::HostEvent;
use shortkey_stroke::RawKeyEvent;

use crate::document::NodeHandle;

/// The modifier keys held during a [`KeyEvent`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Modifiers {
    /// Control key held.
    pub ctrl: bool,
    /// Shift key held.
    pub shift: bool,
    /// Alt/Option key held.
    pub alt: bool,
    /// Meta/Command key held.
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub fn none() -> Self {
        Self::default()
    }

    /// Only control held.
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }
}

/// A synthetic key-press event targeted at a node in a [`NodeHandle`] tree.
///
/// Cloning a `KeyEvent` shares the `prevent_default`/`stop_propagation`
/// flags with the original via `Rc<Cell<_>>` — this is deliberate: the
/// engine's suppression bookkeeping mutates clones it stores in
/// `suppressed`, and a caller inspecting its own original after `process()`
/// needs to observe the same flips the engine made.
#[derive(Clone)]
pub struct KeyEvent {
    primary_key: String,
    modifiers: Modifiers,
    target: NodeHandle,
    current_target: NodeHandle,
    default_prevented: Rc<Cell<bool>>,
    propagation_stopped: Rc<Cell<bool>>,
}

impl KeyEvent {
    /// Builds a key event for `primary_key` with `modifiers`, targeted at
    /// `target`, delivered through a listener on `current_target`.
    pub fn new(
        primary_key: impl Into<String>,
        modifiers: Modifiers,
        target: NodeHandle,
        current_target: NodeHandle,
    ) -> Self {
        Self {
            primary_key: primary_key.into(),
            modifiers,
            target,
            current_target,
            default_prevented: Rc::new(Cell::new(false)),
            propagation_stopped: Rc::new(Cell::new(false)),
        }
    }

    /// Whether `prevent_default()` has been called.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// Whether `stop_propagation()` has been called.
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }

    /// The raw primary-key identifier this event carries.
    pub fn key(&self) -> &str {
        &self.primary_key
    }
}

impl RawKeyEvent for KeyEvent {
    fn primary_key(&self) -> &str {
        &self.primary_key
    }
    fn ctrl(&self) -> bool {
        self.modifiers.ctrl
    }
    fn shift(&self) -> bool {
        self.modifiers.shift
    }
    fn alt(&self) -> bool {
        self.modifiers.alt
    }
    fn meta(&self) -> bool {
        self.modifiers.meta
    }
}

impl HostEvent for KeyEvent {
    type Node = NodeHandle;

    fn target(&self) -> NodeHandle {
        self.target.clone()
    }
    fn current_target(&self) -> NodeHandle {
        self.current_target.clone()
    }
    fn prevent_default(&mut self) {
        self.default_prevented.set(true);
    }
    fn stop_propagation(&mut self) {
        self.propagation_stopped.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prevent_default_and_stop_propagation_are_observable() {
        let root = NodeHandle::root("body");
        let mut event = KeyEvent::new(";", Modifiers::ctrl(), root.clone(), root);
        assert!(!event.default_prevented());
        event.prevent_default();
        event.stop_propagation();
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
    }
}
