use shortkey_selector::Node;
use shortkey_stroke::RawKeyEvent;

/// A key-press event as delivered by the host's event-propagation model.
///
/// This is the Rust realization of §6's "Host event model" collaborator
/// interface: a host event exposes `target`/`currentTarget` plus the raw
/// key fields the canonicalizer needs, and supports `preventDefault`/
/// `stopPropagation`. Implementors also need to be `Clone` so the engine can
/// capture a faithful snapshot for suppression and replay (§4.5).
pub trait HostEvent: RawKeyEvent + Clone {
    /// The document node type this event's targets live in.
    type Node: Node;

    /// The node that originated the event.
    fn target(&self) -> Self::Node;

    /// The node whose listener invoked the engine.
    fn current_target(&self) -> Self::Node;

    /// Suppresses the host's default handling of this event.
    fn prevent_default(&mut self);

    /// Stops the event from propagating to further listeners.
    fn stop_propagation(&mut self);
}
