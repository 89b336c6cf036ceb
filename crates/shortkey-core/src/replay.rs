//! Event Replay (§4.5): redelivers suppressed events to the host as if the
//! engine had never interfered.
//!
//! A small trait the host implements, invoked once per event in original
//! order. The sink gets the engine back along with the event: a host whose
//! normal listener chain is what calls `Engine::process` on a live keypress
//! will typically redeliver by invoking that same listener, which means
//! `process` gets called again, reentrant, while the replay loop above it is
//! still running. The `replaying` flag on [`crate::controller::PendingState`]
//! is what makes that reentrant call a no-op instead of a second round of
//! matching.

use crate::{engine::Engine, event::HostEvent};

/// Redelivers a replayed event into the host's real listener chain.
///
/// The engine already holds a faithful clone of the suppressed event (taken
/// at suppression time, before any host-side field zeroing could occur);
/// this trait's job is to hand that clone back to the host so the document
/// root and any bypassed listener observe it normally. `engine` is the same
/// engine instance that is replaying, handed back so a sink whose
/// redelivery path loops back through the engine's own listener can do so
/// directly rather than needing a second channel.
pub trait ReplaySink<A, E: HostEvent> {
    /// Redispatches `event` on its original target.
    fn redeliver(&self, event: E, engine: &mut Engine<A, E>);
}

/// A sink that does nothing, for engines that don't need replay visibility
/// (e.g. a headless test harness that only asserts on suppression, not on
/// what the bypassed listener eventually sees).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReplaySink;

impl<A, E: HostEvent> ReplaySink<A, E> for NullReplaySink {
    fn redeliver(&self, _event: E, _engine: &mut Engine<A, E>) {}
}

/// Replays every suppressed event, in original order, to `sink`.
///
/// Callers are responsible for the `replaying` re-entrancy guard (§5): this
/// function is intentionally unaware of engine state, it only walks the
/// list.
pub(crate) fn replay_all<A, E: HostEvent>(
    suppressed: Vec<E>,
    sink: &dyn ReplaySink<A, E>,
    engine: &mut Engine<A, E>,
) {
    for event in suppressed {
        sink.redeliver(event, engine);
    }
}
