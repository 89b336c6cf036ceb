//! Pending-State Controller (§4.4): the transient matching state that
//! drives the idle/pending state machine. [`crate::engine::Engine`] owns one
//! instance and performs the actual S0/S1 transitions; this module just
//! defines the record and its reset.

use std::time::Duration;

use shortkey_stroke::Stroke;
use tokio_util::sync::CancellationToken;

use crate::types::NormalizedBinding;

/// One second from the last stroke that extended a partial match (§4.4
/// "Timer duration").
pub const AMBIGUITY_WINDOW: Duration = Duration::from_secs(1);

/// Transient matching state (§3 "Pending State"). Empty when idle (S0);
/// non-empty `sequence` with an armed `timer` means pending (S1).
pub(crate) struct PendingState<A, E> {
    pub(crate) sequence: Vec<Stroke>,
    pub(crate) deferred_exact: Option<(Vec<NormalizedBinding<A>>, E)>,
    pub(crate) suppressed: Vec<E>,
    pub(crate) timer: Option<CancellationToken>,
    /// Bumped on every new timer arm so a stale expiry notification (raced
    /// against a cancel-and-respawn) can be told apart from the live one.
    pub(crate) generation: u64,
    pub(crate) replaying: bool,
}

impl<A, E> Default for PendingState<A, E> {
    fn default() -> Self {
        Self {
            sequence: Vec::new(),
            deferred_exact: None,
            suppressed: Vec::new(),
            timer: None,
            generation: 0,
            replaying: false,
        }
    }
}

impl<A, E> PendingState<A, E> {
    /// Cancels any armed timer and clears everything but `replaying`,
    /// returning to S0. Used by both the abort and commit paths (§4.4: both
    /// "clear all pending state and return to S0").
    pub(crate) fn reset(&mut self) {
        if let Some(token) = self.timer.take() {
            token.cancel();
        }
        self.sequence.clear();
        self.deferred_exact = None;
        self.suppressed.clear();
    }
}
