//! Action cooldown — a single-entry cooperative timer queue.
//!
//! An accepted action schedules a release at `now + period`. Nothing fires
//! on its own: the owner calls [`release_due`] (or [`Cooldown::take_due`])
//! with the current time, and the pending entry is consumed exactly once.
//! Dropping the [`Cooldown`] drops the entry, so a pet discarded mid-cooldown
//! leaves nothing behind.

use crate::state::PetState;
use crate::types::Millis;

/// Pending release of the `busy` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cooldown {
    period_ms: u64,
    release_at: Option<Millis>,
}

impl Cooldown {
    /// A cooldown that blocks actions for `period_ms` after each accepted one.
    #[must_use]
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            release_at: None,
        }
    }

    /// Configured period in milliseconds.
    #[must_use]
    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// When the pending release fires, if one is pending.
    #[must_use]
    pub fn pending(&self) -> Option<Millis> {
        self.release_at
    }

    /// Enqueue a release at `now + period`, replacing any earlier entry.
    pub fn schedule(&mut self, now: Millis) -> Millis {
        let at = now.after(self.period_ms);
        self.release_at = Some(at);
        at
    }

    /// Whether the pending release is due at `now`.
    #[must_use]
    pub fn is_due(&self, now: Millis) -> bool {
        self.release_at.is_some_and(|at| now >= at)
    }

    /// Consume the pending release if it is due. Returns `true` at most once
    /// per scheduled entry.
    pub fn take_due(&mut self, now: Millis) -> bool {
        if self.is_due(now) {
            self.release_at = None;
            true
        } else {
            false
        }
    }

    /// Drop the pending release without firing it. Returns whether one was
    /// pending.
    pub fn cancel(&mut self) -> bool {
        self.release_at.take().is_some()
    }
}

/// Fire the cooldown's release into `state` if it is due at `now`.
///
/// Returns `true` if `busy` was cleared by this call.
pub fn release_due(state: &mut PetState, cooldown: &mut Cooldown, now: Millis) -> bool {
    if cooldown.take_due(now) {
        state.busy = false;
        tracing::trace!(%now, "cooldown released");
        true
    } else {
        false
    }
}

/// Mark `state` busy and schedule its release.
pub(crate) fn engage(state: &mut PetState, cooldown: &mut Cooldown, now: Millis) {
    state.busy = true;
    let at = cooldown.schedule(now);
    tracing::trace!(%now, release_at = %at, "cooldown engaged");
}
