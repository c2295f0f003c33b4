//! Passive decay — how needs wear down between actions.
//!
//! Each tick:
//!   hunger    += hunger_step      (capped at 100)
//!   energy    -= energy_step      (floored at 0)
//!   happiness -= happiness_step   if hunger > hunger_threshold
//!   happiness -= happiness_step   if energy < energy_threshold
//!
//! The two happiness penalties are independent and are evaluated against the
//! needs *after* the hunger/energy update, so a single tick can cost between
//! zero and two steps of happiness. Decay ignores `busy`.

use crate::config::DecayConfig;
use crate::state::PetState;
use crate::types::clamp_stat;

/// Which happiness penalties fired during a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecayOutcome {
    /// Hunger was above threshold.
    pub hunger_penalty: bool,
    /// Energy was below threshold.
    pub fatigue_penalty: bool,
}

impl DecayOutcome {
    /// Number of happiness steps lost this tick (0–2).
    #[must_use]
    pub fn penalties(self) -> u8 {
        u8::from(self.hunger_penalty) + u8::from(self.fatigue_penalty)
    }
}

/// Apply one decay tick to `state`.
pub fn decay(state: &mut PetState, config: &DecayConfig) -> DecayOutcome {
    state.hunger = clamp_stat(state.hunger + config.hunger_step);
    state.energy = clamp_stat(state.energy - config.energy_step);

    let mut outcome = DecayOutcome::default();
    if state.hunger > config.hunger_threshold {
        state.happiness = clamp_stat(state.happiness - config.happiness_step);
        outcome.hunger_penalty = true;
    }
    if state.energy < config.energy_threshold {
        state.happiness = clamp_stat(state.happiness - config.happiness_step);
        outcome.fatigue_penalty = true;
    }

    tracing::trace!(
        hunger = state.hunger,
        energy = state.energy,
        happiness = state.happiness,
        penalties = outcome.penalties(),
        "decay tick"
    );
    outcome
}
