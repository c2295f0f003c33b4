//! The pet state record.

use serde::{Deserialize, Serialize};

use crate::config::PetConfig;
use crate::phrases::GREETING;
use crate::types::clamp_stat;

/// Everything the model knows about one pet.
///
/// Fields are public so a caller (or a test) can inspect and force values,
/// but every operation in this crate keeps the three needs inside
/// `[0, 100]`. Use [`PetState::with_needs`] to build a state from
/// arbitrary numbers with clamping applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetState {
    /// 0 = sated, 100 = starving.
    pub hunger: f32,
    /// 0 = exhausted, 100 = fully rested.
    pub energy: f32,
    /// 0 = miserable, 100 = elated.
    pub happiness: f32,
    /// True while an action cooldown is pending.
    pub busy: bool,
    /// Most recent thought, shown in the bubble.
    pub last_thought: String,
}

impl PetState {
    /// A fresh pet with the starting needs from `config`.
    #[must_use]
    pub fn new(config: &PetConfig) -> Self {
        Self::with_needs(
            config.initial_hunger,
            config.initial_energy,
            config.initial_happiness,
        )
    }

    /// A pet with the given needs, clamped into range. Not busy.
    #[must_use]
    pub fn with_needs(hunger: f32, energy: f32, happiness: f32) -> Self {
        Self {
            hunger: clamp_stat(hunger),
            energy: clamp_stat(energy),
            happiness: clamp_stat(happiness),
            busy: false,
            last_thought: GREETING.to_string(),
        }
    }

    /// `(hunger, energy, happiness)`.
    #[must_use]
    pub fn needs(&self) -> (f32, f32, f32) {
        (self.hunger, self.energy, self.happiness)
    }

    /// Whether all three needs are inside `[0, 100]`.
    #[must_use]
    pub fn in_bounds(&self) -> bool {
        let range = crate::types::STAT_MIN..=crate::types::STAT_MAX;
        range.contains(&self.hunger)
            && range.contains(&self.energy)
            && range.contains(&self.happiness)
    }
}

impl Default for PetState {
    fn default() -> Self {
        Self::new(&PetConfig::default())
    }
}
