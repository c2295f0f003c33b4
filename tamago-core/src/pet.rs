//! [`Pet`] — a single owner for a pet's state, cooldown and phrase source.
//!
//! The free functions in [`crate::actions`], [`crate::decay`] and
//! [`crate::queries`] do the work; `Pet` just keeps the pieces together so
//! a front-end holds one value per session. Reset is re-construction.

use std::fmt;

use crate::actions;
use crate::config::{DecayConfig, TamagoConfig};
use crate::cooldown::{self, Cooldown};
use crate::decay::{self, DecayOutcome};
use crate::phrases::{PhraseSource, RandomPhrases};
use crate::queries;
use crate::state::PetState;
use crate::types::{Action, ActionOutcome, Demeanor, Expression, Millis, OverallStatus, PetSnapshot};

/// One pet and everything needed to drive it.
pub struct Pet {
    state: PetState,
    cooldown: Cooldown,
    decay: DecayConfig,
    phrases: Box<dyn PhraseSource + Send>,
}

impl Pet {
    /// A fresh pet with random thoughts.
    #[must_use]
    pub fn new(config: &TamagoConfig) -> Self {
        Self::with_phrases(config, RandomPhrases::from_entropy())
    }

    /// A fresh pet drawing thoughts from `phrases`.
    #[must_use]
    pub fn with_phrases(
        config: &TamagoConfig,
        phrases: impl PhraseSource + Send + 'static,
    ) -> Self {
        Self::from_state(PetState::new(&config.pet), config, phrases)
    }

    /// Wrap an existing state.
    #[must_use]
    pub fn from_state(
        state: PetState,
        config: &TamagoConfig,
        phrases: impl PhraseSource + Send + 'static,
    ) -> Self {
        Self {
            state,
            cooldown: Cooldown::new(config.timing.cooldown_ms),
            decay: config.decay,
            phrases: Box::new(phrases),
        }
    }

    /// Read access to the raw state.
    #[must_use]
    pub fn state(&self) -> &PetState {
        &self.state
    }

    /// Write access to the raw state, for callers that need to force values.
    pub fn state_mut(&mut self) -> &mut PetState {
        &mut self.state
    }

    /// When the pending cooldown release fires, if any.
    #[must_use]
    pub fn cooldown_deadline(&self) -> Option<Millis> {
        self.cooldown.pending()
    }

    /// Fire a due cooldown release. Returns `true` if `busy` was cleared.
    pub fn poll(&mut self, now: Millis) -> bool {
        cooldown::release_due(&mut self.state, &mut self.cooldown, now)
    }

    /// Feed the pet. `false` if refused.
    pub fn feed(&mut self, now: Millis) -> bool {
        actions::feed(&mut self.state, &mut self.cooldown, now).is_accepted()
    }

    /// Put the pet to sleep. `false` if refused.
    pub fn sleep(&mut self, now: Millis) -> bool {
        actions::sleep(&mut self.state, &mut self.cooldown, now).is_accepted()
    }

    /// Play with the pet. `false` if refused.
    pub fn play(&mut self, now: Millis) -> bool {
        actions::play(&mut self.state, &mut self.cooldown, now, self.phrases.as_mut()).is_accepted()
    }

    /// Run `action`, reporting why it was refused if it was.
    pub fn perform(&mut self, action: Action, now: Millis) -> ActionOutcome {
        actions::perform(
            action,
            &mut self.state,
            &mut self.cooldown,
            now,
            self.phrases.as_mut(),
        )
    }

    /// One passive decay tick.
    pub fn decay(&mut self) -> DecayOutcome {
        decay::decay(&mut self.state, &self.decay)
    }

    /// Current thought; see [`queries::think`].
    pub fn think(&mut self, now: Millis) -> String {
        self.poll(now);
        queries::think(&mut self.state, self.phrases.as_mut()).to_string()
    }

    /// See [`queries::overall_status`].
    #[must_use]
    pub fn overall_status(&self) -> OverallStatus {
        queries::overall_status(&self.state)
    }

    /// See [`queries::expression`].
    #[must_use]
    pub fn expression(&self) -> Expression {
        queries::expression(&self.state)
    }

    /// See [`queries::demeanor`].
    #[must_use]
    pub fn demeanor(&self) -> Demeanor {
        queries::demeanor(&self.state)
    }

    /// See [`queries::is_dead`].
    #[must_use]
    pub fn is_dead(&self) -> bool {
        queries::is_dead(&self.state)
    }

    /// See [`queries::snapshot`].
    #[must_use]
    pub fn snapshot(&self, name: &str) -> PetSnapshot {
        queries::snapshot(&self.state, name)
    }
}

impl fmt::Debug for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pet")
            .field("state", &self.state)
            .field("cooldown", &self.cooldown)
            .field("decay", &self.decay)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrases::ScriptedPhrases;

    fn pet() -> Pet {
        Pet::with_phrases(&TamagoConfig::default(), ScriptedPhrases::new(vec![0]))
    }

    #[test]
    fn think_polls_cooldown_first() {
        let mut pet = pet();
        assert!(pet.feed(Millis::ZERO));
        assert_eq!(pet.think(Millis(100)), crate::phrases::FEED_SATED);
        // After the release the pet thinks for itself again (happiness 85).
        assert_eq!(pet.think(Millis(500)), crate::phrases::HAPPY[0]);
        assert!(!pet.state().busy);
    }

    #[test]
    fn configured_cooldown_is_honoured() {
        let mut config = TamagoConfig::default();
        config.timing.cooldown_ms = 50;
        let mut pet = Pet::with_phrases(&config, ScriptedPhrases::new(vec![0]));
        pet.state_mut().hunger = 90.0;
        assert!(pet.feed(Millis::ZERO));
        assert_eq!(pet.cooldown_deadline(), Some(Millis(50)));
        assert!(pet.feed(Millis(50)));
    }

    #[test]
    fn dead_pet_still_accepts_calls() {
        let mut pet = pet();
        pet.state_mut().happiness = 0.0;
        assert!(pet.is_dead());
        assert!(pet.feed(Millis::ZERO));
    }
}
