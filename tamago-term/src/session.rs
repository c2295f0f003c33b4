//! One play session: a named pet, its phrase source, and the rules the
//! front-end layers on top of the model.
//!
//! The model keeps accepting actions after death; the session is where
//! they get switched off until the player resets.

use tamago_core::config::TamagoConfig;
use tamago_core::phrases::{PhraseSource, RandomPhrases};
use tamago_core::{Action, ActionOutcome, Millis, Pet, PetSnapshot};
use tracing::{debug, info};

use crate::commands::Command;
use crate::handle::PetHandle;

/// Builds the phrase source for each new pet.
pub type PhraseFactory = Box<dyn FnMut() -> Box<dyn PhraseSource + Send> + Send>;

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// An action was attempted.
    Acted {
        /// Which action.
        action: Action,
        /// Accepted or why not.
        outcome: ActionOutcome,
    },
    /// The pet is dead; actions are disabled until reset.
    Disabled,
    /// Nothing changed; just look.
    Status,
    /// The pet has a new name.
    Renamed(String),
    /// A fresh pet replaced the old one.
    Reset,
    /// Show help.
    Help,
    /// End the session.
    Quit,
}

/// A single pet session.
pub struct Session {
    handle: PetHandle,
    config: TamagoConfig,
    name: String,
    phrases: PhraseFactory,
    death_reported: bool,
}

impl Session {
    /// Session with random thoughts. A `seed` makes them reproducible.
    #[must_use]
    pub fn new(config: TamagoConfig, seed: Option<u64>) -> Self {
        let mut resets: u64 = 0;
        let factory: PhraseFactory = Box::new(move || -> Box<dyn PhraseSource + Send> {
            let source = match seed {
                Some(seed) => RandomPhrases::seeded(seed.wrapping_add(resets)),
                None => RandomPhrases::from_entropy(),
            };
            resets += 1;
            Box::new(source)
        });
        Self::with_phrase_factory(config, factory)
    }

    /// Session whose pets draw thoughts from `phrases()`.
    #[must_use]
    pub fn with_phrase_factory(config: TamagoConfig, mut phrases: PhraseFactory) -> Self {
        let pet = Pet::with_phrases(&config, phrases());
        let name = config.pet.name.clone();
        info!(%name, "session started");
        Self {
            handle: PetHandle::new(pet),
            config,
            name,
            phrases,
            death_reported: false,
        }
    }

    /// Shared handle to the pet, for the decay ticker.
    #[must_use]
    pub fn handle(&self) -> PetHandle {
        self.handle.clone()
    }

    /// Configuration this session was built from.
    #[must_use]
    pub fn config(&self) -> &TamagoConfig {
        &self.config
    }

    /// Current display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply one command at time `now`.
    pub fn apply(&mut self, command: Command, now: Millis) -> Reply {
        match command {
            Command::Act(action) => {
                let mut pet = self.handle.lock();
                if pet.is_dead() {
                    debug!(%action, "action ignored, pet is dead");
                    return Reply::Disabled;
                }
                let outcome = pet.perform(action, now);
                Reply::Acted { action, outcome }
            }
            Command::Status => Reply::Status,
            Command::Rename(name) => {
                // Blank names fall back to the configured default.
                self.name = if name.trim().is_empty() {
                    self.config.pet.name.clone()
                } else {
                    name
                };
                Reply::Renamed(self.name.clone())
            }
            Command::Reset => {
                self.reset();
                Reply::Reset
            }
            Command::Help => Reply::Help,
            Command::Quit => Reply::Quit,
        }
    }

    /// Replace the pet with a fresh one. The name is kept.
    pub fn reset(&mut self) {
        self.handle.replace(Pet::with_phrases(&self.config, (self.phrases)()));
        self.death_reported = false;
        info!(name = %self.name, "pet reset");
    }

    /// Think, then capture everything a renderer needs.
    pub fn frame(&mut self, now: Millis) -> PetSnapshot {
        let snapshot = {
            let mut pet = self.handle.lock();
            pet.think(now);
            pet.snapshot(&self.name)
        };
        if snapshot.dead && !self.death_reported {
            self.death_reported = true;
            info!(name = %self.name, status = %snapshot.status, "pet needs more care");
        }
        snapshot
    }

    /// When the pet's cooldown ends, if one is pending.
    #[must_use]
    pub fn cooldown_deadline(&self) -> Option<Millis> {
        self.handle.lock().cooldown_deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tamago_core::phrases::ScriptedPhrases;
    use tamago_core::Rejection;

    fn session() -> Session {
        let factory: PhraseFactory = Box::new(|| -> Box<dyn PhraseSource + Send> {
            Box::new(ScriptedPhrases::new(vec![0]))
        });
        Session::with_phrase_factory(TamagoConfig::default(), factory)
    }

    #[test]
    fn actions_reach_the_pet() {
        let mut s = session();
        let reply = s.apply(Command::Act(Action::Sleep), Millis(0));
        assert_eq!(
            reply,
            Reply::Acted {
                action: Action::Sleep,
                outcome: ActionOutcome::Rejected(Rejection::NotSleepy)
            }
        );
        assert!(matches!(
            s.apply(Command::Act(Action::Feed), Millis(0)),
            Reply::Acted { outcome: ActionOutcome::Accepted, .. }
        ));
        assert_eq!(s.cooldown_deadline(), Some(Millis(500)));
    }

    #[test]
    fn dead_pet_disables_actions_until_reset() {
        let mut s = session();
        s.handle().lock().state_mut().energy = 0.0;
        assert!(s.frame(Millis(0)).dead);
        assert_eq!(s.apply(Command::Act(Action::Feed), Millis(0)), Reply::Disabled);

        assert_eq!(s.apply(Command::Reset, Millis(0)), Reply::Reset);
        let frame = s.frame(Millis(0));
        assert!(!frame.dead);
        assert_eq!((frame.hunger, frame.energy, frame.happiness), (50, 100, 75));
    }

    #[test]
    fn rename_and_blank_fallback() {
        let mut s = session();
        assert_eq!(
            s.apply(Command::Rename("Tama".into()), Millis(0)),
            Reply::Renamed("Tama".into())
        );
        assert_eq!(s.frame(Millis(0)).name, "Tama");
        s.apply(Command::Rename("  ".into()), Millis(0));
        assert_eq!(s.name(), "Michi");
    }

    #[test]
    fn reset_keeps_name() {
        let mut s = session();
        s.apply(Command::Rename("Tama".into()), Millis(0));
        s.apply(Command::Reset, Millis(0));
        assert_eq!(s.name(), "Tama");
    }

    #[test]
    fn seeded_sessions_think_alike() {
        let mut a = Session::new(TamagoConfig::default(), Some(9));
        let mut b = Session::new(TamagoConfig::default(), Some(9));
        for t in 0..10 {
            assert_eq!(a.frame(Millis(t)).thought, b.frame(Millis(t)).thought);
        }
    }
}
