//! User actions — guarded transformations on a [`PetState`].
//!
//! Every action follows the same shape:
//!
//! 1. release a due cooldown,
//! 2. check preconditions (refusal leaves the needs untouched),
//! 3. clamp-and-adjust the needs,
//! 4. engage the cooldown.
//!
//! | Action | Refused when                 | Hunger | Energy | Happiness |
//! |--------|------------------------------|--------|--------|-----------|
//! | feed   | busy                         | −40    |        | +10       |
//! | sleep  | busy, energy > 90            | +10    | +60    | +15       |
//! | play   | busy, hunger > 80, energy < 20 | +20  | −30    | +30       |

use tracing::debug;

use crate::cooldown::{self, Cooldown};
use crate::phrases::{self, PhraseSource};
use crate::state::PetState;
use crate::types::{clamp_stat, Action, ActionOutcome, Millis, Rejection};

const FEED_HUNGER: f32 = 40.0;
const FEED_HAPPINESS: f32 = 10.0;
const FEED_SATED_BELOW: f32 = 20.0;

const SLEEP_MAX_ENERGY: f32 = 90.0;
const SLEEP_ENERGY: f32 = 60.0;
const SLEEP_HAPPINESS: f32 = 15.0;
const SLEEP_HUNGER: f32 = 10.0;

const PLAY_MAX_HUNGER: f32 = 80.0;
const PLAY_MIN_ENERGY: f32 = 20.0;
const PLAY_ENERGY: f32 = 30.0;
const PLAY_HAPPINESS: f32 = 30.0;
const PLAY_HUNGER: f32 = 20.0;

/// Feed the pet.
pub fn feed(state: &mut PetState, cooldown: &mut Cooldown, now: Millis) -> ActionOutcome {
    cooldown::release_due(state, cooldown, now);
    if state.busy {
        return reject(Action::Feed, Rejection::Busy);
    }

    state.hunger = clamp_stat(state.hunger - FEED_HUNGER);
    state.happiness = clamp_stat(state.happiness + FEED_HAPPINESS);
    state.last_thought = if state.hunger < FEED_SATED_BELOW {
        phrases::FEED_SATED
    } else {
        phrases::FEED_THANKS
    }
    .to_string();

    accept(Action::Feed, state, cooldown, now)
}

/// Put the pet to sleep.
pub fn sleep(state: &mut PetState, cooldown: &mut Cooldown, now: Millis) -> ActionOutcome {
    cooldown::release_due(state, cooldown, now);
    if state.busy {
        return reject(Action::Sleep, Rejection::Busy);
    }
    if state.energy > SLEEP_MAX_ENERGY {
        state.last_thought = phrases::NOT_SLEEPY.to_string();
        return reject(Action::Sleep, Rejection::NotSleepy);
    }

    state.energy = clamp_stat(state.energy + SLEEP_ENERGY);
    state.happiness = clamp_stat(state.happiness + SLEEP_HAPPINESS);
    state.hunger = clamp_stat(state.hunger + SLEEP_HUNGER);
    state.last_thought = phrases::SLEEPING.to_string();

    accept(Action::Sleep, state, cooldown, now)
}

/// Play with the pet.
pub fn play(
    state: &mut PetState,
    cooldown: &mut Cooldown,
    now: Millis,
    source: &mut dyn PhraseSource,
) -> ActionOutcome {
    cooldown::release_due(state, cooldown, now);
    if state.busy {
        return reject(Action::Play, Rejection::Busy);
    }
    // Hunger is checked first: a pet that is both starving and exhausted
    // says it is hungry.
    if state.hunger > PLAY_MAX_HUNGER {
        state.last_thought = phrases::TOO_HUNGRY_TO_PLAY.to_string();
        return reject(Action::Play, Rejection::TooHungry);
    }
    if state.energy < PLAY_MIN_ENERGY {
        state.last_thought = phrases::TOO_TIRED_TO_PLAY.to_string();
        return reject(Action::Play, Rejection::TooTired);
    }

    state.energy = clamp_stat(state.energy - PLAY_ENERGY);
    state.happiness = clamp_stat(state.happiness + PLAY_HAPPINESS);
    state.hunger = clamp_stat(state.hunger + PLAY_HUNGER);
    state.last_thought = phrases::choose(source, phrases::PLAYING).to_string();

    accept(Action::Play, state, cooldown, now)
}

/// Dispatch `action` to the matching operation.
pub fn perform(
    action: Action,
    state: &mut PetState,
    cooldown: &mut Cooldown,
    now: Millis,
    source: &mut dyn PhraseSource,
) -> ActionOutcome {
    match action {
        Action::Feed => feed(state, cooldown, now),
        Action::Sleep => sleep(state, cooldown, now),
        Action::Play => play(state, cooldown, now, source),
    }
}

fn accept(
    action: Action,
    state: &mut PetState,
    cooldown: &mut Cooldown,
    now: Millis,
) -> ActionOutcome {
    cooldown::engage(state, cooldown, now);
    debug!(
        %action,
        hunger = state.hunger,
        energy = state.energy,
        happiness = state.happiness,
        "action accepted"
    );
    ActionOutcome::Accepted
}

fn reject(action: Action, reason: Rejection) -> ActionOutcome {
    debug!(%action, %reason, "action rejected");
    ActionOutcome::Rejected(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrases::ScriptedPhrases;

    fn fresh() -> (PetState, Cooldown) {
        (PetState::default(), Cooldown::new(500))
    }

    #[test]
    fn feed_lowers_hunger_and_cheers_up() {
        let (mut state, mut cooldown) = fresh();
        assert!(feed(&mut state, &mut cooldown, Millis::ZERO).is_accepted());
        assert_eq!(state.needs(), (10.0, 100.0, 85.0));
        assert_eq!(state.last_thought, phrases::FEED_SATED);
        assert!(state.busy);
    }

    #[test]
    fn feed_when_still_hungry_says_thanks() {
        let mut state = PetState::with_needs(90.0, 50.0, 50.0);
        let mut cooldown = Cooldown::new(500);
        feed(&mut state, &mut cooldown, Millis::ZERO);
        assert!((state.hunger - 50.0).abs() < f32::EPSILON);
        assert_eq!(state.last_thought, phrases::FEED_THANKS);
    }

    #[test]
    fn feed_clamps_at_bounds() {
        let mut state = PetState::with_needs(15.0, 50.0, 95.0);
        let mut cooldown = Cooldown::new(500);
        feed(&mut state, &mut cooldown, Millis::ZERO);
        assert_eq!(state.needs(), (0.0, 50.0, 100.0));
    }

    #[test]
    fn second_feed_during_cooldown_is_rejected() {
        let (mut state, mut cooldown) = fresh();
        assert!(feed(&mut state, &mut cooldown, Millis::ZERO).is_accepted());
        let before = state.clone();

        let outcome = feed(&mut state, &mut cooldown, Millis(10));
        assert_eq!(outcome, ActionOutcome::Rejected(Rejection::Busy));
        assert_eq!(state, before);
    }

    #[test]
    fn feed_after_cooldown_is_accepted() {
        let mut state = PetState::with_needs(90.0, 50.0, 50.0);
        let mut cooldown = Cooldown::new(500);
        assert!(feed(&mut state, &mut cooldown, Millis::ZERO).is_accepted());
        assert!(!feed(&mut state, &mut cooldown, Millis(499)).is_accepted());
        assert!(feed(&mut state, &mut cooldown, Millis(500)).is_accepted());
        assert!((state.hunger - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn sleep_refused_when_rested() {
        let (mut state, mut cooldown) = fresh();
        let outcome = sleep(&mut state, &mut cooldown, Millis::ZERO);
        assert_eq!(outcome, ActionOutcome::Rejected(Rejection::NotSleepy));
        assert_eq!(state.needs(), (50.0, 100.0, 75.0));
        assert!(!state.busy);
        assert_eq!(state.last_thought, phrases::NOT_SLEEPY);
        assert_eq!(cooldown.pending(), None);
    }

    #[test]
    fn sleep_restores_energy() {
        let mut state = PetState::with_needs(50.0, 30.0, 40.0);
        let mut cooldown = Cooldown::new(500);
        assert!(sleep(&mut state, &mut cooldown, Millis::ZERO).is_accepted());
        assert_eq!(state.needs(), (60.0, 90.0, 55.0));
        assert_eq!(state.last_thought, phrases::SLEEPING);
    }

    #[test]
    fn sleep_at_exactly_ninety_is_allowed() {
        let mut state = PetState::with_needs(95.0, 90.0, 95.0);
        let mut cooldown = Cooldown::new(500);
        assert!(sleep(&mut state, &mut cooldown, Millis::ZERO).is_accepted());
        assert_eq!(state.needs(), (100.0, 100.0, 100.0));
    }

    #[test]
    fn busy_sleep_keeps_thought() {
        let (mut state, mut cooldown) = fresh();
        feed(&mut state, &mut cooldown, Millis::ZERO);
        let thought = state.last_thought.clone();
        state.energy = 10.0;
        assert_eq!(
            sleep(&mut state, &mut cooldown, Millis(1)),
            ActionOutcome::Rejected(Rejection::Busy)
        );
        assert_eq!(state.last_thought, thought);
    }

    #[test]
    fn play_refused_when_tired() {
        let (mut state, mut cooldown) = fresh();
        state.energy = 15.0;
        let mut source = ScriptedPhrases::new(vec![0]);
        let outcome = play(&mut state, &mut cooldown, Millis::ZERO, &mut source);
        assert_eq!(outcome, ActionOutcome::Rejected(Rejection::TooTired));
        assert_eq!(state.needs(), (50.0, 15.0, 75.0));
        assert_eq!(state.last_thought, phrases::TOO_TIRED_TO_PLAY);
    }

    #[test]
    fn play_refused_when_hungry_takes_priority() {
        let mut state = PetState::with_needs(85.0, 10.0, 50.0);
        let mut cooldown = Cooldown::new(500);
        let mut source = ScriptedPhrases::new(vec![0]);
        let outcome = play(&mut state, &mut cooldown, Millis::ZERO, &mut source);
        assert_eq!(outcome, ActionOutcome::Rejected(Rejection::TooHungry));
        assert_eq!(state.last_thought, phrases::TOO_HUNGRY_TO_PLAY);
    }

    #[test]
    fn play_uses_scripted_phrase() {
        let (mut state, mut cooldown) = fresh();
        let mut source = ScriptedPhrases::new(vec![1]);
        assert!(play(&mut state, &mut cooldown, Millis::ZERO, &mut source).is_accepted());
        assert_eq!(state.needs(), (70.0, 70.0, 100.0));
        assert_eq!(state.last_thought, "Wheeee! 🤩");
    }

    #[test]
    fn perform_dispatches() {
        let (mut state, mut cooldown) = fresh();
        let mut source = ScriptedPhrases::new(vec![0]);
        let outcome = perform(Action::Sleep, &mut state, &mut cooldown, Millis::ZERO, &mut source);
        assert_eq!(outcome, ActionOutcome::Rejected(Rejection::NotSleepy));
    }
}
