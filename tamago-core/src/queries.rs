//! Derived read-only queries over a [`PetState`].
//!
//! Each query checks its conditions in a fixed priority order and returns
//! exactly one answer. Only [`think`] has a side effect: it caches its pick
//! into `last_thought`.

use crate::phrases::{self, PhraseSource};
use crate::state::PetState;
use crate::types::{Demeanor, Expression, OverallStatus, PetSnapshot, STAT_MAX, STAT_MIN};

const THINK_HUNGRY_ABOVE: f32 = 70.0;
const THINK_TIRED_BELOW: f32 = 30.0;
const HAPPY_ABOVE: f32 = 75.0;
const SAD_BELOW: f32 = 30.0;
const STARVING_ABOVE: f32 = 80.0;
const EXHAUSTED_BELOW: f32 = 20.0;
const PECKISH_ABOVE: f32 = 50.0;
const TIRED_BELOW: f32 = 30.0;

/// Produce the pet's current thought.
///
/// While busy the previous thought is kept. Otherwise the category is
/// picked by priority — hungry, tired, happy, sad, neutral — and one phrase
/// is drawn from it.
pub fn think<'s>(state: &'s mut PetState, source: &mut dyn PhraseSource) -> &'s str {
    if !state.busy {
        let category = if state.hunger > THINK_HUNGRY_ABOVE {
            phrases::HUNGRY
        } else if state.energy < THINK_TIRED_BELOW {
            phrases::TIRED
        } else if state.happiness > HAPPY_ABOVE {
            phrases::HAPPY
        } else if state.happiness < SAD_BELOW {
            phrases::SAD
        } else {
            phrases::NEUTRAL
        };
        state.last_thought = phrases::choose(source, category).to_string();
    }
    &state.last_thought
}

/// One-line status, by priority.
#[must_use]
pub fn overall_status(state: &PetState) -> OverallStatus {
    if state.hunger > STARVING_ABOVE {
        OverallStatus::VeryHungry
    } else if state.energy < EXHAUSTED_BELOW {
        OverallStatus::VeryTired
    } else if state.happiness < SAD_BELOW {
        OverallStatus::VerySad
    } else if state.happiness > HAPPY_ABOVE {
        OverallStatus::VeryHappy
    } else if state.hunger > PECKISH_ABOVE {
        OverallStatus::BitHungry
    } else {
        OverallStatus::Fine
    }
}

/// Face to show. Note happy outranks sad here, the reverse of
/// [`overall_status`].
#[must_use]
pub fn expression(state: &PetState) -> Expression {
    if state.hunger > STARVING_ABOVE {
        Expression::Hungry
    } else if state.energy < EXHAUSTED_BELOW {
        Expression::Sleepy
    } else if state.happiness > HAPPY_ABOVE {
        Expression::Happy
    } else if state.happiness < SAD_BELOW {
        Expression::Sad
    } else {
        Expression::Neutral
    }
}

/// Animation hint: happiness first, then fatigue.
#[must_use]
pub fn demeanor(state: &PetState) -> Demeanor {
    if state.happiness > HAPPY_ABOVE {
        Demeanor::Happy
    } else if state.happiness < SAD_BELOW {
        Demeanor::Sad
    } else if state.energy < TIRED_BELOW {
        Demeanor::Tired
    } else {
        Demeanor::Calm
    }
}

/// True iff any need sits on its fatal boundary.
///
/// The model keeps accepting calls after death; disabling actions is the
/// caller's job.
#[must_use]
pub fn is_dead(state: &PetState) -> bool {
    state.hunger >= STAT_MAX || state.energy <= STAT_MIN || state.happiness <= STAT_MIN
}

/// Capture a render-ready view. Does not call [`think`].
#[must_use]
pub fn snapshot(state: &PetState, name: &str) -> PetSnapshot {
    PetSnapshot {
        name: name.to_string(),
        hunger: display_value(state.hunger),
        energy: display_value(state.energy),
        happiness: display_value(state.happiness),
        thought: state.last_thought.clone(),
        expression: expression(state).symbol().to_string(),
        status: overall_status(state).label().to_string(),
        demeanor: demeanor(state),
        busy: state.busy,
        dead: is_dead(state),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn display_value(value: f32) -> u8 {
    value.round().clamp(STAT_MIN, STAT_MAX) as u8
}
