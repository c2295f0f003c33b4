//! Integration Tests — End-to-End Pet Sessions
//!
//! These tests drive a pet the way a front-end would: actions on user input,
//! decay on a timer, queries after every step.

use tamago_core::config::TamagoConfig;
use tamago_core::phrases::{self, ScriptedPhrases};
use tamago_core::{Action, ActionOutcome, Millis, OverallStatus, Pet, Rejection};

fn scripted_pet() -> Pet {
    Pet::with_phrases(&TamagoConfig::default(), ScriptedPhrases::new(vec![0, 1, 2, 3]))
}

// ---------------------------------------------------------------------------
// Cooldown serialises actions
// ---------------------------------------------------------------------------

#[test]
fn back_to_back_feed_is_debounced() {
    let mut pet = scripted_pet();
    assert!(pet.feed(Millis(0)));
    let after_first = pet.state().needs();

    assert!(!pet.feed(Millis(1)));
    assert_eq!(pet.state().needs(), after_first);
}

#[test]
fn different_actions_share_one_cooldown() {
    let mut pet = scripted_pet();
    pet.state_mut().energy = 50.0;
    assert!(pet.feed(Millis(0)));
    assert_eq!(pet.perform(Action::Play, Millis(200)), ActionOutcome::Rejected(Rejection::Busy));
    assert_eq!(pet.perform(Action::Sleep, Millis(400)), ActionOutcome::Rejected(Rejection::Busy));
    assert!(pet.perform(Action::Play, Millis(500)).is_accepted());
}

// ---------------------------------------------------------------------------
// Starting state
// ---------------------------------------------------------------------------

#[test]
fn rested_pet_refuses_sleep() {
    let mut pet = scripted_pet();
    assert!(!pet.sleep(Millis(0)));
    assert_eq!(pet.state().needs(), (50.0, 100.0, 75.0));
    assert_eq!(pet.state().last_thought, phrases::NOT_SLEEPY);
}

#[test]
fn exhausted_pet_refuses_play() {
    let mut pet = scripted_pet();
    pet.state_mut().energy = 15.0;
    assert!(!pet.play(Millis(0)));
    assert_eq!(pet.state().needs(), (50.0, 15.0, 75.0));
    assert_eq!(pet.state().last_thought, phrases::TOO_TIRED_TO_PLAY);
}

// ---------------------------------------------------------------------------
// Decay over a neglected session
// ---------------------------------------------------------------------------

#[test]
fn decay_penalties_match_thresholds() {
    let mut pet = scripted_pet();
    pet.state_mut().hunger = 71.0;
    let before = pet.state().happiness;
    pet.decay();
    assert!((before - pet.state().happiness - 1.0).abs() < f32::EPSILON);

    let mut pet = scripted_pet();
    pet.state_mut().hunger = 71.0;
    pet.state_mut().energy = 25.0;
    let before = pet.state().happiness;
    pet.decay();
    assert!((before - pet.state().happiness - 2.0).abs() < f32::EPSILON);
}

#[test]
fn neglected_pet_eventually_dies() {
    let mut pet = scripted_pet();
    let mut ticks = 0;
    while !pet.is_dead() {
        pet.decay();
        ticks += 1;
        assert!(ticks < 1_000, "a neglected pet must hit a fatal boundary");
    }
    // Hunger climbs 2 per tick from 50, so it hits 100 after 25 ticks.
    assert_eq!(ticks, 25);
    assert_eq!(pet.overall_status(), OverallStatus::VeryHungry);
    assert!(pet.state().in_bounds());
}

#[test]
fn care_routine_keeps_pet_alive() {
    let mut pet = scripted_pet();
    for tick in 0..200u64 {
        let now = Millis(tick * 3000);
        pet.decay();
        let state = pet.state();
        if state.hunger > 60.0 {
            pet.feed(now);
        } else if state.energy < 50.0 {
            pet.sleep(now);
        } else if state.happiness < 60.0 {
            pet.play(now);
        }
        assert!(!pet.is_dead(), "pet died at tick {tick}: {:?}", pet.state());
    }
    assert!(pet.state().in_bounds());
    assert!(!pet.think(Millis(600_000)).is_empty());
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[test]
fn hunger_outranks_fatigue_everywhere() {
    let mut pet = scripted_pet();
    pet.state_mut().hunger = 85.0;
    pet.state_mut().energy = 10.0;
    assert_eq!(pet.overall_status(), OverallStatus::VeryHungry);
    assert_eq!(pet.overall_status().label(), "very hungry 😫");
    assert_eq!(pet.expression().symbol(), "😫");
    assert!(phrases::HUNGRY.contains(&pet.think(Millis(0)).as_str()));
}

#[test]
fn death_boundaries_are_independent() {
    let config = TamagoConfig::default();
    let boundaries = [(100.0, 50.0, 50.0), (50.0, 0.0, 50.0), (50.0, 50.0, 0.0)];
    for (h, e, hap) in boundaries {
        let state = tamago_core::PetState::with_needs(h, e, hap);
        let pet = Pet::from_state(state, &config, ScriptedPhrases::new(vec![0]));
        assert!(pet.is_dead(), "({h}, {e}, {hap}) should be fatal");
    }
    let pet = Pet::from_state(
        tamago_core::PetState::with_needs(99.0, 1.0, 1.0),
        &config,
        ScriptedPhrases::new(vec![0]),
    );
    assert!(!pet.is_dead());
}

#[test]
fn snapshot_serialises_for_front_ends() {
    let mut pet = scripted_pet();
    pet.feed(Millis(0));
    let snap = pet.snapshot("Michi");
    assert!(snap.busy);
    let json = snap.to_json().expect("snapshot encodes");
    let back: tamago_core::PetSnapshot = serde_json::from_str(&json).expect("snapshot decodes");
    assert_eq!(back, snap);
}
