//! Core type definitions for the TAMAGO pet model.
//!
//! All read-model types are serializable so a presentation layer can ship
//! them as-is.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Lower bound of every pet need.
pub const STAT_MIN: f32 = 0.0;

/// Upper bound of every pet need.
pub const STAT_MAX: f32 = 100.0;

/// Clamp a need value into `[STAT_MIN, STAT_MAX]`.
#[must_use]
pub fn clamp_stat(value: f32) -> f32 {
    value.clamp(STAT_MIN, STAT_MAX)
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// Monotonic session time in milliseconds, supplied by the caller.
///
/// The model never reads a clock itself; whoever drives it decides what
/// "now" is. This keeps cooldowns deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Millis(pub u64);

impl Millis {
    /// Session start.
    pub const ZERO: Self = Self(0);

    /// `self + ms`, saturating at `u64::MAX`.
    #[must_use]
    pub fn after(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }

    /// Milliseconds from `self` until `later`, zero if `later` is in the past.
    #[must_use]
    pub fn until(self, later: Self) -> u64 {
        later.0.saturating_sub(self.0)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// A user-triggered action on the pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Lower hunger, cheer up a little.
    Feed,
    /// Restore energy at the cost of some hunger.
    Sleep,
    /// Big happiness boost, costs energy and hunger.
    Play,
}

impl Action {
    /// All actions, in menu order.
    pub const ALL: [Self; 3] = [Self::Feed, Self::Sleep, Self::Play];

    /// Lowercase verb for this action.
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Sleep => "sleep",
            Self::Play => "play",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Why an action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// A previous action's cooldown is still pending.
    Busy,
    /// Energy is above the sleep threshold.
    NotSleepy,
    /// Hunger is above the play threshold.
    TooHungry,
    /// Energy is below the play threshold.
    TooTired,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Busy => "busy",
            Self::NotSleepy => "not sleepy",
            Self::TooHungry => "too hungry",
            Self::TooTired => "too tired",
        };
        f.write_str(reason)
    }
}

/// Result of attempting an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// State was mutated and a cooldown started.
    Accepted,
    /// Precondition unmet; numbers unchanged.
    Rejected(Rejection),
}

impl ActionOutcome {
    /// `true` if the action went through.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The refusal reason, if any.
    #[must_use]
    pub fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

impl From<ActionOutcome> for bool {
    fn from(outcome: ActionOutcome) -> Self {
        outcome.is_accepted()
    }
}

// ---------------------------------------------------------------------------
// Derived read model
// ---------------------------------------------------------------------------

/// Face shown for the pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    /// Starving.
    Hungry,
    /// Exhausted.
    Sleepy,
    /// Elated.
    Happy,
    /// Miserable.
    Sad,
    /// Nothing notable.
    Neutral,
}

impl Expression {
    /// Emoji face for this expression.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Hungry => "😫",
            Self::Sleepy => "😴",
            Self::Happy => "😻",
            Self::Sad => "😿",
            Self::Neutral => "😸",
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One-line summary of how the pet is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverallStatus {
    /// Hunger above 80.
    VeryHungry,
    /// Energy below 20.
    VeryTired,
    /// Happiness below 30.
    VerySad,
    /// Happiness above 75.
    VeryHappy,
    /// Hunger above 50.
    BitHungry,
    /// None of the above.
    Fine,
}

impl OverallStatus {
    /// Human-readable label with its face.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryHungry => "very hungry 😫",
            Self::VeryTired => "very tired 😴",
            Self::VerySad => "very sad 😞",
            Self::VeryHappy => "very happy 😻",
            Self::BitHungry => "a bit hungry 🤤",
            Self::Fine => "fine 😊",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Animation hint for a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Demeanor {
    /// Bouncy.
    Happy,
    /// Droopy.
    Sad,
    /// Slow.
    Tired,
    /// No animation.
    Calm,
}

/// Serializable view of a pet for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetSnapshot {
    /// Display name (owned by the presentation layer).
    pub name: String,
    /// Hunger, rounded for display.
    pub hunger: u8,
    /// Energy, rounded for display.
    pub energy: u8,
    /// Happiness, rounded for display.
    pub happiness: u8,
    /// Current thought bubble.
    pub thought: String,
    /// Face symbol.
    pub expression: String,
    /// Status label.
    pub status: String,
    /// Animation hint.
    pub demeanor: Demeanor,
    /// Whether an action cooldown is pending.
    pub busy: bool,
    /// Whether the pet has reached a fatal boundary.
    pub dead: bool,
}

impl PetSnapshot {
    /// Serialize to a single JSON line.
    ///
    /// # Errors
    /// Returns `TamagoError::Serialization` if encoding fails.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
