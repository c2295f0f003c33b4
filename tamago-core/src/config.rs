//! Configuration for the TAMAGO pet model.
//!
//! Maps directly to `tamago.toml`. Every field has a default, so an empty
//! file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TamagoError};
use crate::types::{STAT_MAX, STAT_MIN};

/// Top-level TAMAGO configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TamagoConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pet identity and starting needs.
    #[serde(default)]
    pub pet: PetConfig,
    /// Decay tick and cooldown periods.
    #[serde(default)]
    pub timing: TimingConfig,
    /// Passive decay tuning.
    #[serde(default)]
    pub decay: DecayConfig,
}

impl TamagoConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `TamagoError::Config` if the TOML is invalid, or any error
    /// from [`TamagoConfig::validate`].
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| TamagoError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check that periods are non-zero, starting needs are in range and
    /// decay tuning is finite.
    ///
    /// # Errors
    /// `TamagoError::InvalidTiming` for a zero period,
    /// `TamagoError::Config` for an out-of-range starting need or a bad
    /// decay value.
    pub fn validate(&self) -> Result<()> {
        if self.timing.decay_interval_ms == 0 {
            return Err(TamagoError::InvalidTiming {
                name: "decay_interval_ms",
                value_ms: 0,
            });
        }
        if self.timing.cooldown_ms == 0 {
            return Err(TamagoError::InvalidTiming {
                name: "cooldown_ms",
                value_ms: 0,
            });
        }

        let starting = [
            ("initial_hunger", self.pet.initial_hunger),
            ("initial_energy", self.pet.initial_energy),
            ("initial_happiness", self.pet.initial_happiness),
        ];
        for (name, value) in starting {
            if !(STAT_MIN..=STAT_MAX).contains(&value) {
                return Err(TamagoError::Config(format!(
                    "pet.{name} must be within [{STAT_MIN}, {STAT_MAX}], got {value}"
                )));
            }
        }
        self.decay.validate()
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Pet identity and starting needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetConfig {
    /// Display name used when the player has not picked one.
    #[serde(default = "default_name")]
    pub name: String,
    /// Hunger at session start.
    #[serde(default = "default_50")]
    pub initial_hunger: f32,
    /// Energy at session start.
    #[serde(default = "default_100")]
    pub initial_energy: f32,
    /// Happiness at session start.
    #[serde(default = "default_75")]
    pub initial_happiness: f32,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            name: "Michi".to_string(),
            initial_hunger: 50.0,
            initial_energy: 100.0,
            initial_happiness: 75.0,
        }
    }
}

/// Timer periods. Both are presentation-tuning knobs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimingConfig {
    /// How often the passive decay tick runs.
    #[serde(default = "default_3000")]
    pub decay_interval_ms: u64,
    /// How long an accepted action blocks further actions.
    #[serde(default = "default_500")]
    pub cooldown_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            decay_interval_ms: 3000,
            cooldown_ms: 500,
        }
    }
}

/// Passive decay tuning, applied once per tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DecayConfig {
    /// Hunger gained per tick.
    #[serde(default = "default_2_0")]
    pub hunger_step: f32,
    /// Energy lost per tick.
    #[serde(default = "default_0_5")]
    pub energy_step: f32,
    /// Happiness lost per triggered penalty.
    #[serde(default = "default_1_0")]
    pub happiness_step: f32,
    /// Hunger above this costs happiness.
    #[serde(default = "default_70")]
    pub hunger_threshold: f32,
    /// Energy below this costs happiness.
    #[serde(default = "default_30")]
    pub energy_threshold: f32,
}

impl DecayConfig {
    /// Steps must be finite and non-negative, thresholds finite.
    ///
    /// # Errors
    /// `TamagoError::Config` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        let steps = [
            ("hunger_step", self.hunger_step),
            ("energy_step", self.energy_step),
            ("happiness_step", self.happiness_step),
        ];
        for (name, value) in steps {
            if !value.is_finite() || value < 0.0 {
                return Err(TamagoError::Config(format!(
                    "decay.{name} must be a finite, non-negative number, got {value}"
                )));
            }
        }

        let thresholds = [
            ("hunger_threshold", self.hunger_threshold),
            ("energy_threshold", self.energy_threshold),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() {
                return Err(TamagoError::Config(format!(
                    "decay.{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            hunger_step: 2.0,
            energy_step: 0.5,
            happiness_step: 1.0,
            hunger_threshold: 70.0,
            energy_threshold: 30.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String { "warn".to_string() }
fn default_name() -> String { "Michi".to_string() }
fn default_0_5() -> f32 { 0.5 }
fn default_1_0() -> f32 { 1.0 }
fn default_2_0() -> f32 { 2.0 }
fn default_30() -> f32 { 30.0 }
fn default_50() -> f32 { 50.0 }
fn default_70() -> f32 { 70.0 }
fn default_75() -> f32 { 75.0 }
fn default_100() -> f32 { 100.0 }
fn default_500() -> u64 { 500 }
fn default_3000() -> u64 { 3000 }
