//! # TAMAGO Core Library
//!
//! Game-agnostic state model for a virtual pet.
//!
//! A pet is a [`PetState`] record with three bounded needs, all clamped to
//! `[0, 100]`:
//!
//! - **Hunger** — 0 is sated, 100 is starving
//! - **Energy** — 0 is exhausted, 100 is fully rested
//! - **Happiness** — 0 is miserable, 100 is elated
//!
//! Actions ([`actions::feed`], [`actions::sleep`], [`actions::play`]) are
//! guarded transformations: precondition, clamp-and-adjust, cooldown. A
//! passive [`decay::decay`] tick wears the needs down over time, and the
//! [`queries`] module derives mood phrases, status labels and faces from the
//! current numbers.
//!
//! [`Pet`] bundles a state with its cooldown timer and phrase source for
//! callers that want a single owner.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod actions;
pub mod config;
pub mod cooldown;
pub mod decay;
pub mod error;
pub mod pet;
pub mod phrases;
pub mod queries;
pub mod state;
pub mod types;

pub use config::TamagoConfig;
pub use error::TamagoError;
pub use pet::Pet;
pub use state::PetState;
pub use types::*;
