//! # tamago-term — Terminal Front-End for TAMAGO
//!
//! The presentation layer around `tamago-core`: it owns one pet per session,
//! drives the decay timer, turns typed commands into pet operations and
//! renders the result.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 tamago-term                  │
//! │  stdin ─► commands ─► Session ─► render ─► stdout
//! │                         │                    │
//! │            decay ticker │  (shared PetHandle)│
//! │                         ▼                    │
//! │              ┌─────────────────────┐         │
//! │              │     tamago-core     │         │
//! │              └─────────────────────┘         │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `cli` — command-line options for the `tamago` binary
//! - `commands` — parsing of typed commands
//! - `handle` — shared, lock-protected ownership of the pet
//! - `session` — one play session: name, pet, reset, dead-pet gating
//! - `render` — text and JSON frames
//! - `runner` — the async event loop

pub mod cli;
pub mod commands;
pub mod handle;
pub mod render;
pub mod runner;
pub mod session;

pub use commands::Command;
pub use handle::PetHandle;
pub use session::Session;
