//! Deterministic round simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - One `tick` entry point; every periodic trigger is folded into it
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Balloon, RoundPhase, RoundState, ScoreFlash, Viewport};
pub use tick::{TickInput, spawn_balloon, tick};
