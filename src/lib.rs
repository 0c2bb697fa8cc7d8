//! Balloon Pop - a single-screen balloon popping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic round simulation (spawning, motion, scoring, countdown)
//! - `config`: Data-driven gameplay tuning

pub mod config;
pub mod sim;

pub use config::RoundConfig;

/// Gameplay constants
pub mod consts {
    /// Full round duration in seconds
    pub const ROUND_DURATION_SECS: u32 = 120;
    /// Seconds between balloon spawns
    pub const SPAWN_INTERVAL_SECS: f32 = 1.0;
    /// Score reward for popping a balloon
    pub const POP_REWARD: u32 = 2;
    /// Score penalty when a balloon escapes the top (score never drops below zero)
    pub const ESCAPE_PENALTY: u32 = 1;

    /// Balloon rise speed range, units per animation tick
    pub const BALLOON_SPEED_MIN: f32 = 2.0;
    pub const BALLOON_SPEED_MAX: f32 = 7.0;

    /// Balloons are removed once they rise this far past the visible top,
    /// so they fully leave view before disappearing
    pub const TOP_EXIT_MARGIN: f32 = -50.0;
    /// Horizontal spawn bias: balloons may appear partially off-screen-left
    pub const SPAWN_X_BIAS: f32 = 10.0;

    /// Delay between a pop and the balloon's removal (popped art stays visible)
    pub const POP_REMOVE_DELAY_SECS: f32 = 0.1;
    /// How long a score flash shows before reverting to neutral
    pub const FLASH_REVERT_SECS: f32 = 1.0;
}

/// Split a remaining-time value into (minutes, seconds) for display
#[inline]
pub fn clock_parts(total_secs: u32) -> (u32, u32) {
    (total_secs / 60, total_secs % 60)
}

/// Format remaining time as a zero-padded `MM:SS` clock
pub fn format_clock(total_secs: u32) -> String {
    let (minutes, seconds) = clock_parts(total_secs);
    format!("{minutes:02}:{seconds:02}")
}
