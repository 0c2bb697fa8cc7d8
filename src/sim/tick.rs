//! Per-frame round advancement
//!
//! One entry point folds every periodic trigger together: the spawn interval,
//! frame-paced motion, the one-second countdown, pop removal delays and flash
//! reverts all advance inside `tick`. Stopping the round therefore stops every
//! schedule at once; no timer can fire against a discarded round.

use glam::Vec2;
use rand::Rng;

use super::state::{Balloon, RoundPhase, RoundState, ScoreFlash};

/// Input events for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Start a fresh round from the title screen
    pub start: bool,
    /// Restart after the round ended
    pub try_again: bool,
    /// Tap on the balloon with this ID
    pub pop: Option<u32>,
}

/// Advance the round by one animation frame, `dt` seconds after the last one.
///
/// Motion is frame-paced (each rising balloon climbs by its per-tick speed
/// once per call); the spawn and countdown triggers accumulate `dt` and fire
/// on whole intervals.
pub fn tick(state: &mut RoundState, input: &TickInput, dt: f32) {
    if input.start {
        state.start();
    }
    if input.try_again {
        state.try_again();
    }
    if let Some(id) = input.pop {
        state.pop_balloon(id);
    }

    if state.phase != RoundPhase::Running {
        return;
    }

    // Flash reverts are unconditional: any expiry resets the color to neutral
    // even when a newer flash scheduled later is still pending.
    let mut reverted = false;
    for timer in &mut state.flash_timers {
        *timer -= dt;
        if *timer <= 0.0 {
            reverted = true;
        }
    }
    if reverted {
        state.score_flash = ScoreFlash::Neutral;
    }
    state.flash_timers.retain(|t| *t > 0.0);

    // Spawn: one balloon per whole interval of accumulated time
    let interval = state.config.spawn_interval_secs;
    if interval > 0.0 {
        state.spawn_accum += dt;
        while state.spawn_accum >= interval {
            state.spawn_accum -= interval;
            spawn_balloon(state);
        }
    }

    update_positions(state);

    // Popped balloons linger briefly so the popped art can show
    for balloon in &mut state.balloons {
        if let Some(timer) = balloon.despawn_in.as_mut() {
            *timer -= dt;
        }
    }
    state
        .balloons
        .retain(|b| b.despawn_in.is_none_or(|t| t > 0.0));

    // Countdown: one decrement per whole second; zero ends the round
    state.countdown_accum += dt;
    while state.countdown_accum >= 1.0 {
        state.countdown_accum -= 1.0;
        state.time_left = state.time_left.saturating_sub(1);
        if state.time_left == 0 {
            state.phase = RoundPhase::Ended;
            log::info!("Time up, final score {}", state.score);
            break;
        }
    }
}

/// Create one balloon at the bottom edge with randomized x and rise speed
pub fn spawn_balloon(state: &mut RoundState) {
    let width = state.viewport.width;
    let bottom = state.viewport.height;
    let bias = state.config.spawn_x_bias;
    let (speed_min, speed_max) = (state.config.speed_min, state.config.speed_max);

    let x = state.rng.random_range(0.0..width) - bias;
    let speed = state.rng.random_range(speed_min..speed_max);
    let id = state.next_balloon_id();
    state.balloons.push(Balloon {
        id,
        pos: Vec2::new(x, bottom),
        speed,
        popped: false,
        despawn_in: None,
    });
    log::debug!("spawned balloon {id} at x={x:.1} speed={speed:.1}");
}

/// Frame-paced motion with top-boundary handling.
///
/// Each rising balloon climbs by its speed; one that crosses the exit margin
/// above the visible top is removed. An escape costs the penalty and shows a
/// loss flash only while score is nonzero; at zero the balloon is dropped
/// silently with no penalty and no flash.
fn update_positions(state: &mut RoundState) {
    let margin = state.config.top_exit_margin;

    let mut escapes = 0u32;
    state.balloons.retain_mut(|balloon| {
        if balloon.popped {
            return true;
        }
        balloon.pos.y -= balloon.speed;
        if balloon.pos.y < margin {
            escapes += 1;
            false
        } else {
            true
        }
    });

    for _ in 0..escapes {
        if state.score == 0 {
            continue;
        }
        state.score = state.score.saturating_sub(state.config.escape_penalty);
        state.score_flash = ScoreFlash::Loss;
        state.flash_timers.push(state.config.flash_revert_secs);
        log::debug!("balloon escaped, score {}", state.score);
    }
}
