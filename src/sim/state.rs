//! Round state and core simulation types
//!
//! All state needed for snapshots/determinism lives here, including the RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::RoundConfig;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Title screen, nothing scheduled yet
    NotStarted,
    /// Countdown running, balloons spawning and rising
    Running,
    /// Countdown hit zero
    Ended,
}

/// Transient score feedback color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoreFlash {
    #[default]
    Neutral,
    /// A pop just rewarded points
    Gain,
    /// An escape just cost a point
    Loss,
}

/// Visible play area, in the same units as balloon positions
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// A balloon entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balloon {
    pub id: u32,
    /// Screen coordinates: y shrinks as the balloon rises
    pub pos: Vec2,
    /// Rise per animation tick
    pub speed: f32,
    pub popped: bool,
    /// Seconds until removal, set when the balloon is popped
    pub despawn_in: Option<f32>,
}

impl Balloon {
    /// Unpopped balloons keep rising; popped ones hold position until removed
    pub fn is_rising(&self) -> bool {
        !self.popped
    }
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: RoundPhase,
    /// Never goes below zero; escapes at zero are absorbed silently
    pub score: u32,
    /// Remaining seconds, counts down to zero
    pub time_left: u32,
    pub score_flash: ScoreFlash,
    /// Pending flash reverts. Every scoring event pushes its own timer, and
    /// every expiry resets the flash to neutral even if a newer flash is
    /// still pending. Matches the shipped feedback behavior.
    pub flash_timers: Vec<f32>,
    /// Live balloons, popped or not, sorted by spawn order
    pub balloons: Vec<Balloon>,
    pub viewport: Viewport,
    pub config: RoundConfig,
    /// Seeded RNG; travels with serialized state so replays stay identical
    pub rng: Pcg32,
    pub(crate) spawn_accum: f32,
    pub(crate) countdown_accum: f32,
    next_id: u32,
}

impl RoundState {
    /// Create a fresh round in `NotStarted` with the given seed
    pub fn new(config: RoundConfig, viewport: Viewport, seed: u64) -> Self {
        Self {
            phase: RoundPhase::NotStarted,
            score: 0,
            time_left: config.round_duration_secs,
            score_flash: ScoreFlash::Neutral,
            flash_timers: Vec::new(),
            balloons: Vec::new(),
            viewport,
            config,
            rng: Pcg32::seed_from_u64(seed),
            spawn_accum: 0.0,
            countdown_accum: 0.0,
            next_id: 1,
        }
    }

    /// Allocate a balloon ID, unique within the round
    pub fn next_balloon_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Begin the round from the title screen; no-op in any other phase
    pub fn start(&mut self) {
        if self.phase == RoundPhase::NotStarted {
            self.phase = RoundPhase::Running;
            log::info!("Round started, {} seconds on the clock", self.time_left);
        }
    }

    /// Discard the ended round and begin a fresh one; no-op unless `Ended`
    pub fn try_again(&mut self) {
        if self.phase != RoundPhase::Ended {
            return;
        }
        self.balloons.clear();
        self.score = 0;
        self.time_left = self.config.round_duration_secs;
        self.score_flash = ScoreFlash::Neutral;
        self.flash_timers.clear();
        self.spawn_accum = 0.0;
        self.countdown_accum = 0.0;
        self.phase = RoundPhase::Running;
        log::info!("Round restarted");
    }

    /// Handle a tap on the balloon with the given ID.
    ///
    /// Only acts while `Running` and only on a live, unpopped balloon: the
    /// balloon is marked popped (it lingers briefly so the popped art can
    /// show), score gains the reward, and a gain flash is scheduled with its
    /// own independent revert timer. Everything else is a silent no-op.
    pub fn pop_balloon(&mut self, id: u32) {
        if self.phase != RoundPhase::Running {
            return;
        }
        let Some(balloon) = self
            .balloons
            .iter_mut()
            .find(|b| b.id == id && !b.popped)
        else {
            return;
        };
        balloon.popped = true;
        balloon.despawn_in = Some(self.config.pop_remove_delay_secs);
        self.score += self.config.pop_reward;
        self.score_flash = ScoreFlash::Gain;
        self.flash_timers.push(self.config.flash_revert_secs);
        log::debug!("popped balloon {id}, score {}", self.score);
    }

    /// Derived display clock: (minutes, seconds)
    pub fn clock(&self) -> (u32, u32) {
        crate::clock_parts(self.time_left)
    }
}
