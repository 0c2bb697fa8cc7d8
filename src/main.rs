//! Balloon Pop entry point
//!
//! Runs a headless autoplay round at a simulated 60 Hz: a smoke test for the
//! simulator and a reference for wiring it to a real shell.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use balloon_pop::config::RoundConfig;
use balloon_pop::format_clock;
use balloon_pop::sim::{RoundPhase, RoundState, ScoreFlash, TickInput, Viewport, tick};

const FRAME_DT: f32 = 1.0 / 60.0;
/// Autoplay taps roughly twice a second
const TAP_EVERY_FRAMES: u64 = 24;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("Balloon Pop starting with seed {seed}");

    let config = RoundConfig::load_or_default(Path::new("tuning.json"));
    let viewport = Viewport {
        width: 400.0,
        height: 800.0,
    };
    let mut state = RoundState::new(config, viewport, seed);

    tick(
        &mut state,
        &TickInput {
            start: true,
            ..Default::default()
        },
        0.0,
    );

    let mut frame: u64 = 0;
    let mut last_clock = state.time_left;
    while state.phase == RoundPhase::Running {
        // Autoplay: tap the balloon closest to escaping
        let pop = if frame % TAP_EVERY_FRAMES == 0 {
            state
                .balloons
                .iter()
                .filter(|b| !b.popped)
                .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                .map(|b| b.id)
        } else {
            None
        };

        let input = TickInput {
            pop,
            ..Default::default()
        };
        tick(&mut state, &input, FRAME_DT);

        if state.time_left != last_clock {
            last_clock = state.time_left;
            let flash = match state.score_flash {
                ScoreFlash::Gain => " (+)",
                ScoreFlash::Loss => " (-)",
                ScoreFlash::Neutral => "",
            };
            log::info!(
                "{} | score {}{flash} | {} balloons up",
                format_clock(state.time_left),
                state.score,
                state.balloons.len()
            );
        }
        frame += 1;
    }

    println!("Game over! Your score: {}", state.score);
}
