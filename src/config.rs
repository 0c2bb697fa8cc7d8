//! Data-driven gameplay tuning
//!
//! Defaults match the shipped game exactly; a JSON file can override any
//! field for playtesting without a rebuild.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Round tuning parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Full countdown duration in seconds
    pub round_duration_secs: u32,
    /// Seconds between balloon spawns
    pub spawn_interval_secs: f32,
    /// Score gained per pop
    pub pop_reward: u32,
    /// Score lost per escape (never below zero)
    pub escape_penalty: u32,
    /// Rise speed range, units per animation tick
    pub speed_min: f32,
    pub speed_max: f32,
    /// Removal threshold above the visible top (negative = past the edge)
    pub top_exit_margin: f32,
    /// Horizontal spawn bias so balloons can appear partially off-screen-left
    pub spawn_x_bias: f32,
    /// Delay between a pop and the balloon's removal
    pub pop_remove_delay_secs: f32,
    /// How long a score flash shows before reverting to neutral
    pub flash_revert_secs: f32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            round_duration_secs: ROUND_DURATION_SECS,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            pop_reward: POP_REWARD,
            escape_penalty: ESCAPE_PENALTY,
            speed_min: BALLOON_SPEED_MIN,
            speed_max: BALLOON_SPEED_MAX,
            top_exit_margin: TOP_EXIT_MARGIN,
            spawn_x_bias: SPAWN_X_BIAS,
            pop_remove_delay_secs: POP_REMOVE_DELAY_SECS,
            flash_revert_secs: FLASH_REVERT_SECS,
        }
    }
}

impl RoundConfig {
    /// Load tuning from a JSON file, falling back to defaults when the file
    /// is missing or malformed
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded tuning from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring malformed tuning file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    /// Write the current tuning as pretty-printed JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_game() {
        let config = RoundConfig::default();
        assert_eq!(config.round_duration_secs, 120);
        assert_eq!(config.pop_reward, 2);
        assert_eq!(config.escape_penalty, 1);
        assert_eq!(config.top_exit_margin, -50.0);
    }

    #[test]
    fn test_json_round_trip() {
        let config = RoundConfig {
            round_duration_secs: 60,
            speed_max: 9.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: RoundConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: RoundConfig = serde_json::from_str(r#"{"pop_reward": 5}"#).unwrap();
        assert_eq!(config.pop_reward, 5);
        assert_eq!(config.round_duration_secs, 120);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = RoundConfig::load_or_default(Path::new("/nonexistent/tuning.json"));
        assert_eq!(config, RoundConfig::default());
    }
}
