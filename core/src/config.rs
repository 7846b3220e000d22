use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::{Arena, Seed};

/// Per-match setup. Tuning values (speeds, attacks, AI thresholds) are fixed
/// constants; only the arena, starting positions, seed and frame clamp vary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FightConfig {
    pub seed: Seed,
    pub arena: Arena,
    pub player_start_x: f64,
    pub cpu_start_x: f64,
    /// Largest dt a session will feed into a single step.
    pub max_frame_dt: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_frame_dt must be finite and positive, got {0}")]
    InvalidFrameDt(f64),

    #[error("arena width {width} leaves no room for two fighters (need more than {min})")]
    ArenaTooNarrow { width: f64, min: f64 },

    #[error("arena height must be finite and positive, got {0}")]
    InvalidArenaHeight(f64),

    #[error("{name} start x {x} is outside the arena walls [{min}, {max}]")]
    StartOutOfBounds {
        name: &'static str,
        x: f64,
        min: f64,
        max: f64,
    },
}

impl FightConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            return Err(ConfigError::InvalidFrameDt(self.max_frame_dt));
        }
        let min_width = 2.0 * WALL_MARGIN + MIN_GAP;
        if !self.arena.width.is_finite() || self.arena.width <= min_width {
            return Err(ConfigError::ArenaTooNarrow {
                width: self.arena.width,
                min: min_width,
            });
        }
        if !self.arena.height.is_finite() || self.arena.height <= 0.0 {
            return Err(ConfigError::InvalidArenaHeight(self.arena.height));
        }
        let (min, max) = (WALL_MARGIN, self.arena.width - WALL_MARGIN);
        for (name, x) in [("player", self.player_start_x), ("cpu", self.cpu_start_x)] {
            if !(min..=max).contains(&x) {
                return Err(ConfigError::StartOutOfBounds { name, x, min, max });
            }
        }
        Ok(())
    }
}

pub fn arena() -> Arena {
    Arena {
        width: ARENA_WIDTH,
        height: ARENA_HEIGHT,
        ground: GROUND_Y,
    }
}

/// The stock 720x360 match against the scripted CPU.
pub fn default_config() -> FightConfig {
    FightConfig {
        seed: INITIAL_SEED,
        arena: arena(),
        player_start_x: PLAYER_START_X,
        cpu_start_x: CPU_START_X,
        max_frame_dt: MAX_FRAME_DT,
    }
}

impl Default for FightConfig {
    fn default() -> Self {
        default_config()
    }
}
