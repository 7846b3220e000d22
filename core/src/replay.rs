use thiserror::Error;

use crate::config::ConfigError;
use crate::hash::{hash_state, hash_transcript};
use crate::init::create_initial_state;
use crate::step::step_fight;
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranscriptError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("frame dt must be finite and non-negative, got {0}")]
    InvalidDt(f64),

    #[error("frame dt {dt} exceeds the config's max_frame_dt {max}")]
    DtAboveMax { dt: f64, max: f64 },
}

impl Transcript {
    pub fn validate(&self) -> Result<(), TranscriptError> {
        self.config.validate()?;
        if !self.dt.is_finite() || self.dt < 0.0 {
            return Err(TranscriptError::InvalidDt(self.dt));
        }
        if self.dt > self.config.max_frame_dt {
            return Err(TranscriptError::DtAboveMax {
                dt: self.dt,
                max: self.config.max_frame_dt,
            });
        }
        Ok(())
    }
}

/// Replay a recorded match from its initial state. The match is started
/// immediately; frames after the knockout are hashed but not simulated.
pub fn run_transcript(transcript: &Transcript) -> Result<ReplaySummary, TranscriptError> {
    transcript.validate()?;
    let dt = transcript.dt;

    let mut state = create_initial_state(&transcript.config);
    state.status = Status::Running;

    let mut frames = 0;
    for input in &transcript.inputs {
        state = step_fight(&state, input, dt);
        frames += 1;
        if state.status == Status::GameOver {
            break;
        }
    }

    Ok(ReplaySummary {
        frames,
        status: state.status,
        winner: state.winner,
        health: [state.player.health, state.cpu.health],
        elapsed: state.time,
        transcript_hash: hash_transcript(&transcript.inputs),
        state_hash: hash_state(&state),
    })
}
