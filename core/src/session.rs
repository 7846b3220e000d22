//! Frame driver for hosts that render the fight.
//!
//! Owns the current state, the live input snapshot that event handlers write
//! into, and the dt clamp. The simulation itself stays a pure function; this
//! is just the loop around it.

use tracing::debug;

use crate::config::{ConfigError, FightConfig};
use crate::init::create_initial_state;
use crate::step::step_fight;
use crate::types::*;

#[derive(Clone, Debug)]
pub struct FightSession {
    config: FightConfig,
    state: FightState,
    input: FightInput,
    last_frame_ms: Option<f64>,
}

impl FightSession {
    /// Build a Ready session. The config is validated up front so the dt
    /// clamp always has a finite positive ceiling.
    pub fn new(config: FightConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: FightConfig) -> Self {
        let state = create_initial_state(&config);
        FightSession {
            config,
            state,
            input: NULL_INPUT,
            last_frame_ms: None,
        }
    }

    pub fn state(&self) -> &FightState {
        &self.state
    }

    pub fn config(&self) -> &FightConfig {
        &self.config
    }

    pub fn input(&self) -> &FightInput {
        &self.input
    }

    /// Ready → Running. Anything else is left alone.
    pub fn start(&mut self) -> bool {
        if self.state.status != Status::Ready {
            return false;
        }
        self.state.status = Status::Running;
        debug!(seed = self.state.seed, "fight started");
        true
    }

    /// Throw the current match away and build a fresh Ready one.
    /// Held inputs survive, as the keys are still physically down.
    pub fn restart(&mut self) {
        self.state = create_initial_state(&self.config);
        debug!("fight restarted");
    }

    pub fn set_input(&mut self, action: Action, held: bool) {
        self.input.set(action, held);
    }

    /// Release every held input, e.g. when the host loses focus.
    pub fn clear_input(&mut self) {
        self.input = NULL_INPUT;
    }

    /// Step once with a clamped dt. Ready matches don't advance.
    /// Returns the dt actually simulated.
    pub fn advance(&mut self, dt: f64) -> f64 {
        let dt = clamp_dt(dt, self.config.max_frame_dt);
        if self.state.status == Status::Ready {
            return 0.0;
        }
        self.state = step_fight(&self.state, &self.input, dt);
        dt
    }

    /// Drive from a host frame timestamp in milliseconds. The first frame
    /// only records the timestamp.
    pub fn frame(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_frame_ms {
            Some(last) => (now_ms - last) / 1000.0,
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);
        self.advance(dt)
    }
}

impl Default for FightSession {
    fn default() -> Self {
        FightSession::from_valid(FightConfig::default())
    }
}

/// Clamp into [0, max]. Negative or NaN deltas (clock went backwards) count as 0.
pub fn clamp_dt(dt: f64, max: f64) -> f64 {
    if dt.is_nan() || dt <= 0.0 {
        return 0.0;
    }
    dt.min(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::create_initial_fight_state;

    #[test]
    fn ready_session_does_not_step() {
        let mut session = FightSession::default();
        session.set_input(Action::Right, true);
        assert_eq!(session.advance(0.016), 0.0);
        assert_eq!(session.state(), &create_initial_fight_state());
    }

    #[test]
    fn rejects_invalid_frame_clamp() {
        for bad in [-0.5, 0.0, f64::NAN, f64::INFINITY] {
            let config = FightConfig {
                max_frame_dt: bad,
                ..FightConfig::default()
            };
            assert!(matches!(
                FightSession::new(config),
                Err(ConfigError::InvalidFrameDt(_))
            ));
        }
    }

    #[test]
    fn rejects_start_outside_walls() {
        let config = FightConfig {
            cpu_start_x: 700.0,
            ..FightConfig::default()
        };
        assert!(matches!(
            FightSession::new(config),
            Err(ConfigError::StartOutOfBounds { name: "cpu", .. })
        ));
    }

    #[test]
    fn valid_config_builds_ready_session() {
        let config = FightConfig {
            seed: 7,
            ..FightConfig::default()
        };
        let mut session = FightSession::new(config).unwrap();
        assert_eq!(session.state().status, Status::Ready);
        assert_eq!(session.state().seed, 7);
        session.start();
        assert_eq!(session.advance(2.0), 0.033);
        assert_eq!(session.state().time, 0.033);
    }

    #[test]
    fn start_is_one_way() {
        let mut session = FightSession::default();
        assert!(session.start());
        assert_eq!(session.state().status, Status::Running);
        assert!(!session.start());
    }

    #[test]
    fn advance_clamps_large_dt() {
        let mut session = FightSession::default();
        session.start();
        let applied = session.advance(0.5);
        assert_eq!(applied, 0.033);
        assert_eq!(session.state().time, 0.033);
    }

    #[test]
    fn frame_uses_timestamp_delta() {
        let mut session = FightSession::default();
        session.start();
        assert_eq!(session.frame(1000.0), 0.0);
        let dt = session.frame(1016.0);
        assert!((dt - 0.016).abs() < 1e-12);
        // Long stall gets clamped
        assert_eq!(session.frame(3000.0), 0.033);
    }

    #[test]
    fn held_input_reaches_simulation() {
        let mut session = FightSession::default();
        session.start();
        session.set_input(Action::Right, true);
        session.advance(0.016);
        assert!(session.state().player.x > 180.0);

        session.set_input(Action::Right, false);
        assert_eq!(session.input(), &NULL_INPUT);
    }

    #[test]
    fn restart_returns_fresh_ready_state() {
        let mut session = FightSession::default();
        session.start();
        session.set_input(Action::Right, true);
        for _ in 0..30 {
            session.advance(0.016);
        }
        session.restart();
        assert_eq!(session.state(), &create_initial_fight_state());
        assert!(session.input().right);
    }

    #[test]
    fn clamp_dt_edges() {
        assert_eq!(clamp_dt(-1.0, 0.033), 0.0);
        assert_eq!(clamp_dt(f64::NAN, 0.033), 0.0);
        assert_eq!(clamp_dt(0.01, 0.033), 0.01);
        assert_eq!(clamp_dt(1.0, 0.033), 0.033);
    }
}
