use crate::config::{default_config, FightConfig};
use crate::types::*;

/// Create the initial fight state from a config. Both fighters start on the
/// ground, at full health, facing each other.
pub fn create_initial_state(config: &FightConfig) -> FightState {
    FightState {
        arena: config.arena,
        seed: config.seed,
        time: 0.0,
        status: Status::Ready,
        winner: None,
        player: Fighter::new(FighterId::Player, config.player_start_x, Facing::Right),
        cpu: Fighter::new(FighterId::Cpu, config.cpu_start_x, Facing::Left),
    }
}

/// The stock match: 720x360 arena, seed 1337.
pub fn create_initial_fight_state() -> FightState {
    create_initial_state(&default_config())
}
