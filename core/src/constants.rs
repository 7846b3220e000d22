use crate::types::{AttackKind, AttackStats};

// All rates are per second; positions are arena units.

// Arena
pub const ARENA_WIDTH: f64 = 720.0;
pub const ARENA_HEIGHT: f64 = 360.0;
pub const GROUND_Y: f64 = 40.0;
/// Fighters can't get closer than this to either side wall.
pub const WALL_MARGIN: f64 = 40.0;

// Physics
pub const MOVE_SPEED: f64 = 220.0;
pub const JUMP_SPEED: f64 = 420.0;
pub const GRAVITY: f64 = 1100.0;
/// Per-frame horizontal velocity decay while stunned.
pub const STUN_VX_DECAY: f64 = 0.8;

// Spacing
pub const MIN_GAP: f64 = 60.0;

// Health / combat
pub const MAX_HEALTH: i32 = 100;
pub const HIT_STUN: f64 = 0.18;

// Match setup
pub const INITIAL_SEED: u32 = 1337;
pub const PLAYER_START_X: f64 = 180.0;
pub const CPU_START_X: f64 = 540.0;

/// Upper bound on a single frame's dt, so a dropped frame can't tunnel fighters.
pub const MAX_FRAME_DT: f64 = 0.033;
pub const DEFAULT_FRAME_DT: f64 = 1.0 / 60.0;

// CPU controller thresholds (distance in arena units, rolls in [0, 1])
pub const CPU_APPROACH_DISTANCE: f64 = 140.0;
pub const CPU_RETREAT_DISTANCE: f64 = 70.0;
pub const CPU_RETREAT_ROLL: f64 = 0.5;
pub const CPU_ATTACK_DISTANCE: f64 = 120.0;
pub const CPU_ATTACK_ROLL: f64 = 0.65;
pub const CPU_KICK_ROLL: f64 = 0.85;
pub const CPU_BLOCK_DISTANCE: f64 = 100.0;
pub const CPU_BLOCK_ROLL: f64 = 0.25;
pub const CPU_JUMP_ROLL: f64 = 0.92;

// Snake
pub const SNAKE_DEFAULT_GRID: i32 = 20;

/// Const lookup table indexed by `AttackKind as usize`.
pub const ATTACK_TABLE: [AttackStats; 2] = [
    // Punch
    AttackStats {
        range: 70.0,
        damage: 6,
        duration: 0.2,
        cooldown: 0.35,
    },
    // Kick
    AttackStats {
        range: 90.0,
        damage: 9,
        duration: 0.28,
        cooldown: 0.55,
    },
];

pub fn attack_stats(kind: AttackKind) -> AttackStats {
    ATTACK_TABLE[kind as usize]
}
