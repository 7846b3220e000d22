use serde::{Deserialize, Serialize};

use crate::config::FightConfig;

// ── Primitives ──────────────────────────────────────────────

pub type Seed = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Facing {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FighterId {
    Player,
    Cpu,
}

impl FighterId {
    /// Same tag serde writes.
    pub fn as_str(self) -> &'static str {
        match self {
            FighterId::Player => "PLAYER",
            FighterId::Cpu => "CPU",
        }
    }
}

/// Match lifecycle. Only ever moves forward: Ready → Running → GameOver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Ready,
    Running,
    GameOver,
}

impl Status {
    /// Same tag serde writes.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ready => "READY",
            Status::Running => "RUNNING",
            Status::GameOver => "GAME_OVER",
        }
    }
}

// ── Input ───────────────────────────────────────────────────

/// One of the six held-input flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Left,
    Right,
    Jump,
    Punch,
    Kick,
    Block,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Left,
        Action::Right,
        Action::Jump,
        Action::Punch,
        Action::Kick,
        Action::Block,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Left => "left",
            Action::Right => "right",
            Action::Jump => "jump",
            Action::Punch => "punch",
            Action::Kick => "kick",
            Action::Block => "block",
        }
    }
}

/// Snapshot of currently-held inputs for one fighter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FightInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub punch: bool,
    pub kick: bool,
    pub block: bool,
}

pub const NULL_INPUT: FightInput = FightInput {
    left: false,
    right: false,
    jump: false,
    punch: false,
    kick: false,
    block: false,
};

impl FightInput {
    pub fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::Left => self.left = held,
            Action::Right => self.right = held,
            Action::Jump => self.jump = held,
            Action::Punch => self.punch = held,
            Action::Kick => self.kick = held,
            Action::Block => self.block = held,
        }
    }

    /// Horizontal intent: +1 right, -1 left, 0 when neither or both are held.
    pub fn horizontal(&self) -> f64 {
        (self.right as i32 - self.left as i32) as f64
    }
}

// ── Attacks ─────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(usize)]
pub enum AttackKind {
    Punch = 0,
    Kick = 1,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackStats {
    pub range: f64,
    pub damage: i32,
    /// Seconds the attack stays active and can land.
    pub duration: f64,
    /// Seconds before another attack may start.
    pub cooldown: f64,
}

// ── Fighter ─────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub id: FighterId,
    pub x: f64,
    /// Height above the ground line.
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub facing: Facing,
    pub health: i32,
    pub is_blocking: bool,
    pub attack: Option<AttackKind>,
    pub attack_timer: f64,
    pub attack_cooldown: f64,
    /// Set once the current swing has landed; cleared when a new swing starts.
    pub attack_hit: bool,
    pub stunned: f64,
}

impl Fighter {
    pub fn new(id: FighterId, x: f64, facing: Facing) -> Self {
        Fighter {
            id,
            x,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            facing,
            health: crate::constants::MAX_HEALTH,
            is_blocking: false,
            attack: None,
            attack_timer: 0.0,
            attack_cooldown: 0.0,
            attack_hit: false,
            stunned: 0.0,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.y == 0.0
    }

    pub fn is_stunned(&self) -> bool {
        self.stunned > 0.0
    }
}

// ── Arena ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
    /// Ground-line offset from the bottom edge, used by renderers.
    pub ground: f64,
}

// ── Fight State ─────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FightState {
    pub arena: Arena,
    pub seed: Seed,
    /// Seconds of simulated time.
    pub time: f64,
    pub status: Status,
    pub winner: Option<FighterId>,
    pub player: Fighter,
    pub cpu: Fighter,
}

// ── Replay I/O ──────────────────────────────────────────────

/// Recorded match: config, fixed frame dt and one player input per frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub config: FightConfig,
    pub dt: f64,
    pub inputs: Vec<FightInput>,
}

/// Outcome of replaying a transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplaySummary {
    pub frames: usize,
    pub status: Status,
    pub winner: Option<FighterId>,
    /// [player, cpu]
    pub health: [i32; 2],
    pub elapsed: f64,
    /// SHA-256 of the input transcript.
    pub transcript_hash: [u8; 32],
    /// SHA-256 of the final state.
    pub state_hash: [u8; 32],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serde_tag<T: Serialize>(value: T) -> String {
        match serde_json::to_value(value).unwrap() {
            serde_json::Value::String(tag) => tag,
            other => panic!("expected a string tag, got {other}"),
        }
    }

    #[test]
    fn as_str_matches_serde_tags() {
        for status in [Status::Ready, Status::Running, Status::GameOver] {
            assert_eq!(status.as_str(), serde_tag(status));
        }
        for id in [FighterId::Player, FighterId::Cpu] {
            assert_eq!(id.as_str(), serde_tag(id));
        }
        for action in Action::ALL {
            assert_eq!(action.as_str(), serde_tag(action));
        }
    }
}
