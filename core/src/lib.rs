pub mod ai;
pub mod combat;
pub mod config;
pub mod constants;
pub mod hash;
pub mod init;
pub mod keymap;
pub mod physics;
pub mod prng;
pub mod replay;
pub mod session;
pub mod snake;
pub mod step;
pub mod types;

pub use ai::decide_cpu;
pub use combat::{can_start_attack, resolve_hit, start_attack, tick_timers};
pub use config::{default_config, ConfigError, FightConfig};
pub use constants::*;
pub use hash::*;
pub use init::*;
pub use keymap::{key_command, KeyCommand, ParseActionError};
pub use physics::{apply_movement, enforce_separation, integrate, update_facing};
pub use prng::*;
pub use replay::{run_transcript, TranscriptError};
pub use session::FightSession;
pub use step::step_fight;
pub use types::*;
