use std::str::FromStr;

use thiserror::Error;

use crate::types::Action;

/// What a key press means to the fight host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// Held action: press sets, release clears.
    Hold(Action),
    Start,
    Restart,
}

/// Map a DOM `KeyboardEvent.key` value. WASD + JKL, arrows for movement,
/// space to start, R to restart.
pub fn key_command(key: &str) -> Option<KeyCommand> {
    let command = match key {
        "a" | "A" | "ArrowLeft" => KeyCommand::Hold(Action::Left),
        "d" | "D" | "ArrowRight" => KeyCommand::Hold(Action::Right),
        "w" | "W" | "ArrowUp" => KeyCommand::Hold(Action::Jump),
        "j" | "J" => KeyCommand::Hold(Action::Punch),
        "k" | "K" => KeyCommand::Hold(Action::Kick),
        "l" | "L" => KeyCommand::Hold(Action::Block),
        " " => KeyCommand::Start,
        "r" | "R" => KeyCommand::Restart,
        _ => return None,
    };
    Some(command)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action: {0:?}")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ParseActionError(s.to_string()))
    }
}
