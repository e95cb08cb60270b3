//! Player commands.
//!
//! `Command` is the typed form the engine executes. `RawCommand` is the
//! loose shape clients send (`{"command": "build", "row": 3, "col": 4,
//! "direction": "vertical"}`); converting it reports malformed payloads as
//! `CommandError::InvalidCommand` before the engine sees them.

use serde::{Deserialize, Serialize};

use crate::core::error::CommandError;
use crate::core::position::Position;
use crate::core::wall::WallDirection;

/// A typed command for the active player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Command {
    /// Relocate the token.
    Move { position: Position },
    /// Build a wall anchored at `position`.
    Build {
        position: Position,
        direction: WallDirection,
    },
    /// Pass the turn.
    Skip,
}

impl Command {
    /// Wire name of the command kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Move { .. } => "move",
            Self::Build { .. } => "build",
            Self::Skip => "skip",
        }
    }
}

/// Untyped command payload as received from a client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommand {
    pub command: String,
    #[serde(default)]
    pub row: Option<i32>,
    #[serde(default)]
    pub col: Option<i32>,
    #[serde(default)]
    pub direction: Option<String>,
}

impl RawCommand {
    fn position(&self) -> Result<Position, CommandError> {
        match (self.row, self.col) {
            (Some(row), Some(col)) => Ok(Position::new(row, col)),
            _ => Err(CommandError::InvalidCommand(format!(
                "{} requires row and col",
                self.command
            ))),
        }
    }
}

impl TryFrom<RawCommand> for Command {
    type Error = CommandError;

    fn try_from(raw: RawCommand) -> Result<Self, Self::Error> {
        match raw.command.as_str() {
            "move" => Ok(Command::Move {
                position: raw.position()?,
            }),
            "build" => {
                let position = raw.position()?;
                let name = raw.direction.as_deref().ok_or_else(|| {
                    CommandError::InvalidCommand("build requires a direction".into())
                })?;
                let direction = WallDirection::from_name(name).ok_or_else(|| {
                    CommandError::InvalidCommand(format!("unknown wall direction '{}'", name))
                })?;
                Ok(Command::Build { position, direction })
            }
            "skip" => Ok(Command::Skip),
            other => Err(CommandError::InvalidCommand(format!(
                "unknown command '{}'",
                other
            ))),
        }
    }
}
