//! Closed error taxonomy surfaced by every world operation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a command may be rejected by the world.
///
/// Each variant carries the message shown to the caller. A rejected command
/// aborts only itself; side effects that happened before the rejection, such
/// as spent battery, remain in place.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum SimulatorError {
    /// The target cell lies outside the current grid boundary.
    #[error("{0}")]
    OutOfBounds(String),
    /// The target or placement cell is blocked.
    #[error("{0}")]
    Obstacle(String),
    /// The battery was already empty when the action was attempted.
    #[error("{0}")]
    BatteryDead(String),
    /// The command text or its arguments could not be understood.
    #[error("{0}")]
    InvalidCommand(String),
    /// A failure outside the domain taxonomy.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl SimulatorError {
    /// Returns the fieldless discriminant of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfBounds(_) => ErrorKind::OutOfBounds,
            Self::Obstacle(_) => ErrorKind::Obstacle,
            Self::BatteryDead(_) => ErrorKind::BatteryDead,
            Self::InvalidCommand(_) => ErrorKind::InvalidCommand,
            Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Message payload without the kind-specific prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::OutOfBounds(message)
            | Self::Obstacle(message)
            | Self::BatteryDead(message)
            | Self::InvalidCommand(message)
            | Self::Unexpected(message) => message,
        }
    }
}

/// Discriminant of a [`SimulatorError`], used by outcome envelopes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`SimulatorError::OutOfBounds`].
    OutOfBounds,
    /// See [`SimulatorError::Obstacle`].
    Obstacle,
    /// See [`SimulatorError::BatteryDead`].
    BatteryDead,
    /// See [`SimulatorError::InvalidCommand`].
    InvalidCommand,
    /// See [`SimulatorError::Unexpected`].
    Unexpected,
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, SimulatorError};

    #[test]
    fn unexpected_errors_are_prefixed() {
        let error = SimulatorError::Unexpected("move counter overflowed".to_owned());
        assert_eq!(error.kind(), ErrorKind::Unexpected);
        assert_eq!(error.message(), "move counter overflowed");
        assert_eq!(
            error.to_string(),
            "Unexpected error: move counter overflowed"
        );
    }

    #[test]
    fn domain_errors_display_their_message_verbatim() {
        let error = SimulatorError::Obstacle("Cannot move to (2, 2) - obstacle present!".to_owned());
        assert_eq!(error.kind(), ErrorKind::Obstacle);
        assert_eq!(error.to_string(), error.message());
    }
}
