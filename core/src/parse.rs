//! Text grammar for command lines.
//!
//! ```text
//! forward [N]   (alias: f)
//! left          (alias: l)
//! right         (alias: r)
//! diagonal DIR  (alias: d)
//! report
//! charge [N]
//! grid
//! obstacle X Y
//! reset
//! ```
//!
//! Trailing tokens after the arguments a verb needs are ignored.

use std::str::FromStr;

use crate::{CellCoord, Command, Diagonal, SimulatorError};

/// Steps taken by `forward` when no count is given.
pub const DEFAULT_FORWARD_STEPS: u32 = 1;

/// Battery points restored by `charge` when no amount is given.
pub const DEFAULT_CHARGE_AMOUNT: u32 = 50;

/// Canonical form of a command line: trimmed and lower-cased.
///
/// This is the form recorded in the command history.
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Parses a normalized command line into a [`Command`].
///
/// Integer arguments that fail to parse are reported as
/// [`SimulatorError::InvalidCommand`] naming the whole command; the low-level
/// parse failure is discarded.
pub fn parse(command: &str) -> Result<Command, SimulatorError> {
    let mut tokens = command.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Err(invalid("Empty command"));
    };
    let arguments: Vec<&str> = tokens.collect();

    match verb {
        "forward" | "f" => Ok(Command::Forward {
            steps: optional_integer(&arguments, DEFAULT_FORWARD_STEPS, command)?,
        }),
        "left" | "l" => Ok(Command::TurnLeft),
        "right" | "r" => Ok(Command::TurnRight),
        "diagonal" | "d" => {
            let name = arguments
                .first()
                .ok_or_else(|| invalid("Diagonal command requires direction"))?;
            Ok(Command::Diagonal {
                direction: name.parse::<Diagonal>()?,
            })
        }
        "report" => Ok(Command::Report),
        "charge" => Ok(Command::Charge {
            amount: optional_integer(&arguments, DEFAULT_CHARGE_AMOUNT, command)?,
        }),
        "grid" => Ok(Command::ShowGrid),
        "reset" => Ok(Command::Reset),
        "obstacle" => {
            let [x, y, ..] = arguments.as_slice() else {
                return Err(invalid("Obstacle command requires x y coordinates"));
            };
            Ok(Command::PlaceObstacle {
                cell: CellCoord::new(integer(x, command)?, integer(y, command)?),
            })
        }
        other => Err(invalid(format!("Unknown command: {other}"))),
    }
}

fn optional_integer<T: FromStr>(
    arguments: &[&str],
    default: T,
    command: &str,
) -> Result<T, SimulatorError> {
    match arguments.first() {
        Some(token) => integer(token, command),
        None => Ok(default),
    }
}

fn integer<T: FromStr>(token: &str, command: &str) -> Result<T, SimulatorError> {
    token
        .parse::<T>()
        .map_err(|_| invalid(format!("Invalid command format: {command}")))
}

fn invalid(message: impl Into<String>) -> SimulatorError {
    SimulatorError::InvalidCommand(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn rejection(command: &str) -> SimulatorError {
        parse(command).expect_err("command should be rejected")
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Forward 3 \n"), "forward 3");
    }

    #[test]
    fn aliases_map_to_the_same_commands() {
        assert_eq!(parse("f"), parse("forward"));
        assert_eq!(parse("l"), Ok(Command::TurnLeft));
        assert_eq!(parse("r"), Ok(Command::TurnRight));
        assert_eq!(parse("d southeast"), parse("diagonal southeast"));
    }

    #[test]
    fn optional_arguments_fall_back_to_defaults() {
        assert_eq!(
            parse("forward"),
            Ok(Command::Forward {
                steps: DEFAULT_FORWARD_STEPS
            })
        );
        assert_eq!(
            parse("charge"),
            Ok(Command::Charge {
                amount: DEFAULT_CHARGE_AMOUNT
            })
        );
        assert_eq!(parse("forward 3"), Ok(Command::Forward { steps: 3 }));
        assert_eq!(parse("charge 20"), Ok(Command::Charge { amount: 20 }));
    }

    #[test]
    fn malformed_integers_name_the_whole_command() {
        let error = rejection("forward two");
        assert_eq!(error.kind(), ErrorKind::InvalidCommand);
        assert_eq!(error.message(), "Invalid command format: forward two");

        assert_eq!(
            rejection("obstacle 1 y").message(),
            "Invalid command format: obstacle 1 y"
        );
    }

    #[test]
    fn negative_counts_are_malformed() {
        assert_eq!(
            rejection("forward -2").message(),
            "Invalid command format: forward -2"
        );
        assert_eq!(
            rejection("charge -10").message(),
            "Invalid command format: charge -10"
        );
    }

    #[test]
    fn obstacle_coordinates_may_be_negative() {
        assert_eq!(
            parse("obstacle -1 4"),
            Ok(Command::PlaceObstacle {
                cell: CellCoord::new(-1, 4)
            })
        );
    }

    #[test]
    fn missing_arguments_are_invalid() {
        assert_eq!(
            rejection("diagonal").message(),
            "Diagonal command requires direction"
        );
        assert_eq!(
            rejection("obstacle 3").message(),
            "Obstacle command requires x y coordinates"
        );
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        assert_eq!(
            parse("obstacle 1 2 3"),
            Ok(Command::PlaceObstacle {
                cell: CellCoord::new(1, 2)
            })
        );
        assert_eq!(parse("left now"), Ok(Command::TurnLeft));
    }

    #[test]
    fn empty_and_unknown_commands_are_invalid() {
        assert_eq!(rejection("").message(), "Empty command");
        assert_eq!(rejection("   ").message(), "Empty command");
        assert_eq!(rejection("jump 3").message(), "Unknown command: jump");
        assert_eq!(rejection("remove 1 1").message(), "Unknown command: remove");
    }
}
