//! Shell command parsing.

use roque_core::{GameState, Square};

use crate::error::ShellError;

/// A runtime option set with `set <name> <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOption {
    /// Print the board after every accepted move.
    Autoboard(bool),
    /// Draw the board with Unicode chess glyphs.
    Glyphs(bool),
}

/// A parsed shell command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- start over from the initial position.
    New,
    /// `position` -- replace the game with a set-up position.
    Position(GameState),
    /// `moves <row> <col>` -- list the legal destinations of a piece.
    Moves(Square),
    /// `move <row> <col> <row> <col>` -- play a move.
    Move {
        /// Origin square.
        from: Square,
        /// Destination square.
        to: Square,
    },
    /// `captured` -- captured pieces per color.
    Captured,
    /// `board` -- print the board.
    Board,
    /// `fen` -- print the position as FEN.
    Fen,
    /// `status` -- print check and checkmate state.
    Status,
    /// `set` -- change an option.
    Set(ShellOption),
    /// `quit` -- leave the shell.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ShellError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    let args = &tokens[1..];
    match tokens[0] {
        "new" => Ok(Command::New),
        "position" => parse_position(args),
        "moves" => match args {
            [row, col] => Ok(Command::Moves(parse_square(row, col)?)),
            _ => Err(malformed("moves", "moves <row> <col>")),
        },
        "move" => match args {
            [from_row, from_col, to_row, to_col] => Ok(Command::Move {
                from: parse_square(from_row, from_col)?,
                to: parse_square(to_row, to_col)?,
            }),
            _ => Err(malformed("move", "move <row> <col> <row> <col>")),
        },
        "captured" => Ok(Command::Captured),
        "board" => Ok(Command::Board),
        "fen" => Ok(Command::Fen),
        "status" => Ok(Command::Status),
        "set" => parse_set(args),
        "quit" | "exit" => Ok(Command::Quit),
        other => Ok(Command::Unknown(other.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos`
/// - `position fen <fen-string>` (3 to 6 fields)
fn parse_position(tokens: &[&str]) -> Result<Command, ShellError> {
    const USAGE: &str = "position startpos | position fen <fen>";

    match tokens {
        ["startpos"] => Ok(Command::Position(GameState::starting_position())),
        ["fen", fields @ ..] if !fields.is_empty() => {
            let fen = fields.join(" ");
            let state: GameState = fen
                .parse()
                .map_err(|source| ShellError::InvalidFen { fen: fen.clone(), source })?;
            Ok(Command::Position(state))
        }
        _ => Err(malformed("position", USAGE)),
    }
}

/// Parse `set <name> <value>`.
fn parse_set(tokens: &[&str]) -> Result<Command, ShellError> {
    let [name, value] = tokens else {
        return Err(malformed("set", "set <option> on|off"));
    };

    let enabled = match *value {
        "on" | "true" => true,
        "off" | "false" => false,
        _ => {
            return Err(ShellError::InvalidOptionValue {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    };

    match *name {
        "autoboard" => Ok(Command::Set(ShellOption::Autoboard(enabled))),
        "glyphs" => Ok(Command::Set(ShellOption::Glyphs(enabled))),
        _ => Err(ShellError::UnknownOption {
            name: name.to_string(),
        }),
    }
}

/// Parse a `row col` pair into a square.
fn parse_square(row: &str, col: &str) -> Result<Square, ShellError> {
    let row = parse_coordinate(row)?;
    let col = parse_coordinate(col)?;
    Ok(Square::try_from((row, col))?)
}

fn parse_coordinate(token: &str) -> Result<usize, ShellError> {
    token.parse().map_err(|_| ShellError::InvalidCoordinate {
        value: token.to_string(),
    })
}

fn malformed(command: &str, usage: &'static str) -> ShellError {
    ShellError::MalformedCommand {
        command: command.to_string(),
        usage,
    }
}

#[cfg(test)]
mod tests {
    use roque_core::{Color, FenError, GameError, GameState, Square};

    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn parse_simple_commands() {
        assert!(matches!(parse_command("new").unwrap(), Command::New));
        assert!(matches!(parse_command("captured").unwrap(), Command::Captured));
        assert!(matches!(parse_command("board").unwrap(), Command::Board));
        assert!(matches!(parse_command("fen").unwrap(), Command::Fen));
        assert!(matches!(parse_command("status").unwrap(), Command::Status));
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_moves() {
        let cmd = parse_command("moves 6 4").unwrap();
        assert!(matches!(cmd, Command::Moves(s) if s == sq(6, 4)));
    }

    #[test]
    fn parse_move_with_extra_spaces() {
        let cmd = parse_command("  move 6 4   4 4 ").unwrap();
        assert!(matches!(cmd, Command::Move { from, to } if from == sq(6, 4) && to == sq(4, 4)));
    }

    #[test]
    fn parse_move_wrong_arity() {
        assert!(matches!(
            parse_command("move 6 4 4"),
            Err(ShellError::MalformedCommand { .. })
        ));
        assert!(matches!(
            parse_command("moves"),
            Err(ShellError::MalformedCommand { .. })
        ));
    }

    #[test]
    fn parse_off_board_coordinate() {
        assert!(matches!(
            parse_command("moves 8 0"),
            Err(ShellError::Game(GameError::OutOfBounds { row: 8, col: 0 }))
        ));
    }

    #[test]
    fn parse_non_numeric_coordinate() {
        assert!(matches!(
            parse_command("moves e 2"),
            Err(ShellError::InvalidCoordinate { value }) if value == "e"
        ));
        assert!(matches!(
            parse_command("moves -1 2"),
            Err(ShellError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn parse_position_startpos() {
        match parse_command("position startpos").unwrap() {
            Command::Position(state) => assert_eq!(state, GameState::starting_position()),
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_fen() {
        match parse_command("position fen 4k3/8/8/8/8/8/8/R3K3 b Q").unwrap() {
            Command::Position(state) => assert_eq!(state.side_to_move(), Color::Black),
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_bad_fen() {
        assert!(matches!(
            parse_command("position fen 8/8/8 w - -"),
            Err(ShellError::InvalidFen {
                source: FenError::WrongRankCount { found: 3 },
                ..
            })
        ));
        assert!(matches!(
            parse_command("position"),
            Err(ShellError::MalformedCommand { .. })
        ));
    }

    #[test]
    fn parse_set_options() {
        assert!(matches!(
            parse_command("set autoboard on").unwrap(),
            Command::Set(ShellOption::Autoboard(true))
        ));
        assert!(matches!(
            parse_command("set glyphs off").unwrap(),
            Command::Set(ShellOption::Glyphs(false))
        ));
        assert!(matches!(
            parse_command("set hash 16"),
            Err(ShellError::InvalidOptionValue { .. })
        ));
        assert!(matches!(
            parse_command("set colour on"),
            Err(ShellError::UnknownOption { name }) if name == "colour"
        ));
    }

    #[test]
    fn parse_unknown() {
        assert!(matches!(parse_command("go depth 5").unwrap(), Command::Unknown(word) if word == "go"));
        assert!(matches!(parse_command("").unwrap(), Command::Unknown(word) if word.is_empty()));
    }
}
