//! Line-oriented game loop: one session, commands handled strictly in order.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use roque_core::{Color, Game, Piece};

use crate::command::{Command, ShellOption, parse_command};
use crate::error::ShellError;

/// Configuration knobs adjustable via `set`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellConfig {
    /// Print the board after every accepted move.
    pub autoboard: bool,
    /// Draw pieces as Unicode glyphs instead of FEN letters.
    pub glyphs: bool,
}

/// The text front end, holding one game session and its display options.
#[derive(Debug, Default)]
pub struct Shell {
    game: Game,
    config: ShellConfig,
}

impl Shell {
    /// Create a shell with a fresh game and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shell with a fresh game and the given options.
    pub fn with_config(config: ShellConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> ShellConfig {
        self.config
    }

    /// Read commands from `input` until `quit` or end of input, writing replies to `out`.
    ///
    /// Rejected commands and moves are reported as `error: <message>` and the
    /// session continues; only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), ShellError> {
        info!("shell started");
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(Command::Unknown(word)) => {
                    warn!(command = %word, "unknown command ignored");
                }
                Ok(cmd) => {
                    if let Err(err) = self.execute(cmd, out) {
                        self.report(err, out)?;
                    }
                }
                Err(err) => self.report(err, out)?,
            }
            out.flush()?;
        }
        info!("shell exiting");
        Ok(())
    }

    fn report<W: Write>(&self, err: ShellError, out: &mut W) -> Result<(), ShellError> {
        if let ShellError::Io { .. } = err {
            return Err(err);
        }
        warn!(error = %err, "command rejected");
        writeln!(out, "error: {err}")?;
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), ShellError> {
        match cmd {
            Command::New => {
                self.game.reset();
                writeln!(out, "{}", self.game.status())?;
            }
            Command::Position(state) => {
                self.game = Game::from_state(state);
                writeln!(out, "{}", self.game.status())?;
            }
            Command::Moves(from) => {
                let moves = self.game.select(from)?;
                if moves.is_empty() {
                    writeln!(out, "no legal moves")?;
                } else {
                    let targets: Vec<String> = moves
                        .as_slice()
                        .iter()
                        .map(|mv| format!("{} {}", mv.to().row(), mv.to().col()))
                        .collect();
                    writeln!(out, "{}", targets.join(", "))?;
                }
            }
            Command::Move { from, to } => {
                let status = self.game.play(from, to)?;
                writeln!(out, "{status}")?;
                if self.config.autoboard {
                    self.write_board(out)?;
                }
            }
            Command::Captured => {
                for color in Color::ALL {
                    let pieces = self.piece_list(self.game.captured(color));
                    writeln!(out, "{color}: {pieces}")?;
                }
            }
            Command::Board => self.write_board(out)?,
            Command::Fen => writeln!(out, "{}", self.game.state().to_fen())?,
            Command::Status => writeln!(out, "{}", self.game.status())?,
            Command::Set(option) => {
                match option {
                    ShellOption::Autoboard(on) => self.config.autoboard = on,
                    ShellOption::Glyphs(on) => self.config.glyphs = on,
                }
                debug!(config = ?self.config, "option set");
            }
            Command::Quit | Command::Unknown(_) => {}
        }
        Ok(())
    }

    fn write_board<W: Write>(&self, out: &mut W) -> Result<(), ShellError> {
        let board = self.game.state().board();
        if self.config.glyphs {
            writeln!(out, "{}", board.pretty_glyphs())?;
        } else {
            writeln!(out, "{}", board.pretty())?;
        }
        Ok(())
    }

    fn piece_list(&self, pieces: &[Piece]) -> String {
        if pieces.is_empty() {
            return "-".to_string();
        }
        pieces
            .iter()
            .map(|piece| {
                if self.config.glyphs {
                    piece.glyph()
                } else {
                    piece.fen_char()
                }
            })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::{Shell, ShellConfig};

    fn run(shell: &mut Shell, script: &str) -> String {
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn set_changes_config() {
        let mut shell = Shell::new();
        assert_eq!(shell.config(), ShellConfig::default());
        run(&mut shell, "set autoboard on\nset glyphs on\n");
        assert_eq!(
            shell.config(),
            ShellConfig {
                autoboard: true,
                glyphs: true
            }
        );
    }

    #[test]
    fn quit_stops_reading() {
        let mut shell = Shell::new();
        let out = run(&mut shell, "quit\nmove 6 4 4 4\n");
        assert!(out.is_empty());
        assert_eq!(shell.game().state().to_fen(), roque_core::STARTING_FEN);
    }

    #[test]
    fn glyph_captures() {
        let mut shell = Shell::with_config(ShellConfig {
            autoboard: false,
            glyphs: true,
        });
        let out = run(&mut shell, "move 6 4 4 4\nmove 1 3 3 3\nmove 4 4 3 3\ncaptured\n");
        assert!(out.ends_with("white: -\nblack: \u{265F}\n"), "{out:?}");
    }
}
