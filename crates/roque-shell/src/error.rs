//! Shell errors.

use roque_core::{FenError, GameError};

/// Errors that can occur while reading or executing shell commands.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// A command is missing arguments or has too many.
    #[error("malformed {command} command, usage: {usage}")]
    MalformedCommand {
        /// The command word.
        command: String,
        /// Expected argument layout.
        usage: &'static str,
    },

    /// A coordinate is not a non-negative integer.
    #[error("invalid coordinate: {value}")]
    InvalidCoordinate {
        /// The offending token.
        value: String,
    },

    /// Failed to parse a FEN string.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        /// Why it was rejected.
        source: FenError,
    },

    /// `set` named an option the shell does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name given.
        name: String,
    },

    /// `set` gave a value the option does not accept.
    #[error("invalid value for {name}: {value} (expected on or off)")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// The game rejected a selection or move.
    #[error(transparent)]
    Game(#[from] GameError),

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
