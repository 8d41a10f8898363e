//! Line-oriented text front end for roque.

pub mod command;
pub mod error;
pub mod shell;

pub use command::{Command, ShellOption, parse_command};
pub use error::ShellError;
pub use shell::{Shell, ShellConfig};
