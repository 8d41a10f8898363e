use std::io;

use anyhow::Result;
use tracing::info;

use roque_shell::Shell;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only shell replies.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!(version = env!("CARGO_PKG_VERSION"), "roque starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Shell::new().run(stdin.lock(), &mut stdout)?;
    Ok(())
}
