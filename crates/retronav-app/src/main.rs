//! RetroNav headless entry point.
//!
//! Wires the browser shell to the headless engine and drives it from an
//! interactive stdin command loop. Type 'help' for commands, 'quit' to
//! exit. Config is read from argv[1] or $RETRONAV_CONFIG when given.

mod commands;
mod engine;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use commands::CommandResult;
use engine::HeadlessEngine;
use retronav_shell::{BrowserShell, ShellConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve config from CLI arg, RETRONAV_CONFIG env var, or defaults.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("RETRONAV_CONFIG").ok());
    let config = match config_path {
        Some(path) => ShellConfig::load_or_default(Path::new(&path)),
        None => ShellConfig::default(),
    };
    log::info!(
        "Starting {} (home: {}, bookmarks: {})",
        config.window_title,
        config.home_url,
        config.bookmarks_path.display(),
    );

    let mut shell = BrowserShell::new(HeadlessEngine::new(), &config);
    shell.start();
    shell.pump();
    commands::print_status(&shell);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if commands::dispatch(&mut shell, &line) == CommandResult::Quit {
            break;
        }
    }

    log::info!("RetroNav shut down cleanly");
    Ok(())
}
