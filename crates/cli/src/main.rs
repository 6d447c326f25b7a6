//! tmuxgen CLI - generate scripts that recreate tmux session layouts.
//!
//! # Workflow
//!
//! 1. Pick the script style: standalone (attach-or-create) or sessionizer
//! 2. Collect the session name and windows from prompts, or a YAML layout file
//! 3. Render the script with `tmuxgen-core`
//! 4. Write it as an executable file (or print it with `--print`)
//!
//! Generation and persistence live in `tmuxgen-core`; this crate only handles
//! arguments, prompts and logging.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Entry point for the tmuxgen CLI.
///
/// Clears the terminal for interactive runs, then hands off to the generator.
/// Errors propagate out of `main`, so I/O failures end the run with a non-zero
/// exit status.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let interactive = cli.layout.is_none();
    if interactive && !cli.print {
        dialoguer::console::Term::stdout().clear_screen().ok();
        println!("\n{}\n", "=== Tmux Session Generator ===".bold());
    }

    commands::generate::run(&cli)
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` raises the default `warn` level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}
