//! Interactive script generation.
//!
//! Collects a session layout (from prompts or a layout file), renders it in
//! the chosen style and saves it.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use tmuxgen_core::{
    SaveOutcome, ScriptFile, ScriptStyle, Session, generate_script, load_layout, save_layout,
    split_commands,
};
use tracing::{debug, info};

use crate::cli::Cli;

/// Run the generator with the parsed command line
pub fn run(cli: &Cli) -> Result<()> {
    let theme = ColorfulTheme::default();

    let style = match (cli.sessionizer, cli.standalone) {
        (true, _) => ScriptStyle::Sessionizer,
        (_, true) => ScriptStyle::Standalone,
        _ => prompt_style(&theme)?,
    };
    debug!(%style, "selected script style");

    let session = match &cli.layout {
        Some(path) => layout_session(Path::new(path), cli.session.as_deref())?,
        None => prompt_session(&theme, style, cli.session.as_deref())?,
    };

    let script = generate_script(&session, style)?;

    if let Some(path) = &cli.save_layout {
        save_layout(&session, Path::new(path))?;
        println!("{} {} {}", "✔".green(), "Saved layout".dimmed(), path);
    }

    if cli.print {
        println!("{}", script);
        return Ok(());
    }

    let filename = match (&cli.output, style) {
        (Some(path), _) => path.clone(),
        (None, ScriptStyle::Standalone) => Input::<String>::with_theme(&theme)
            .with_prompt("Enter the filename")
            .default(style.default_filename().to_string())
            .interact_text()?,
        (None, ScriptStyle::Sessionizer) => style.default_filename().to_string(),
    };

    let mut file = ScriptFile::new(&filename);
    if style == ScriptStyle::Sessionizer && !cli.yes {
        file = file.confirm_overwrite(|path| confirm_overwrite(&theme, path));
    }

    match file.write(&script)? {
        SaveOutcome::Written(path) => {
            info!(path = %path.display(), "script generated");
            println!(
                "{} Tmux script \"{}\" generated!",
                "✔".green(),
                path.display()
            );
        }
        SaveOutcome::Cancelled => {
            println!("{}", "Cancelled".dimmed());
        }
    }

    Ok(())
}

/// Load a layout file, optionally renaming its session
fn layout_session(path: &Path, name: Option<&str>) -> Result<Session> {
    let mut session = load_layout(path)?;
    if let Some(name) = name {
        session.identifier = name.to_string();
    }
    Ok(session)
}

/// Ask whether the script is for the tmux-sessionizer
fn prompt_style(theme: &ColorfulTheme) -> Result<ScriptStyle> {
    let sessionizer = Confirm::with_theme(theme)
        .with_prompt("Are you using the tmux-sessionizer?")
        .interact()?;
    Ok(if sessionizer {
        ScriptStyle::Sessionizer
    } else {
        ScriptStyle::Standalone
    })
}

fn confirm_overwrite(theme: &ColorfulTheme, path: &Path) -> Result<bool> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Confirm::with_theme(theme)
        .with_prompt(format!("Overwrite any existing {} file?", name))
        .interact()?)
}

/// Prompt for the session name and its windows
fn prompt_session(
    theme: &ColorfulTheme,
    style: ScriptStyle,
    name: Option<&str>,
) -> Result<Session> {
    let identifier = match name {
        Some(name) => name.to_string(),
        None => {
            let prompt = match style {
                ScriptStyle::Standalone => "Enter the tmux session name",
                ScriptStyle::Sessionizer => "Enter the directory name",
            };
            Input::<String>::with_theme(theme)
                .with_prompt(prompt)
                .validate_with(|input: &String| -> Result<(), &'static str> {
                    if input.is_empty() {
                        Err("Name must not be empty")
                    } else {
                        Ok(())
                    }
                })
                .interact_text()?
        }
    };

    let mut session = Session::new(identifier);

    loop {
        let window_name: String = Input::with_theme(theme)
            .with_prompt("Enter window name (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        if window_name.is_empty() {
            if session.windows.is_empty() {
                eprintln!("{} At least one window is required", "✘".red());
                continue;
            }
            break;
        }

        let commands: String = Input::with_theme(theme)
            .with_prompt(format!(
                "Enter commands to run in {} (separated by semicolon)",
                window_name
            ))
            .allow_empty(true)
            .interact_text()?;

        session.add_window(window_name, Some(split_commands(&commands)));
    }

    Ok(session)
}
