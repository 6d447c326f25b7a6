use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "tmuxgen")]
#[command(about = "Generate a shell script that recreates a tmux session layout")]
#[command(version)]
pub struct Cli {
    /// Generate a sessionizer fragment (renames window 1, no attach/create)
    #[arg(long, conflicts_with = "standalone")]
    pub sessionizer: bool,

    /// Generate a standalone attach-or-create script
    #[arg(long)]
    pub standalone: bool,

    /// Output file (default: tmux.sh, or .tmux-sessionizer in sessionizer mode)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<String>,

    /// Read the session layout from a YAML file instead of prompting
    #[arg(short = 'l', long = "layout", value_name = "PATH")]
    pub layout: Option<String>,

    /// Session (or directory) name, overriding the one in the layout file
    #[arg(short = 's', long = "session", value_name = "NAME")]
    pub session: Option<String>,

    /// Also save the collected layout as YAML
    #[arg(long = "save-layout", value_name = "PATH")]
    pub save_layout: Option<String>,

    /// Print the script to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub print: bool,

    /// Overwrite the sessionizer file without asking
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}
