//! Tmux script generation.
//!
//! Turns a [`Session`] into a bash script made of tmux commands. Two styles
//! share the same window walk and differ only in how window 1 is set up and
//! whether the script creates and attaches to the session itself:
//!
//! - [`ScriptStyle::Standalone`] attaches to the session if it exists, and
//!   otherwise creates it detached with every window, then attaches.
//! - [`ScriptStyle::Sessionizer`] runs inside an existing session whose
//!   window 1 already exists. It renames window 1, types its commands, and
//!   creates the remaining windows. It never creates or attaches a session.
//!
//! Window `p` (0-based) is always addressed as `<session>:<p + 1>`.

use std::fmt;

use anyhow::Result;
use tracing::debug;

use super::commands::{
    NewSession, NewWindow, SendKeys, attach, attach_session, rename_window, select_window,
    window_target,
};
use crate::session::{Session, Window};

const SHEBANG: &str = "#!/bin/bash";
const ATTACH_FAILED: &str = "if [ $? -ne 0 ]; then";
const END_IF: &str = "fi";
const INDENT: &str = "\t";

/// Which kind of script to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptStyle {
    /// Attach-or-create script
    #[default]
    Standalone,
    /// Fragment sourced inside an already selected session
    Sessionizer,
}

impl ScriptStyle {
    /// File name suggested when the user does not pick one
    pub fn default_filename(self) -> &'static str {
        match self {
            ScriptStyle::Standalone => "tmux.sh",
            ScriptStyle::Sessionizer => ".tmux-sessionizer",
        }
    }
}

impl fmt::Display for ScriptStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptStyle::Standalone => write!(f, "standalone"),
            ScriptStyle::Sessionizer => write!(f, "sessionizer"),
        }
    }
}

/// Generate the script lines for a session.
///
/// Fails if the session has no name or no windows.
pub fn generate_lines(session: &Session, style: ScriptStyle) -> Result<Vec<String>> {
    let (first, rest) = session.validate()?;

    let id = session.identifier.as_str();
    let lines = match style {
        ScriptStyle::Standalone => standalone_lines(id, first, rest),
        ScriptStyle::Sessionizer => sessionizer_lines(id, first, rest),
    };
    debug!(%style, session = %session.identifier, lines = lines.len(), "generated script");
    Ok(lines)
}

/// Generate the script text for a session, one command per line
pub fn generate_script(session: &Session, style: ScriptStyle) -> Result<String> {
    Ok(generate_lines(session, style)?.join("\n"))
}

fn standalone_lines(id: &str, first: &Window, rest: &[Window]) -> Vec<String> {
    let mut body = vec![
        NewSession::new()
            .detached()
            .name(id)
            .window_name(&first.name)
            .render(),
    ];
    body.extend(send_keys_lines(id, 1, first));
    body.extend(remaining_window_lines(id, rest));
    body.push(select_window(&window_target(id, 1)));
    body.push(attach_session(id));

    let mut lines = vec![SHEBANG.to_string(), attach(id), ATTACH_FAILED.to_string()];
    lines.extend(body.into_iter().map(|line| format!("{}{}", INDENT, line)));
    lines.push(END_IF.to_string());
    lines
}

fn sessionizer_lines(id: &str, first: &Window, rest: &[Window]) -> Vec<String> {
    let first_target = window_target(id, 1);

    let mut lines = vec![SHEBANG.to_string()];

    // Window 1 is renamed before every command it runs
    for cmd in &first.commands {
        lines.push(rename_window(&first_target, &first.name));
        lines.push(SendKeys::new(&first_target, cmd).render());
    }

    lines.extend(remaining_window_lines(id, rest));
    lines.push(select_window(&first_target));
    lines
}

/// `new-window` plus `send-keys` lines for windows 2..=n
fn remaining_window_lines(session: &str, windows: &[Window]) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, window) in windows.iter().enumerate().map(|(i, w)| (i + 2, w)) {
        lines.push(
            NewWindow::new()
                .target(session)
                .name(&window.name)
                .render(),
        );
        lines.extend(send_keys_lines(session, index, window));
    }
    lines
}

fn send_keys_lines(session: &str, index: usize, window: &Window) -> Vec<String> {
    let target = window_target(session, index);
    window
        .commands
        .iter()
        .map(|cmd| SendKeys::new(&target, cmd).render())
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::split_commands;

    fn dev_session() -> Session {
        let mut session = Session::new("dev");
        session.add_window("editor", Some(vec!["vim .".to_string()]));
        session.add_window("server", Some(vec!["npm start".to_string()]));
        session
    }

    fn commands(cmds: &[&str]) -> Option<Vec<String>> {
        Some(cmds.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_standalone_script() {
        let script = generate_script(&dev_session(), ScriptStyle::Standalone).unwrap();
        let expected = [
            "#!/bin/bash",
            "tmux attach -t dev 2>/dev/null",
            "if [ $? -ne 0 ]; then",
            "\ttmux new-session -d -s dev -n editor",
            "\ttmux send-keys -t dev:1 \"vim .\" C-m",
            "\ttmux new-window -t dev -n server",
            "\ttmux send-keys -t dev:2 \"npm start\" C-m",
            "\ttmux select-window -t dev:1",
            "\ttmux attach-session -t dev",
            "fi",
        ]
        .join("\n");
        assert_eq!(script, expected);
    }

    #[test]
    fn test_sessionizer_script() {
        let script = generate_script(&dev_session(), ScriptStyle::Sessionizer).unwrap();
        let expected = [
            "#!/bin/bash",
            "tmux rename-window -t dev:1 editor",
            "tmux send-keys -t dev:1 \"vim .\" C-m",
            "tmux new-window -t dev -n server",
            "tmux send-keys -t dev:2 \"npm start\" C-m",
            "tmux select-window -t dev:1",
        ]
        .join("\n");
        assert_eq!(script, expected);
    }

    #[test]
    fn test_sessionizer_renames_once_per_command() {
        let mut session = Session::new("api");
        session.add_window("code", commands(&["cd src", "nvim"]));
        let lines = generate_lines(&session, ScriptStyle::Sessionizer).unwrap();
        assert_eq!(
            lines,
            [
                "#!/bin/bash",
                "tmux rename-window -t api:1 code",
                "tmux send-keys -t api:1 \"cd src\" C-m",
                "tmux rename-window -t api:1 code",
                "tmux send-keys -t api:1 \"nvim\" C-m",
                "tmux select-window -t api:1",
            ]
        );
    }

    #[test]
    fn test_sessionizer_first_window_without_commands() {
        let mut session = Session::new("api");
        session.add_window("code", None);
        session.add_window("tests", commands(&["cargo test"]));
        let lines = generate_lines(&session, ScriptStyle::Sessionizer).unwrap();

        assert!(!lines.iter().any(|l| l.contains("rename-window")));
        assert!(!lines.iter().any(|l| l.contains(":1 \"")));
        assert_eq!(
            lines,
            [
                "#!/bin/bash",
                "tmux new-window -t api -n tests",
                "tmux send-keys -t api:2 \"cargo test\" C-m",
                "tmux select-window -t api:1",
            ]
        );
    }

    #[test]
    fn test_sessionizer_blank_command_answer_still_renames() {
        let mut session = Session::new("dev");
        session.add_window("editor", Some(split_commands("")));
        session.add_window("server", Some(split_commands("npm start")));
        let lines = generate_lines(&session, ScriptStyle::Sessionizer).unwrap();
        assert_eq!(
            lines,
            [
                "#!/bin/bash",
                "tmux rename-window -t dev:1 editor",
                "tmux send-keys -t dev:1 \"\" C-m",
                "tmux new-window -t dev -n server",
                "tmux send-keys -t dev:2 \"npm start\" C-m",
                "tmux select-window -t dev:1",
            ]
        );
    }

    #[test]
    fn test_blank_command_piece_sends_enter() {
        let mut session = Session::new("dev");
        session.add_window("shell", Some(split_commands("ls;;pwd")));
        let lines = generate_lines(&session, ScriptStyle::Standalone).unwrap();
        let keys: Vec<&String> = lines.iter().filter(|l| l.contains("send-keys")).collect();
        assert_eq!(
            keys,
            [
                "\ttmux send-keys -t dev:1 \"ls\" C-m",
                "\ttmux send-keys -t dev:1 \"\" C-m",
                "\ttmux send-keys -t dev:1 \"pwd\" C-m",
            ]
        );
    }

    #[test]
    fn test_sessionizer_never_creates_or_attaches() {
        let mut session = dev_session();
        session.add_window("logs", commands(&["tail -f log.txt"]));
        let lines = generate_lines(&session, ScriptStyle::Sessionizer).unwrap();

        for line in &lines {
            assert!(!line.contains("attach"), "unexpected attach: {line}");
            assert!(!line.contains("new-session"), "unexpected new-session: {line}");
            assert_ne!(line.trim(), "fi");
            assert!(!line.starts_with("if "));
        }
    }

    #[test]
    fn test_standalone_counts_and_indices() {
        let mut session = Session::new("work");
        session.add_window("one", commands(&["a", "b"]));
        session.add_window("two", None);
        session.add_window("three", commands(&["c"]));
        session.add_window("four", commands(&["d", "e", "f"]));

        let lines = generate_lines(&session, ScriptStyle::Standalone).unwrap();
        let count = |needle: &str| lines.iter().filter(|l| l.contains(needle)).count();

        assert_eq!(count("tmux new-session"), 1);
        assert_eq!(count("tmux new-window"), 3);
        assert_eq!(count("tmux send-keys"), 6);

        let targets: Vec<&str> = lines
            .iter()
            .filter(|l| l.contains("send-keys"))
            .map(|l| l.split_whitespace().nth(3).unwrap())
            .collect();
        assert_eq!(
            targets,
            ["work:1", "work:1", "work:3", "work:4", "work:4", "work:4"]
        );

        let created: Vec<&str> = lines
            .iter()
            .filter(|l| l.contains("new-window"))
            .map(|l| l.rsplit(' ').next().unwrap())
            .collect();
        assert_eq!(created, ["two", "three", "four"]);
    }

    #[test]
    fn test_index_does_not_depend_on_window_name() {
        let mut session = Session::new("s");
        session.add_window("x", None);
        session.add_window("3", commands(&["echo three"]));
        session.add_window("x", commands(&["echo again"]));

        let lines = generate_lines(&session, ScriptStyle::Standalone).unwrap();
        assert!(lines.contains(&"\ttmux send-keys -t s:2 \"echo three\" C-m".to_string()));
        assert!(lines.contains(&"\ttmux send-keys -t s:3 \"echo again\" C-m".to_string()));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let session = dev_session();
        for style in [ScriptStyle::Standalone, ScriptStyle::Sessionizer] {
            let first = generate_script(&session, style).unwrap();
            let second = generate_script(&session, style).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_empty_session_is_rejected() {
        let session = Session::new("dev");
        for style in [ScriptStyle::Standalone, ScriptStyle::Sessionizer] {
            let err = generate_script(&session, style).unwrap_err();
            assert!(err.to_string().contains("no windows"));
        }
    }

    #[test]
    fn test_default_filenames() {
        assert_eq!(ScriptStyle::Standalone.default_filename(), "tmux.sh");
        assert_eq!(
            ScriptStyle::Sessionizer.default_filename(),
            ".tmux-sessionizer"
        );
    }
}
