//! Session layout model.
//!
//! A [`Session`] is the ordered list of windows a generated script recreates.
//! Window order is significant: the window at position `p` becomes tmux
//! window index `p + 1` in every emitted command.
//!
//! Sessions are usually built incrementally from interactive prompts, but can
//! also be loaded from (and saved to) a YAML layout file:
//!
//! ```yaml
//! session: dev
//! windows:
//!   - name: editor
//!     commands: ["vim ."]
//!   - name: server
//!     commands:
//!       - npm start
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

// =============================================================================
// Types
// =============================================================================

/// A tmux session layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Session name (standalone) or directory name (sessionizer)
    #[serde(rename = "session", alias = "name")]
    pub identifier: String,
    /// Windows in creation order
    #[serde(default)]
    pub windows: Vec<Window>,
}

/// A named window and the command lines typed into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,
}

impl Window {
    pub fn new(name: impl Into<String>, commands: Vec<String>) -> Self {
        Self {
            name: name.into(),
            commands,
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

impl Session {
    /// Create an empty session
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            windows: Vec::new(),
        }
    }

    /// Append a window. `None` commands means the window only gets created.
    ///
    /// Names are taken verbatim and duplicates are kept.
    pub fn add_window(&mut self, name: impl Into<String>, commands: Option<Vec<String>>) {
        let window = Window::new(name, commands.unwrap_or_default());
        debug!(
            window = %window.name,
            commands = window.commands.len(),
            "added window"
        );
        self.windows.push(window);
    }

    /// Check the preconditions for emitting a script.
    ///
    /// Returns window 1 and the windows after it.
    pub fn validate(&self) -> Result<(&Window, &[Window])> {
        if self.identifier.is_empty() {
            anyhow::bail!("Session name must not be empty");
        }
        self.windows.split_first().ok_or_else(|| {
            anyhow::anyhow!(
                "Session '{}' has no windows: add at least one window before generating a script",
                self.identifier
            )
        })
    }

    /// Parse a session from YAML layout text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let session: Session = serde_yaml::from_str(yaml)?;
        Ok(session)
    }

    /// Render the session as YAML layout text
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Split a raw command prompt answer into individual command lines.
///
/// Commands are separated by `;` and each piece is trimmed. Blank pieces are
/// kept: an empty answer is one empty command, which only presses Enter.
pub fn split_commands(input: &str) -> Vec<String> {
    input.split(';').map(|cmd| cmd.trim().to_string()).collect()
}

// =============================================================================
// Layout files
// =============================================================================

/// Load a session from a YAML layout file
pub fn load_layout(path: &Path) -> Result<Session> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file {}", path.display()))?;
    let session = Session::from_yaml(&content)
        .with_context(|| format!("Invalid layout file {}", path.display()))?;
    debug!(path = %path.display(), windows = session.windows.len(), "loaded layout");
    Ok(session)
}

/// Write a session to a YAML layout file
pub fn save_layout(session: &Session, path: &Path) -> Result<()> {
    std::fs::write(path, session.to_yaml()?)
        .with_context(|| format!("Failed to write layout file {}", path.display()))?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
