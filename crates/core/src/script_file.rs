//! Writing generated scripts to disk.
//!
//! A script is written in one go and then made executable (`0o755`). An
//! optional confirmation callback is asked first; declining leaves the
//! filesystem untouched.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

/// Result of [`ScriptFile::write`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The script was written to this path
    Written(PathBuf),
    /// The user declined to overwrite; nothing was written
    Cancelled,
}

type ConfirmFn<'a> = Box<dyn FnOnce(&Path) -> Result<bool> + 'a>;

/// Builder for saving a generated script
pub struct ScriptFile<'a> {
    path: PathBuf,
    confirm: Option<ConfirmFn<'a>>,
}

impl<'a> ScriptFile<'a> {
    /// Target `path`. A leading `~/` is expanded to the home directory.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            path: PathBuf::from(expand_path(path.as_ref())),
            confirm: None,
        }
    }

    /// Ask `confirm` before writing. Returning `false` cancels the save.
    pub fn confirm_overwrite(mut self, confirm: impl FnOnce(&Path) -> Result<bool> + 'a) -> Self {
        self.confirm = Some(Box::new(confirm));
        self
    }

    /// The resolved output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `contents` and mark the file executable
    pub fn write(self, contents: &str) -> Result<SaveOutcome> {
        if let Some(confirm) = self.confirm
            && !confirm(&self.path)?
        {
            info!(path = %self.path.display(), "overwrite declined, nothing written");
            return Ok(SaveOutcome::Cancelled);
        }

        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write script {}", self.path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o755))
                .with_context(|| format!("Failed to make {} executable", self.path.display()))?;
        }

        debug!(path = %self.path.display(), bytes = contents.len(), "script written");
        Ok(SaveOutcome::Written(self.path))
    }
}

/// Expand a leading `~/` to the home directory
pub fn expand_path(path: &str) -> String {
    path.strip_prefix("~/")
        .and_then(|stripped| dirs::home_dir().map(|home| home.join(stripped)))
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
