//! tmuxgen Core - Core library for the tmuxgen script generator
//!
//! This crate provides:
//! - The session layout model and YAML layout files
//! - Tmux command line builders
//! - Standalone and sessionizer script generation
//! - Saving scripts as executable files

pub mod script_file;
pub mod session;
pub mod tmux;

// Re-export commonly used types at crate root
pub use script_file::{SaveOutcome, ScriptFile};
pub use session::{Session, Window, load_layout, save_layout, split_commands};
pub use tmux::{ScriptStyle, generate_lines, generate_script};
