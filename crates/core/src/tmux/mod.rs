//! Tmux script generation for session layouts.
//!
//! # Submodules
//!
//! - [`commands`]: Line builders for individual tmux commands (NewSession, SendKeys, etc.)
//! - [`script`]: Standalone and sessionizer scripts built from a [`Session`](crate::Session)
//!
//! # Usage
//!
//! ```ignore
//! use tmuxgen_core::{Session, tmux::{ScriptStyle, generate_script}};
//!
//! let mut session = Session::new("dev");
//! session.add_window("editor", Some(vec!["vim .".to_string()]));
//! let script = generate_script(&session, ScriptStyle::Standalone)?;
//! ```

mod commands;
mod script;

pub use commands::*;
pub use script::*;
