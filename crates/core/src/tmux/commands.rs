//! Tmux command line builders
//!
//! Each builder renders one tmux invocation as a line of shell script text.
//! Arguments are inserted verbatim: names and commands are not quoted or
//! escaped beyond the double quotes `send-keys` wraps its keys in.

/// Build a `session:index` window target
pub fn window_target(session: &str, index: usize) -> String {
    format!("{}:{}", session, index)
}

fn tmux(args: &[&str]) -> String {
    let mut line = String::from("tmux");
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

// =============================================================================
// Session Commands
// =============================================================================

/// Try to attach to an existing session, discarding the error output
pub fn attach(session: &str) -> String {
    format!("{} 2>/dev/null", tmux(&["attach", "-t", session]))
}

/// Attach to a session
pub fn attach_session(session: &str) -> String {
    tmux(&["attach-session", "-t", session])
}

/// Builder for `new-session` lines
#[derive(Default)]
pub struct NewSession<'a> {
    name: Option<&'a str>,
    detached: bool,
    window_name: Option<&'a str>,
}

impl<'a> NewSession<'a> {
    /// Create a new session builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session name
    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Start the session detached
    pub fn detached(mut self) -> Self {
        self.detached = true;
        self
    }

    /// Set the initial window name
    pub fn window_name(mut self, name: &'a str) -> Self {
        self.window_name = Some(name);
        self
    }

    /// Render the new-session line
    pub fn render(self) -> String {
        let mut args = vec!["new-session"];

        if self.detached {
            args.push("-d");
        }

        if let Some(name) = self.name {
            args.push("-s");
            args.push(name);
        }

        if let Some(name) = self.window_name {
            args.push("-n");
            args.push(name);
        }

        tmux(&args)
    }
}

// =============================================================================
// Window Commands
// =============================================================================

/// Builder for `new-window` lines
#[derive(Default)]
pub struct NewWindow<'a> {
    target: Option<&'a str>,
    name: Option<&'a str>,
}

impl<'a> NewWindow<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session the window is created in
    pub fn target(mut self, target: &'a str) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the window name
    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn render(self) -> String {
        let mut args = vec!["new-window"];

        if let Some(target) = self.target {
            args.push("-t");
            args.push(target);
        }

        if let Some(name) = self.name {
            args.push("-n");
            args.push(name);
        }

        tmux(&args)
    }
}

/// Rename a window
pub fn rename_window(target: &str, new_name: &str) -> String {
    tmux(&["rename-window", "-t", target, new_name])
}

/// Select a window
pub fn select_window(target: &str) -> String {
    tmux(&["select-window", "-t", target])
}

// =============================================================================
// Keystroke Commands
// =============================================================================

/// Builder for `send-keys` lines that type a command and press Enter
pub struct SendKeys<'a> {
    target: &'a str,
    keys: &'a str,
}

impl<'a> SendKeys<'a> {
    pub fn new(target: &'a str, keys: &'a str) -> Self {
        Self { target, keys }
    }

    pub fn render(self) -> String {
        let keys = format!("\"{}\"", self.keys);
        tmux(&["send-keys", "-t", self.target, &keys, "C-m"])
    }
}
