use crate::config::TerminalConfig;
use crate::paths::{self, HOME_DIR};
use crate::vfs::VirtualFileSystem;
use serde::{Deserialize, Serialize};

/// One rendered line block in the terminal window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollbackEntry {
    pub text: String,
    /// Set only on the echoed `<cwd>$ <input>` line.
    pub is_command: bool,
}

impl ScrollbackEntry {
    pub fn command(text: String) -> Self {
        Self { text, is_command: true }
    }

    pub fn output(text: String) -> Self {
        Self { text, is_command: false }
    }
}

/// Everything one open terminal owns. Nothing here outlives the session.
pub struct TerminalContext {
    pub vfs: VirtualFileSystem,
    /// Always names an existing directory.
    pub cwd: String,
    pub scrollback: Vec<ScrollbackEntry>,
    pub config: TerminalConfig,
    close_requested: bool,
}

impl Default for TerminalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalContext {
    pub fn new() -> Self {
        Self::with_config(TerminalConfig::default())
    }

    pub fn with_config(config: TerminalConfig) -> Self {
        let mut ctx = Self::new_with_vfs(VirtualFileSystem::seeded());
        if !config.banner.is_empty() {
            ctx.scrollback.push(ScrollbackEntry::output(config.banner.clone()));
        }
        ctx.config = config;
        ctx
    }

    /// Bare context over an arbitrary tree: no banner, cwd at home when it
    /// exists, else `/`.
    pub fn new_with_vfs(vfs: VirtualFileSystem) -> Self {
        let cwd = match vfs.lookup(HOME_DIR) {
            Some(node) if node.is_dir() => HOME_DIR.to_string(),
            _ => "/".to_string(),
        };
        Self {
            vfs,
            cwd,
            scrollback: Vec::new(),
            config: TerminalConfig::default(),
            close_requested: false,
        }
    }

    pub fn resolve_path(&self, input: &str) -> String {
        paths::resolve_path(input, &self.cwd)
    }

    /// Remember that `exit` ran. Whoever owns the session acts on it once the
    /// command has returned.
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Echoed input lines, oldest first.
    pub fn command_history(&self) -> impl Iterator<Item = &str> {
        self.scrollback
            .iter()
            .filter(|entry| entry.is_command)
            .map(|entry| entry.text.as_str())
    }
}
