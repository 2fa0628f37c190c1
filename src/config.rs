use serde::{Deserialize, Serialize};

pub const DEFAULT_BANNER: &str =
    "Welcome to ai2b Terminal v1.0.0\nType \"help\" to see available commands";
pub const DEFAULT_USER: &str = "user";

/// Per-session knobs. Every field is optional when deserializing, so `{}` is
/// a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// First scrollback entry of a new session. Empty means no banner.
    pub banner: String,
    /// Reported by `whoami`.
    pub user: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
            user: DEFAULT_USER.to_string(),
        }
    }
}

impl TerminalConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
