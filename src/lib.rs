// simulated terminal for the ai2b desktop
// in-memory fs + a fixed set of builtins, driven line by line from the browser
pub mod command;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod listing;
pub mod paths;
pub mod vfs;

use command::{CommandRegistry, LineOutcome, SpecialAction};
use config::TerminalConfig;
use context::TerminalContext;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// console in the browser, the log facade everywhere else
fn console_log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("{}", msg);
}

/// Invoked once `exit` has finished running.
pub type CloseHandler = Box<dyn FnMut()>;

// terminal state kept between calls from js
#[wasm_bindgen]
pub struct Terminal {
    ctx: TerminalContext,
    registry: CommandRegistry,
    on_close: Option<CloseHandler>,
}

// what js gets back per command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_action: Option<String>,
}

impl From<LineOutcome> for CommandResponse {
    fn from(outcome: LineOutcome) -> Self {
        Self {
            success: outcome.success,
            output: outcome.output,
            special_action: outcome.action.map(|a| a.as_str().to_string()),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::from_config(TerminalConfig::default())
    }
}

impl Terminal {
    pub fn from_config(config: TerminalConfig) -> Self {
        Terminal {
            ctx: TerminalContext::with_config(config),
            registry: CommandRegistry::default_commands(),
            on_close: None,
        }
    }

    pub fn set_close_handler(&mut self, handler: CloseHandler) {
        self.on_close = Some(handler);
    }

    /// Run one line and report it the way the front end expects. Blank input
    /// is a successful no-op.
    ///
    /// The close handler fires after the command has returned, so it never
    /// runs while the interpreter is mid-command.
    pub fn run_line(&mut self, input: &str) -> CommandResponse {
        let Some(outcome) = command::submit_line(input, &mut self.ctx, &self.registry) else {
            return CommandResponse {
                success: true,
                output: String::new(),
                special_action: None,
            };
        };
        if outcome.action == Some(SpecialAction::Close) {
            if let Some(handler) = self.on_close.as_mut() {
                handler();
            }
        }
        outcome.into()
    }

    pub fn context(&self) -> &TerminalContext {
        &self.ctx
    }
}

#[wasm_bindgen]
impl Terminal {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Terminal {
        console_log("[terminal] new session");
        Self::default()
    }

    /// Build a terminal from a JSON `TerminalConfig`; unknown or missing
    /// fields fall back to defaults.
    #[wasm_bindgen]
    pub fn with_config(config_json: &str) -> Result<Terminal, JsValue> {
        let config = TerminalConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&format!("invalid terminal config: {}", e)))?;
        console_log("[terminal] new session with custom config");
        Ok(Self::from_config(config))
    }

    /// Called after `exit`, on a later microtask. The terminal is no longer
    /// borrowed by then, so the callback may call back into it or free it.
    #[wasm_bindgen]
    pub fn set_close_callback(&mut self, callback: js_sys::Function) {
        self.set_close_handler(Box::new(move || {
            let callback = callback.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = callback.call0(&JsValue::NULL) {
                    console_log(&format!("[terminal] close callback failed: {:?}", e));
                }
            });
        }));
    }

    // main entry point - run a command and return result
    #[wasm_bindgen]
    pub fn execute_command(&mut self, input: &str) -> Result<JsValue, JsValue> {
        let response = self.run_line(input);
        serde_wasm_bindgen::to_value(&response).map_err(JsValue::from)
    }

    #[wasm_bindgen]
    pub fn get_current_directory(&self) -> String {
        self.ctx.cwd.clone()
    }

    /// Every scrollback entry as `{ text, isCommand }`.
    #[wasm_bindgen]
    pub fn get_scrollback(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.ctx.scrollback).map_err(JsValue::from)
    }

    #[wasm_bindgen]
    pub fn get_command_list(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.registry.get_command_names()).map_err(JsValue::from)
    }

    #[wasm_bindgen]
    pub fn is_closed(&self) -> bool {
        self.ctx.close_requested()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_line_blank() {
        let mut term = Terminal::default();
        let resp = term.run_line("   ");
        assert!(resp.success);
        assert_eq!(resp.output, "");
        assert_eq!(term.context().scrollback.len(), 1);
    }

    #[test]
    fn test_run_line_special_actions() {
        let mut term = Terminal::default();
        assert_eq!(term.run_line("clear").special_action.as_deref(), Some("clear_screen"));
        assert!(term.context().scrollback.is_empty());
        let resp = term.run_line("exit");
        assert_eq!(resp.special_action.as_deref(), Some("close"));
        assert!(term.is_closed());
    }

    #[test]
    fn test_close_handler_runs_after_exit_only() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut term = Terminal::default();
        term.set_close_handler(Box::new(move || sink.borrow_mut().push("closed")));

        term.run_line("pwd");
        term.run_line("echo exit");
        assert!(seen.borrow().is_empty());

        let resp = term.run_line("exit");
        assert_eq!(resp.output, "Exiting terminal...");
        assert_eq!(*seen.borrow(), vec!["closed"]);
    }

    #[test]
    fn test_response_json_shape() {
        let mut term = Terminal::default();
        let resp = term.run_line("cat missing");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "output": "cat: missing: No such file or directory"
            })
        );
    }

    #[test]
    fn test_get_current_directory_tracks_cd() {
        let mut term = Terminal::default();
        term.run_line("cd /usr/lib");
        assert_eq!(term.get_current_directory(), "/usr/lib");
    }
}
