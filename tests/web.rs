//! Browser-side checks for the wasm surface. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use ai2b_terminal::{CommandResponse, Terminal};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn execute(term: &mut Terminal, line: &str) -> CommandResponse {
    let value = term.execute_command(line).unwrap();
    serde_wasm_bindgen::from_value(value).unwrap()
}

#[wasm_bindgen_test]
fn execute_command_round_trip() {
    let mut term = Terminal::new();
    let resp = execute(&mut term, "cat /home/user/documents/notes.txt");
    assert!(resp.success);
    assert_eq!(resp.output, "Important system notes and configurations.");
    assert_eq!(resp.special_action, None);
}

#[wasm_bindgen_test]
fn unknown_command_is_reported_not_thrown() {
    let mut term = Terminal::new();
    let resp = execute(&mut term, "foobar");
    assert!(!resp.success);
    assert_eq!(resp.output, "Command not found: foobar. Type 'help' for available commands.");
    assert_eq!(term.get_current_directory(), "/home/user");
}

async fn next_tick() {
    JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL)).await.unwrap();
}

#[wasm_bindgen_test]
async fn exit_calls_close_callback_after_returning() {
    let mut term = Terminal::new();
    let closed = js_sys::Array::new();
    let sink = closed.clone();
    let callback = js_sys::Function::new_no_args("this.push(true)");
    let bound = callback.bind(&sink);
    term.set_close_callback(bound);
    let resp = execute(&mut term, "exit");
    assert_eq!(resp.special_action.as_deref(), Some("close"));
    assert!(term.is_closed());
    assert_eq!(closed.length(), 0);

    next_tick().await;
    assert_eq!(closed.length(), 1);
    assert_eq!(term.get_current_directory(), "/home/user");
}

#[wasm_bindgen_test]
fn with_config_rejects_bad_json() {
    assert!(Terminal::with_config("{oops").is_err());
    let term = Terminal::with_config(r#"{"banner": ""}"#).unwrap();
    let scrollback: js_sys::Array = term.get_scrollback().unwrap().dyn_into().unwrap();
    assert_eq!(scrollback.length(), 0);
}
