//! Keyboard input handling

use web_sys::KeyboardEvent;

/// Map a key-down to a vertical intent; unrecognized keys leave it alone
pub fn handle_key_down(key: &str, current_dir: i8) -> i8 {
    match key {
        "ArrowUp" => -1,
        "ArrowDown" => 1,
        _ => current_dir,
    }
}

/// Key-up clears the intent no matter which key was released
pub fn handle_key_up() -> i8 {
    0
}

/// Extract key from keyboard event
pub fn key_from_event(event: &KeyboardEvent) -> String {
    event.key()
}
