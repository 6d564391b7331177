//! Keyboard polling for the raylib host.
//!
//! [`poll_keyboard`] reads raylib's key state each host frame and feeds it
//! into [`InputState`]. A key repeat counts as another press, which moves a
//! key that is still `Pressed` on to `Hold`.
use raylib::ffi::KeyboardKey;
use raylib::prelude::RaylibHandle;

use crate::resources::input::{InputState, Key};

/// Physical keys bound to each tracked key.
fn bindings(key: Key) -> &'static [KeyboardKey] {
    match key {
        Key::Left => &[KeyboardKey::KEY_LEFT],
        Key::Right => &[KeyboardKey::KEY_RIGHT],
        Key::Up => &[KeyboardKey::KEY_UP],
        Key::Down => &[KeyboardKey::KEY_DOWN],
        Key::Ctrl => &[KeyboardKey::KEY_LEFT_CONTROL, KeyboardKey::KEY_RIGHT_CONTROL],
        Key::Space => &[KeyboardKey::KEY_SPACE],
        Key::Enter => &[KeyboardKey::KEY_ENTER, KeyboardKey::KEY_KP_ENTER],
        Key::H => &[KeyboardKey::KEY_H],
        Key::Tab => &[KeyboardKey::KEY_TAB],
        Key::Escape => &[KeyboardKey::KEY_ESCAPE],
    }
}

/// Poll raylib for keyboard input and update `input`.
pub fn poll_keyboard(rl: &RaylibHandle, input: &mut InputState) {
    for key in Key::ALL {
        let keys = bindings(key);
        let pressed = keys
            .iter()
            .any(|&k| rl.is_key_pressed(k) || rl.is_key_pressed_repeat(k));
        if pressed {
            input.press(key);
        } else if input.is_down(key) && keys.iter().all(|&k| rl.is_key_up(k)) {
            input.release(key);
        }
    }
}
