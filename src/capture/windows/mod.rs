//! Windows platform layer
//!
//! Low-level `WH_KEYBOARD_LL` / `WH_MOUSE_LL` hooks feed the recorder, and
//! `SendInput` / `SetCursorPos` carry replayed input back to the system.

pub mod hooks;
pub mod injector;

pub use hooks::run_hooks;
pub use injector::SendInputSink;

use crate::recorder::replay::InputSink;

pub fn default_sink() -> Box<dyn InputSink> {
    Box::new(SendInputSink)
}
