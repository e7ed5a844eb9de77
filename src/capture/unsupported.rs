//! Fallback platform layer for targets without global input hooks

use crate::recorder::hook::{HookError, HookResult, InputHook};
use crate::recorder::replay::{InputSink, MouseButton};
use std::sync::Arc;

pub fn run_hooks(_hook: Arc<dyn InputHook>) -> HookResult<()> {
    Err(HookError::Unsupported(std::env::consts::OS))
}

/// Sink that only logs what it would inject
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

impl InputSink for LoggingSink {
    fn move_cursor(&self, x: i32, y: i32) {
        tracing::debug!("Inject move to ({}, {})", x, y);
    }

    fn mouse_button(&self, button: MouseButton, pressed: bool) {
        tracing::debug!("Inject {:?} button {}", button, if pressed { "down" } else { "up" });
    }

    fn key_down(&self, vk_code: u32) {
        tracing::debug!("Inject key-down vk={:#04x}", vk_code);
    }
}

pub fn default_sink() -> Box<dyn InputSink> {
    Box::new(LoggingSink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::input::types::{HookDecision, RawKeyboardEvent, RawPointerEvent};

    struct NullHook;

    impl InputHook for NullHook {
        fn on_keyboard_event(&self, _event: RawKeyboardEvent) -> HookDecision {
            HookDecision::PassThrough
        }

        fn on_pointer_event(&self, _event: RawPointerEvent) -> HookDecision {
            HookDecision::PassThrough
        }
    }

    #[test]
    fn test_hooks_are_unsupported() {
        let err = run_hooks(Arc::new(NullHook)).unwrap_err();
        assert!(matches!(err, HookError::Unsupported(_)));
        assert_eq!(err.exit_code(), 3);
    }
}
