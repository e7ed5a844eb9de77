//! Hook interface between the platform and the recorder
//!
//! The platform installs global keyboard and mouse hooks and forwards every
//! event to an `InputHook`. The hook decides whether the event is consumed or
//! passed on; the platform is responsible for actually forwarding it.

use crate::capture::input::types::{HookDecision, RawKeyboardEvent, RawPointerEvent};
use thiserror::Error;

/// Errors raised while setting up or running the platform hooks
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install keyboard hook: {0}")]
    KeyboardHook(String),

    #[error("Failed to install mouse hook: {0}")]
    MouseHook(String),

    #[error("Global input hooks are not supported on {0}")]
    Unsupported(&'static str),

    #[error("Message loop error: {0}")]
    MessageLoop(String),
}

impl HookError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            HookError::KeyboardHook(_) => 1,
            HookError::MouseHook(_) => 2,
            HookError::Unsupported(_) => 3,
            HookError::MessageLoop(_) => 4,
        }
    }
}

/// Result type for hook operations
pub type HookResult<T> = Result<T, HookError>;

/// Receiver of global input events
///
/// Implementations are called from the platform's dispatch context. Calls for
/// the two sources may arrive on different threads on some platforms.
pub trait InputHook: Send + Sync {
    fn on_keyboard_event(&self, event: RawKeyboardEvent) -> HookDecision;

    fn on_pointer_event(&self, event: RawPointerEvent) -> HookDecision;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            HookError::KeyboardHook("x".into()).exit_code(),
            HookError::MouseHook("x".into()).exit_code(),
            HookError::Unsupported("linux").exit_code(),
            HookError::MessageLoop("x".into()).exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            HookError::MouseHook("access denied".into()).to_string(),
            "Failed to install mouse hook: access denied"
        );
        assert_eq!(
            HookError::Unsupported("linux").to_string(),
            "Global input hooks are not supported on linux"
        );
    }
}
