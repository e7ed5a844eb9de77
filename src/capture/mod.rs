//! Platform-specific input capture
//!
//! The portable capture pipeline lives in `input`; the platform layer installs
//! the global hooks that feed it and provides the injection sink for replay.

pub mod input;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(not(target_os = "windows"))]
pub mod unsupported;

#[cfg(target_os = "windows")]
pub use self::windows as platform;

#[cfg(not(target_os = "windows"))]
pub use self::unsupported as platform;

pub use input::{CaptureSession, Event, EventKind, EventPayload, HookDecision};
