//! Keyboard and pointer capture
//!
//! Turns raw hook events into a timeline of recorded input: the event model,
//! the shared delta clock, the held-key table and the capture session that
//! ties them together.

pub mod clock;
pub mod key_state;
pub mod session;
pub mod types;

pub use clock::{EventClock, ManualTimeSource, SystemTimeSource, TimeSource};
pub use key_state::KeyStateSet;
pub use session::{CaptureOutcome, CaptureSession};
pub use types::{
    Event, EventKind, EventPayload, HookDecision, KeyAction, KeyboardPayload, PointerAction,
    PointerPayload, RawKeyboardEvent, RawPointerEvent,
};
