//! Recording control and playback
//!
//! Hosts the mode state machine, the replay engine and the `RecorderSession`
//! that platform hooks talk to.

pub mod gate;
pub mod hook;
pub mod mode;
pub mod replay;
pub mod session;

pub use gate::PlaybackGate;
pub use hook::{HookError, HookResult, InputHook};
pub use mode::{Hotkey, Mode, ModeController, Transition};
pub use replay::{InputSink, MouseButton, Pacer, ReplayEngine, ReplaySummary, ThreadPacer};
pub use session::RecorderSession;
