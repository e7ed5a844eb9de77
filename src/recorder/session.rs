//! The recorder session: one object owning mode, timeline, held keys and clock
//!
//! Platform hooks call into a `RecorderSession` through the `InputHook` trait.
//! Hotkeys drive the mode controller; everything else is routed to the capture
//! session while recording. Playback runs synchronously on the caller of the
//! play hotkey, with the pointer path parked on the playback gate until it ends.

use crate::capture::input::clock::{SystemTimeSource, TimeSource};
use crate::capture::input::session::{CaptureOutcome, CaptureSession};
use crate::capture::input::types::{
    Event, HookDecision, KeyAction, RawKeyboardEvent, RawPointerEvent,
};
use crate::config::RecorderConfig;
use crate::recorder::gate::PlaybackGate;
use crate::recorder::hook::InputHook;
use crate::recorder::mode::{Hotkey, Mode, ModeController, Transition};
use crate::recorder::replay::{InputSink, Pacer, ReplayEngine, ReplaySummary, ThreadPacer};
use parking_lot::Mutex as ParkingMutex;

struct SessionState<T: TimeSource> {
    mode: ModeController,
    capture: CaptureSession<T>,
}

pub struct RecorderSession<T: TimeSource = SystemTimeSource> {
    config: RecorderConfig,
    state: ParkingMutex<SessionState<T>>,
    gate: PlaybackGate,
    replay: ReplayEngine,
}

impl RecorderSession<SystemTimeSource> {
    /// Session on the wall clock, pacing replay with real sleeps
    pub fn new(config: RecorderConfig, sink: Box<dyn InputSink>) -> Self {
        Self::with_parts(config, SystemTimeSource, sink, Box::new(ThreadPacer))
    }
}

impl<T: TimeSource> RecorderSession<T> {
    pub fn with_parts(
        config: RecorderConfig,
        time: T,
        sink: Box<dyn InputSink>,
        pacer: Box<dyn Pacer>,
    ) -> Self {
        let replay = ReplayEngine::new(sink, pacer, config.replay_slack);
        Self {
            config,
            state: ParkingMutex::new(SessionState {
                mode: ModeController::new(),
                capture: CaptureSession::new(time),
            }),
            gate: PlaybackGate::new(),
            replay,
        }
    }

    pub fn config(&self) -> &RecorderConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.state.lock().mode.mode()
    }

    /// Copy of the recorded timeline (empty while a replay holds it)
    pub fn timeline(&self) -> Vec<Event> {
        self.state.lock().capture.timeline().to_vec()
    }

    /// Drop everything recorded so far. Has no effect during playback.
    pub fn clear_timeline(&self) {
        let mut state = self.state.lock();
        if !state.mode.is_playing() {
            state.capture.clear();
            tracing::info!("Timeline cleared");
        }
    }

    fn hotkey_for(&self, vk_code: u32) -> Option<Hotkey> {
        if vk_code == self.config.toggle_key {
            Some(Hotkey::ToggleRecording)
        } else if vk_code == self.config.play_key {
            Some(Hotkey::Play)
        } else {
            None
        }
    }

    /// Feed a hotkey press to the mode controller, running a replay if one starts
    pub fn press_hotkey(&self, hotkey: Hotkey) -> Transition {
        let (transition, timeline) = {
            let mut state = self.state.lock();
            let transition = state.mode.on_hotkey(hotkey);
            let timeline = match transition {
                Transition::StartRecording => {
                    state.capture.begin();
                    None
                }
                Transition::StopRecording => {
                    Self::log_timeline(state.capture.timeline());
                    None
                }
                Transition::StartPlayback => {
                    self.gate.close();
                    Some(state.capture.take_timeline())
                }
                Transition::Ignored => None,
            };
            (transition, timeline)
        };

        match transition {
            Transition::StartRecording => println!("Recording started"),
            Transition::StopRecording => println!("Recording stopped"),
            Transition::StartPlayback => {
                if let Some(timeline) = timeline {
                    self.run_playback(timeline);
                }
            }
            Transition::Ignored => {
                tracing::debug!("Ignoring {:?} hotkey", hotkey);
            }
        }

        transition
    }

    fn run_playback(&self, timeline: Vec<Event>) -> ReplaySummary {
        println!("Playback started");
        tracing::info!("Replaying {} events", timeline.len());

        let summary = self.replay.play(&timeline);

        {
            let mut state = self.state.lock();
            state.capture.restore_timeline(timeline);
            state.mode.finish_playback();
        }
        self.gate.open();

        println!("Playback finished");
        summary
    }

    fn log_timeline(timeline: &[Event]) {
        tracing::info!("Timeline holds {} events", timeline.len());
        if tracing::enabled!(tracing::Level::DEBUG) {
            match serde_json::to_string(timeline) {
                Ok(json) => tracing::debug!("Timeline: {}", json),
                Err(e) => tracing::warn!("Failed to serialize timeline: {}", e),
            }
        }
    }
}

impl<T: TimeSource> InputHook for RecorderSession<T> {
    fn on_keyboard_event(&self, event: RawKeyboardEvent) -> HookDecision {
        // Hotkeys never reach the timeline, in any mode
        if let Some(hotkey) = self.hotkey_for(event.payload.vk_code) {
            if event.action == KeyAction::Down {
                self.press_hotkey(hotkey);
            }
            return HookDecision::PassThrough;
        }

        let mut state = self.state.lock();
        if state.mode.is_recording() {
            state.capture.record_key(event);
        }
        HookDecision::PassThrough
    }

    fn on_pointer_event(&self, event: RawPointerEvent) -> HookDecision {
        // Keep injected pointer input from interleaving with capture
        self.gate.wait_open();

        let mut state = self.state.lock();
        if state.mode.is_recording()
            && state.capture.record_pointer(event) == CaptureOutcome::Discarded
        {
            tracing::trace!("Pointer {:?} not recorded", event.action);
        }
        HookDecision::PassThrough
    }
}
