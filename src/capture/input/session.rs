//! Timeline accumulation for the keyboard and pointer capture paths
//!
//! The session applies auto-repeat suppression to keys and coalesces runs of
//! pointer moves. Mode gating and hotkey interception happen one level up, in
//! `recorder::session`; everything that reaches this type is a candidate for
//! recording.

use crate::capture::input::clock::{EventClock, TimeSource};
use crate::capture::input::key_state::KeyStateSet;
use crate::capture::input::types::{Event, EventKind, KeyAction, RawKeyboardEvent, RawPointerEvent};

/// What happened to a candidate event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// A new entry was pushed onto the timeline
    Appended,
    /// The last move entry absorbed this move
    Coalesced,
    /// Dropped by policy; the clock was not touched
    Discarded,
}

pub struct CaptureSession<T: TimeSource> {
    timeline: Vec<Event>,
    keys: KeyStateSet,
    clock: EventClock<T>,
}

impl<T: TimeSource> CaptureSession<T> {
    pub fn new(time: T) -> Self {
        Self {
            timeline: Vec::new(),
            keys: KeyStateSet::new(),
            clock: EventClock::new(time),
        }
    }

    /// Prepare for a new recording pass. The timeline is kept.
    pub fn begin(&mut self) {
        self.keys.clear();
        self.clock.reset();
    }

    pub fn record_key(&mut self, raw: RawKeyboardEvent) -> CaptureOutcome {
        let vk = raw.payload.vk_code;
        match raw.action {
            KeyAction::Down => {
                if self.keys.is_held(vk) {
                    tracing::trace!("Dropping auto-repeat key-down vk={:#04x}", vk);
                    return CaptureOutcome::Discarded;
                }
                self.keys.press(vk);
            }
            KeyAction::Up => self.keys.release(vk),
        }

        let delta = self.clock.elapsed_since_last();
        self.timeline.push(Event::key(raw.action, raw.payload, delta));
        tracing::trace!("Recorded {} vk={:#04x} delta={}ms", raw.action.event_kind(), vk, delta);
        CaptureOutcome::Appended
    }

    pub fn record_pointer(&mut self, raw: RawPointerEvent) -> CaptureOutcome {
        let kind = raw.action.event_kind();
        if kind == EventKind::None {
            return CaptureOutcome::Discarded;
        }

        let delta = self.clock.elapsed_since_last();

        if kind == EventKind::PointerMove {
            if let Some(last) = self.timeline.last_mut() {
                if last.kind() == EventKind::PointerMove {
                    last.absorb_move(raw.payload, delta);
                    return CaptureOutcome::Coalesced;
                }
            }
        }

        match Event::pointer(raw.action, raw.payload, delta) {
            Some(event) => {
                tracing::trace!(
                    "Recorded {} at ({}, {}) delta={}ms",
                    kind,
                    raw.payload.x,
                    raw.payload.y,
                    delta
                );
                self.timeline.push(event);
                CaptureOutcome::Appended
            }
            None => CaptureOutcome::Discarded,
        }
    }

    pub fn timeline(&self) -> &[Event] {
        &self.timeline
    }

    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Hand the timeline to a reader; the session holds an empty one until it is restored.
    pub fn take_timeline(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.timeline)
    }

    pub fn restore_timeline(&mut self, timeline: Vec<Event>) {
        debug_assert!(self.timeline.is_empty());
        self.timeline = timeline;
    }

    pub fn clear(&mut self) {
        self.timeline.clear();
    }
}
