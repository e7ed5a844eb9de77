//! Timed replay of a recorded timeline
//!
//! Walks the timeline in order, waits each event's recorded delta plus a fixed
//! slack, then re-emits it through an `InputSink`. Key-ups are waited for but
//! not injected.

use crate::capture::input::types::{Event, EventKind, EventPayload};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Outbound synthetic input
///
/// Fire-and-forget: the engine never learns whether the OS accepted an event.
pub trait InputSink: Send + Sync {
    /// Move the cursor to an absolute screen position
    fn move_cursor(&self, x: i32, y: i32);

    /// Press or release a button at the current cursor position
    fn mouse_button(&self, button: MouseButton, pressed: bool);

    fn key_down(&self, vk_code: u32);
}

/// Waits between replayed events
pub trait Pacer: Send + Sync {
    fn pause(&self, duration: Duration);
}

/// Blocks the calling thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Counters for one replay pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub injected: usize,
    pub skipped: usize,
}

pub struct ReplayEngine {
    sink: Box<dyn InputSink>,
    pacer: Box<dyn Pacer>,
    slack: Duration,
}

impl ReplayEngine {
    pub fn new(sink: Box<dyn InputSink>, pacer: Box<dyn Pacer>, slack: Duration) -> Self {
        Self { sink, pacer, slack }
    }

    pub fn slack(&self) -> Duration {
        self.slack
    }

    /// Replay the whole timeline. Blocks until the last event has been emitted.
    pub fn play(&self, timeline: &[Event]) -> ReplaySummary {
        let mut summary = ReplaySummary::default();

        for event in timeline {
            self.pacer
                .pause(Duration::from_millis(u64::from(event.delta_millis())) + self.slack);

            if self.emit(event) {
                summary.injected += 1;
            } else {
                summary.skipped += 1;
            }
        }

        tracing::debug!(
            "Replay finished (events={}, injected={}, skipped={})",
            timeline.len(),
            summary.injected,
            summary.skipped
        );
        summary
    }

    fn emit(&self, event: &Event) -> bool {
        match (event.kind(), event.payload()) {
            (EventKind::PointerMove, EventPayload::Pointer(p)) => self.sink.move_cursor(p.x, p.y),
            (EventKind::PointerLeftDown, _) => self.sink.mouse_button(MouseButton::Left, true),
            (EventKind::PointerLeftUp, _) => self.sink.mouse_button(MouseButton::Left, false),
            (EventKind::PointerRightDown, _) => self.sink.mouse_button(MouseButton::Right, true),
            (EventKind::PointerRightUp, _) => self.sink.mouse_button(MouseButton::Right, false),
            (EventKind::KeyDown, EventPayload::Keyboard(k)) => self.sink.key_down(k.vk_code),
            // Key-ups are recorded but deliberately not replayed
            (EventKind::KeyUp, _) => return false,
            (kind, _) => {
                tracing::warn!("Skipping {} event with mismatched payload", kind);
                return false;
            }
        }
        true
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Injected, RecordingPacer, RecordingSink};
    use super::*;
    use crate::capture::input::types::{KeyAction, KeyboardPayload, PointerAction, PointerPayload};

    fn key(action: KeyAction, vk: u32, delta: u32) -> Event {
        Event::key(
            action,
            KeyboardPayload {
                vk_code: vk,
                scan_code: 0,
                flags: 0,
                time: 0,
            },
            delta,
        )
    }

    fn pointer(action: PointerAction, x: i32, y: i32, delta: u32) -> Event {
        Event::pointer(
            action,
            PointerPayload {
                x,
                y,
                mouse_data: 0,
                flags: 0,
                time: 0,
            },
            delta,
        )
        .unwrap()
    }

    fn engine(slack_ms: u64) -> (ReplayEngine, RecordingSink, RecordingPacer) {
        let sink = RecordingSink::default();
        let pacer = RecordingPacer::default();
        let engine = ReplayEngine::new(
            Box::new(sink.clone()),
            Box::new(pacer.clone()),
            Duration::from_millis(slack_ms),
        );
        (engine, sink, pacer)
    }

    #[test]
    fn test_replay_preserves_order_and_timing() {
        let (engine, sink, pacer) = engine(3);
        let timeline = vec![
            key(KeyAction::Down, 0x41, 0),
            pointer(PointerAction::Move, 12, 11, 20),
            pointer(PointerAction::LeftDown, 12, 11, 5),
            pointer(PointerAction::LeftUp, 12, 11, 7),
            pointer(PointerAction::RightDown, 12, 11, 1),
            pointer(PointerAction::RightUp, 12, 11, 2),
        ];

        let summary = engine.play(&timeline);

        assert_eq!(summary, ReplaySummary { injected: 6, skipped: 0 });
        assert_eq!(
            *sink.calls.lock(),
            vec![
                Injected::KeyDown(0x41),
                Injected::Move(12, 11),
                Injected::Button(MouseButton::Left, true),
                Injected::Button(MouseButton::Left, false),
                Injected::Button(MouseButton::Right, true),
                Injected::Button(MouseButton::Right, false),
            ]
        );
        let expected: Vec<Duration> = [3u64, 23, 8, 10, 4, 5]
            .iter()
            .map(|ms| Duration::from_millis(*ms))
            .collect();
        assert_eq!(*pacer.pauses.lock(), expected);
    }

    #[test]
    fn test_key_up_is_waited_for_but_not_injected() {
        let (engine, sink, pacer) = engine(0);
        let timeline = vec![
            key(KeyAction::Down, 0x41, 0),
            key(KeyAction::Up, 0x41, 50),
            key(KeyAction::Down, 0x42, 10),
        ];

        let summary = engine.play(&timeline);

        assert_eq!(summary, ReplaySummary { injected: 2, skipped: 1 });
        assert_eq!(
            *sink.calls.lock(),
            vec![Injected::KeyDown(0x41), Injected::KeyDown(0x42)]
        );
        assert_eq!(pacer.pauses.lock()[1], Duration::from_millis(50));
    }

    #[test]
    fn test_empty_timeline() {
        let (engine, sink, pacer) = engine(3);
        assert_eq!(engine.play(&[]), ReplaySummary::default());
        assert!(sink.calls.lock().is_empty());
        assert!(pacer.pauses.lock().is_empty());
    }

    #[test]
    fn test_thread_pacer_sleeps() {
        let start = std::time::Instant::now();
        ThreadPacer.pause(Duration::from_millis(10));
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
