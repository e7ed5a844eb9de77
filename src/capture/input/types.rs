use serde::{Deserialize, Serialize};

/// Kind tag of a recorded event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    PointerMove,
    PointerLeftDown,
    PointerLeftUp,
    PointerRightDown,
    PointerRightUp,
    KeyDown,
    KeyUp,
    None,
}

impl EventKind {
    pub fn is_pointer(self) -> bool {
        matches!(
            self,
            EventKind::PointerMove
                | EventKind::PointerLeftDown
                | EventKind::PointerLeftUp
                | EventKind::PointerRightDown
                | EventKind::PointerRightUp
        )
    }

    pub fn is_keyboard(self) -> bool {
        matches!(self, EventKind::KeyDown | EventKind::KeyUp)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::PointerMove => write!(f, "pointer-move"),
            EventKind::PointerLeftDown => write!(f, "pointer-left-down"),
            EventKind::PointerLeftUp => write!(f, "pointer-left-up"),
            EventKind::PointerRightDown => write!(f, "pointer-right-down"),
            EventKind::PointerRightUp => write!(f, "pointer-right-up"),
            EventKind::KeyDown => write!(f, "key-down"),
            EventKind::KeyUp => write!(f, "key-up"),
            EventKind::None => write!(f, "none"),
        }
    }
}

/// Keyboard data as delivered by the platform hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardPayload {
    pub vk_code: u32,
    pub scan_code: u32,
    pub flags: u32,
    pub time: u32,
}

/// Pointer data as delivered by the platform hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerPayload {
    pub x: i32,
    pub y: i32,
    /// Wheel delta or button data, passed through untouched
    pub mouse_data: u32,
    pub flags: u32,
    pub time: u32,
}

/// Exactly one payload shape per event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum EventPayload {
    Keyboard(KeyboardPayload),
    Pointer(PointerPayload),
}

/// A single recorded input event plus the time since the previous accepted one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    kind: EventKind,
    payload: EventPayload,
    delta_millis: u32,
}

impl Event {
    pub fn key(action: KeyAction, payload: KeyboardPayload, delta_millis: u32) -> Self {
        Self {
            kind: action.event_kind(),
            payload: EventPayload::Keyboard(payload),
            delta_millis,
        }
    }

    /// Returns `None` for pointer actions that are never recorded (wheel, middle button, ...)
    pub fn pointer(action: PointerAction, payload: PointerPayload, delta_millis: u32) -> Option<Self> {
        let kind = action.event_kind();
        if kind == EventKind::None {
            return None;
        }
        Some(Self {
            kind,
            payload: EventPayload::Pointer(payload),
            delta_millis,
        })
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn payload(&self) -> &EventPayload {
        &self.payload
    }

    pub fn delta_millis(&self) -> u32 {
        self.delta_millis
    }

    /// Fold a later move into this one: keep the newest position, accumulate dwell time.
    pub(crate) fn absorb_move(&mut self, payload: PointerPayload, delta_millis: u32) {
        debug_assert_eq!(self.kind, EventKind::PointerMove);
        self.payload = EventPayload::Pointer(payload);
        self.delta_millis = self.delta_millis.saturating_add(delta_millis);
    }
}

/// Key transition reported by the keyboard hook (system keys fold into these)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Up,
}

impl KeyAction {
    pub fn event_kind(self) -> EventKind {
        match self {
            KeyAction::Down => EventKind::KeyDown,
            KeyAction::Up => EventKind::KeyUp,
        }
    }
}

/// Pointer message reported by the mouse hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Move,
    LeftDown,
    LeftUp,
    RightDown,
    RightUp,
    Wheel,
    Other,
}

impl PointerAction {
    pub fn event_kind(self) -> EventKind {
        match self {
            PointerAction::Move => EventKind::PointerMove,
            PointerAction::LeftDown => EventKind::PointerLeftDown,
            PointerAction::LeftUp => EventKind::PointerLeftUp,
            PointerAction::RightDown => EventKind::PointerRightDown,
            PointerAction::RightUp => EventKind::PointerRightUp,
            // Wheel is received but not recorded yet
            PointerAction::Wheel | PointerAction::Other => EventKind::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyboardEvent {
    pub action: KeyAction,
    pub payload: KeyboardPayload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPointerEvent {
    pub action: PointerAction,
    pub payload: PointerPayload,
}

/// What the platform should do with an intercepted event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookDecision {
    /// Swallow the event
    Consume,
    /// Hand the event on to the next hook unmodified
    PassThrough,
}
