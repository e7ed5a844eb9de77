//! Idle / Recording / Playing state machine

/// Current activity of the recorder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Recording,
    Playing,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Idle => write!(f, "idle"),
            Mode::Recording => write!(f, "recording"),
            Mode::Playing => write!(f, "playing"),
        }
    }
}

/// The two fixed control keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hotkey {
    ToggleRecording,
    Play,
}

/// Result of feeding a hotkey press to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    StartRecording,
    StopRecording,
    StartPlayback,
    /// No transition defined for this (mode, hotkey) pair
    Ignored,
}

impl Transition {
    /// Pure transition table
    pub fn for_hotkey(mode: Mode, hotkey: Hotkey) -> Self {
        match (mode, hotkey) {
            (Mode::Idle, Hotkey::ToggleRecording) => Transition::StartRecording,
            (Mode::Recording, Hotkey::ToggleRecording) => Transition::StopRecording,
            (Mode::Idle, Hotkey::Play) => Transition::StartPlayback,
            // Recording takes precedence over play; nothing interrupts playback
            (Mode::Recording, Hotkey::Play) | (Mode::Playing, _) => Transition::Ignored,
        }
    }

    pub fn target(self, from: Mode) -> Mode {
        match self {
            Transition::StartRecording => Mode::Recording,
            Transition::StopRecording => Mode::Idle,
            Transition::StartPlayback => Mode::Playing,
            Transition::Ignored => from,
        }
    }
}

#[derive(Debug, Default)]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_recording(&self) -> bool {
        self.mode == Mode::Recording
    }

    pub fn is_playing(&self) -> bool {
        self.mode == Mode::Playing
    }

    /// Apply a hotkey press and return the transition taken
    pub fn on_hotkey(&mut self, hotkey: Hotkey) -> Transition {
        let transition = Transition::for_hotkey(self.mode, hotkey);
        let next = transition.target(self.mode);
        if next != self.mode {
            tracing::info!("Mode {} -> {} ({:?})", self.mode, next, hotkey);
        }
        self.mode = next;
        transition
    }

    /// Automatic Playing -> Idle once the replay has walked the whole timeline
    pub fn finish_playback(&mut self) {
        if self.mode == Mode::Playing {
            tracing::info!("Mode {} -> {} (playback finished)", self.mode, Mode::Idle);
            self.mode = Mode::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        assert_eq!(ModeController::new().mode(), Mode::Idle);
    }

    #[test]
    fn test_toggle_twice_returns_to_idle() {
        let mut controller = ModeController::new();
        assert_eq!(controller.on_hotkey(Hotkey::ToggleRecording), Transition::StartRecording);
        assert!(controller.is_recording());
        assert_eq!(controller.on_hotkey(Hotkey::ToggleRecording), Transition::StopRecording);
        assert_eq!(controller.mode(), Mode::Idle);
    }

    #[test]
    fn test_play_ignored_while_recording() {
        let mut controller = ModeController::new();
        controller.on_hotkey(Hotkey::ToggleRecording);
        assert_eq!(controller.on_hotkey(Hotkey::Play), Transition::Ignored);
        assert_eq!(controller.mode(), Mode::Recording);
    }

    #[test]
    fn test_no_hotkey_leaves_playing() {
        let mut controller = ModeController::new();
        assert_eq!(controller.on_hotkey(Hotkey::Play), Transition::StartPlayback);
        assert!(controller.is_playing());

        assert_eq!(controller.on_hotkey(Hotkey::ToggleRecording), Transition::Ignored);
        assert_eq!(controller.on_hotkey(Hotkey::Play), Transition::Ignored);
        assert!(controller.is_playing());

        controller.finish_playback();
        assert_eq!(controller.mode(), Mode::Idle);
    }

    #[test]
    fn test_finish_playback_only_affects_playing() {
        let mut controller = ModeController::new();
        controller.on_hotkey(Hotkey::ToggleRecording);
        controller.finish_playback();
        assert!(controller.is_recording());
    }

    #[test]
    fn test_transition_table_is_total() {
        for mode in [Mode::Idle, Mode::Recording, Mode::Playing] {
            for hotkey in [Hotkey::ToggleRecording, Hotkey::Play] {
                let transition = Transition::for_hotkey(mode, hotkey);
                let target = transition.target(mode);
                if transition == Transition::Ignored {
                    assert_eq!(target, mode);
                } else {
                    assert_ne!(target, mode);
                }
            }
        }
    }
}
