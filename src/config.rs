//! Recorder settings

use std::time::Duration;

/// Virtual key code of F11
pub const VK_F11: u32 = 0x7A;
/// Virtual key code of F12
pub const VK_F12: u32 = 0x7B;

/// Default delay added to every replayed event to absorb injection latency
pub const DEFAULT_REPLAY_SLACK_MS: u64 = 3;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "input_replay=info,input_replay_lib=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderConfig {
    /// Starts and stops recording
    pub toggle_key: u32,
    /// Replays the timeline
    pub play_key: u32,
    pub replay_slack: Duration,
}

impl RecorderConfig {
    pub fn is_hotkey(&self, vk_code: u32) -> bool {
        vk_code == self.toggle_key || vk_code == self.play_key
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            toggle_key: VK_F12,
            play_key: VK_F11,
            replay_slack: Duration::from_millis(DEFAULT_REPLAY_SLACK_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecorderConfig::default();
        assert_eq!(config.toggle_key, VK_F12);
        assert_eq!(config.play_key, VK_F11);
        assert_eq!(config.replay_slack, Duration::from_millis(3));
    }

    #[test]
    fn test_is_hotkey() {
        let config = RecorderConfig::default();
        assert!(config.is_hotkey(VK_F11));
        assert!(config.is_hotkey(VK_F12));
        assert!(!config.is_hotkey(0x41));
    }
}
