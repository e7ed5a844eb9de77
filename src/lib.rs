//! Input Replay - record global keyboard and mouse input, play it back with its timing.
//!
//! F12 starts and stops a recording, F11 replays everything recorded so far.
//! The capture pipeline and replay engine are platform independent; the
//! platform layer only installs hooks and injects events.

pub mod capture;
pub mod config;
pub mod recorder;

use capture::platform;
use config::{RecorderConfig, DEFAULT_LOG_FILTER};
use recorder::{HookResult, InputHook, RecorderSession};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging. Standard output is reserved for status lines.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Install the hooks and run until the message loop exits
pub fn run() -> HookResult<()> {
    init_logging();

    tracing::info!("Starting Input Replay v{}", env!("CARGO_PKG_VERSION"));

    let config = RecorderConfig::default();
    tracing::info!(
        "Toggle recording: vk {:#04x}, play: vk {:#04x}",
        config.toggle_key,
        config.play_key
    );

    let session: Arc<dyn InputHook> = Arc::new(RecorderSession::new(config, platform::default_sink()));
    platform::run_hooks(session)?;

    tracing::info!("Message loop finished");
    Ok(())
}
