use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Player defaults and simulated playback timing
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Volume the session starts with.
    pub initial_volume: f64,

    /// Whether the player starts in its minimized (mini-player) form.
    pub start_minimized: bool,

    /// Milliseconds between simulated progress ticks in the shell.
    pub tick_interval_ms: u64,

    /// Progress in seconds after which "previous" restarts the current track.
    pub restart_threshold_secs: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            start_minimized: true,
            tick_interval_ms: 1000,
            restart_threshold_secs: 3,
        }
    }
}
