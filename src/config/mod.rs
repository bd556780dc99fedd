//! Configuration schema definitions and loading.
//!
//! Defines the configuration structure for Encore: general settings,
//! player defaults and the session stand-in. All configuration is
//! serializable to/from TOML.

mod general;
mod loading;
mod paths;
mod player;
mod session;


pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use player::PlayerConfig;
pub use session::SessionConfig;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure for Encore.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Player defaults and simulated playback timing.
    #[serde(default)]
    pub player: PlayerConfig,

    /// Session gate timing.
    #[serde(default)]
    pub session: SessionConfig,
}
