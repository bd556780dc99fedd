use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Session gate configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Simulated delay before the stored-session check settles.
    pub auth_check_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auth_check_delay_ms: 1000,
        }
    }
}
