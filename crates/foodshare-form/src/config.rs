//! Form configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Most image inputs a form can hold.
pub const MAX_IMAGE_SLOTS: usize = 5;

/// Configuration for a form instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Quiet period in milliseconds before instant validation runs.
    ///
    /// Further input during the period restarts it.
    pub debounce_ms: u64,

    /// Hours between the default start and end dates.
    pub default_duration_hours: i64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            default_duration_hours: 3,
        }
    }
}

impl FormConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
