//! Process-wide search defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Defaults applied when a caller omits an explicit value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Maximum time the wait helpers poll when no timeout is given.
    pub auto_wait_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_wait_timeout: Duration::from_secs(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wait_timeout_is_three_seconds() {
        assert_eq!(Settings::default().auto_wait_timeout, Duration::from_secs(3));
    }
}
