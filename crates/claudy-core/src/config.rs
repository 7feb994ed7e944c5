//! Configuration for pose selection

use serde::{Deserialize, Serialize};

/// Pose selector thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseConfig {
    /// Seconds after which a session counts as long
    pub long_session_secs: u64,

    /// Recent errors that force the confused pose
    pub error_threshold: usize,

    /// Recent errors that mark the session as struggling
    pub struggle_threshold: usize,

    /// Chance of dozing off on a wait during a long session
    pub sleepy_chance: f64,
}

impl PoseConfig {
    pub fn new() -> Self {
        Self {
            long_session_secs: 7200,
            error_threshold: 3,
            struggle_threshold: 3,
            sleepy_chance: 0.2,
        }
    }
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PoseConfig::new();
        assert_eq!(config.long_session_secs, 7200);
        assert_eq!(config.error_threshold, 3);
        assert_eq!(config.struggle_threshold, 3);
        assert_eq!(config.sleepy_chance, 0.2);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: PoseConfig = serde_json::from_str(r#"{"sleepy_chance": 0.5}"#).unwrap();
        assert_eq!(config.sleepy_chance, 0.5);
        assert_eq!(config.long_session_secs, 7200);
    }
}
