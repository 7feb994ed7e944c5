//! Animation timing

use std::time::Duration;

/// Dwell and idle timings for the state machine
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Minimum time talking stays on screen before a waiting pose may replace it
    pub talking_min: Duration,

    /// Shortest idle stretch before a breathing variant plays
    pub breathing_min: Duration,

    /// Longest idle stretch before a breathing variant plays
    pub breathing_max: Duration,
}

impl AnimationConfig {
    pub fn new() -> Self {
        Self {
            talking_min: Duration::from_millis(1200),
            breathing_min: Duration::from_secs(10),
            breathing_max: Duration::from_secs(15),
        }
    }

    /// Idle interval for a uniform draw in `[0, 1)`
    pub fn breathing_interval(&self, draw: f64) -> Duration {
        let span = self.breathing_max.saturating_sub(self.breathing_min);
        self.breathing_min + span.mul_f64(draw.clamp(0.0, 1.0))
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AnimationConfig::new();
        assert_eq!(config.talking_min, Duration::from_millis(1200));
        assert_eq!(config.breathing_min, Duration::from_secs(10));
        assert_eq!(config.breathing_max, Duration::from_secs(15));
    }

    #[test]
    fn test_breathing_interval_range() {
        let config = AnimationConfig::new();
        assert_eq!(config.breathing_interval(0.0), Duration::from_secs(10));
        assert_eq!(config.breathing_interval(0.5), Duration::from_millis(12_500));
        assert_eq!(config.breathing_interval(7.0), Duration::from_secs(15));
    }

    #[test]
    fn test_inverted_range_uses_min() {
        let config = AnimationConfig {
            breathing_min: Duration::from_secs(5),
            breathing_max: Duration::from_secs(1),
            ..AnimationConfig::new()
        };
        assert_eq!(config.breathing_interval(0.9), Duration::from_secs(5));
    }
}
