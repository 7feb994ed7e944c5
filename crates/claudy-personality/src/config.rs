//! Configuration for comment selection

use serde::{Deserialize, Serialize};

/// Comment selector settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Chance of emitting a remark at all
    pub comment_chance: f64,

    /// Candidates below this priority are never shown
    pub min_priority: i32,

    /// How many recent remarks count as repeats
    pub recent_capacity: usize,

    /// Category names excluded from selection
    pub disabled_categories: Vec<String>,
}

impl SelectorConfig {
    pub fn new() -> Self {
        Self {
            comment_chance: 0.7,
            min_priority: 0,
            recent_capacity: 10,
            disabled_categories: Vec::new(),
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SelectorConfig::new();
        assert_eq!(config.comment_chance, 0.7);
        assert_eq!(config.min_priority, 0);
        assert_eq!(config.recent_capacity, 10);
        assert!(config.disabled_categories.is_empty());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: SelectorConfig =
            serde_json::from_str(r#"{"disabled_categories": ["bash"]}"#).unwrap();
        assert_eq!(config.disabled_categories, vec!["bash".to_string()]);
        assert_eq!(config.comment_chance, 0.7);
    }
}
