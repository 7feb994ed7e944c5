//! The `claudy.json` configuration file

use claudy_animation::AnimationConfig;
use claudy_core::PoseConfig;
use claudy_personality::SelectorConfig;
use claudy_telemetry::Paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Every section is optional; missing keys keep their defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pose: PoseConfig,
    pub comments: CommentSettings,
    pub animation: AnimationSettings,
    /// How long a speech bubble stays up
    pub bubble_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentSettings {
    pub chance: f64,
    pub min_priority: i32,
    pub disabled: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub talking_min_ms: u64,
    pub breathing_min_ms: u64,
    pub breathing_max_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pose: PoseConfig::new(),
            comments: CommentSettings::default(),
            animation: AnimationSettings::default(),
            bubble_ms: 5000,
        }
    }
}

impl Default for CommentSettings {
    fn default() -> Self {
        let defaults = SelectorConfig::new();
        Self {
            chance: defaults.comment_chance,
            min_priority: defaults.min_priority,
            disabled: defaults.disabled_categories,
        }
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        let defaults = AnimationConfig::new();
        Self {
            talking_min_ms: defaults.talking_min.as_millis() as u64,
            breathing_min_ms: defaults.breathing_min.as_millis() as u64,
            breathing_max_ms: defaults.breathing_max.as_millis() as u64,
        }
    }
}

impl Settings {
    pub fn selector_config(&self) -> SelectorConfig {
        SelectorConfig {
            comment_chance: self.comments.chance,
            min_priority: self.comments.min_priority,
            disabled_categories: self.comments.disabled.clone(),
            ..SelectorConfig::new()
        }
    }

    pub fn animation_config(&self) -> AnimationConfig {
        AnimationConfig {
            talking_min: Duration::from_millis(self.animation.talking_min_ms),
            breathing_min: Duration::from_millis(self.animation.breathing_min_ms),
            breathing_max: Duration::from_millis(self.animation.breathing_max_ms),
        }
    }

    pub fn bubble_duration(&self) -> Duration {
        Duration::from_millis(self.bubble_ms)
    }
}

/// `--config` if given, else `~/.claude/claudy.json`
pub fn config_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Paths::new()?.config_file()),
    }
}

/// Load settings, falling back to defaults when the file is missing or broken
pub fn load(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
            return Settings::default();
        }
    };

    match serde_json::from_str::<Settings>(&content) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "malformed config, using defaults");
            Settings::default()
        }
    }
}

/// Load settings strictly, for commands that rewrite the file
pub fn load_strict(path: &Path) -> anyhow::Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save(path: &Path, settings: &Settings) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    claudy_telemetry::atomic_write(path, json.as_bytes())?;
    Ok(())
}
