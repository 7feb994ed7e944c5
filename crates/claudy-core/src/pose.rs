//! Mascot poses

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named visual state of the mascot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pose {
    Intro,
    Idle,
    Wake,
    Listening,
    Thinking,
    Working,
    Talking,
    Happy,
    Confused,
    Sleepy,
}

impl Pose {
    pub const ALL: [Pose; 10] = [
        Pose::Intro,
        Pose::Idle,
        Pose::Wake,
        Pose::Listening,
        Pose::Thinking,
        Pose::Working,
        Pose::Talking,
        Pose::Happy,
        Pose::Confused,
        Pose::Sleepy,
    ];

    /// One-shot poses play once and then fall back to idle; the rest loop
    pub fn is_one_shot(&self) -> bool {
        matches!(
            self,
            Pose::Intro | Pose::Wake | Pose::Talking | Pose::Happy | Pose::Confused
        )
    }

    pub fn is_looping(&self) -> bool {
        !self.is_one_shot()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pose::Intro => "intro",
            Pose::Idle => "idle",
            Pose::Wake => "wake",
            Pose::Listening => "listening",
            Pose::Thinking => "thinking",
            Pose::Working => "working",
            Pose::Talking => "talking",
            Pose::Happy => "happy",
            Pose::Confused => "confused",
            Pose::Sleepy => "sleepy",
        }
    }

    /// Stock bubble text for poses driven without any event context
    pub fn canned_message(&self) -> Option<&'static str> {
        match self {
            Pose::Wake => Some("Ready to help!"),
            Pose::Happy => Some("Task complete!"),
            Pose::Confused => Some("Hmm, something went wrong..."),
            Pose::Listening => Some("I'm listening..."),
            Pose::Thinking => Some("Let me think..."),
            Pose::Working => Some("Working on it..."),
            _ => None,
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pose: {0:?}")]
pub struct ParsePoseError(pub String);

impl FromStr for Pose {
    type Err = ParsePoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Pose::ALL
            .into_iter()
            .find(|pose| pose.as_str() == name)
            .ok_or_else(|| ParsePoseError(s.to_string()))
    }
}
