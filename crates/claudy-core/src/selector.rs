//! Rule-based pose selection

use crate::config::PoseConfig;
use crate::context::{Context, ResultStatus};
use crate::pose::Pose;
use crate::random::{self, RandomSource};
use claudy_telemetry::EventKind;

/// Picks a pose for each context, remembering the last pose issued and
/// whether the session has recently been struggling
pub struct PoseSelector {
    config: PoseConfig,
    random: Box<dyn RandomSource>,
    last_pose: Pose,
    had_recent_struggle: bool,
}

impl PoseSelector {
    pub fn new(config: PoseConfig) -> Self {
        Self::with_random(config, random::from_entropy())
    }

    pub fn with_random(config: PoseConfig, random: Box<dyn RandomSource>) -> Self {
        Self {
            config,
            random,
            last_pose: Pose::Idle,
            had_recent_struggle: false,
        }
    }

    pub fn config(&self) -> &PoseConfig {
        &self.config
    }

    pub fn last_pose(&self) -> Pose {
        self.last_pose
    }

    pub fn had_recent_struggle(&self) -> bool {
        self.had_recent_struggle
    }

    pub fn select(&mut self, ctx: &Context) -> Pose {
        if ctx.recent_errors >= self.config.struggle_threshold {
            self.had_recent_struggle = true;
        }

        let pose = self.determine(ctx);
        tracing::debug!(event = %ctx.kind, %pose, struggle = self.had_recent_struggle, "selected pose");
        self.last_pose = pose;
        pose
    }

    /// First matching rule wins
    fn determine(&mut self, ctx: &Context) -> Pose {
        if ctx.kind == EventKind::SessionStart {
            self.had_recent_struggle = false;
            return Pose::Intro;
        }

        if ctx.is_error() {
            return Pose::Confused;
        }

        if ctx.recent_errors >= self.config.error_threshold {
            return Pose::Confused;
        }

        if ctx.result == Some(ResultStatus::Success) && self.had_recent_struggle {
            self.had_recent_struggle = false;
            return Pose::Happy;
        }

        if ctx.session_duration > self.config.long_session_secs
            && ctx.kind == EventKind::Waiting
            && self.random.next_f64() < self.config.sleepy_chance
        {
            return Pose::Sleepy;
        }

        match ctx.kind {
            EventKind::UserMessage => Pose::Listening,
            EventKind::Thinking => Pose::Thinking,
            EventKind::ToolUse | EventKind::ToolResult => Pose::Working,
            EventKind::Talking => Pose::Talking,
            EventKind::Stop => Pose::Happy,
            EventKind::Waiting => {
                if matches!(self.last_pose, Pose::Idle | Pose::Sleepy) {
                    Pose::Wake
                } else {
                    Pose::Idle
                }
            }
            _ => Pose::Idle,
        }
    }

    /// Record a pose shown without going through [`select`](Self::select),
    /// so the wake rule sees what is actually on screen
    pub fn note_pose(&mut self, pose: Pose) {
        self.last_pose = pose;
    }

    pub fn reset(&mut self) {
        self.last_pose = Pose::Idle;
        self.had_recent_struggle = false;
    }
}
