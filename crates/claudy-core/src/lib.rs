//! Context derivation and pose selection for the mascot

mod config;
mod context;
mod payload;
mod pose;
mod projects;
pub mod random;
mod selector;

pub use config::PoseConfig;
pub use context::{Context, ContextAggregator, ContextListener, ListenerId, ResultStatus};
pub use payload::{Directive, Inbound, StatePayload};
pub use pose::{ParsePoseError, Pose};
pub use projects::ProjectRoster;
pub use random::{RandomSource, ScriptedRandom};
pub use selector::PoseSelector;

pub use claudy_telemetry::{EventKind, FileType, MessageLength, RawEvent};
