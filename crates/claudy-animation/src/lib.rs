//! Timed pose transitions for the mascot
//!
//! [`AnimationStateMachine`] holds every rule and takes time as an argument;
//! [`driver`] runs it on a tokio task and turns its deadlines into sleeps.

mod config;
pub mod driver;
mod machine;
mod presenter;

pub use config::AnimationConfig;
pub use driver::{AnimationHandle, Command};
pub use machine::{AnimationStateMachine, Outcome};
pub use presenter::{BubbleDisplay, Clip, PoseObserver, PosePresenter, Take};
