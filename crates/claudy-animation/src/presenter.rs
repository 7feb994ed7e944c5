//! Seams to the rendering layer

use claudy_core::Pose;
use std::fmt;
use std::time::Duration;

/// What the presentation layer is asked to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clip {
    Pose(Pose),
    /// One-shot idle variant played after a quiet stretch
    Breathing,
}

impl Clip {
    /// Whether the presenter reports back when this clip ends
    pub fn is_one_shot(&self) -> bool {
        match self {
            Clip::Pose(pose) => pose.is_one_shot(),
            Clip::Breathing => true,
        }
    }
}

impl fmt::Display for Clip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clip::Pose(pose) => write!(f, "{}", pose),
            Clip::Breathing => f.write_str("breathing"),
        }
    }
}

/// One playback of a clip.
///
/// Every play gets a fresh serial, so a completion reported for an earlier
/// play of the same clip no longer matches what is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Take {
    clip: Clip,
    serial: u64,
}

impl Take {
    pub(crate) fn new(clip: Clip, serial: u64) -> Self {
        Self { clip, serial }
    }

    pub fn clip(&self) -> Clip {
        self.clip
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }
}

impl fmt::Display for Take {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.clip)
    }
}

/// Renders clips; one-shot takes must be reported back through
/// [`crate::AnimationStateMachine::animation_finished`] when they end
pub trait PosePresenter: Send {
    fn play(&mut self, take: Take);
}

/// Shows a speech bubble for a while
pub trait BubbleDisplay: Send {
    fn show_bubble(&mut self, text: &str, duration: Duration);
}

/// Called with the new pose whenever the current pose changes
pub type PoseObserver = Box<dyn FnMut(Pose) + Send>;
