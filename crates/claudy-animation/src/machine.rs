//! Pose state machine with minimum dwell, reordering and idle breathing

use crate::config::AnimationConfig;
use crate::presenter::{Clip, PoseObserver, PosePresenter, Take};
use claudy_core::random::{self, RandomSource};
use claudy_core::Pose;
use std::time::Instant;

/// Poses that wait for talking to reach its minimum duration.
/// Listening and wake preempt immediately.
const WAITS_FOR_TALKING: [Pose; 6] = [
    Pose::Happy,
    Pose::Confused,
    Pose::Idle,
    Pose::Working,
    Pose::Thinking,
    Pose::Sleepy,
];

/// Poses that, when talking arrives late, replay after it
const REPLAY_AFTER_TALKING: [Pose; 3] = [Pose::Happy, Pose::Confused, Pose::Idle];

/// What a request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Same pose already showing
    Ignored,
    /// Pose shown now
    Applied,
    /// Pose deferred until talking has run long enough
    Queued,
    /// Talking shown now, requested pose deferred behind it
    Injected,
    /// Talking shown now, previous pose deferred behind it
    Reordered,
    /// Unknown pose name
    Rejected,
}

#[derive(Debug, Clone, Copy)]
struct Deferred {
    pose: Pose,
    at: Instant,
}

/// Applies requested poses to a presenter under timing rules.
///
/// Sans-IO: callers pass `now` and drive timers through
/// [`next_deadline`](Self::next_deadline) and [`advance`](Self::advance).
/// Each timer has one slot, so re-arming replaces the previous deadline.
pub struct AnimationStateMachine {
    config: AnimationConfig,
    presenter: Box<dyn PosePresenter>,
    random: Box<dyn RandomSource>,
    observers: Vec<PoseObserver>,

    current: Pose,
    playing: Option<Take>,
    serial: u64,
    talking_since: Option<Instant>,
    queued: Option<Deferred>,
    breathing_at: Option<Instant>,
    breathing: bool,
}

impl AnimationStateMachine {
    pub fn new(config: AnimationConfig, presenter: Box<dyn PosePresenter>) -> Self {
        Self::with_random(config, presenter, random::from_entropy())
    }

    pub fn with_random(
        config: AnimationConfig,
        presenter: Box<dyn PosePresenter>,
        random: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            config,
            presenter,
            random,
            observers: Vec::new(),
            current: Pose::Idle,
            playing: None,
            serial: 0,
            talking_since: None,
            queued: None,
            breathing_at: None,
            breathing: false,
        }
    }

    /// Register a pose-change observer
    pub fn on_pose_change<F>(&mut self, observer: F)
    where
        F: FnMut(Pose) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Show the first pose: the intro clip, or plain idle
    pub fn start(&mut self, play_intro: bool, now: Instant) {
        let pose = if play_intro { Pose::Intro } else { Pose::Idle };
        self.apply(pose, now);
    }

    pub fn pose(&self) -> Pose {
        self.current
    }

    /// The take most recently handed to the presenter
    pub fn playing(&self) -> Option<Take> {
        self.playing
    }

    pub fn queued(&self) -> Option<Pose> {
        self.queued.map(|d| d.pose)
    }

    pub fn is_breathing(&self) -> bool {
        self.breathing
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// No deferred pose and nothing waiting on a clip to finish
    pub fn is_settled(&self) -> bool {
        self.queued.is_none() && !self.breathing && !self.current.is_one_shot()
    }

    /// Request a pose by name; unknown names leave the state untouched
    pub fn request_named(&mut self, name: &str, now: Instant) -> Outcome {
        match name.parse::<Pose>() {
            Ok(pose) => self.request(pose, now),
            Err(err) => {
                tracing::warn!("{}", err);
                Outcome::Rejected
            }
        }
    }

    /// Request a pose
    pub fn request(&mut self, pose: Pose, now: Instant) -> Outcome {
        let current = self.current;

        if pose == current && !self.breathing {
            tracing::debug!(%pose, "duplicate pose ignored");
            return Outcome::Ignored;
        }

        if matches!(pose, Pose::Happy | Pose::Confused) && current == Pose::Thinking {
            tracing::debug!(%pose, "injecting talking");
            self.apply(Pose::Talking, now);
            self.defer(pose, now + self.config.talking_min);
            return Outcome::Injected;
        }

        if current == Pose::Talking && WAITS_FOR_TALKING.contains(&pose) {
            let elapsed = self
                .talking_since
                .map(|since| now.saturating_duration_since(since))
                .unwrap_or(self.config.talking_min);
            if elapsed < self.config.talking_min {
                let remaining = self.config.talking_min - elapsed;
                tracing::debug!(%pose, ?remaining, "queueing behind talking");
                self.defer(pose, now + remaining);
                return Outcome::Queued;
            }
        }

        if pose == Pose::Talking && REPLAY_AFTER_TALKING.contains(&current) {
            tracing::debug!(previous = %current, "talking arrived late, replaying previous");
            self.apply(Pose::Talking, now);
            self.defer(current, now + self.config.talking_min);
            return Outcome::Reordered;
        }

        self.apply(pose, now);
        Outcome::Applied
    }

    /// Report that a take finished playing. Only the take currently showing
    /// counts; completions from earlier takes are ignored.
    pub fn animation_finished(&mut self, take: Take, now: Instant) {
        if self.playing != Some(take) {
            tracing::debug!(%take, serial = take.serial(), "stale completion ignored");
            return;
        }
        match take.clip() {
            Clip::Breathing => {
                if !self.breathing {
                    return;
                }
                self.breathing = false;
                self.play(Clip::Pose(Pose::Idle));
                self.arm_breathing(now);
            }
            Clip::Pose(pose) => {
                if pose != self.current || !pose.is_one_shot() {
                    tracing::debug!(%pose, current = %self.current, "completion for looping pose ignored");
                    return;
                }
                // A deferred pose survives the return to idle
                self.current = Pose::Idle;
                self.play(Clip::Pose(Pose::Idle));
                self.arm_breathing(now);
                tracing::debug!(finished = %pose, "one-shot done, back to idle");
                self.notify(Pose::Idle);
            }
        }
    }

    /// Earliest pending timer
    pub fn next_deadline(&self) -> Option<Instant> {
        let queued = self.queued.map(|d| d.at);
        match (queued, self.breathing_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fire every timer due at or before `now`, in deadline order
    pub fn advance(&mut self, now: Instant) {
        loop {
            let queued_due = self.queued.filter(|d| d.at <= now);
            let breathing_due = self.breathing_at.filter(|at| *at <= now);

            match (queued_due, breathing_due) {
                (Some(deferred), Some(at)) if at < deferred.at => self.fire_breathing(at),
                (Some(deferred), _) => {
                    self.queued = None;
                    tracing::debug!(pose = %deferred.pose, "applying deferred pose");
                    self.apply(deferred.pose, deferred.at);
                }
                (None, Some(at)) => self.fire_breathing(at),
                (None, None) => break,
            }
        }
    }

    fn fire_breathing(&mut self, _at: Instant) {
        self.breathing_at = None;
        if self.current != Pose::Idle {
            return;
        }
        tracing::debug!("breathing");
        self.breathing = true;
        self.play(Clip::Breathing);
    }

    fn apply(&mut self, pose: Pose, now: Instant) {
        let previous = self.current;
        self.breathing = false;
        self.breathing_at = None;
        self.queued = None;

        self.current = pose;
        if pose == Pose::Talking {
            self.talking_since = Some(now);
        }

        tracing::debug!(%pose, "pose applied");
        self.play(Clip::Pose(pose));

        if pose == Pose::Idle {
            self.arm_breathing(now);
        }
        if pose != previous {
            self.notify(pose);
        }
    }

    fn play(&mut self, clip: Clip) {
        self.serial += 1;
        let take = Take::new(clip, self.serial);
        self.playing = Some(take);
        self.presenter.play(take);
    }

    fn defer(&mut self, pose: Pose, at: Instant) {
        self.queued = Some(Deferred { pose, at });
    }

    fn arm_breathing(&mut self, now: Instant) {
        let delay = self.config.breathing_interval(self.random.next_f64());
        self.breathing_at = Some(now + delay);
    }

    fn notify(&mut self, pose: Pose) {
        for observer in &mut self.observers {
            observer(pose);
        }
    }
}

impl std::fmt::Debug for AnimationStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationStateMachine")
            .field("current", &self.current)
            .field("playing", &self.playing)
            .field("queued", &self.queued())
            .field("breathing", &self.breathing)
            .field("breathing_at", &self.breathing_at)
            .finish()
    }
}
