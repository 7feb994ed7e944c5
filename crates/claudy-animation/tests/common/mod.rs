//! Shared helpers for animation tests

use claudy_animation::{AnimationConfig, AnimationStateMachine, Clip, PosePresenter, Take};
use claudy_core::{Pose, ScriptedRandom};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Presenter that records every clip it is asked to play
#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<Take>>>);

impl PosePresenter for Recorder {
    fn play(&mut self, take: Take) {
        self.0.lock().unwrap().push(take);
    }
}

impl Recorder {
    pub fn clips(&self) -> Vec<Clip> {
        self.0.lock().unwrap().iter().map(Take::clip).collect()
    }

    pub fn last_take(&self) -> Option<Take> {
        self.0.lock().unwrap().last().copied()
    }
}

/// Machine with deterministic breathing, an attached recorder and a pose log
pub struct Harness {
    pub machine: AnimationStateMachine,
    pub recorder: Recorder,
    pub changes: Arc<Mutex<Vec<Pose>>>,
    pub t0: Instant,
}

impl Harness {
    pub fn new() -> Self {
        let recorder = Recorder::default();
        let mut machine = AnimationStateMachine::with_random(
            AnimationConfig::new(),
            Box::new(recorder.clone()),
            Box::new(ScriptedRandom::constant(0.5)),
        );
        let changes = Arc::new(Mutex::new(Vec::new()));
        let sink = changes.clone();
        machine.on_pose_change(move |pose| sink.lock().unwrap().push(pose));
        Self {
            machine,
            recorder,
            changes,
            t0: Instant::now(),
        }
    }

    pub fn at(&self, millis: u64) -> Instant {
        self.t0 + Duration::from_millis(millis)
    }

    pub fn changes(&self) -> Vec<Pose> {
        self.changes.lock().unwrap().clone()
    }
}
