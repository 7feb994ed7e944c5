//! Wires ingestion, selection and animation together

use crate::settings::Settings;
use claudy_animation::{AnimationHandle, BubbleDisplay};
use claudy_core::random::RandomSource;
use claudy_core::{
    ContextAggregator, Directive, EventKind, Inbound, PoseSelector, ProjectRoster, RawEvent,
};
use claudy_personality::CommentSelector;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Randomness for the two selectors
pub struct Randomness {
    pub pose: Box<dyn RandomSource>,
    pub comments: Box<dyn RandomSource>,
}

/// Routes transport input to the aggregator, whose subscribers pick poses
/// and remarks
pub struct Pipeline {
    aggregator: ContextAggregator,
    /// Shared with the aggregator subscriber so direct poses can be noted
    poses: Arc<Mutex<PoseSelector>>,
    roster: ProjectRoster,
    animation: AnimationHandle,
    bubble: Box<dyn BubbleDisplay>,
    bubble_duration: Duration,
}

impl Pipeline {
    pub fn new<B>(
        settings: &Settings,
        animation: AnimationHandle,
        bubble: B,
        randomness: Randomness,
    ) -> Self
    where
        B: BubbleDisplay + Clone + 'static,
    {
        let bubble_duration = settings.bubble_duration();
        let mut aggregator = ContextAggregator::new();

        let poses = Arc::new(Mutex::new(PoseSelector::with_random(
            settings.pose.clone(),
            randomness.pose,
        )));
        let selector = poses.clone();
        let handle = animation.clone();
        aggregator.subscribe(move |ctx| {
            let mut poses = selector.lock().unwrap_or_else(PoisonError::into_inner);
            if ctx.kind == EventKind::SessionStart {
                poses.reset();
            }
            let pose = poses.select(ctx);
            if !handle.request(pose) {
                anyhow::bail!("animation driver stopped");
            }
            Ok(())
        });

        let mut comments =
            CommentSelector::with_random(settings.selector_config(), randomness.comments);
        let mut remarks = bubble.clone();
        aggregator.subscribe(move |ctx| {
            if ctx.kind == EventKind::SessionStart {
                comments.reset();
            }
            if let Some(text) = comments.select(ctx) {
                remarks.show_bubble(&text, bubble_duration);
            }
            Ok(())
        });

        Self {
            aggregator,
            poses,
            roster: ProjectRoster::new(),
            animation,
            bubble: Box::new(bubble),
            bubble_duration,
        }
    }

    pub fn roster(&self) -> &ProjectRoster {
        &self.roster
    }

    pub fn aggregator(&self) -> &ContextAggregator {
        &self.aggregator
    }

    pub fn ingest(&mut self, inbound: Inbound) {
        match inbound {
            Inbound::Event(raw) => self.ingest_event(&raw),
            Inbound::Payload(payload) => {
                self.roster.update(payload.projects());
                if let Some(focused) = payload.focused() {
                    self.roster.focus(focused);
                }
                let project = self.roster.focused().unwrap_or_default().to_string();
                self.aggregator.set_project(project);

                match payload.directive() {
                    Directive::Event(raw) => self.ingest_event(&raw),
                    Directive::Pose(pose) => {
                        self.poses
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .note_pose(pose);
                        self.animation.request(pose);
                        if let Some(text) = pose.canned_message() {
                            self.bubble.show_bubble(text, self.bubble_duration);
                        }
                    }
                    Directive::Nothing => {}
                }
            }
        }
    }

    fn ingest_event(&mut self, raw: &RawEvent) {
        let ctx = self.aggregator.handle_event(raw);
        tracing::debug!(kind = %ctx.kind, project = %ctx.project, "event ingested");
    }
}
