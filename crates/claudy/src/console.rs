//! Terminal stand-ins for the sprite renderer and speech bubble

use claudy_animation::{AnimationHandle, BubbleDisplay, Clip, PosePresenter, Take};
use claudy_core::Pose;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// Nominal length of each one-shot clip
pub fn clip_length(clip: Clip) -> Option<Duration> {
    let millis = match clip {
        Clip::Pose(Pose::Intro) => 2000,
        Clip::Pose(Pose::Wake) => 800,
        Clip::Pose(Pose::Talking) => 1200,
        Clip::Pose(Pose::Happy) | Clip::Pose(Pose::Confused) => 1500,
        Clip::Breathing => 3000,
        Clip::Pose(_) => return None,
    };
    Some(Duration::from_millis(millis))
}

/// Timestamped, line-oriented output shared by the presenter and the bubble
#[derive(Clone)]
pub struct Transcript {
    started: Instant,
    out: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Transcript {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            started: Instant::now(),
            out: Arc::new(Mutex::new(out)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    pub fn line(&self, tag: &str, text: &str) {
        let elapsed = self.started.elapsed().as_secs_f64();
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(e) = writeln!(out, "[{elapsed:>8.3}s] {tag:<7} {text}") {
            tracing::warn!(error = %e, "transcript write failed");
        }
    }
}

/// Prints clips and reports one-shot clips finished after their nominal length
pub struct ConsolePresenter {
    transcript: Transcript,
    handle: AnimationHandle,
}

impl ConsolePresenter {
    pub fn new(transcript: Transcript, handle: AnimationHandle) -> Self {
        Self { transcript, handle }
    }
}

impl PosePresenter for ConsolePresenter {
    fn play(&mut self, take: Take) {
        self.transcript.line("pose", &take.to_string());

        if let Some(length) = clip_length(take.clip()) {
            let handle = self.handle.clone();
            tokio::spawn(async move {
                tokio::time::sleep(length).await;
                handle.finished(take);
            });
        }
    }
}

#[derive(Clone)]
pub struct ConsoleBubble {
    transcript: Transcript,
}

impl ConsoleBubble {
    pub fn new(transcript: Transcript) -> Self {
        Self { transcript }
    }
}

impl BubbleDisplay for ConsoleBubble {
    fn show_bubble(&mut self, text: &str, duration: Duration) {
        self.transcript
            .line("bubble", &format!("{} ({}ms)", text, duration.as_millis()));
    }
}
