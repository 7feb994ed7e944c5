use crate::console::{ConsoleBubble, ConsolePresenter, Transcript};
use crate::pipeline::{Pipeline, Randomness};
use crate::settings::{self, Settings};
use claudy_animation::{driver, AnimationStateMachine};
use claudy_core::random::{self, RandomSource};
use claudy_core::{Inbound, Pose};
use serde_json::Value;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// What a replay did
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySummary {
    pub lines: usize,
    pub skipped: usize,
    pub pose_changes: usize,
    pub final_pose: Pose,
    /// Events in the current session
    pub session_events: u64,
    pub project: String,
}

pub fn run(
    config: Option<&Path>,
    file: Option<&Path>,
    delay_ms: u64,
    seed: Option<u64>,
    play_intro: bool,
) -> anyhow::Result<()> {
    let settings = settings::load(&settings::config_path(config)?);
    let lines = read_input(file)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let summary = runtime.block_on(replay(
        &settings,
        lines,
        Duration::from_millis(delay_ms),
        seed,
        play_intro,
        Transcript::stdout(),
    ))?;

    tracing::info!(
        lines = summary.lines,
        skipped = summary.skipped,
        pose_changes = summary.pose_changes,
        final_pose = %summary.final_pose,
        session_events = summary.session_events,
        project = %summary.project,
        "replay finished"
    );
    Ok(())
}

fn read_input(file: Option<&Path>) -> anyhow::Result<Vec<Value>> {
    match file {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("input file not found: {}", path.display());
            }
            Ok(claudy_telemetry::read_jsonl(path)?)
        }
        None => {
            let stdin = std::io::stdin();
            Ok(claudy_telemetry::parse_jsonl(BufReader::new(stdin.lock()))?)
        }
    }
}

fn random_source(seed: Option<u64>, stream: u64) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => random::seeded(seed.wrapping_add(stream)),
        None => random::from_entropy(),
    }
}

/// Drive every line through the pipeline, then wait for the mascot to settle
pub async fn replay(
    settings: &Settings,
    lines: Vec<Value>,
    delay: Duration,
    seed: Option<u64>,
    play_intro: bool,
    transcript: Transcript,
) -> anyhow::Result<ReplaySummary> {
    let (handle, inbox) = driver::channel();

    let presenter = ConsolePresenter::new(transcript.clone(), handle.clone());
    let mut machine = AnimationStateMachine::with_random(
        settings.animation_config(),
        Box::new(presenter),
        random_source(seed, 2),
    );
    let pose_changes = Arc::new(AtomicUsize::new(0));
    let counter = pose_changes.clone();
    machine.on_pose_change(move |_pose| {
        counter.fetch_add(1, Ordering::Relaxed);
    });
    machine.start(play_intro, tokio::time::Instant::now().into_std());
    let task = driver::spawn(machine, inbox);

    let randomness = Randomness {
        pose: random_source(seed, 0),
        comments: random_source(seed, 1),
    };
    let mut pipeline = Pipeline::new(
        settings,
        handle.clone(),
        ConsoleBubble::new(transcript.clone()),
        randomness,
    );

    let mut skipped = 0;
    let mut shown_project = pipeline.roster().label();
    let total = lines.len();
    for (index, value) in lines.into_iter().enumerate() {
        match Inbound::from_json(value) {
            Ok(inbound) => {
                pipeline.ingest(inbound);
                let label = pipeline.roster().label();
                if label != shown_project {
                    transcript.line("project", &label);
                    shown_project = label;
                }
            }
            Err(e) => {
                skipped += 1;
                tracing::warn!(line = index + 1, error = %e, "skipping unrecognized input");
            }
        }
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }

    let session_events = pipeline.aggregator().tracker().event_count();
    let project = pipeline.roster().display_name();

    handle.settled().await;
    handle.shutdown();
    let machine = task.await?;

    Ok(ReplaySummary {
        lines: total,
        skipped,
        pose_changes: pose_changes.load(Ordering::Relaxed),
        final_pose: machine.pose(),
        session_events,
        project,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_replay_session_settles() {
        let buffer = Buffer::default();
        let lines = vec![
            json!({"type": "session_start"}),
            json!({"type": "user", "content": "please fix the parser"}),
            json!({"type": "thinking"}),
            json!({"type": "tool_use", "tool_name": "Edit", "file_path": "src/parser.rs"}),
            json!({"type": "assistant", "content": "Done, the parser handles it now."}),
            json!({"type": "stop"}),
        ];

        let summary = replay(
            &Settings::default(),
            lines,
            Duration::from_millis(100),
            Some(42),
            false,
            Transcript::new(Box::new(buffer.clone())),
        )
        .await
        .unwrap();

        assert_eq!(summary.lines, 6);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.final_pose, Pose::Idle);
        assert!(summary.pose_changes >= 5);
        assert_eq!(summary.session_events, 5);
        assert_eq!(summary.project, "No project");

        let text = buffer.text();
        assert!(text.contains("intro"));
        assert!(text.contains("working"));
        assert!(text.contains("happy"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_replay_payloads_and_bad_lines() {
        let buffer = Buffer::default();
        let lines = vec![
            json!({"current_state": "listening", "active_projects": ["-home-me-claudy"]}),
            json!("just a string"),
            json!({"state": "moonwalk", "active_projects": []}),
        ];

        let summary = replay(
            &Settings::default(),
            lines,
            Duration::ZERO,
            Some(1),
            false,
            Transcript::new(Box::new(buffer.clone())),
        )
        .await
        .unwrap();

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.final_pose, Pose::Listening);
        assert_eq!(summary.project, "No project");
        assert!(buffer.text().contains("I'm listening..."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_replay_shows_project_switcher() {
        let buffer = Buffer::default();
        let lines = vec![
            json!({"current_state": "idle", "active_projects": ["-home-me-alpha", "-home-me-beta"]}),
            json!({"current_state": "idle", "active_projects": ["-home-me-alpha", "-home-me-beta"]}),
            json!({
                "current_state": "working",
                "active_projects": ["-home-me-alpha", "-home-me-beta"],
                "focused_project": "-home-me-beta"
            }),
        ];

        let summary = replay(
            &Settings::default(),
            lines,
            Duration::ZERO,
            Some(3),
            false,
            Transcript::new(Box::new(buffer.clone())),
        )
        .await
        .unwrap();

        assert_eq!(summary.project, "beta");
        let text = buffer.text();
        let switcher: Vec<&str> = text.lines().filter(|l| l.contains(" project ")).collect();
        assert_eq!(switcher.len(), 2);
        assert!(switcher[0].ends_with("alpha [1] 2"));
        assert!(switcher[1].ends_with("beta 1 [2]"));
    }
}
