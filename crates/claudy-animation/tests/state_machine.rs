mod common;

use claudy_animation::{Clip, Outcome};
use claudy_core::Pose;
use common::Harness;

#[test]
fn test_same_pose_twice_changes_once() {
    let mut h = Harness::new();
    let t = h.at(0);
    h.machine.request(Pose::Listening, t);
    h.machine.request(Pose::Listening, h.at(10));
    assert_eq!(h.changes(), vec![Pose::Listening]);
}

#[test]
fn test_happy_during_talking_is_queued_then_applied() {
    let mut h = Harness::new();
    h.machine.request(Pose::Working, h.at(0));
    h.machine.request(Pose::Talking, h.at(100));

    assert_eq!(h.machine.request(Pose::Happy, h.at(500)), Outcome::Queued);
    assert_eq!(h.machine.pose(), Pose::Talking);
    assert_eq!(h.machine.next_deadline(), Some(h.at(1300)));

    h.machine.advance(h.at(1300));
    assert_eq!(h.machine.pose(), Pose::Happy);
    assert_eq!(
        h.changes(),
        vec![Pose::Working, Pose::Talking, Pose::Happy]
    );
}

#[test]
fn test_intro_completes_into_idle_and_breathes() {
    let mut h = Harness::new();
    h.machine.start(true, h.at(0));
    assert_eq!(h.machine.pose(), Pose::Intro);
    assert!(!h.machine.is_settled());

    let intro = h.recorder.last_take().unwrap();
    assert_eq!(intro.clip(), Clip::Pose(Pose::Intro));
    h.machine.animation_finished(intro, h.at(2000));
    assert_eq!(h.machine.pose(), Pose::Idle);

    // draw 0.5 puts breathing halfway through the 10-15s window
    assert_eq!(h.machine.next_deadline(), Some(h.at(2000 + 12_500)));
    h.machine.advance(h.at(2000 + 12_500));
    assert!(h.machine.is_breathing());
    assert_eq!(h.recorder.clips().last(), Some(&Clip::Breathing));

    // breathing is not a pose change
    assert_eq!(h.changes(), vec![Pose::Intro, Pose::Idle]);
}

#[test]
fn test_request_while_breathing_interrupts() {
    let mut h = Harness::new();
    h.machine.start(false, h.at(0));
    h.machine.advance(h.at(12_500));
    assert!(h.machine.is_breathing());

    assert_eq!(h.machine.request(Pose::Wake, h.at(13_000)), Outcome::Applied);
    assert!(!h.machine.is_breathing());
    assert_eq!(h.machine.pose(), Pose::Wake);
}

#[test]
fn test_advance_far_ahead_runs_due_timers_in_order() {
    let mut h = Harness::new();
    h.machine.start(false, h.at(0));
    h.machine.request(Pose::Talking, h.at(100));
    // idle replays behind the late talking, then breathing follows it
    assert_eq!(h.machine.queued(), Some(Pose::Idle));

    h.machine.advance(h.at(60_000));
    assert_eq!(h.machine.pose(), Pose::Idle);
    assert!(h.machine.is_breathing());
}

#[test]
fn test_happy_working_happy_keeps_second_happy() {
    let mut h = Harness::new();
    h.machine.start(false, h.at(0));
    h.machine.request(Pose::Happy, h.at(0));
    let first = h.recorder.last_take().unwrap();
    h.machine.request(Pose::Working, h.at(100));
    h.machine.request(Pose::Happy, h.at(1000));

    h.machine.animation_finished(first, h.at(1500));
    assert_eq!(h.machine.pose(), Pose::Happy);
    assert!(!h.machine.is_settled());

    let second = h.recorder.last_take().unwrap();
    h.machine.animation_finished(second, h.at(2500));
    assert_eq!(h.machine.pose(), Pose::Idle);
    assert_eq!(
        h.changes(),
        vec![Pose::Happy, Pose::Working, Pose::Happy, Pose::Idle]
    );
}
