//! Runs the state machine on a tokio task
//!
//! All mutation happens inside the task, in the order commands arrive.
//! Deferred transitions fire from `sleep_until` on the machine's next deadline.

use crate::machine::AnimationStateMachine;
use crate::presenter::Take;
use claudy_core::Pose;
use std::time::Instant;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time;

/// Messages accepted by the driver task
#[derive(Debug)]
pub enum Command {
    Request(Pose),
    RequestNamed(String),
    Finished(Take),
    /// Resolves with the current pose once nothing is deferred or playing
    WhenSettled(oneshot::Sender<Pose>),
    Shutdown,
}

/// Cloneable sender side of the driver
#[derive(Debug, Clone)]
pub struct AnimationHandle {
    tx: mpsc::UnboundedSender<Command>,
}

/// Receiving side, consumed by [`spawn`]
#[derive(Debug)]
pub struct Inbox {
    rx: mpsc::UnboundedReceiver<Command>,
}

impl Inbox {
    /// Take a queued command without running the driver
    pub fn try_recv(&mut self) -> Option<Command> {
        self.rx.try_recv().ok()
    }
}

/// Create a handle before the machine exists, so presenters can hold one
pub fn channel() -> (AnimationHandle, Inbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (AnimationHandle { tx }, Inbox { rx })
}

impl AnimationHandle {
    /// Returns false once the driver has stopped
    pub fn request(&self, pose: Pose) -> bool {
        self.send(Command::Request(pose))
    }

    pub fn request_named(&self, name: impl Into<String>) -> bool {
        self.send(Command::RequestNamed(name.into()))
    }

    /// Presenter callback for a finished one-shot take
    pub fn finished(&self, take: Take) -> bool {
        self.send(Command::Finished(take))
    }

    /// Wait until no pose is deferred and no one-shot clip is playing
    pub async fn settled(&self) -> Option<Pose> {
        let (tx, rx) = oneshot::channel();
        if !self.send(Command::WhenSettled(tx)) {
            return None;
        }
        rx.await.ok()
    }

    pub fn shutdown(&self) -> bool {
        self.send(Command::Shutdown)
    }

    fn send(&self, command: Command) -> bool {
        self.tx.send(command).is_ok()
    }
}

fn now() -> Instant {
    time::Instant::now().into_std()
}

/// Spawn the driver task; it returns the machine after shutdown
pub fn spawn(machine: AnimationStateMachine, inbox: Inbox) -> JoinHandle<AnimationStateMachine> {
    tokio::spawn(run(machine, inbox))
}

/// Driver loop; exits on [`Command::Shutdown`] or when every handle is dropped
pub async fn run(mut machine: AnimationStateMachine, mut inbox: Inbox) -> AnimationStateMachine {
    let mut waiters: Vec<oneshot::Sender<Pose>> = Vec::new();

    loop {
        if machine.is_settled() && !waiters.is_empty() {
            for waiter in waiters.drain(..) {
                let _ = waiter.send(machine.pose());
            }
        }

        let next_deadline = machine.next_deadline();

        tokio::select! {
            command = inbox.rx.recv() => {
                let Some(command) = command else { break };
                match command {
                    Command::Request(pose) => {
                        machine.request(pose, now());
                    }
                    Command::RequestNamed(name) => {
                        machine.request_named(&name, now());
                    }
                    Command::Finished(take) => machine.animation_finished(take, now()),
                    Command::WhenSettled(waiter) => waiters.push(waiter),
                    Command::Shutdown => break,
                }
            }
            () = async {
                if let Some(deadline) = next_deadline {
                    time::sleep_until(time::Instant::from_std(deadline)).await;
                }
            }, if next_deadline.is_some() => {
                machine.advance(now());
            }
        }
    }

    tracing::debug!(pose = %machine.pose(), "animation driver stopped");
    machine
}
