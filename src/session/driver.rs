// SPDX-License-Identifier: GPL-3.0-only

//! Session driver
//!
//! Executes the commands the state machine emits: delays become spawned
//! sleep tasks that post their message back through a channel, and capture
//! requests pull the current frame from the camera manager and run it
//! through the photo pipeline.
//!
//! Stale timers need no cancellation here: a sleep task from a superseded
//! countdown still fires, but its message carries the old generation and
//! [`Session::update`] drops it.

use super::state::{Command, Message, Session};
use crate::backends::camera::CameraSourceManager;
use crate::pipelines::photo::FrameCapturer;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Cloneable handle for posting user actions to a running driver
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<Message>,
}

impl SessionHandle {
    /// Start a session targeting `target` photos
    pub fn start(&self, target: u32) {
        let _ = self.tx.send(Message::Start { target });
    }

    /// Reset the session to Idle
    pub fn reset(&self) {
        let _ = self.tx.send(Message::Reset);
    }
}

/// Drives a [`Session`] against a camera source
pub struct SessionDriver {
    session: Session,
    camera: CameraSourceManager,
    capturer: FrameCapturer,
    tx: mpsc::UnboundedSender<Message>,
    rx: mpsc::UnboundedReceiver<Message>,
}

impl SessionDriver {
    /// Create a driver over the given camera manager and capturer
    pub fn new(camera: CameraSourceManager, capturer: FrameCapturer) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            session: Session::new(),
            camera,
            capturer,
            tx,
            rx,
        }
    }

    /// Handle for posting start/reset from outside the driver loop
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            tx: self.tx.clone(),
        }
    }

    /// Current session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Camera source manager (read access)
    pub fn camera(&self) -> &CameraSourceManager {
        &self.camera
    }

    /// Camera source manager (for device re-selection).
    ///
    /// Selection changes tear down and reattach the stream only; they share
    /// no timer state with the session, so an in-flight countdown is
    /// unaffected.
    pub fn camera_mut(&mut self) -> &mut CameraSourceManager {
        &mut self.camera
    }

    /// Apply one message and execute the commands it produces
    pub async fn step(&mut self, message: Message) {
        let commands = self.session.update(message);
        for command in commands {
            self.execute(command).await;
        }
    }

    /// Receive and apply the next message. Returns `false` once every
    /// sender (including all pending timer tasks) has gone away.
    pub async fn next_step(&mut self) -> bool {
        match self.rx.recv().await {
            Some(message) => {
                self.step(message).await;
                true
            }
            None => false,
        }
    }

    /// Run the driver loop until all handles are dropped
    pub async fn run(&mut self) {
        info!("Session driver running");
        while self.next_step().await {}
        info!("Session driver stopped");
    }

    async fn execute(&mut self, command: Command) {
        match command {
            Command::Delay { after, message } => {
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = tx.send(message);
                });
            }
            Command::CapturePhoto { generation } => {
                let photo = match self.camera.current_frame() {
                    Some(frame) => self.capturer.capture_off_thread(frame).await,
                    None => {
                        debug!("No stream frame available at capture instant");
                        None
                    }
                };
                let _ = self.tx.send(Message::PhotoCaptured { generation, photo });
            }
        }
    }
}
