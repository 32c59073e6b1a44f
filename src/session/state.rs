// SPDX-License-Identifier: GPL-3.0-only

//! Session state types

use crate::constants::{COUNTDOWN_SECONDS, DEFAULT_PHOTOS_PER_SESSION};
use crate::pipelines::photo::Photo;
use chrono::{DateTime, Local};
use std::time::Duration;

/// Phase of a photobooth session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// Waiting for the user to start a session
    #[default]
    Idle,
    /// Counting down to the next shot
    Countdown,
    /// Capture in progress: one shot taken, freeze window running
    Capturing,
    /// All shots taken; strip ready to print. Exits only via reset.
    Review,
}

/// Messages driving the session state machine
///
/// Timer-derived messages carry the generation that scheduled them, so a
/// continuation from a superseded session is recognizably stale.
#[derive(Debug, Clone)]
pub enum Message {
    /// Begin a session targeting `target` photos (valid from Idle or Review)
    Start { target: u32 },
    /// One-second countdown tick
    CountdownTick { generation: u64 },
    /// Result of a capture attempt; `None` when the frame was unusable
    PhotoCaptured {
        generation: u64,
        photo: Option<Photo>,
    },
    /// Flash overlay duration elapsed
    FlashComplete { generation: u64 },
    /// Freeze-frame window elapsed
    FreezeElapsed { generation: u64 },
    /// Return to Idle from any state
    Reset,
}

/// Side effects requested by [`Session::update`]
///
/// The machine itself never sleeps or touches the camera; a driver executes
/// these and feeds the resulting messages back in.
#[derive(Debug, Clone)]
pub enum Command {
    /// Deliver `message` after `after` has elapsed
    Delay { after: Duration, message: Message },
    /// Capture one photo from the live stream, then deliver
    /// [`Message::PhotoCaptured`] with the same generation
    CapturePhoto { generation: u64 },
}

/// Photobooth session state machine
///
/// `Idle → Countdown → Capturing → (Countdown | Review)`, with Review
/// exiting only via [`Message::Reset`]. All mutation goes through
/// [`Session::update`].
#[derive(Debug)]
pub struct Session {
    pub(super) mode: SessionMode,
    pub(super) target_count: u32,
    pub(super) photos: Vec<Photo>,
    pub(super) countdown_remaining: Option<u32>,
    pub(super) frozen_frame: Option<Photo>,
    pub(super) flash_active: bool,
    pub(super) started_at: DateTime<Local>,
    /// Bumped on every start and reset. Messages carrying an older
    /// generation are dropped before they can mutate state.
    pub(super) generation: u64,
    /// Guard against duplicate capture side effects for one countdown-zero
    /// event. Cleared only when the freeze continuation completes.
    pub(super) capture_in_flight: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session machine in Idle
    pub fn new() -> Self {
        Self {
            mode: SessionMode::Idle,
            target_count: DEFAULT_PHOTOS_PER_SESSION,
            photos: Vec::new(),
            countdown_remaining: None,
            frozen_frame: None,
            flash_active: false,
            started_at: Local::now(),
            generation: 0,
            capture_in_flight: false,
        }
    }

    /// Current phase
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Photos to take this session
    pub fn target_count(&self) -> u32 {
        self.target_count
    }

    /// Photos captured so far, in capture order
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Seconds remaining on the countdown, when counting
    pub fn countdown_remaining(&self) -> Option<u32> {
        self.countdown_remaining
    }

    /// The captured frame shown frozen during the freeze window
    pub fn frozen_frame(&self) -> Option<&Photo> {
        self.frozen_frame.as_ref()
    }

    /// Whether the flash overlay is currently showing
    pub fn flash_active(&self) -> bool {
        self.flash_active
    }

    /// When the current session started (used for the strip footer date)
    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    /// Current generation counter
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the countdown display should show a number (3..1)
    pub fn counting_down(&self) -> bool {
        self.mode == SessionMode::Countdown
            && self.countdown_remaining.is_some_and(|r| r > 0)
    }

    pub(super) const fn initial_countdown() -> u32 {
        COUNTDOWN_SECONDS
    }
}
