// SPDX-License-Identifier: GPL-3.0-only

//! Session message handling
//!
//! Each handler applies one message and returns the commands it wants
//! executed. Timer-derived messages are generation-checked first: a pending
//! continuation from a superseded countdown must never mutate state after
//! the machine has moved on.

use super::state::{Command, Message, Session, SessionMode};
use crate::constants::{
    COUNTDOWN_TICK, FLASH_DURATION, FREEZE_DURATION, MAX_PHOTOS_PER_SESSION,
};
use crate::pipelines::photo::Photo;
use chrono::Local;
use tracing::{debug, info, warn};

impl Session {
    /// Apply one message and return the side effects to execute
    pub fn update(&mut self, message: Message) -> Vec<Command> {
        match message {
            Message::Start { target } => self.handle_start(target),
            Message::CountdownTick { generation } => self.handle_countdown_tick(generation),
            Message::PhotoCaptured { generation, photo } => {
                self.handle_photo_captured(generation, photo)
            }
            Message::FlashComplete { generation } => self.handle_flash_complete(generation),
            Message::FreezeElapsed { generation } => self.handle_freeze_elapsed(generation),
            Message::Reset => self.handle_reset(),
        }
    }

    /// True when a message was scheduled under an older generation
    fn is_stale(&self, generation: u64) -> bool {
        if generation != self.generation {
            debug!(
                message_generation = generation,
                current_generation = self.generation,
                "Dropping stale timer message"
            );
            return true;
        }
        false
    }

    fn handle_start(&mut self, target: u32) -> Vec<Command> {
        if !matches!(self.mode, SessionMode::Idle | SessionMode::Review) {
            warn!(mode = ?self.mode, "Ignoring start, session already running");
            return Vec::new();
        }

        let target = target.clamp(1, MAX_PHOTOS_PER_SESSION);
        self.photos.clear();
        self.frozen_frame = None;
        self.flash_active = false;
        self.capture_in_flight = false;
        self.target_count = target;
        self.countdown_remaining = Some(Self::initial_countdown());
        self.started_at = Local::now();
        self.generation += 1;
        self.mode = SessionMode::Countdown;

        info!(target, generation = self.generation, "Session started");
        vec![Command::Delay {
            after: COUNTDOWN_TICK,
            message: Message::CountdownTick {
                generation: self.generation,
            },
        }]
    }

    fn handle_countdown_tick(&mut self, generation: u64) -> Vec<Command> {
        if self.is_stale(generation) || self.mode != SessionMode::Countdown {
            return Vec::new();
        }
        let Some(remaining) = self.countdown_remaining else {
            return Vec::new();
        };

        if remaining > 1 {
            self.countdown_remaining = Some(remaining - 1);
            debug!(remaining = remaining - 1, "Countdown tick");
            return vec![Command::Delay {
                after: COUNTDOWN_TICK,
                message: Message::CountdownTick {
                    generation: self.generation,
                },
            }];
        }

        self.countdown_remaining = Some(0);
        self.enter_capturing()
    }

    /// Transition to Capturing and request exactly one capture.
    ///
    /// The in-flight flag guards against duplicate entries producing
    /// duplicate photos for a single countdown-zero event.
    fn enter_capturing(&mut self) -> Vec<Command> {
        self.mode = SessionMode::Capturing;

        if self.capture_in_flight {
            warn!("Capture already in flight, ignoring duplicate Capturing entry");
            return Vec::new();
        }
        self.capture_in_flight = true;

        info!(
            shot = self.photos.len() + 1,
            target = self.target_count,
            "Countdown complete, capturing"
        );
        vec![Command::CapturePhoto {
            generation: self.generation,
        }]
    }

    fn handle_photo_captured(&mut self, generation: u64, photo: Option<Photo>) -> Vec<Command> {
        if self.is_stale(generation) || self.mode != SessionMode::Capturing {
            return Vec::new();
        }

        let mut commands = Vec::new();
        match photo {
            Some(photo) => {
                if self.photos.len() >= self.target_count as usize {
                    // A freeze is already pending from the capture that
                    // filled the last slot; no flash for a dropped photo.
                    warn!("Target already reached, dropping extra photo");
                    return Vec::new();
                }
                info!(photo = ?photo, count = self.photos.len() + 1, "Photo captured");
                self.frozen_frame = Some(photo.clone());
                self.photos.push(photo);
                self.flash_active = true;
                commands.push(Command::Delay {
                    after: FLASH_DURATION,
                    message: Message::FlashComplete {
                        generation: self.generation,
                    },
                });
            }
            None => {
                // Frame unavailable at the capture instant. The slot stays
                // unfilled and the timer sequence proceeds; the machine will
                // loop back to Countdown since the target is not yet reached.
                warn!("Capture skipped, no usable frame");
            }
        }

        commands.push(Command::Delay {
            after: FREEZE_DURATION,
            message: Message::FreezeElapsed {
                generation: self.generation,
            },
        });
        commands
    }

    fn handle_flash_complete(&mut self, generation: u64) -> Vec<Command> {
        if self.is_stale(generation) {
            return Vec::new();
        }
        self.flash_active = false;
        Vec::new()
    }

    fn handle_freeze_elapsed(&mut self, generation: u64) -> Vec<Command> {
        if self.is_stale(generation) || self.mode != SessionMode::Capturing {
            return Vec::new();
        }

        self.capture_in_flight = false;
        self.frozen_frame = None;

        if self.photos.len() >= self.target_count as usize {
            self.mode = SessionMode::Review;
            self.countdown_remaining = None;
            info!(photos = self.photos.len(), "Session complete, review");
            return Vec::new();
        }

        self.countdown_remaining = Some(Self::initial_countdown());
        self.mode = SessionMode::Countdown;
        debug!(
            photos = self.photos.len(),
            target = self.target_count,
            "Freeze elapsed, next countdown"
        );
        vec![Command::Delay {
            after: COUNTDOWN_TICK,
            message: Message::CountdownTick {
                generation: self.generation,
            },
        }]
    }

    fn handle_reset(&mut self) -> Vec<Command> {
        // Bumping the generation invalidates every outstanding timer
        self.generation += 1;
        self.photos.clear();
        self.mode = SessionMode::Idle;
        self.countdown_remaining = None;
        self.frozen_frame = None;
        self.flash_active = false;
        self.capture_in_flight = false;

        info!(generation = self.generation, "Session reset");
        Vec::new()
    }
}
