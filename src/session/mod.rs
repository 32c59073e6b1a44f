// SPDX-License-Identifier: GPL-3.0-only

//! Photobooth session state machine
//!
//! The core of the crate. A [`Session`] sequences
//! `Idle → Countdown → Capturing → (Countdown | Review)` for a multi-shot
//! session, and is mutated exclusively through [`Session::update`], which
//! consumes a [`Message`] and returns [`Command`]s for a driver to execute.
//!
//! Timing hazards are handled with a generation counter: starting or
//! resetting a session bumps it, and every delayed continuation carries the
//! generation that scheduled it. A timer that fires after the machine moved
//! on is dropped instead of mutating the new state.
//!
//! - `state`: session model, messages, commands
//! - `update`: transition handlers
//! - `driver`: tokio runner wiring timers and the capture pipeline

mod driver;
mod state;
mod update;

pub use driver::{SessionDriver, SessionHandle};
pub use state::{Command, Message, Session, SessionMode};
