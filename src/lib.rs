// SPDX-License-Identifier: GPL-3.0-only

//! Photobooth session engine
//!
//! This library drives a multi-shot photobooth session: a countdown times
//! each shot, the current camera frame is captured and encoded at the
//! countdown-zero instant, and the accumulated photos are composed into a
//! printable photo strip.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`session`]: the session state machine and its tokio driver
//! - [`backends`]: camera backend abstraction (enumeration, streams)
//! - [`pipelines`]: photo capture and JPEG encoding
//! - [`strip`]: photo strip composition
//! - [`mod@print`]: platform print hand-off
//! - [`config`]: user configuration (strip text, photo count, mirroring)
//!
//! # Example
//!
//! ```no_run
//! use photobooth::{
//!     CameraSourceManager, Config, FrameCapturer, SessionDriver, StreamConstraints,
//!     SyntheticBackend,
//! };
//!
//! # async fn run() {
//! let config = Config::load();
//! let mut camera = CameraSourceManager::new(Box::new(SyntheticBackend::new(1)));
//! camera.init(&StreamConstraints::default());
//!
//! let mut driver = SessionDriver::new(camera, FrameCapturer::new(config.mirror_preview));
//! let handle = driver.handle();
//! handle.start(config.photos_per_session);
//! driver.run().await;
//! # }
//! ```

pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod pipelines;
pub mod print;
pub mod session;
pub mod strip;

// Re-export commonly used types
pub use backends::camera::{
    CameraBackend, CameraDevice, CameraSourceManager, CameraStream, SourceFrame,
    StreamConstraints, SyntheticBackend,
};
pub use config::{Config, StripSettings};
pub use errors::{BoothError, BoothResult, CameraError, PhotoError};
pub use pipelines::photo::{FrameCapturer, Photo};
pub use print::print_strip;
pub use session::{Command, Message, Session, SessionDriver, SessionHandle, SessionMode};
pub use strip::{StripDocument, compose};
