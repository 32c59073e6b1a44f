// SPDX-License-Identifier: GPL-3.0-only

//! Camera backend abstraction
//!
//! Trait-based abstraction over platform camera access. The session core
//! never talks to hardware directly: it borrows frames from whatever stream
//! the [`CameraSourceManager`] currently owns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │  Session / Driver   │
//! └──────────┬──────────┘
//!            │ borrows frames
//!            ▼
//! ┌─────────────────────┐
//! │ CameraSourceManager │  ← device list, active selection, error state
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │ CameraBackend trait │  ← permission, enumeration, stream acquisition
//! └─────────────────────┘
//! ```

pub mod manager;
pub mod synthetic;
pub mod types;

pub use manager::CameraSourceManager;
pub use synthetic::SyntheticBackend;
pub use types::*;

/// Platform camera access
///
/// Implementations wrap whatever device API the platform provides. Device
/// labels are typically empty until [`CameraBackend::request_permission`]
/// has succeeded once.
pub trait CameraBackend: Send {
    /// Request the one-time camera permission grant.
    ///
    /// Must succeed before [`CameraBackend::enumerate_devices`] returns
    /// populated labels.
    fn request_permission(&mut self) -> BackendResult<()>;

    /// Enumerate available video-input devices
    fn enumerate_devices(&self) -> Vec<CameraDevice>;

    /// Open a live stream for the given device at the preferred resolution.
    ///
    /// The backend negotiates the constraints down as needed. Any previously
    /// opened stream is unaffected; teardown ordering is the manager's job.
    fn open_stream(
        &mut self,
        device: &CameraDevice,
        constraints: &StreamConstraints,
    ) -> BackendResult<Box<dyn CameraStream>>;
}

/// An active camera stream
///
/// The stream is a singleton resource owned by the manager. Consumers only
/// ever borrow frames from it; stopping and reacquiring is the manager's
/// responsibility.
pub trait CameraStream: Send {
    /// Latest frame from the live feed, if one has arrived yet
    fn current_frame(&self) -> Option<SourceFrame>;

    /// Stop all tracks, releasing the hardware device
    fn stop(&mut self);
}
