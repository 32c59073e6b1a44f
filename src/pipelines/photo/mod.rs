// SPDX-License-Identifier: GPL-3.0-only

//! Photo capture pipeline
//!
//! Turns a live [`SourceFrame`](crate::backends::camera::SourceFrame) into an
//! encoded [`Photo`]: optional mirror flip, then JPEG encoding at a fixed
//! high quality.

pub mod capture;
pub mod encoding;

pub use capture::FrameCapturer;

use chrono::{DateTime, Local};
use std::sync::Arc;
use uuid::Uuid;

/// A captured photo
///
/// Immutable once created. Owned by the session's photo list and dropped
/// when the session resets.
#[derive(Clone)]
pub struct Photo {
    /// Unique identifier
    pub id: Uuid,
    /// Encoded JPEG payload
    pub data: Arc<[u8]>,
    /// Pixel width of the encoded image
    pub width: u32,
    /// Pixel height of the encoded image
    pub height: u32,
    /// Capture timestamp
    pub captured_at: DateTime<Local>,
}

impl std::fmt::Debug for Photo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Photo({}, {}x{}, {} bytes)",
            self.id,
            self.width,
            self.height,
            self.data.len()
        )
    }
}
