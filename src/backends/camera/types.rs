// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for camera backends

use crate::constants::{PREFERRED_HEIGHT, PREFERRED_WIDTH};
use crate::errors::CameraError;
use std::sync::Arc;

/// Represents a camera capture device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    /// Opaque backend identifier
    pub device_id: String,
    /// Human-readable name (only populated after the permission grant)
    pub label: String,
}

impl CameraDevice {
    /// Display label, falling back to a short id-derived name when the
    /// backend reported an empty label (no permission grant yet).
    pub fn display_label(&self) -> String {
        if self.label.is_empty() {
            let short: String = self.device_id.chars().take(4).collect();
            format!("Camera {}", short)
        } else {
            self.label.clone()
        }
    }
}

/// A single live frame from an active stream
///
/// Pixel data is tightly packed RGB (3 bytes per pixel) at the stream's
/// intrinsic resolution. Frames are reference counted so they can be handed
/// to the capture pipeline without copying.
#[derive(Clone)]
pub struct SourceFrame {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGB pixel data
    pub data: Arc<[u8]>,
}

impl SourceFrame {
    /// Whether this frame carries usable pixels: non-zero dimensions and a
    /// buffer large enough for them. The capture pipeline declines anything
    /// that fails this check.
    pub fn has_pixels(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.data.len() >= (self.width as usize * self.height as usize * 3)
    }
}

impl std::fmt::Debug for SourceFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SourceFrame({}x{}, {} bytes)",
            self.width,
            self.height,
            self.data.len()
        )
    }
}

/// Requested stream parameters
///
/// These are ideals, not requirements: backends negotiate down to whatever
/// the platform and device actually support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConstraints {
    pub ideal_width: u32,
    pub ideal_height: u32,
}

impl Default for StreamConstraints {
    fn default() -> Self {
        Self {
            ideal_width: PREFERRED_WIDTH,
            ideal_height: PREFERRED_HEIGHT,
        }
    }
}

/// Result type for backend operations
pub type BackendResult<T> = Result<T, CameraError>;
