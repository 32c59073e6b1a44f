// SPDX-License-Identifier: GPL-3.0-only

//! Still-frame capture
//!
//! Produces a single encoded [`Photo`] from the current live frame. The
//! frame is rendered at its native resolution (no cropping or scaling); when
//! mirroring is enabled a horizontal flip is applied first so the output
//! matches what the user saw on screen.

use super::Photo;
use super::encoding::encode_jpeg;
use crate::backends::camera::SourceFrame;
use crate::constants::JPEG_QUALITY;
use chrono::Local;
use image::RgbImage;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Single-frame capturer
#[derive(Debug, Clone, Copy)]
pub struct FrameCapturer {
    mirror: bool,
}

impl FrameCapturer {
    /// Create a capturer. `mirror` applies a horizontal flip before encoding.
    pub fn new(mirror: bool) -> Self {
        Self { mirror }
    }

    /// Whether captures are mirrored
    pub fn mirror(&self) -> bool {
        self.mirror
    }

    /// Capture a still photo from a live frame.
    ///
    /// Declines (returns `None`) when the frame has zero dimensions or too
    /// little pixel data, and when encoding fails. Declining is not an
    /// error: the session timer sequence proceeds regardless.
    pub fn capture(&self, frame: &SourceFrame) -> Option<Photo> {
        if !frame.has_pixels() {
            debug!(
                width = frame.width,
                height = frame.height,
                "Frame has no usable pixels, capture skipped"
            );
            return None;
        }

        let pixel_bytes = frame.width as usize * frame.height as usize * 3;
        let mut image = RgbImage::from_raw(
            frame.width,
            frame.height,
            frame.data[..pixel_bytes].to_vec(),
        )?;

        if self.mirror {
            image::imageops::flip_horizontal_in_place(&mut image);
        }

        let data = match encode_jpeg(&image, JPEG_QUALITY) {
            Ok(data) => data,
            Err(e) => {
                warn!(error = %e, "Photo encoding failed, capture skipped");
                return None;
            }
        };

        Some(Photo {
            id: Uuid::new_v4(),
            data: Arc::from(data),
            width: frame.width,
            height: frame.height,
            captured_at: Local::now(),
        })
    }

    /// Capture off the async runtime's worker threads.
    ///
    /// JPEG encoding is CPU-bound, so the work runs on the blocking pool.
    pub async fn capture_off_thread(&self, frame: SourceFrame) -> Option<Photo> {
        let capturer = *self;
        tokio::task::spawn_blocking(move || capturer.capture(&frame))
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "Capture task failed");
                None
            })
    }
}
