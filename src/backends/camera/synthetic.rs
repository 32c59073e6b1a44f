// SPDX-License-Identifier: GPL-3.0-only

//! Synthetic camera backend
//!
//! Produces solid-color test-pattern frames without touching hardware.
//! Used by the test suite and useful for front ends that want a booth
//! preview with no camera attached.

use super::types::*;
use super::{CameraBackend, CameraStream};
use crate::errors::CameraError;
use std::sync::Arc;
use tracing::debug;

/// Backend producing synthetic devices and frames
pub struct SyntheticBackend {
    devices: Vec<CameraDevice>,
    frame_width: u32,
    frame_height: u32,
    permission_granted: bool,
    deny_permission: bool,
    fail_streams: bool,
}

impl SyntheticBackend {
    /// Create a backend exposing `device_count` fake devices producing
    /// 640x480 frames.
    pub fn new(device_count: usize) -> Self {
        let devices = (0..device_count)
            .map(|i| CameraDevice {
                device_id: format!("synthetic-{}", i),
                // Labels stay empty until the permission grant
                label: String::new(),
            })
            .collect();
        Self {
            devices,
            frame_width: 640,
            frame_height: 480,
            permission_granted: false,
            deny_permission: false,
            fail_streams: false,
        }
    }

    /// Set the dimensions of produced frames. Zero dimensions are allowed
    /// and model a video surface that has no data yet.
    pub fn with_frame_size(mut self, width: u32, height: u32) -> Self {
        self.frame_width = width;
        self.frame_height = height;
        self
    }

    /// Make permission requests fail
    pub fn deny_permission(mut self) -> Self {
        self.deny_permission = true;
        self
    }

    /// Make all stream acquisitions fail
    pub fn fail_streams(mut self) -> Self {
        self.fail_streams = true;
        self
    }
}

impl CameraBackend for SyntheticBackend {
    fn request_permission(&mut self) -> BackendResult<()> {
        if self.deny_permission {
            return Err(CameraError::PermissionDenied);
        }
        self.permission_granted = true;
        Ok(())
    }

    fn enumerate_devices(&self) -> Vec<CameraDevice> {
        self.devices
            .iter()
            .enumerate()
            .map(|(i, d)| CameraDevice {
                device_id: d.device_id.clone(),
                label: if self.permission_granted {
                    format!("Synthetic Camera {}", i)
                } else {
                    String::new()
                },
            })
            .collect()
    }

    fn open_stream(
        &mut self,
        device: &CameraDevice,
        constraints: &StreamConstraints,
    ) -> BackendResult<Box<dyn CameraStream>> {
        if self.fail_streams {
            return Err(CameraError::StreamAcquisitionFailed(
                "synthetic failure".to_string(),
            ));
        }
        // Negotiate down: synthetic frames never exceed the configured size
        let width = self.frame_width.min(constraints.ideal_width);
        let height = self.frame_height.min(constraints.ideal_height);
        debug!(device_id = %device.device_id, width, height, "Opening synthetic stream");
        Ok(Box::new(SyntheticStream::new(width, height)))
    }
}

/// Stream of identical solid-color frames
pub struct SyntheticStream {
    frame: SourceFrame,
    stopped: bool,
}

impl SyntheticStream {
    fn new(width: u32, height: u32) -> Self {
        // Mid-gray test pattern
        let data: Arc<[u8]> = Arc::from(vec![0x80u8; width as usize * height as usize * 3]);
        Self {
            frame: SourceFrame {
                width,
                height,
                data,
            },
            stopped: false,
        }
    }
}

impl CameraStream for SyntheticStream {
    fn current_frame(&self) -> Option<SourceFrame> {
        if self.stopped {
            None
        } else {
            Some(self.frame.clone())
        }
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}
