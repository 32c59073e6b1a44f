// SPDX-License-Identifier: GPL-3.0-only

//! Camera source lifecycle manager
//!
//! Owns the device list, the active selection, the singleton stream, and a
//! user-visible error string. Selecting a device always tears down the
//! existing stream before acquiring the new one, so an acquisition failure
//! never leaves a half-open stream behind.

use super::types::*;
use super::{CameraBackend, CameraStream};
use crate::errors::CameraError;
use tracing::{info, warn};

/// Camera source manager
///
/// Errors are non-fatal: they are recorded on [`CameraSourceManager::error`]
/// for the UI to display and are cleared on the next successful acquisition.
pub struct CameraSourceManager {
    backend: Box<dyn CameraBackend>,
    devices: Vec<CameraDevice>,
    active_device_id: Option<String>,
    stream: Option<Box<dyn CameraStream>>,
    error: Option<String>,
}

impl CameraSourceManager {
    /// Create a manager over the given backend. No permission request or
    /// enumeration happens until [`CameraSourceManager::init`].
    pub fn new(backend: Box<dyn CameraBackend>) -> Self {
        Self {
            backend,
            devices: Vec::new(),
            active_device_id: None,
            stream: None,
            error: None,
        }
    }

    /// Request permission, enumerate devices, and open a stream for the
    /// first device found.
    ///
    /// Mirrors the usual boot sequence: permission must be granted once
    /// before device labels are populated.
    pub fn init(&mut self, constraints: &StreamConstraints) {
        if let Err(e) = self.backend.request_permission() {
            warn!(error = %e, "Camera permission not granted");
            self.error = Some(CameraError::PermissionDenied.to_string());
            return;
        }

        self.refresh_devices();

        if let Some(first) = self.devices.first().map(|d| d.device_id.clone()) {
            if self.active_device_id.is_none() {
                self.select_device(&first, constraints);
            }
        } else {
            warn!("No camera devices found");
            self.error = Some(CameraError::NoCameraFound.to_string());
        }
    }

    /// Re-enumerate devices from the backend
    pub fn refresh_devices(&mut self) {
        self.devices = self
            .backend
            .enumerate_devices()
            .into_iter()
            .map(|mut d| {
                // Backends report empty labels when permission is missing
                d.label = d.display_label();
                d
            })
            .collect();
        info!(count = self.devices.len(), "Enumerated camera devices");
    }

    /// Enumerated devices (id + label)
    pub fn devices(&self) -> &[CameraDevice] {
        &self.devices
    }

    /// Currently selected device id, if any
    pub fn active_device_id(&self) -> Option<&str> {
        self.active_device_id.as_deref()
    }

    /// Current user-visible error, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a live stream is currently attached
    pub fn has_stream(&self) -> bool {
        self.stream.is_some()
    }

    /// Select a device: tear down any existing stream, then acquire a new
    /// one at the preferred resolution.
    ///
    /// On failure the error state is set and no stream is left active; the
    /// user retries by selecting again.
    pub fn select_device(&mut self, device_id: &str, constraints: &StreamConstraints) {
        self.teardown_stream();

        let Some(device) = self
            .devices
            .iter()
            .find(|d| d.device_id == device_id)
            .cloned()
        else {
            warn!(device_id, "Selected device not in enumerated list");
            self.error = Some(CameraError::DeviceNotFound(device_id.to_string()).to_string());
            self.active_device_id = None;
            return;
        };

        info!(device = %device.label, device_id, "Opening camera stream");
        match self.backend.open_stream(&device, constraints) {
            Ok(stream) => {
                self.stream = Some(stream);
                self.active_device_id = Some(device.device_id);
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, device_id, "Stream acquisition failed");
                self.error = Some(e.to_string());
                self.active_device_id = Some(device.device_id);
            }
        }
    }

    /// Borrow the latest frame from the active stream.
    ///
    /// Read-only: the caller never mutates or closes the stream.
    pub fn current_frame(&self) -> Option<SourceFrame> {
        self.stream.as_ref().and_then(|s| s.current_frame())
    }

    /// Stop the active stream's tracks and drop it
    pub fn teardown_stream(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            info!("Stopping camera stream");
            stream.stop();
        }
    }
}

impl Drop for CameraSourceManager {
    fn drop(&mut self) {
        // Release the hardware device on teardown
        self.teardown_stream();
    }
}

#[cfg(test)]
mod tests {
    use super::super::synthetic::SyntheticBackend;
    use super::*;

    #[test]
    fn init_selects_first_device() {
        let backend = SyntheticBackend::new(2);
        let mut manager = CameraSourceManager::new(Box::new(backend));
        manager.init(&StreamConstraints::default());

        assert_eq!(manager.devices().len(), 2);
        assert_eq!(
            manager.active_device_id(),
            Some(manager.devices()[0].device_id.as_str())
        );
        assert!(manager.has_stream());
        assert!(manager.error().is_none());
    }

    #[test]
    fn no_devices_sets_error() {
        let backend = SyntheticBackend::new(0);
        let mut manager = CameraSourceManager::new(Box::new(backend));
        manager.init(&StreamConstraints::default());

        assert!(!manager.has_stream());
        assert!(manager.error().is_some());
    }

    #[test]
    fn permission_denied_sets_error() {
        let backend = SyntheticBackend::new(1).deny_permission();
        let mut manager = CameraSourceManager::new(Box::new(backend));
        manager.init(&StreamConstraints::default());

        assert!(!manager.has_stream());
        assert!(manager.error().is_some());
        assert!(manager.devices().is_empty());
    }

    #[test]
    fn acquisition_failure_leaves_no_stream() {
        let backend = SyntheticBackend::new(1).fail_streams();
        let mut manager = CameraSourceManager::new(Box::new(backend));
        manager.init(&StreamConstraints::default());

        assert!(!manager.has_stream());
        assert!(manager.error().is_some());
        assert!(manager.current_frame().is_none());
    }

    #[test]
    fn reselecting_replaces_stream_and_clears_error() {
        let backend = SyntheticBackend::new(2);
        let mut manager = CameraSourceManager::new(Box::new(backend));
        manager.init(&StreamConstraints::default());

        let second = manager.devices()[1].device_id.clone();
        manager.select_device(&second, &StreamConstraints::default());

        assert!(manager.has_stream());
        assert_eq!(manager.active_device_id(), Some(second.as_str()));
        assert!(manager.error().is_none());
    }

    #[test]
    fn unknown_device_selection_sets_error() {
        let backend = SyntheticBackend::new(1);
        let mut manager = CameraSourceManager::new(Box::new(backend));
        manager.init(&StreamConstraints::default());

        manager.select_device("nonexistent", &StreamConstraints::default());
        assert!(!manager.has_stream());
        assert!(manager.error().is_some());
    }
}
