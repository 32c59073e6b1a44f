// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the photobooth engine

use std::fmt;

/// Result type alias using BoothError
pub type BoothResult<T> = Result<T, BoothError>;

/// Main error type
#[derive(Debug, Clone)]
pub enum BoothError {
    /// Camera-related errors
    Camera(CameraError),
    /// Photo capture errors
    Photo(PhotoError),
    /// Configuration errors
    Config(String),
    /// Generic error with message
    Other(String),
}

/// Camera-specific errors
///
/// All of these are non-fatal: the manager records them as a user-visible
/// status string and the user retries by reselecting a device.
#[derive(Debug, Clone)]
pub enum CameraError {
    /// Camera permission was not granted
    PermissionDenied,
    /// No camera devices found
    NoCameraFound,
    /// Requested device is not in the enumerated list
    DeviceNotFound(String),
    /// Stream acquisition failed after teardown of the previous stream
    StreamAcquisitionFailed(String),
    /// Camera disconnected during operation
    Disconnected,
}

/// Photo capture errors
#[derive(Debug, Clone)]
pub enum PhotoError {
    /// No frame available for capture
    NoFrameAvailable,
    /// Encoding failed
    EncodingFailed(String),
}

impl fmt::Display for BoothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoothError::Camera(e) => write!(f, "Camera error: {}", e),
            BoothError::Photo(e) => write!(f, "Photo error: {}", e),
            BoothError::Config(msg) => write!(f, "Configuration error: {}", msg),
            BoothError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::PermissionDenied => write!(f, "Permission denied or no camera found"),
            CameraError::NoCameraFound => write!(f, "No camera devices found"),
            CameraError::DeviceNotFound(id) => write!(f, "Device not found: {}", id),
            CameraError::StreamAcquisitionFailed(msg) => {
                write!(f, "Could not start video stream: {}", msg)
            }
            CameraError::Disconnected => write!(f, "Camera disconnected"),
        }
    }
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::NoFrameAvailable => write!(f, "No frame available for capture"),
            PhotoError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for BoothError {}
impl std::error::Error for CameraError {}
impl std::error::Error for PhotoError {}

// Conversions from sub-errors to BoothError
impl From<CameraError> for BoothError {
    fn from(err: CameraError) -> Self {
        BoothError::Camera(err)
    }
}

impl From<PhotoError> for BoothError {
    fn from(err: PhotoError) -> Self {
        BoothError::Photo(err)
    }
}

impl From<String> for BoothError {
    fn from(msg: String) -> Self {
        BoothError::Other(msg)
    }
}

impl From<&str> for BoothError {
    fn from(msg: &str) -> Self {
        BoothError::Other(msg.to_string())
    }
}

impl From<std::io::Error> for BoothError {
    fn from(err: std::io::Error) -> Self {
        BoothError::Other(err.to_string())
    }
}
