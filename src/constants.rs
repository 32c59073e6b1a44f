// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use std::time::Duration;

/// Number of seconds counted down before each shot
pub const COUNTDOWN_SECONDS: u32 = 3;

/// Interval between countdown ticks
pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// How long the white flash overlay stays visible after a capture
pub const FLASH_DURATION: Duration = Duration::from_millis(150);

/// How long the captured frame is shown frozen before the next countdown
pub const FREEZE_DURATION: Duration = Duration::from_millis(2000);

/// JPEG quality for captured photos (0-100)
pub const JPEG_QUALITY: u8 = 95;

/// Photo counts the booth offers per session
pub const PHOTO_COUNT_CHOICES: [u32; 2] = [3, 4];

/// Upper bound on photos per session
pub const MAX_PHOTOS_PER_SESSION: u32 = 4;

/// Default number of photos per session
pub const DEFAULT_PHOTOS_PER_SESSION: u32 = 3;

/// Preferred capture width requested from the camera backend
pub const PREFERRED_WIDTH: u32 = 1920;

/// Preferred capture height requested from the camera backend
pub const PREFERRED_HEIGHT: u32 = 1080;

/// Default strip header title
pub const DEFAULT_STRIP_TITLE: &str = "PHOTO BOOTH";

/// Default strip footer caption
pub const DEFAULT_STRIP_FOOTER: &str = "#SnapPrintMemories";
