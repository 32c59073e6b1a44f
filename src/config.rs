// SPDX-License-Identifier: GPL-3.0-only

//! User configuration handling
//!
//! Strip settings live independently of any session: they survive resets
//! and are persisted as JSON under the user config directory.

use crate::constants::{
    DEFAULT_PHOTOS_PER_SESSION, DEFAULT_STRIP_FOOTER, DEFAULT_STRIP_TITLE, PHOTO_COUNT_CHOICES,
};
use crate::errors::{BoothError, BoothResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Photo strip text customization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripSettings {
    title: String,
    footer: String,
}

impl Default for StripSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_STRIP_TITLE.to_string(),
            footer: DEFAULT_STRIP_FOOTER.to_string(),
        }
    }
}

impl StripSettings {
    /// Strip header title (always uppercase)
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Strip footer caption
    pub fn footer(&self) -> &str {
        &self.footer
    }

    /// Set the header title, case-normalized to uppercase
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_uppercase();
    }

    /// Set the footer caption
    pub fn set_footer(&mut self, footer: &str) {
        self.footer = footer.to_string();
    }

    fn normalize(&mut self) {
        self.title = self.title.to_uppercase();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Strip text customization
    pub strip: StripSettings,
    /// Number of photos per session (restricted to the supported choices)
    pub photos_per_session: u32,
    /// Mirror the camera preview and captures horizontally (selfie mode)
    pub mirror_preview: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strip: StripSettings::default(),
            photos_per_session: DEFAULT_PHOTOS_PER_SESSION,
            mirror_preview: true, // Default to mirrored (selfie mode)
        }
    }
}

impl Config {
    /// Path of the config file under the user config directory
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("photobooth").join("config.json"))
    }

    /// Load the config, falling back to defaults when the file is missing
    /// or unreadable. Loaded values are sanitized.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str::<Config>(&contents) {
            Ok(mut config) => {
                config.sanitize();
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Invalid config file, using defaults");
                Self::default()
            }
        }
    }

    /// Persist the config as pretty-printed JSON
    pub fn save(&self) -> BoothResult<()> {
        let path = Self::config_path()
            .ok_or_else(|| BoothError::Config("No config directory available".to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BoothError::Config(e.to_string()))?;
        std::fs::write(&path, contents)?;
        Ok(())
    }

    /// Set the per-session photo count, snapping invalid values to the
    /// default choice.
    pub fn set_photos_per_session(&mut self, count: u32) {
        if PHOTO_COUNT_CHOICES.contains(&count) {
            self.photos_per_session = count;
        } else {
            warn!(count, "Unsupported photo count, keeping default");
            self.photos_per_session = DEFAULT_PHOTOS_PER_SESSION;
        }
    }

    fn sanitize(&mut self) {
        self.strip.normalize();
        if !PHOTO_COUNT_CHOICES.contains(&self.photos_per_session) {
            self.photos_per_session = DEFAULT_PHOTOS_PER_SESSION;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_uppercased_on_set() {
        let mut settings = StripSettings::default();
        settings.set_title("Foto Boof");
        assert_eq!(settings.title(), "FOTO BOOF");
    }

    #[test]
    fn footer_is_kept_verbatim() {
        let mut settings = StripSettings::default();
        settings.set_footer("#FotoBoofMemories");
        assert_eq!(settings.footer(), "#FotoBoofMemories");
    }

    #[test]
    fn loaded_lowercase_title_is_normalized() {
        let json = r#"{
            "strip": { "title": "lower case", "footer": "f" },
            "photos_per_session": 7,
            "mirror_preview": false
        }"#;
        let mut config: Config = serde_json::from_str(json).unwrap();
        config.sanitize();
        assert_eq!(config.strip.title(), "LOWER CASE");
        assert_eq!(config.photos_per_session, DEFAULT_PHOTOS_PER_SESSION);
    }
}
