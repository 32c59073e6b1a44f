// SPDX-License-Identifier: GPL-3.0-only

//! Platform print hand-off
//!
//! The strip is written to a temporary HTML file and handed to the platform
//! opener; the user's browser presents the print dialog. No return value is
//! consumed beyond error propagation.

use crate::errors::{BoothError, BoothResult};
use crate::strip::StripDocument;
use chrono::Local;
use tracing::info;

/// Open the rendered strip in the default browser for printing
pub fn print_strip(strip: &StripDocument) -> BoothResult<()> {
    let filename = format!("strip_{}.html", Local::now().format("%Y%m%d_%H%M%S"));
    let path = std::env::temp_dir().join(filename);

    std::fs::write(&path, strip.to_html())?;
    info!(path = %path.display(), "Opening strip for printing");

    open::that(&path).map_err(|e| BoothError::Other(format!("Failed to open print view: {}", e)))
}
