// SPDX-License-Identifier: GPL-3.0-only

//! Photo strip composition
//!
//! Pure layout: (photos, session date, strip settings) → a printable
//! document. Header with the title, photos stacked in capture order, footer
//! with the formatted date/time and caption. Composition never touches the
//! session and renders an empty photo area gracefully.

use crate::config::StripSettings;
use crate::pipelines::photo::Photo;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Local};

/// A composed photo strip, ready for rendering or printing
#[derive(Debug, Clone)]
pub struct StripDocument {
    /// Header title (uppercase, from settings)
    pub title: String,
    /// Footer caption
    pub footer: String,
    /// Session date, e.g. "Friday, August 29, 2026"
    pub formatted_date: String,
    /// Session time, e.g. "02:05 PM"
    pub formatted_time: String,
    /// Photos in capture order
    pub photos: Vec<Photo>,
}

/// Compose a strip document from captured photos and settings
pub fn compose(
    photos: &[Photo],
    date: DateTime<Local>,
    settings: &StripSettings,
) -> StripDocument {
    StripDocument {
        title: settings.title().to_string(),
        footer: settings.footer().to_string(),
        formatted_date: date.format("%A, %B %-d, %Y").to_string(),
        formatted_time: date.format("%I:%M %p").to_string(),
        photos: photos.to_vec(),
    }
}

impl StripDocument {
    /// Render the strip as a standalone printable HTML page.
    ///
    /// Photos are embedded as base64 JPEG data URIs so the page has no
    /// external references.
    pub fn to_html(&self) -> String {
        let mut photo_markup = String::new();
        for photo in &self.photos {
            let encoded = BASE64.encode(&photo.data);
            photo_markup.push_str(&format!(
                "      <img class=\"shot\" alt=\"Captured moment\" \
                 src=\"data:image/jpeg;base64,{}\">\n",
                encoded
            ));
        }

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body {{ background: #fff; color: #18181b; font-family: Georgia, serif; }}
  .strip {{ max-width: 300px; margin: 0 auto; padding: 2rem 2rem 4rem; min-height: 800px;
            display: flex; flex-direction: column; }}
  h2 {{ text-align: center; font-weight: normal; letter-spacing: 0.2em;
        text-transform: uppercase; border-bottom: 1px solid #000; padding-bottom: 1rem; }}
  .photos {{ flex-grow: 1; display: flex; flex-direction: column; gap: 1rem; }}
  .shot {{ width: 100%; display: block; }}
  .meta {{ text-align: center; border-top: 1px solid #e4e4e7; margin-top: 1.5rem;
           padding-top: 2rem; font-family: sans-serif; font-size: 10px;
           letter-spacing: 0.2em; text-transform: uppercase; color: #71717a; }}
  .caption {{ text-align: center; font-style: italic; font-size: 1.1rem;
              letter-spacing: 0.05em; color: #27272a; margin-top: 0.5rem; }}
  @media print {{ body {{ margin: 0; }} }}
</style>
</head>
<body>
  <div class="strip">
    <h2>{title}</h2>
    <div class="photos">
{photos}    </div>
    <div class="meta">{date} &bull; {time}</div>
    <p class="caption">{footer}</p>
  </div>
</body>
</html>
"#,
            title = escape_html(&self.title),
            photos = photo_markup,
            date = escape_html(&self.formatted_date),
            time = escape_html(&self.formatted_time),
            footer = escape_html(&self.footer),
        )
    }
}

/// Minimal HTML escaping for user-provided strip text
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_text() {
        assert_eq!(
            escape_html(r#"<b>&"title"</b>"#),
            "&lt;b&gt;&amp;&quot;title&quot;&lt;/b&gt;"
        );
    }
}
