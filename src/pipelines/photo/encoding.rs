// SPDX-License-Identifier: GPL-3.0-only

//! JPEG encoding for captured photos

use crate::errors::PhotoError;
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use std::io::Cursor;
use tracing::debug;

/// Encode an RGB image as JPEG at the given quality (0-100)
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, PhotoError> {
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut buf), quality);
    image
        .write_with_encoder(encoder)
        .map_err(|e| PhotoError::EncodingFailed(e.to_string()))?;

    debug!(
        width = image.width(),
        height = image.height(),
        size = buf.len(),
        "JPEG encoding complete"
    );
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_valid_jpeg() {
        let image = RgbImage::from_pixel(32, 32, image::Rgb([200, 100, 50]));
        let data = encode_jpeg(&image, 95).unwrap();

        // JPEG SOI marker
        assert_eq!(&data[..2], &[0xFF, 0xD8]);

        let decoded = image::load_from_memory(&data).unwrap();
        assert_eq!(decoded.width(), 32);
        assert_eq!(decoded.height(), 32);
    }
}
