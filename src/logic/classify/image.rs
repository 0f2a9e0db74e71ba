//! Image Upload Boundary
//!
//! Validates uploads by byte signature before anything touches them. The
//! simulator never decodes pixels; a real model implementation receives the
//! raw bytes through the same type.

use crate::logic::error::{CoreError, CoreResult};

/// Supported raster formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Webp => "webp",
        }
    }
}

/// A validated upload: filename plus raw bytes of a known format
#[derive(Debug, Clone)]
pub struct ImageUpload {
    filename: String,
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// Validate and wrap an upload. Unknown or truncated signatures are
    /// rejected with `InvalidImage`.
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> CoreResult<Self> {
        let format = sniff_format(&bytes)?;
        Ok(Self {
            filename: filename.into(),
            format,
            bytes,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Identify the format from magic bytes
fn sniff_format(bytes: &[u8]) -> CoreResult<ImageFormat> {
    if bytes.is_empty() {
        return Err(CoreError::invalid_image("empty upload"));
    }

    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]) {
        return Ok(ImageFormat::Png);
    }
    if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
        return Ok(ImageFormat::Jpeg);
    }
    // RIFF container with a WEBP fourcc at offset 8
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Ok(ImageFormat::Webp);
    }

    Err(CoreError::invalid_image(
        "unsupported format (expected PNG, JPEG or WEBP)",
    ))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes() -> Vec<u8> {
        let mut b = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
        b.extend_from_slice(&[0; 16]);
        b
    }

    #[test]
    fn accepts_png_jpeg_webp() {
        assert_eq!(
            ImageUpload::new("a.png", png_bytes()).unwrap().format(),
            ImageFormat::Png
        );

        let jpeg = vec![0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10];
        assert_eq!(
            ImageUpload::new("b.jpg", jpeg).unwrap().format(),
            ImageFormat::Jpeg
        );

        let mut webp = b"RIFF".to_vec();
        webp.extend_from_slice(&[0x24, 0x00, 0x00, 0x00]);
        webp.extend_from_slice(b"WEBP");
        webp.extend_from_slice(&[0; 8]);
        assert_eq!(
            ImageUpload::new("c.webp", webp).unwrap().format(),
            ImageFormat::Webp
        );
    }

    #[test]
    fn rejects_empty_and_unknown_payloads() {
        assert!(matches!(
            ImageUpload::new("empty.png", vec![]).unwrap_err(),
            CoreError::InvalidImage { .. }
        ));
        assert!(matches!(
            ImageUpload::new("notes.txt", b"hello world".to_vec()).unwrap_err(),
            CoreError::InvalidImage { .. }
        ));
    }

    #[test]
    fn rejects_truncated_riff_header() {
        // RIFF prefix but no WEBP fourcc
        assert!(ImageUpload::new("d.webp", b"RIFF\x00\x00".to_vec()).is_err());
    }

    #[test]
    fn keeps_filename_and_bytes() {
        let upload = ImageUpload::new("garbage.png", png_bytes()).unwrap();
        assert_eq!(upload.filename(), "garbage.png");
        assert_eq!(upload.bytes().len(), 24);
    }
}
