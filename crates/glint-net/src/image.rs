//! Image format sniffing
//!
//! A load only counts as complete when the body is recognisably an image,
//! the same way an `<img>` fires `error` instead of `load` for an HTML 404 page.

/// Image formats an icon can arrive in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
    Ico,
    Bmp,
    Svg,
    Unknown,
}

impl ImageFormat {
    /// Detect format from magic bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Self::Png;
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Self::Jpeg;
        }

        // GIF: GIF87a or GIF89a
        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Self::Gif;
        }

        // WebP: RIFF....WEBP
        if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            return Self::WebP;
        }

        // ICO: 00 00 01 00
        if data.starts_with(&[0x00, 0x00, 0x01, 0x00]) {
            return Self::Ico;
        }

        // BMP: "BM" followed by a file size
        if data.len() >= 14 && data.starts_with(b"BM") {
            return Self::Bmp;
        }

        if Self::looks_like_svg(data) {
            return Self::Svg;
        }

        Self::Unknown
    }

    /// SVG has no magic number; look for an `<svg` root near the start
    fn looks_like_svg(data: &[u8]) -> bool {
        let head = &data[..data.len().min(1024)];
        let text = String::from_utf8_lossy(head);
        let text = text.trim_start_matches('\u{feff}').trim_start();
        if !(text.starts_with("<svg") || text.starts_with("<?xml") || text.starts_with("<!--")) {
            return false;
        }
        text.contains("<svg")
    }

    /// MIME type for the format
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::WebP => "image/webp",
            Self::Ico => "image/x-icon",
            Self::Bmp => "image/bmp",
            Self::Svg => "image/svg+xml",
            Self::Unknown => "application/octet-stream",
        }
    }
}
