//! Image type detection from file contents.

const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
const ICO: &[u8] = &[0x00, 0x00, 0x01, 0x00];

/// Returns the image MIME type for `bytes`, or `None` if they are not an image.
///
/// Binary formats are recognised by their magic numbers. SVG has none, so it
/// is accepted only for `.svg` files whose text opens like an SVG document.
pub fn sniff_image_mime(bytes: &[u8], file_name: &str) -> Option<&'static str> {
    if bytes.starts_with(PNG) {
        return Some("image/png");
    }
    if bytes.starts_with(JPEG) {
        return Some("image/jpeg");
    }
    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return Some("image/gif");
    }
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    if bytes.len() >= 12
        && &bytes[4..8] == b"ftyp"
        && (&bytes[8..12] == b"avif" || &bytes[8..12] == b"avis")
    {
        return Some("image/avif");
    }
    if bytes.starts_with(b"BM") && bytes.len() >= 14 {
        return Some("image/bmp");
    }
    if bytes.starts_with(ICO) {
        return Some("image/x-icon");
    }
    if looks_like_svg(bytes, file_name) {
        return Some("image/svg+xml");
    }
    None
}

fn looks_like_svg(bytes: &[u8], file_name: &str) -> bool {
    if !file_name.to_ascii_lowercase().ends_with(".svg") {
        return false;
    }
    let Ok(text) = std::str::from_utf8(bytes) else {
        return false;
    };
    let head = text.trim_start_matches('\u{feff}').trim_start();
    head.starts_with("<svg") || head.starts_with("<?xml")
}
