// Inspection of the encoded images clients send. Purely informational: an
// image that cannot be inspected is still passed through as-is.

use base64::{engine::general_purpose, Engine as _};
use image::ImageFormat;

/// Enough base64 to cover every magic number `image::guess_format` knows.
const SNIFF_CHARS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub mime_type: String,
    pub byte_len: usize,
    pub format: Option<ImageFormat>,
}

pub struct EncodedImage;

impl EncodedImage {
    /// Reads a `data:<mime>;base64,<payload>` URI. Only the head of the
    /// payload is decoded; `byte_len` comes from the encoded length. Returns
    /// `None` for anything else, including payloads whose head is not base64.
    pub fn inspect(encoded: &str) -> Option<ImageInfo> {
        let rest = encoded.strip_prefix("data:")?;
        let (header, data) = rest.split_once(',')?;
        let mime_type = header.strip_suffix(";base64")?;

        let data = data.trim().as_bytes();
        let head = &data[..data.len().min(SNIFF_CHARS)];
        let head = general_purpose::STANDARD.decode(head).ok()?;
        let format = image::guess_format(&head).ok();

        Some(ImageInfo {
            mime_type: mime_type.to_string(),
            byte_len: decoded_len(data),
            format,
        })
    }
}

fn decoded_len(encoded: &[u8]) -> usize {
    let padding = encoded.iter().rev().take_while(|&&b| b == b'=').count();
    (encoded.len() * 3 / 4).saturating_sub(padding)
}
