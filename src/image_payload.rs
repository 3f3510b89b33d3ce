use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// An image extracted from a client-supplied data URL, ready to be sent
/// to the model as inline data.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineImage {
    pub mime_type: String,
    pub base64_data: String,
}

/// Splits a `"<meta>,<base64>"` data URL, checks the payload really is a
/// decodable image, and keeps the base64 form for the provider call.
pub fn decode_data_url(payload: &str) -> Result<InlineImage> {
    let (meta, data) = payload
        .split_once(',')
        .context("image data URL is missing the ',' separator")?;

    let bytes = STANDARD
        .decode(data)
        .context("image payload is not valid base64")?;
    image::load_from_memory(&bytes).context("decoded bytes are not a supported image format")?;

    Ok(InlineImage {
        mime_type: mime_type_from_meta(meta),
        base64_data: data.to_string(),
    })
}

// "data:image/png;base64" -> "image/png"
fn mime_type_from_meta(meta: &str) -> String {
    meta.strip_prefix("data:")
        .map(|rest| rest.split(';').next().unwrap_or(rest))
        .filter(|mime| mime.starts_with("image/"))
        .unwrap_or(DEFAULT_MIME_TYPE)
        .to_string()
}

/// 1x1 PNG used by tests across the crate.
#[cfg(test)]
pub const TINY_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_png_data_url() {
        let payload = format!("data:image/png;base64,{TINY_PNG_BASE64}");
        let img = decode_data_url(&payload).unwrap();
        assert_eq!(img.mime_type, "image/png");
        assert_eq!(img.base64_data, TINY_PNG_BASE64);
    }

    #[test]
    fn rejects_payload_without_separator() {
        let err = decode_data_url(TINY_PNG_BASE64).unwrap_err();
        assert!(err.to_string().contains("separator"));
    }

    #[test]
    fn rejects_malformed_base64() {
        let err = decode_data_url("data:image/png;base64,not-base64!!").unwrap_err();
        assert!(err.to_string().contains("base64"));
    }

    #[test]
    fn rejects_non_image_bytes() {
        let payload = format!("data:image/png;base64,{}", STANDARD.encode(b"hello world"));
        assert!(decode_data_url(&payload).is_err());
    }

    #[test]
    fn unknown_meta_falls_back_to_jpeg() {
        let payload = format!("garbage-meta,{TINY_PNG_BASE64}");
        let img = decode_data_url(&payload).unwrap();
        assert_eq!(img.mime_type, "image/jpeg");
    }
}
