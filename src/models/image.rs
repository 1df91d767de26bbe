use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{EmojiError, Result};

/// Image bytes carried inline in a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl InlineImage {
    /// Decodes a base64 `data:` URL. Returns `Ok(None)` for ordinary remote URLs.
    pub fn from_data_url(url: &str) -> Result<Option<Self>> {
        let Some(rest) = url.strip_prefix("data:") else {
            return Ok(None);
        };

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| EmojiError::ImageDecode("data URL has no payload".into()))?;

        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| EmojiError::ImageDecode("only base64 data URLs are supported".into()))?;

        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| EmojiError::ImageDecode(e.to_string()))?;

        Ok(Some(Self {
            mime_type: if mime_type.is_empty() {
                "application/octet-stream".to_string()
            } else {
                mime_type.to_string()
            },
            bytes,
        }))
    }

    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/jpeg" | "image/jpg" => "jpg",
            "image/gif" => "gif",
            "image/webp" => "webp",
            "image/svg+xml" => "svg",
            _ => "bin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_url_is_not_inline() {
        assert_eq!(
            InlineImage::from_data_url("https://cdn.example.com/a.png").unwrap(),
            None
        );
    }

    #[test]
    fn test_decodes_png_data_url() {
        let image = InlineImage::from_data_url("data:image/png;base64,iVBORw0K")
            .unwrap()
            .unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.extension(), "png");
        assert_eq!(&image.bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_rejects_non_base64_data_url() {
        assert!(InlineImage::from_data_url("data:text/plain,hello").is_err());
    }
}
