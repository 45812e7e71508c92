use crate::error::RecipeError;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Image formats the upload form accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    WebP,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::WebP => "image/webp",
        }
    }

    /// Detect the format from the leading magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageFormat::Jpeg)
        } else if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
            Some(ImageFormat::Png)
        } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(ImageFormat::WebP)
        } else {
            None
        }
    }

    fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            "image/webp" => Some(ImageFormat::WebP),
            _ => None,
        }
    }
}

/// Decoded image bytes plus the media type we will report to the vision service.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    bytes: Vec<u8>,
    format: ImageFormat,
}

impl ImagePayload {
    /// Wrap raw bytes, sniffing the format (JPEG when unrecognized).
    pub fn new(bytes: Vec<u8>) -> Self {
        let format = ImageFormat::sniff(&bytes).unwrap_or(ImageFormat::Jpeg);
        ImagePayload { bytes, format }
    }

    /// Decode an image sent as text: either a `data:<mime>;base64,...` URL
    /// or bare base64.
    ///
    /// # Errors
    /// Returns `InvalidInput` when the text is blank or not valid base64.
    pub fn from_encoded(encoded: &str) -> Result<Self, RecipeError> {
        let encoded = encoded.trim();
        if encoded.is_empty() {
            return Err(RecipeError::InvalidInput("No image provided".to_string()));
        }

        let (declared, data) = match encoded.strip_prefix("data:") {
            Some(rest) => {
                let (header, data) = rest.split_once(',').ok_or_else(|| {
                    RecipeError::InvalidInput("Malformed image data URL".to_string())
                })?;
                let mime = header.split(';').next().unwrap_or_default();
                (ImageFormat::from_mime(mime), data)
            }
            None => (None, encoded),
        };

        // Browsers and copy/paste occasionally wrap long base64 strings.
        let compact: String = data.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| RecipeError::InvalidInput(format!("Image is not valid base64: {}", e)))?;

        if bytes.is_empty() {
            return Err(RecipeError::InvalidInput("No image provided".to_string()));
        }

        let format = ImageFormat::sniff(&bytes)
            .or(declared)
            .unwrap_or(ImageFormat::Jpeg);

        Ok(ImagePayload { bytes, format })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), self.to_base64())
    }
}
