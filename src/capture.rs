//! Captured image handling.
//!
//! Images arrive as `data:` URLs from either a live camera frame or a file
//! upload. The base64 payload is treated as opaque: it is validated for
//! presence and encoding, then forwarded to the classifier verbatim. Nothing
//! in this crate decodes pixels.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Where an image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureSource {
    /// A frame captured from the live camera preview.
    #[default]
    Camera,
    /// A file the user uploaded instead.
    Upload,
}

/// Image encodings accepted for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageEncoding {
    Jpeg,
    Png,
    Webp,
}

impl ImageEncoding {
    /// Resolves a media subtype (the part after `image/`) to an encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedEncoding`] for anything outside the
    /// accepted set.
    pub fn from_media_subtype(subtype: &str) -> Result<Self> {
        match subtype.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "webp" => Ok(Self::Webp),
            other => Err(Error::UnsupportedEncoding {
                encoding: other.to_string(),
            }),
        }
    }

    /// Resolves a file extension to an encoding, for the upload path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedEncoding`] for anything outside the
    /// accepted set.
    pub fn from_extension(ext: &str) -> Result<Self> {
        Self::from_media_subtype(ext.trim_start_matches('.'))
    }

    /// The canonical media subtype used when rebuilding a data URL.
    #[must_use]
    pub const fn media_subtype(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Webp => "webp",
        }
    }
}

/// A validated captured image, ready for classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedImage {
    /// Base64 image payload, kept opaque.
    payload: String,
    /// Encoding declared by the data URL.
    pub encoding: ImageEncoding,
    /// Camera frame or upload.
    pub source: CaptureSource,
}

impl CapturedImage {
    /// Parses and validates a `data:image/...;base64,...` URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCapture`] when there is no payload at all and
    /// [`Error::UnsupportedEncoding`] when the subtype is not JPEG, PNG, or
    /// WebP. A URL that does not match the data-URL grammar at all is also
    /// reported as an empty capture, since no image data could be extracted.
    pub fn from_data_url(url: &str, source: CaptureSource) -> Result<Self> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyCapture);
        }

        let data_url = Regex::new(r"^data:image/(\w+);base64,(.+)$").unwrap();
        let captures = data_url.captures(trimmed).ok_or(Error::EmptyCapture)?;
        let encoding = ImageEncoding::from_media_subtype(&captures[1])?;
        let payload = captures[2].to_string();

        Ok(Self {
            payload,
            encoding,
            source,
        })
    }

    /// Wraps an already-encoded base64 payload, for uploaded files.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCapture`] when the payload is blank.
    pub fn from_payload(
        payload: impl Into<String>,
        encoding: ImageEncoding,
        source: CaptureSource,
    ) -> Result<Self> {
        let payload = payload.into();
        if payload.trim().is_empty() {
            return Err(Error::EmptyCapture);
        }

        Ok(Self {
            payload,
            encoding,
            source,
        })
    }

    /// Rebuilds the data URL this image was parsed from.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!(
            "data:image/{};base64,{}",
            self.encoding.media_subtype(),
            self.payload
        )
    }

    /// The opaque base64 payload, as received.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }
}
