//! Error types shared across the crate.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All failure modes surfaced by the library.
///
/// Each variant carries enough context for handlers to choose an HTTP status
/// and for [`Error::user_message`] to phrase something a person can act on.
#[derive(Debug, Error)]
pub enum Error {
    /// Input was not a 6-hex-digit RGB color.
    #[error("invalid color format: '{input}' is not a 6-hex-digit RGB color")]
    InvalidColorFormat {
        /// The rejected input, verbatim.
        input: String,
    },

    /// The classification service failed or returned an unusable response.
    #[error("classification unavailable: {reason}")]
    ClassificationUnavailable {
        /// What went wrong, for logs and error payloads.
        reason: String,
    },

    /// The product or outfit catalog could not be loaded or queried.
    #[error("recommendations unavailable: {reason}")]
    RecommendationUnavailable {
        /// What went wrong, for logs and error payloads.
        reason: String,
        /// Underlying cause, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The user denied camera permission.
    #[error("camera access denied")]
    CameraAccessDenied,

    /// No camera device is available.
    #[error("no camera device found")]
    CameraNotFound,

    /// The camera is held by another application.
    #[error("camera is in use by another application")]
    CameraInUse,

    /// A capture produced no image data.
    #[error("capture produced no image data")]
    EmptyCapture,

    /// The image encoding is not one we accept.
    #[error("unsupported image encoding '{encoding}'")]
    UnsupportedEncoding {
        /// The rejected encoding name.
        encoding: String,
    },

    /// No session exists under the given id.
    #[error("session '{id}' not found")]
    SessionNotFound {
        /// The id that failed to resolve.
        id: String,
    },
}

impl Error {
    /// Builds a [`Error::ClassificationUnavailable`] from any reason.
    pub fn classification(reason: impl Into<String>) -> Self {
        Self::ClassificationUnavailable {
            reason: reason.into(),
        }
    }

    /// Builds a [`Error::RecommendationUnavailable`] from a reason and an
    /// optional underlying cause.
    pub fn recommendation(
        reason: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::RecommendationUnavailable {
            reason: reason.into(),
            source,
        }
    }

    /// Whether retrying the same operation could plausibly succeed.
    ///
    /// Transient service failures are retryable; malformed input and missing
    /// sessions are not.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ClassificationUnavailable { .. }
                | Self::RecommendationUnavailable { .. }
                | Self::CameraInUse
        )
    }

    /// A message suitable for showing directly to an end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidColorFormat { input } => {
                format!("'{input}' is not a valid color. Use the #RRGGBB format.")
            }
            Self::ClassificationUnavailable { .. } => {
                "Skin tone analysis is temporarily unavailable. Please try again.".to_string()
            }
            Self::RecommendationUnavailable { .. } => {
                "Product recommendations are temporarily unavailable. Please try again.".to_string()
            }
            Self::CameraAccessDenied => {
                "Camera access was denied. Allow camera access or upload a photo instead."
                    .to_string()
            }
            Self::CameraNotFound => {
                "No camera was found. Upload a photo instead.".to_string()
            }
            Self::CameraInUse => {
                "The camera is in use by another application. Close it and try again, or upload a photo."
                    .to_string()
            }
            Self::EmptyCapture => "The captured image was empty. Please try again.".to_string(),
            Self::UnsupportedEncoding { encoding } => {
                format!("Images in '{encoding}' format are not supported. Use JPEG, PNG, or WebP.")
            }
            Self::SessionNotFound { .. } => {
                "This session has expired. Start over by capturing a new photo.".to_string()
            }
        }
    }
}
