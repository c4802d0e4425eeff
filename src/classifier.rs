//! Skin tone classifier port.
//!
//! Classification runs on a hosted model, so the library only defines the
//! seam: anything that can turn a [`CapturedImage`] into a
//! [`ToneClassification`] plugs in behind [`ToneClassifier`]. The web server
//! takes the classifier as an injected `Arc<dyn ToneClassifier>`, which is
//! also how tests substitute deterministic fakes.

use std::future::Future;
use std::pin::Pin;

use crate::capture::CapturedImage;
use crate::error::{Error, Result};
use crate::models::ToneClassification;

/// Future type returned by [`ToneClassifier::classify`].
pub type ClassifyFuture<'a> = Pin<Box<dyn Future<Output = Result<ToneClassification>> + Send + 'a>>;

/// Turns a captured image into a tone classification.
///
/// Implementations receive the opaque base64 payload and are responsible for
/// whatever transport and response parsing their backend needs;
/// [`ToneClassification::from_upstream`] handles the known response shapes.
pub trait ToneClassifier: Send + Sync {
    /// Classifies the image, resolving to the canonical result.
    ///
    /// # Errors
    ///
    /// Resolves to [`Error::ClassificationUnavailable`] when the backing
    /// service fails or returns an unusable response.
    fn classify<'a>(&'a self, image: &'a CapturedImage) -> ClassifyFuture<'a>;
}

/// Placeholder used when no classifier backend is configured.
///
/// Every call fails with a retryable [`Error::ClassificationUnavailable`];
/// the rest of the API (matching, recommendations, catalogs) keeps working.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredClassifier;

impl ToneClassifier for UnconfiguredClassifier {
    fn classify<'a>(&'a self, _image: &'a CapturedImage) -> ClassifyFuture<'a> {
        Box::pin(async {
            Err(Error::classification(
                "no classifier endpoint configured",
            ))
        })
    }
}
