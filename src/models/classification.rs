//! Tone classification result and upstream response adapters.
//!
//! The hosted classifier has shipped two response shapes over time: a
//! positional array `[{label, confidences}, derivedHex, matchedHex]` and a
//! named object `{monk_skin_tone, monk_hex, derived_hex_code, dominant_rgb}`.
//! Everything downstream works with the single canonical
//! [`ToneClassification`]; the two shapes are handled by one adapter here and
//! nowhere else.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Canonical classification result, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneClassification {
    /// Opaque tone identifier from the classifier (e.g. "Monk 4"),
    /// used as the lookup key against the product catalog.
    pub label: String,
    /// Skin color derived from the image, `#RRGGBB`.
    pub derived_hex: String,
    /// Closest standard-scale color reported by the classifier, `#RRGGBB`.
    pub matched_hex: String,
}

/// First element of the positional response shape.
#[derive(Debug, Deserialize)]
struct LabelEntry {
    label: String,
    // Present upstream but unused here.
    #[serde(default)]
    #[allow(dead_code)]
    confidences: Option<serde_json::Value>,
}

/// The two response shapes observed from the classification service.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UpstreamClassification {
    Named {
        monk_skin_tone: String,
        monk_hex: String,
        derived_hex_code: String,
        #[serde(default)]
        #[allow(dead_code)]
        dominant_rgb: Vec<f64>,
    },
    Positional(LabelEntry, String, String),
}

impl ToneClassification {
    /// Parses a classifier response in either observed shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClassificationUnavailable`] when the payload matches
    /// neither shape; an inconsistent upstream response is a service failure,
    /// not a reason to guess.
    pub fn from_upstream(value: &serde_json::Value) -> Result<Self> {
        let upstream: UpstreamClassification = serde_json::from_value(value.clone())
            .map_err(|e| Error::classification(format!("unrecognized response shape: {e}")))?;

        Ok(match upstream {
            UpstreamClassification::Named {
                monk_skin_tone,
                monk_hex,
                derived_hex_code,
                ..
            } => Self {
                label: monk_skin_tone,
                derived_hex: derived_hex_code,
                matched_hex: monk_hex,
            },
            UpstreamClassification::Positional(entry, derived_hex, matched_hex) => Self {
                label: entry.label,
                derived_hex,
                matched_hex,
            },
        })
    }
}
