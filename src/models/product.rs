//! Product records and normalization of upstream field-name variants.
//!
//! Catalog exports have drifted over prototype iterations: the same product
//! attribute appears under several names depending on which export produced
//! the record (`product` vs `product_name` vs `Product Name`, `imgSrc` vs
//! `image_url` vs `image`, and so on). Normalization happens once, on ingest;
//! the rest of the crate only ever sees the canonical shapes below.

use serde::{Deserialize, Serialize};

/// Synonyms for the product display name, in priority order.
const NAME_KEYS: &[&str] = &["name", "product_name", "product", "Product Name", "Product_Name"];
/// Synonyms for the brand.
const BRAND_KEYS: &[&str] = &["brand", "Brand"];
/// Synonyms for the display price.
const PRICE_KEYS: &[&str] = &["price", "Price"];
/// Synonyms for the product image reference.
const IMAGE_KEYS: &[&str] = &["image_url", "imgSrc", "image", "Image URL", "Image_URL"];
/// Synonyms for the product type/category.
const TYPE_KEYS: &[&str] = &["product_type", "Product Type"];

/// Fallback brand when a record carries none.
const DEFAULT_BRAND: &str = "Unknown";
/// Fallback display price when a record carries none.
const DEFAULT_PRICE: &str = "$29.99";
/// Fallback rating when a record carries none.
const DEFAULT_RATING: f32 = 4.5;

/// A makeup product as served by the recommendations API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Stable id within one catalog load.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Brand name, `"Unknown"` when absent upstream.
    pub brand: String,
    /// Display price string (kept verbatim, e.g. "$24.99").
    pub price: String,
    /// Star rating.
    pub rating: f32,
    /// Product image reference.
    pub image_url: String,
    /// Monk skin tone tag this product is matched to, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mst: Option<String>,
}

/// An outfit item as served by the random-outfits API.
///
/// Serialized field names mirror the upstream contract, spaces included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitRecord {
    /// Display name.
    #[serde(rename = "Product Name")]
    pub name: String,
    /// Display price string.
    #[serde(rename = "Price")]
    pub price: String,
    /// Product image reference.
    #[serde(rename = "Image URL")]
    pub image_url: String,
    /// Outfit category (dress, top, ...).
    #[serde(rename = "Product Type")]
    pub product_type: String,
}

/// Returns the first non-empty string value among the given keys.
///
/// Records frequently carry several synonyms at once (exports copied fields
/// forward under new names), so serde aliases would reject them as duplicate
/// fields; a priority scan is the shape the data actually requires.
fn pick_str(record: &serde_json::Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(key))
        .filter_map(serde_json::Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Returns the first numeric value among the given keys.
fn pick_f64(record: &serde_json::Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| record.get(key))
        .find_map(serde_json::Value::as_f64)
}

impl ProductRecord {
    /// Normalizes one raw catalog record into the canonical shape.
    ///
    /// Returns `None` only when the record has no usable display name under
    /// any known synonym; all other missing fields take explicit fallbacks so
    /// a single sparse record never fails the whole batch.
    #[must_use]
    pub fn from_raw(record: &serde_json::Value, fallback_id: u64) -> Option<Self> {
        let name = pick_str(record, NAME_KEYS)?;

        let id = pick_f64(record, &["id"])
            .map_or(fallback_id, |v| v as u64);

        #[allow(clippy::cast_possible_truncation)]
        let rating = pick_f64(record, &["rating", "Rating"])
            .map_or(DEFAULT_RATING, |v| v as f32);

        Some(Self {
            id,
            name,
            brand: pick_str(record, BRAND_KEYS).unwrap_or_else(|| DEFAULT_BRAND.to_string()),
            price: pick_str(record, PRICE_KEYS).unwrap_or_else(|| DEFAULT_PRICE.to_string()),
            rating,
            image_url: pick_str(record, IMAGE_KEYS).unwrap_or_default(),
            mst: pick_str(record, &["mst"]),
        })
    }
}

impl OutfitRecord {
    /// Normalizes one raw outfit record into the canonical shape.
    #[must_use]
    pub fn from_raw(record: &serde_json::Value) -> Option<Self> {
        let name = pick_str(record, NAME_KEYS)?;

        Some(Self {
            name,
            price: pick_str(record, PRICE_KEYS).unwrap_or_else(|| DEFAULT_PRICE.to_string()),
            image_url: pick_str(record, IMAGE_KEYS).unwrap_or_default(),
            product_type: pick_str(record, TYPE_KEYS).unwrap_or_default(),
        })
    }
}
