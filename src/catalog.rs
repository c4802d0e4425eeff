//! Product and outfit catalogs.
//!
//! Catalogs load once at startup from JSON exports and serve filtered,
//! paginated views from memory. Raw records are normalized through
//! [`ProductRecord::from_raw`] on load so field-name drift in the exports
//! never reaches a handler.

use std::path::Path;

use rand::seq::SliceRandom;
use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{OutfitRecord, ProductRecord};

/// Hard cap on page size; larger requests are clamped, not rejected.
pub const MAX_PAGE_LIMIT: usize = 15;

/// Default page size when the request does not name one.
pub const DEFAULT_PAGE_LIMIT: usize = 15;

/// Default number of outfits returned by a random sample.
pub const DEFAULT_OUTFIT_SAMPLE: usize = 8;

/// One page of a result set.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// The records on this page.
    pub data: Vec<T>,
    /// 1-based page number actually served.
    pub page: usize,
    /// Page size actually served, after clamping.
    pub limit: usize,
    /// Total records across all pages.
    pub total_items: usize,
    /// Total number of pages at this limit.
    pub total_pages: usize,
}

/// Cuts one page out of a result set.
///
/// The page number is 1-based and floored at 1; the limit is clamped to
/// [`MAX_PAGE_LIMIT`] and floored at 1. A page past the end yields an empty
/// `data` window with the totals intact, so clients can still render the
/// pager.
pub fn paginate<T: Clone>(records: &[T], page: usize, limit: usize) -> Page<T> {
    let limit = limit.clamp(1, MAX_PAGE_LIMIT);
    let page = page.max(1);

    let total_items = records.len();
    let total_pages = total_items.div_ceil(limit);

    let start = (page - 1).saturating_mul(limit);
    let end = start.saturating_add(limit).min(total_items);
    let data = if start < total_items {
        records[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        data,
        page,
        limit,
        total_items,
        total_pages,
    }
}

/// In-memory makeup product catalog.
#[derive(Debug)]
pub struct ProductCatalog {
    products: Vec<ProductRecord>,
    makeup_terms: Regex,
}

impl ProductCatalog {
    /// Loads and normalizes a catalog from a JSON array of raw records.
    ///
    /// Records without any usable name are skipped; everything else is kept
    /// with fallbacks filled in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecommendationUnavailable`] when the file cannot be
    /// read or is not a JSON array.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::recommendation(
                format!("failed to read product catalog {}", path.display()),
                Some(Box::new(e)),
            )
        })?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&raw).map_err(|e| {
            Error::recommendation(
                format!("product catalog {} is not a JSON array", path.display()),
                Some(Box::new(e)),
            )
        })?;

        Ok(Self::from_raw_records(&records))
    }

    /// Builds a catalog from already-parsed raw records.
    #[must_use]
    pub fn from_raw_records(records: &[serde_json::Value]) -> Self {
        let products = records
            .iter()
            .enumerate()
            .filter_map(|(i, record)| ProductRecord::from_raw(record, i as u64 + 1))
            .collect();

        Self {
            products,
            makeup_terms: Regex::new(r"(?i)foundation|makeup|cosmetic|lipstick").unwrap(),
        }
    }

    /// Makeup products, optionally narrowed to one Monk skin tone tag.
    ///
    /// A product counts as makeup only when its name matches the makeup-term
    /// filter; an mst tag on its own does not qualify a record. The mst
    /// comparison is exact and case-insensitive.
    #[must_use]
    pub fn query(&self, mst: Option<&str>) -> Vec<ProductRecord> {
        self.products
            .iter()
            .filter(|p| self.makeup_terms.is_match(&p.name))
            .filter(|p| match mst {
                Some(wanted) => p
                    .mst
                    .as_deref()
                    .is_some_and(|tag| tag.eq_ignore_ascii_case(wanted)),
                None => true,
            })
            .cloned()
            .collect()
    }

    /// Number of products loaded, before any filtering.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog loaded no products at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// In-memory outfit catalog served in random samples.
#[derive(Debug)]
pub struct OutfitCatalog {
    outfits: Vec<OutfitRecord>,
}

impl OutfitCatalog {
    /// Loads and normalizes an outfit catalog from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecommendationUnavailable`] when the file cannot be
    /// read or is not a JSON array.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::recommendation(
                format!("failed to read outfit catalog {}", path.display()),
                Some(Box::new(e)),
            )
        })?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&raw).map_err(|e| {
            Error::recommendation(
                format!("outfit catalog {} is not a JSON array", path.display()),
                Some(Box::new(e)),
            )
        })?;

        Ok(Self::from_raw_records(&records))
    }

    /// Builds a catalog from already-parsed raw records.
    #[must_use]
    pub fn from_raw_records(records: &[serde_json::Value]) -> Self {
        Self {
            outfits: records.iter().filter_map(OutfitRecord::from_raw).collect(),
        }
    }

    /// Returns up to `limit` outfits chosen uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecommendationUnavailable`] when the catalog is
    /// empty; serving an "empty random sample" would look like success to
    /// the client.
    pub fn sample(&self, limit: usize) -> Result<Vec<OutfitRecord>> {
        if self.outfits.is_empty() {
            return Err(Error::recommendation("outfit catalog is empty", None));
        }

        let mut rng = rand::thread_rng();
        let mut sampled: Vec<OutfitRecord> = self
            .outfits
            .choose_multiple(&mut rng, limit.min(self.outfits.len()))
            .cloned()
            .collect();
        sampled.shuffle(&mut rng);
        Ok(sampled)
    }

    /// Number of outfits loaded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    /// Whether the catalog loaded no outfits at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }
}
