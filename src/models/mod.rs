//! Data models for colors, palettes, classifications, and catalog records.
//!
//! Models are independent of transport and business logic; normalization of
//! upstream shapes lives next to the type it produces.

pub mod classification;
pub mod palette;
pub mod product;
pub mod rgb;

// Re-export all model types
pub use classification::ToneClassification;
pub use palette::{PaletteBundle, Swatch};
pub use product::{OutfitRecord, ProductRecord};
pub use rgb::RgbColor;
