//! Nearest-reference-color matching against the Monk skin tone scale.
//!
//! The matcher is the deterministic core of tonematch: given any 6-hex-digit
//! RGB color it finds the closest of ten fixed reference tones by Euclidean
//! distance, bands the match into one of three tiers, and selects the static
//! recommendation bundle for that tier and context. Everything here is a pure
//! function of its input and the constant tables.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::models::palette::{
    PaletteBundle, GENERAL_DEEP, GENERAL_LIGHT, GENERAL_MEDIUM, OUTFIT_DEEP, OUTFIT_LIGHT,
    OUTFIT_MEDIUM,
};
use crate::models::RgbColor;

/// One entry of the fixed reference scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceTone {
    /// Scale position, 1-10 (1 = lightest).
    pub index: u8,
    /// Canonical hex value of this reference tone.
    pub hex: &'static str,
    /// The same value as parsed channels, used for distance math.
    pub rgb: RgbColor,
}

const fn tone(index: u8, hex: &'static str, r: u8, g: u8, b: u8) -> ReferenceTone {
    ReferenceTone {
        index,
        hex,
        rgb: RgbColor::new(r, g, b),
    }
}

/// The 10-point Monk reference scale, ordered lightest to deepest.
///
/// The table is fixed at build time; the tie-break rule below depends on
/// this ordering, so entries must stay sorted by index.
pub const MONK_SCALE: [ReferenceTone; 10] = [
    tone(1, "#FFF3E1", 0xFF, 0xF3, 0xE1),
    tone(2, "#FFE0BD", 0xFF, 0xE0, 0xBD),
    tone(3, "#FFD1A1", 0xFF, 0xD1, 0xA1),
    tone(4, "#FFC183", 0xFF, 0xC1, 0x83),
    tone(5, "#FFB165", 0xFF, 0xB1, 0x65),
    tone(6, "#FFA047", 0xFF, 0xA0, 0x47),
    tone(7, "#FF8F29", 0xFF, 0x8F, 0x29),
    tone(8, "#FF7E0B", 0xFF, 0x7E, 0x0B),
    tone(9, "#FF6D00", 0xFF, 0x6D, 0x00),
    tone(10, "#FF5C00", 0xFF, 0x5C, 0x00),
];

/// Coarse band derived from the matched reference index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Reference index 1-3.
    Light,
    /// Reference index 4-6.
    Medium,
    /// Reference index 7-10.
    Deep,
}

impl Tier {
    /// Maps a matched reference index to its tier.
    ///
    /// Total over 1-10 with inclusive boundaries: 3 is still light,
    /// 4 and 6 are medium, 7 is already deep.
    #[must_use]
    pub const fn for_index(index: u8) -> Self {
        match index {
            0..=3 => Self::Light,
            4..=6 => Self::Medium,
            _ => Self::Deep,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Deep => "deep",
        };
        write!(f, "{name}")
    }
}

/// Which kind of advice a recommendation bundle is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    /// General color advice (makeup shades and accents).
    #[default]
    General,
    /// Outfit color advice.
    Outfit,
}

impl std::str::FromStr for Context {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "general" => Ok(Self::General),
            "outfit" => Ok(Self::Outfit),
            other => Err(format!(
                "unknown context '{other}': expected 'general' or 'outfit'"
            )),
        }
    }
}

/// Finds the reference scale index closest to the given hex color.
///
/// Distance is Euclidean in RGB space. Ties are broken by table order:
/// the lowest equidistant index always wins, so results are reproducible
/// even for degenerate inputs sitting exactly between two reference tones.
///
/// # Errors
///
/// Returns [`crate::error::Error::InvalidColorFormat`] for malformed input.
pub fn nearest_reference_index(hex: &str) -> Result<u8> {
    let color = RgbColor::from_hex(hex)?;

    let mut best = &MONK_SCALE[0];
    let mut best_distance = color.distance(&best.rgb);

    // Strict less-than keeps the first (lowest) index on ties.
    for tone in &MONK_SCALE[1..] {
        let distance = color.distance(&tone.rgb);
        if distance < best_distance {
            best = tone;
            best_distance = distance;
        }
    }

    Ok(best.index)
}

/// Selects the static recommendation bundle for a color and context.
///
/// Matches the color against the reference scale, bands the result into a
/// [`Tier`], and returns the constant bundle for that tier and context.
///
/// # Errors
///
/// Returns [`crate::error::Error::InvalidColorFormat`] for malformed input;
/// there are no other failure modes.
pub fn color_recommendations_for(hex: &str, context: Context) -> Result<&'static PaletteBundle> {
    let index = nearest_reference_index(hex)?;
    Ok(bundle_for(Tier::for_index(index), context))
}

/// Returns the constant bundle for a tier and context.
#[must_use]
pub const fn bundle_for(tier: Tier, context: Context) -> &'static PaletteBundle {
    match (context, tier) {
        (Context::General, Tier::Light) => &GENERAL_LIGHT,
        (Context::General, Tier::Medium) => &GENERAL_MEDIUM,
        (Context::General, Tier::Deep) => &GENERAL_DEEP,
        (Context::Outfit, Tier::Light) => &OUTFIT_LIGHT,
        (Context::Outfit, Tier::Medium) => &OUTFIT_MEDIUM,
        (Context::Outfit, Tier::Deep) => &OUTFIT_DEEP,
    }
}
