//! Static color recommendation bundles.
//!
//! Three tiers (light/medium/deep) times two contexts (general color advice
//! and outfit advice) gives six constant bundles. The swatch data here is
//! curated content, not computed: the tier-selection logic lives in
//! [`crate::matcher`] and only ever picks one of these tables.

use serde::Serialize;

/// A named color swatch shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    /// Hex color value, `#RRGGBB`.
    pub color: &'static str,
    /// Display name of the color.
    pub name: &'static str,
}

/// A pair of swatch lists: colors to recommend and colors to avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteBundle {
    /// Colors that flatter this tier.
    pub recommended: &'static [Swatch],
    /// Colors to steer away from for this tier.
    pub avoid: &'static [Swatch],
}

const fn swatch(color: &'static str, name: &'static str) -> Swatch {
    Swatch { color, name }
}

/// General color advice for the light tier (reference index 1-3).
pub const GENERAL_LIGHT: PaletteBundle = PaletteBundle {
    recommended: &[
        swatch("#FF6B6B", "Coral Red"),
        swatch("#4ECDC4", "Turquoise"),
        swatch("#45B7D1", "Ocean Blue"),
        swatch("#96CEB4", "Sage Green"),
        swatch("#FFAFCC", "Soft Pink"),
        swatch("#9B5DE5", "Royal Purple"),
    ],
    avoid: &[
        swatch("#FFD700", "Bright Yellow"),
        swatch("#FF4500", "Orange Red"),
        swatch("#32CD32", "Lime Green"),
        swatch("#FF1493", "Deep Pink"),
    ],
};

/// General color advice for the medium tier (reference index 4-6).
pub const GENERAL_MEDIUM: PaletteBundle = PaletteBundle {
    recommended: &[
        swatch("#CD5C5C", "Indian Red"),
        swatch("#20B2AA", "Light Sea Green"),
        swatch("#4169E1", "Royal Blue"),
        swatch("#556B2F", "Dark Olive Green"),
        swatch("#C71585", "Medium Violet Red"),
        swatch("#9932CC", "Dark Orchid"),
    ],
    avoid: &[
        swatch("#FFFF00", "Bright Yellow"),
        swatch("#FF1493", "Deep Pink"),
        swatch("#00FF00", "Lime Green"),
        swatch("#FFB6C1", "Light Pink"),
    ],
};

/// General color advice for the deep tier (reference index 7-10).
pub const GENERAL_DEEP: PaletteBundle = PaletteBundle {
    recommended: &[
        swatch("#FFD700", "Gold"),
        swatch("#FF4500", "Orange Red"),
        swatch("#00FF7F", "Spring Green"),
        swatch("#FF1493", "Deep Pink"),
        swatch("#4B0082", "Indigo"),
        swatch("#FF8C00", "Dark Orange"),
    ],
    avoid: &[
        swatch("#FFE4E1", "Misty Rose"),
        swatch("#F0E68C", "Khaki"),
        swatch("#E6E6FA", "Lavender"),
        swatch("#F5DEB3", "Wheat"),
    ],
};

/// Outfit advice for the light tier (reference index 1-3).
pub const OUTFIT_LIGHT: PaletteBundle = PaletteBundle {
    recommended: &[
        swatch("#000080", "Navy Blue"),
        swatch("#800000", "Maroon"),
        swatch("#556B2F", "Olive Green"),
        swatch("#4B0082", "Indigo"),
    ],
    avoid: &[
        swatch("#FFFF00", "Yellow"),
        swatch("#FF4500", "Orange Red"),
        swatch("#FF69B4", "Hot Pink"),
        swatch("#00FF00", "Lime"),
    ],
};

/// Outfit advice for the medium tier (reference index 4-6).
pub const OUTFIT_MEDIUM: PaletteBundle = PaletteBundle {
    recommended: &[
        swatch("#191970", "Midnight Blue"),
        swatch("#8B4513", "Saddle Brown"),
        swatch("#556B2F", "Dark Olive Green"),
        swatch("#800080", "Purple"),
    ],
    avoid: &[
        swatch("#FFE4E1", "Misty Rose"),
        swatch("#98FB98", "Pale Green"),
        swatch("#E0FFFF", "Light Cyan"),
        swatch("#FFF0F5", "Lavender Blush"),
    ],
};

/// Outfit advice for the deep tier (reference index 7-10).
pub const OUTFIT_DEEP: PaletteBundle = PaletteBundle {
    recommended: &[
        swatch("#FFD700", "Gold"),
        swatch("#FF0000", "Red"),
        swatch("#00FF00", "Lime"),
        swatch("#FF1493", "Deep Pink"),
    ],
    avoid: &[
        swatch("#F0E68C", "Khaki"),
        swatch("#E6E6FA", "Lavender"),
        swatch("#FFE4E1", "Misty Rose"),
        swatch("#F5DEB3", "Wheat"),
    ],
};
