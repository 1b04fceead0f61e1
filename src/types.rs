use serde::{Deserialize, Serialize};

/// Semantic grouping of palette colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    Primary,
    Neutral,
    Success,
    Warning,
    Error,
    Accent,
}

impl ColorCategory {
    /// All categories in canonical documentation order.
    pub fn all() -> [ColorCategory; 6] {
        [
            ColorCategory::Primary,
            ColorCategory::Neutral,
            ColorCategory::Success,
            ColorCategory::Warning,
            ColorCategory::Error,
            ColorCategory::Accent,
        ]
    }
}

impl std::fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorCategory::Primary => write!(f, "Primary"),
            ColorCategory::Neutral => write!(f, "Neutral"),
            ColorCategory::Success => write!(f, "Success"),
            ColorCategory::Warning => write!(f, "Warning"),
            ColorCategory::Error => write!(f, "Error"),
            ColorCategory::Accent => write!(f, "Accent"),
        }
    }
}

/// sRGB color, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Hue/saturation/lightness representation.
///
/// Hue in [0, 360), saturation and lightness in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}°, {:.0}%, {:.0}%", self.h, self.s, self.l)
    }
}

/// A named design-system color.
///
/// `rgb` and `hsl` are derived from `hex` when the palette is constructed, so
/// the three representations always describe the same color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub name: String,
    pub variable: String,
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub usage: String,
    pub category: ColorCategory,
}

/// WCAG 2.1 compliance level for a contrast ratio.
///
/// Classification is a function of the ratio alone; this is not a
/// large-text-aware check (font size is never an input here).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContrastLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AA Large")]
    AaLarge,
    #[serde(rename = "Fail")]
    Fail,
}

impl std::fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContrastLevel::Aaa => write!(f, "AAA"),
            ContrastLevel::Aa => write!(f, "AA"),
            ContrastLevel::AaLarge => write!(f, "AA Large"),
            ContrastLevel::Fail => write!(f, "Fail"),
        }
    }
}

/// Outcome of comparing two colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// Contrast ratio, rounded to two decimal places. Always >= 1.
    pub ratio: f64,
    pub level: ContrastLevel,
    pub passes: bool,
}

impl ContrastResult {
    /// Build a result from an unrounded ratio.
    ///
    /// The level is classified from the raw ratio so that boundary values
    /// (exactly 7.0, 4.5, 3.0) land on the right side; only the stored ratio
    /// is rounded.
    pub fn from_ratio(raw: f64) -> Self {
        let level = crate::contrast::classify(raw);
        Self {
            ratio: (raw * 100.0).round() / 100.0,
            level,
            passes: level != ContrastLevel::Fail,
        }
    }
}
