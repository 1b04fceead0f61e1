//! WCAG 2.1 contrast engine.
//!
//! One implementation serves both structured [`Rgb`] input and raw hex
//! strings; the hex path parses first and fails with
//! [`PaletaError::InvalidColorFormat`] instead of degrading to a zero ratio.
//!
//! The luminance formula is the exact WCAG 2.1 definition: per-channel sRGB
//! linearization (threshold 0.03928, gamma 2.4) and the 0.2126/0.7152/0.0722
//! weighted sum.

use crate::error::PaletaError;
use crate::types::{ContrastLevel, ContrastResult, Hsl, Rgb};

/// Linearize one sRGB channel per WCAG 2.1.
fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG 2.1.
///
/// Returns a value in [0.0, 1.0]: 0 for black, 1 for white.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * srgb_to_linear(rgb.r) + 0.7152 * srgb_to_linear(rgb.g) + 0.0722 * srgb_to_linear(rgb.b)
}

/// WCAG 2.1 contrast ratio between two colors.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`; in [1.0, 21.0] and symmetric in
/// its arguments.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio for two hex strings.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64, PaletaError> {
    Ok(contrast_ratio(parse_hex(a)?, parse_hex(b)?))
}

/// Classify a contrast ratio into a WCAG compliance level.
///
/// Boundaries are inclusive: exactly 7.0 is AAA, exactly 4.5 is AA, exactly
/// 3.0 is AA Large.
pub fn classify(ratio: f64) -> ContrastLevel {
    if ratio >= 7.0 {
        ContrastLevel::Aaa
    } else if ratio >= 4.5 {
        ContrastLevel::Aa
    } else if ratio >= 3.0 {
        ContrastLevel::AaLarge
    } else {
        ContrastLevel::Fail
    }
}

/// Full contrast check for structured colors.
pub fn check(a: Rgb, b: Rgb) -> ContrastResult {
    ContrastResult::from_ratio(contrast_ratio(a, b))
}

/// Full contrast check for hex strings.
pub fn check_hex(a: &str, b: &str) -> Result<ContrastResult, PaletaError> {
    Ok(ContrastResult::from_ratio(contrast_ratio_hex(a, b)?))
}

/// Parse a `#RRGGBB` (or `RRGGBB`) string into [`Rgb`].
pub fn parse_hex(hex: &str) -> Result<Rgb, PaletaError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PaletaError::InvalidColorFormat {
            value: hex.to_string(),
        });
    }
    let parse_pair = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
    Ok(Rgb {
        r: parse_pair(&digits[0..2]),
        g: parse_pair(&digits[2..4]),
        b: parse_pair(&digits[4..6]),
    })
}

/// Convert an sRGB color to HSL.
///
/// Hue in [0, 360), saturation and lightness in [0, 100], rounded to one
/// decimal place for stable serialization.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        // Achromatic
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: round1(l * 100.0),
        };
    }

    let d = max - min;
    let s = d / (1.0 - (2.0 * l - 1.0).abs());

    let h = if max == r {
        60.0 * (((g - b) / d).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / d + 2.0)
    } else {
        60.0 * ((r - g) / d + 4.0)
    };

    Hsl {
        h: round1(h.rem_euclid(360.0)),
        s: round1(s * 100.0),
        l: round1(l * 100.0),
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
