//! The design-system palette: compiled-in color table, read-only after
//! construction.
//!
//! Source data is name + variable + hex + usage per color; RGB and HSL are
//! derived during construction so every [`Color`] carries three consistent
//! representations. Callers receive the palette by reference; there is no
//! mutation API and no ambient global.

use crate::contrast::{parse_hex, rgb_to_hsl};
use crate::error::PaletaError;
use crate::types::{Color, ColorCategory};

/// One row of the compiled-in color table.
struct ColorDef {
    name: &'static str,
    variable: &'static str,
    hex: &'static str,
    usage: &'static str,
    category: ColorCategory,
}

/// The standard palette source data, in documentation order.
const STANDARD_COLORS: &[ColorDef] = &[
    // ── Primary ───────────────────────────────────────────────
    ColorDef {
        name: "Primary 50",
        variable: "--color-primary-50",
        hex: "#eff6ff",
        usage: "Subtle backgrounds for primary-tinted surfaces",
        category: ColorCategory::Primary,
    },
    ColorDef {
        name: "Primary 100",
        variable: "--color-primary-100",
        hex: "#dbeafe",
        usage: "Hover state for primary-tinted surfaces, selected rows",
        category: ColorCategory::Primary,
    },
    ColorDef {
        name: "Primary 500",
        variable: "--color-primary-500",
        hex: "#3b82f6",
        usage: "Focus rings, links on dark surfaces, progress bars",
        category: ColorCategory::Primary,
    },
    ColorDef {
        name: "Primary 600",
        variable: "--color-primary-600",
        hex: "#2563eb",
        usage: "Primary buttons, links, active navigation items",
        category: ColorCategory::Primary,
    },
    ColorDef {
        name: "Primary 700",
        variable: "--color-primary-700",
        hex: "#1d4ed8",
        usage: "Primary button hover and pressed states",
        category: ColorCategory::Primary,
    },
    ColorDef {
        name: "Primary 900",
        variable: "--color-primary-900",
        hex: "#1e3a8a",
        usage: "Headings on light primary backgrounds, hero sections",
        category: ColorCategory::Primary,
    },
    // ── Neutral ───────────────────────────────────────────────
    ColorDef {
        name: "White",
        variable: "--color-white",
        hex: "#ffffff",
        usage: "Page background, card surfaces, button label on dark fills",
        category: ColorCategory::Neutral,
    },
    ColorDef {
        name: "Neutral 50",
        variable: "--color-neutral-50",
        hex: "#f9fafb",
        usage: "App background behind cards and panels",
        category: ColorCategory::Neutral,
    },
    ColorDef {
        name: "Neutral 100",
        variable: "--color-neutral-100",
        hex: "#f3f4f6",
        usage: "Table header rows, disabled input backgrounds",
        category: ColorCategory::Neutral,
    },
    ColorDef {
        name: "Neutral 200",
        variable: "--color-neutral-200",
        hex: "#e5e7eb",
        usage: "Borders, dividers, input outlines",
        category: ColorCategory::Neutral,
    },
    ColorDef {
        name: "Neutral 400",
        variable: "--color-neutral-400",
        hex: "#9ca3af",
        usage: "Placeholder text, disabled icons (decorative only)",
        category: ColorCategory::Neutral,
    },
    ColorDef {
        name: "Neutral 500",
        variable: "--color-neutral-500",
        hex: "#6b7280",
        usage: "Secondary text, captions, timestamps",
        category: ColorCategory::Neutral,
    },
    ColorDef {
        name: "Neutral 700",
        variable: "--color-neutral-700",
        hex: "#374151",
        usage: "Body text on light backgrounds",
        category: ColorCategory::Neutral,
    },
    ColorDef {
        name: "Neutral 900",
        variable: "--color-neutral-900",
        hex: "#111827",
        usage: "Headings and high-emphasis text",
        category: ColorCategory::Neutral,
    },
    // ── Success ───────────────────────────────────────────────
    ColorDef {
        name: "Success 50",
        variable: "--color-success-50",
        hex: "#ecfdf5",
        usage: "Success banner and badge backgrounds",
        category: ColorCategory::Success,
    },
    ColorDef {
        name: "Success 500",
        variable: "--color-success-500",
        hex: "#10b981",
        usage: "Success icons, completed-state indicators",
        category: ColorCategory::Success,
    },
    ColorDef {
        name: "Success 600",
        variable: "--color-success-600",
        hex: "#059669",
        usage: "Success button fills, enrollment-confirmed chips",
        category: ColorCategory::Success,
    },
    ColorDef {
        name: "Success 700",
        variable: "--color-success-700",
        hex: "#047857",
        usage: "Success text on tinted backgrounds",
        category: ColorCategory::Success,
    },
    // ── Warning ───────────────────────────────────────────────
    ColorDef {
        name: "Warning 50",
        variable: "--color-warning-50",
        hex: "#fffbeb",
        usage: "Warning banner and badge backgrounds",
        category: ColorCategory::Warning,
    },
    ColorDef {
        name: "Warning 500",
        variable: "--color-warning-500",
        hex: "#f59e0b",
        usage: "Warning icons, pending-state indicators",
        category: ColorCategory::Warning,
    },
    ColorDef {
        name: "Warning 600",
        variable: "--color-warning-600",
        hex: "#d97706",
        usage: "Warning button fills, deadline highlights",
        category: ColorCategory::Warning,
    },
    ColorDef {
        name: "Warning 700",
        variable: "--color-warning-700",
        hex: "#b45309",
        usage: "Warning text on tinted backgrounds",
        category: ColorCategory::Warning,
    },
    // ── Error ─────────────────────────────────────────────────
    ColorDef {
        name: "Error 50",
        variable: "--color-error-50",
        hex: "#fef2f2",
        usage: "Error banner and badge backgrounds",
        category: ColorCategory::Error,
    },
    ColorDef {
        name: "Error 500",
        variable: "--color-error-500",
        hex: "#ef4444",
        usage: "Error icons, validation markers",
        category: ColorCategory::Error,
    },
    ColorDef {
        name: "Error 600",
        variable: "--color-error-600",
        hex: "#dc2626",
        usage: "Destructive button fills, error text on white",
        category: ColorCategory::Error,
    },
    ColorDef {
        name: "Error 700",
        variable: "--color-error-700",
        hex: "#b91c1c",
        usage: "Error text on tinted backgrounds",
        category: ColorCategory::Error,
    },
    // ── Accent ────────────────────────────────────────────────
    ColorDef {
        name: "Accent 500",
        variable: "--color-accent-500",
        hex: "#8b5cf6",
        usage: "Certificate ribbons, premium badges",
        category: ColorCategory::Accent,
    },
    ColorDef {
        name: "Accent 600",
        variable: "--color-accent-600",
        hex: "#7c3aed",
        usage: "Accent button fills, instructor highlights",
        category: ColorCategory::Accent,
    },
    ColorDef {
        name: "Accent 700",
        variable: "--color-accent-700",
        hex: "#6d28d9",
        usage: "Accent text and hover states",
        category: ColorCategory::Accent,
    },
];

/// Immutable store of the design-system colors.
///
/// Constructed once at process start and passed by reference to the report
/// generator and documentation emitter.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build the standard design-system palette.
    ///
    /// The compiled-in hex values are verified at construction; a bad entry
    /// in the table is a programming error, not a runtime condition, so this
    /// surfaces as a typed error rather than a panic.
    pub fn standard() -> Result<Self, PaletaError> {
        let mut colors = Vec::with_capacity(STANDARD_COLORS.len());
        for def in STANDARD_COLORS {
            let rgb = parse_hex(def.hex)?;
            colors.push(Color {
                name: def.name.to_string(),
                variable: def.variable.to_string(),
                hex: def.hex.to_string(),
                rgb,
                hsl: rgb_to_hsl(rgb),
                usage: def.usage.to_string(),
                category: def.category,
            });
        }
        Ok(Self { colors })
    }

    /// All colors, flattened: category order, then declaration order.
    pub fn all(&self) -> &[Color] {
        &self.colors
    }

    /// Colors belonging to one category, in declaration order.
    pub fn by_category(&self, category: ColorCategory) -> Vec<&Color> {
        self.colors
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    /// Look up a single color by its human name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Color> {
        self.colors
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Look up a single color by its CSS variable token.
    pub fn find_by_variable(&self, variable: &str) -> Option<&Color> {
        self.colors.iter().find(|c| c.variable == variable)
    }

    /// Like [`Palette::find_by_name`] but a miss is an error.
    pub fn get(&self, name: &str) -> Result<&Color, PaletaError> {
        self.find_by_name(name)
            .ok_or_else(|| PaletaError::UnknownColor {
                name: name.to_string(),
            })
    }

    /// Total number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of categories that contain at least one color.
    pub fn category_count(&self) -> usize {
        ColorCategory::all()
            .iter()
            .filter(|cat| self.colors.iter().any(|c| c.category == **cat))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContrastLevel;

    #[test]
    fn standard_palette_builds() {
        let palette = Palette::standard().unwrap();
        assert_eq!(palette.len(), 29);
        assert_eq!(palette.category_count(), 6);
        assert!(!palette.is_empty());
    }

    #[test]
    fn every_category_is_populated() {
        let palette = Palette::standard().unwrap();
        for category in ColorCategory::all() {
            assert!(
                !palette.by_category(category).is_empty(),
                "empty category: {category}"
            );
        }
    }

    #[test]
    fn rgb_and_hsl_derive_from_hex() {
        let palette = Palette::standard().unwrap();
        for color in palette.all() {
            let rgb = parse_hex(&color.hex).unwrap();
            assert_eq!(color.rgb, rgb, "rgb drifted for {}", color.name);
            assert_eq!(color.hsl, rgb_to_hsl(rgb), "hsl drifted for {}", color.name);
        }
    }

    #[test]
    fn find_by_name_is_case_insensitive() {
        let palette = Palette::standard().unwrap();
        let color = palette.find_by_name("primary 600").unwrap();
        assert_eq!(color.hex, "#2563eb");
        assert_eq!(color.rgb.r, 0x25);
    }

    #[test]
    fn find_by_variable_token() {
        let palette = Palette::standard().unwrap();
        let color = palette.find_by_variable("--color-neutral-900").unwrap();
        assert_eq!(color.name, "Neutral 900");
        assert_eq!(color.hex, "#111827");
    }

    #[test]
    fn get_unknown_color_is_an_error() {
        let palette = Palette::standard().unwrap();
        let err = palette.get("Chartreuse 950").unwrap_err();
        assert!(matches!(err, PaletaError::UnknownColor { .. }));
    }

    #[test]
    fn flattened_order_follows_categories() {
        let palette = Palette::standard().unwrap();
        let categories: Vec<ColorCategory> = palette.all().iter().map(|c| c.category).collect();
        // Once a category ends it never reappears.
        let mut seen = Vec::new();
        for cat in categories {
            if seen.last() != Some(&cat) {
                assert!(!seen.contains(&cat), "category {cat} appears twice");
                seen.push(cat);
            }
        }
        assert_eq!(seen, ColorCategory::all().to_vec());
    }

    #[test]
    fn primary_600_passes_aa_on_white() {
        let palette = Palette::standard().unwrap();
        let fg = palette.get("Primary 600").unwrap();
        let bg = palette.get("White").unwrap();
        let result = crate::contrast::check(fg.rgb, bg.rgb);
        assert_eq!(result.level, ContrastLevel::Aa);
        assert!(result.passes);
    }
}
