//! Documentation emitter: serializes the palette and its accessibility
//! report into Markdown, JSON, and CSS-custom-property text.
//!
//! Rendering is pure string building; only [`PaletteDocs::save`] touches the
//! filesystem. The one generation timestamp lives in the JSON metadata; the
//! report entries themselves are timestamp-free so repeated runs diff clean.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PaletaError;
use crate::palette::Palette;
use crate::report::{AccessibilityReport, ReportEntry};
use crate::types::{Color, ColorCategory};

/// Output format for generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Markdown,
    Json,
    Css,
}

impl DocFormat {
    /// Conventional file name for this format.
    pub fn file_name(self) -> &'static str {
        match self {
            DocFormat::Markdown => "color-palette.md",
            DocFormat::Json => "color-palette.json",
            DocFormat::Css => "color-variables.css",
        }
    }

    pub fn all() -> [DocFormat; 3] {
        [DocFormat::Markdown, DocFormat::Json, DocFormat::Css]
    }
}

/// Metadata block of the JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMetadata {
    pub version: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub description: String,
}

/// Palette colors grouped by category, in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteColors {
    pub primary: Vec<Color>,
    pub neutral: Vec<Color>,
    pub success: Vec<Color>,
    pub warning: Vec<Color>,
    pub error: Vec<Color>,
    pub accent: Vec<Color>,
}

impl PaletteColors {
    fn from_palette(palette: &Palette) -> Self {
        let grouped = |cat| {
            palette
                .by_category(cat)
                .into_iter()
                .cloned()
                .collect::<Vec<Color>>()
        };
        Self {
            primary: grouped(ColorCategory::Primary),
            neutral: grouped(ColorCategory::Neutral),
            success: grouped(ColorCategory::Success),
            warning: grouped(ColorCategory::Warning),
            error: grouped(ColorCategory::Error),
            accent: grouped(ColorCategory::Accent),
        }
    }
}

/// The complete JSON document shape; round-trips through serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonDocument {
    pub metadata: DocMetadata,
    pub colors: PaletteColors,
    pub accessibility: Vec<ReportEntry>,
}

/// Documentation generator for one palette.
pub struct PaletteDocs<'a> {
    palette: &'a Palette,
    report: AccessibilityReport,
    generated_at: chrono::DateTime<chrono::Utc>,
}

impl<'a> PaletteDocs<'a> {
    /// Run the accessibility audit and capture the generation timestamp.
    pub fn new(palette: &'a Palette) -> Result<Self, PaletaError> {
        Ok(Self {
            palette,
            report: AccessibilityReport::generate(palette)?,
            generated_at: chrono::Utc::now(),
        })
    }

    pub fn report(&self) -> &AccessibilityReport {
        &self.report
    }

    /// Render one format to a string.
    pub fn render(&self, format: DocFormat) -> Result<String, PaletaError> {
        match format {
            DocFormat::Markdown => Ok(self.to_markdown()),
            DocFormat::Json => self.to_json(),
            DocFormat::Css => Ok(self.to_css()),
        }
    }

    /// Generate the Markdown style-guide page.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str("# Color Palette\n\n");
        md.push_str("Design-system color reference with WCAG 2.1 accessibility audit.\n\n");

        // One table per category
        for category in ColorCategory::all() {
            let colors = self.palette.by_category(category);
            if colors.is_empty() {
                continue;
            }
            md.push_str(&format!("## {}\n\n", category));
            md.push_str("| Name | Variable | Hex | RGB | HSL | Usage |\n");
            md.push_str("|------|----------|-----|-----|-----|-------|\n");
            for color in colors {
                md.push_str(&format!(
                    "| {} | `{}` | `{}` | {} | {} | {} |\n",
                    color.name, color.variable, color.hex, color.rgb, color.hsl, color.usage
                ));
            }
            md.push('\n');
        }

        // Accessibility section
        md.push_str("## Accessibility\n\n");
        md.push_str("Contrast ratios follow WCAG 2.1: **AAA** requires 7:1, **AA** requires ");
        md.push_str("4.5:1, and **AA Large** requires 3:1 (large text only: 18pt, or 14pt ");
        md.push_str("bold). Ratios below 3:1 fail for any text use. Levels here are ");
        md.push_str("classified from the ratio alone.\n\n");

        md.push_str("| Color Pair | Foreground | Background | Ratio | Level | Passes |\n");
        md.push_str("|------------|------------|------------|-------|-------|--------|\n");
        for entry in &self.report.entries {
            md.push_str(&format!(
                "| {} | `{}` | `{}` | {:.2}:1 | {} | {} |\n",
                entry.color_pair,
                entry.foreground,
                entry.background,
                entry.contrast.ratio,
                entry.contrast.level,
                if entry.contrast.passes { "✓" } else { "✗" }
            ));
        }
        md.push('\n');

        let summary = &self.report.summary;
        md.push_str(&format!(
            "**{} of {} pairs pass.**\n\n",
            summary.passed, summary.total_tests
        ));

        if !summary.warnings.is_empty() {
            md.push_str("### Warnings\n\n");
            for warning in &summary.warnings {
                md.push_str(&format!("- {}\n", warning));
            }
            md.push('\n');
        }

        // CSS custom properties block
        md.push_str("## CSS Custom Properties\n\n");
        md.push_str("```css\n");
        md.push_str(&self.to_css());
        md.push_str("```\n");

        md
    }

    /// Generate the JSON document.
    pub fn to_json(&self) -> Result<String, PaletaError> {
        let doc = JsonDocument {
            metadata: DocMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                generated_at: self.generated_at,
                description: "Design-system color palette and WCAG accessibility audit"
                    .to_string(),
            },
            colors: PaletteColors::from_palette(self.palette),
            accessibility: self.report.entries.clone(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// Generate the `:root` CSS variable block, one line per color, in
    /// category then declaration order.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for color in self.palette.all() {
            css.push_str(&format!("  {}: {};\n", color.variable, color.hex));
        }
        css.push_str("}\n");
        css
    }

    /// Write one format into `dir`, creating the directory if needed.
    /// Returns the written path.
    pub fn save(&self, dir: &Path, format: DocFormat) -> Result<PathBuf, PaletaError> {
        let content = self.render(format)?;
        std::fs::create_dir_all(dir).map_err(|source| PaletaError::OutputWrite {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir.join(format.file_name());
        std::fs::write(&path, content).map_err(|source| PaletaError::OutputWrite {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Write every format into `dir`; returns the written paths.
    pub fn save_all(&self, dir: &Path) -> Result<Vec<PathBuf>, PaletaError> {
        DocFormat::all()
            .iter()
            .map(|format| self.save(dir, *format))
            .collect()
    }
}
