//! Accessibility report generation.
//!
//! Runs the contrast engine over a fixed, versioned list of semantically
//! meaningful foreground/background pairs. The pair list is configuration,
//! not derived from the palette, so report output is reproducible across
//! releases. Generation is pure: no timestamps, no randomness, the same
//! palette always yields byte-identical entries.

use serde::{Deserialize, Serialize};

use crate::contrast;
use crate::error::PaletaError;
use crate::palette::Palette;
use crate::types::{ContrastLevel, ContrastResult};

/// One foreground/background combination to audit.
///
/// Colors are referenced by palette name so the pair list survives hex
/// changes to the underlying tokens.
#[derive(Debug, Clone, Copy)]
pub struct TestPair {
    pub label: &'static str,
    pub foreground: &'static str,
    pub background: &'static str,
}

/// The audited combinations, matching how the UI actually composes text on
/// surfaces. Order is part of the report contract.
pub const STANDARD_PAIRS: &[TestPair] = &[
    TestPair {
        label: "Primary 600 on White",
        foreground: "Primary 600",
        background: "White",
    },
    TestPair {
        label: "White on Primary 600",
        foreground: "White",
        background: "Primary 600",
    },
    TestPair {
        label: "Primary 700 on White",
        foreground: "Primary 700",
        background: "White",
    },
    TestPair {
        label: "Neutral 900 on White",
        foreground: "Neutral 900",
        background: "White",
    },
    TestPair {
        label: "Neutral 700 on White",
        foreground: "Neutral 700",
        background: "White",
    },
    TestPair {
        label: "Neutral 500 on White",
        foreground: "Neutral 500",
        background: "White",
    },
    TestPair {
        label: "Neutral 400 on White",
        foreground: "Neutral 400",
        background: "White",
    },
    TestPair {
        label: "Success 700 on Success 50",
        foreground: "Success 700",
        background: "Success 50",
    },
    TestPair {
        label: "White on Success 600",
        foreground: "White",
        background: "Success 600",
    },
    TestPair {
        label: "White on Warning 500",
        foreground: "White",
        background: "Warning 500",
    },
    TestPair {
        label: "Warning 700 on Warning 50",
        foreground: "Warning 700",
        background: "Warning 50",
    },
    TestPair {
        label: "White on Error 600",
        foreground: "White",
        background: "Error 600",
    },
    TestPair {
        label: "Error 700 on Error 50",
        foreground: "Error 700",
        background: "Error 50",
    },
    TestPair {
        label: "White on Accent 600",
        foreground: "White",
        background: "Accent 600",
    },
    TestPair {
        label: "Accent 700 on White",
        foreground: "Accent 700",
        background: "White",
    },
];

/// One audited pair in the generated report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub color_pair: String,
    pub foreground: String,
    pub background: String,
    pub contrast: ContrastResult,
    /// Remediation hints; populated only when the pair fails outright or
    /// stops at AA (suggesting the AAA improvement).
    pub recommendations: Vec<String>,
}

/// Aggregate counters plus the human-readable problem list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    /// Failing and borderline pairs, each with ratio and level.
    pub warnings: Vec<String>,
}

/// The full accessibility report for a palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityReport {
    pub entries: Vec<ReportEntry>,
    pub summary: ReportSummary,
}

impl AccessibilityReport {
    /// Audit the standard pair list against a palette.
    pub fn generate(palette: &Palette) -> Result<Self, PaletaError> {
        Self::generate_for_pairs(palette, STANDARD_PAIRS)
    }

    /// Audit an explicit pair list. Unknown color names are an error.
    pub fn generate_for_pairs(
        palette: &Palette,
        pairs: &[TestPair],
    ) -> Result<Self, PaletaError> {
        let mut entries = Vec::with_capacity(pairs.len());

        for pair in pairs {
            let fg = palette.get(pair.foreground)?;
            let bg = palette.get(pair.background)?;
            let contrast = contrast::check(fg.rgb, bg.rgb);
            entries.push(ReportEntry {
                color_pair: pair.label.to_string(),
                foreground: fg.hex.clone(),
                background: bg.hex.clone(),
                recommendations: recommendations_for(pair.label, contrast),
                contrast,
            });
        }

        let summary = summarize(&entries);
        Ok(Self { entries, summary })
    }
}

fn recommendations_for(label: &str, contrast: ContrastResult) -> Vec<String> {
    match contrast.level {
        ContrastLevel::Fail => vec![
            format!(
                "{label}: ratio {:.2}:1 is below the 3:1 minimum; do not use this pair for text",
                contrast.ratio
            ),
            "Darken the foreground or lighten the background to reach at least 4.5:1 (AA)"
                .to_string(),
        ],
        ContrastLevel::Aa => vec![format!(
            "{label}: meets AA at {:.2}:1; reach 7:1 for AAA body text",
            contrast.ratio
        )],
        // AA Large passes for large text; flagged in the summary warnings
        // instead of per-entry recommendations.
        ContrastLevel::AaLarge | ContrastLevel::Aaa => Vec::new(),
    }
}

fn summarize(entries: &[ReportEntry]) -> ReportSummary {
    let total_tests = entries.len();
    let passed = entries.iter().filter(|e| e.contrast.passes).count();
    let failed = total_tests - passed;

    let warnings = entries
        .iter()
        .filter(|e| {
            matches!(
                e.contrast.level,
                ContrastLevel::Fail | ContrastLevel::AaLarge
            )
        })
        .map(|e| {
            format!(
                "{}: {:.2}:1 ({})",
                e.color_pair, e.contrast.ratio, e.contrast.level
            )
        })
        .collect();

    ReportSummary {
        total_tests,
        passed,
        failed,
        warnings,
    }
}
