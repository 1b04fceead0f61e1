// Library exports for the Paleta design-system analyzer
pub mod contrast;
pub mod docs;
pub mod error;
pub mod palette;
pub mod report;
pub mod types;

// Re-export key types for convenience
pub use docs::{DocFormat, DocMetadata, JsonDocument, PaletteColors, PaletteDocs};
pub use error::PaletaError;
pub use palette::Palette;
pub use report::{AccessibilityReport, ReportEntry, ReportSummary, TestPair, STANDARD_PAIRS};
pub use types::{Color, ColorCategory, ContrastLevel, ContrastResult, Hsl, Rgb};
