//! Error taxonomy for palette analysis and documentation output.
//!
//! Library code returns typed [`PaletaError`] values; the CLI binary wraps
//! them in `anyhow` at the top level. A malformed hex string is always a hard
//! error, never a silent zero ratio.

use std::path::PathBuf;

/// Errors produced by the contrast engine, palette lookups, and the
/// documentation emitter.
#[derive(Debug, thiserror::Error)]
pub enum PaletaError {
    /// The input does not parse as a 6-hex-digit color (`#RRGGBB`).
    #[error("invalid color format: {value:?} (expected 6 hex digits, e.g. \"#2563eb\")")]
    InvalidColorFormat { value: String },

    /// A palette lookup by name or variable token found nothing.
    #[error("unknown palette color: {name:?}")]
    UnknownColor { name: String },

    /// Writing a generated document to disk failed.
    #[error("failed to write {path:?}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the JSON document failed.
    #[error("failed to serialize JSON document")]
    Serialize(#[from] serde_json::Error),
}
