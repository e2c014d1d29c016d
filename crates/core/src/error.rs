//! Error types for the style-studio core.

use thiserror::Error;

/// Errors produced by editor construction, export, and recipe handling.
///
/// Generators themselves never fail: every numeric input is clamped to its
/// slider range before it reaches them.
#[derive(Debug, Error)]
pub enum StudioError {
    /// The requested editor name is not registered.
    #[error("unknown editor: {0}")]
    UnknownEditor(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A parameter was present but unusable (e.g. a color that is not hex).
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// The editor cannot produce the requested kind of output.
    #[error("editor '{editor}' has no {format} output")]
    UnsupportedOutput { editor: String, format: String },

    /// A recipe document was malformed.
    #[error("invalid recipe: {0}")]
    InvalidRecipe(String),

    /// A filesystem operation failed during export.
    #[error("i/o error: {0}")]
    Io(String),
}
