//! Writes editor output to disk.
//!
//! Feature-gated behind `export` (default on) so browser builds can depend on
//! the registry without filesystem code.

use std::fs;
use std::path::Path;
use style_studio_core::{Editor, StudioError};

/// Writes the editor's SVG document in its download form.
///
/// Returns `StudioError::UnsupportedOutput` if the editor draws no shape, or
/// `StudioError::Io` on write failure.
pub fn write_svg(editor: &dyn Editor, path: &Path) -> Result<(), StudioError> {
    let doc = editor.svg().ok_or_else(|| StudioError::UnsupportedOutput {
        editor: editor.name().to_owned(),
        format: "svg".into(),
    })?;
    write_text(&doc.to_pretty(), path)?;
    tracing::info!(editor = editor.name(), path = %path.display(), "wrote svg");
    Ok(())
}

/// Writes `text` to `path`, replacing any existing file.
pub fn write_text(text: &str, path: &Path) -> Result<(), StudioError> {
    fs::write(path, text).map_err(|e| StudioError::Io(format!("{}: {e}", path.display())))
}
