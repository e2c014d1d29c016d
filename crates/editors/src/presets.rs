//! Named parameter sets per editor, as JSON objects ready for `from_name`.

use serde::Serialize;
use serde_json::{json, Value};
use style_studio_core::StudioError;
use style_studio_css::{animation, filter, flexbox, grid, Preset};

use crate::EditorKind;

/// A preset or template name with the full parameter object it applies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedParams {
    pub name: &'static str,
    pub params: Value,
}

fn to_named<P: Serialize>(presets: Vec<Preset<P>>) -> Vec<NamedParams> {
    presets
        .into_iter()
        .map(|p| NamedParams {
            name: p.name,
            params: json!(p.params),
        })
        .collect()
}

/// Presets of `editor`; empty for editors without any.
///
/// Returns `StudioError::UnknownEditor` for unregistered names.
pub fn presets(editor: &str) -> Result<Vec<NamedParams>, StudioError> {
    if !EditorKind::list_editors().contains(&editor) {
        return Err(StudioError::UnknownEditor(editor.to_string()));
    }
    Ok(match editor {
        "filter" => to_named(filter::presets()),
        "animation" => to_named(animation::presets()),
        "grid" => to_named(grid::templates()),
        "flexbox" => to_named(flexbox::templates()),
        _ => Vec::new(),
    })
}

/// Looks up one preset of `editor` by name (case-insensitive).
pub fn find_preset(editor: &str, name: &str) -> Result<NamedParams, StudioError> {
    presets(editor)?
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| StudioError::InvalidParam {
            name: "preset".into(),
            reason: format!("editor '{editor}' has no preset named '{name}'"),
        })
}

/// Overlays `overrides` onto a preset's parameter object.
pub fn merge_params(base: &Value, overrides: &Value) -> Value {
    let mut merged = base.clone();
    if let (Some(target), Some(extra)) = (merged.as_object_mut(), overrides.as_object()) {
        for (key, value) in extra {
            target.insert(key.clone(), value.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_studio_core::Editor;

    #[test]
    fn editors_with_presets() {
        assert_eq!(presets("filter").unwrap().len(), 5);
        assert_eq!(presets("animation").unwrap().len(), 6);
        assert_eq!(presets("grid").unwrap().len(), 5);
        assert_eq!(presets("flexbox").unwrap().len(), 5);
        assert!(presets("wave").unwrap().is_empty());
    }

    #[test]
    fn unknown_editor_is_an_error() {
        assert!(matches!(presets("sparkles"), Err(StudioError::UnknownEditor(_))));
    }

    #[test]
    fn every_preset_builds_its_editor() {
        for editor in EditorKind::list_editors() {
            for preset in presets(editor).unwrap() {
                let built = EditorKind::from_name(editor, &preset.params, Some(0)).unwrap();
                assert_eq!(built.params(), preset.params, "{editor}/{}", preset.name);
            }
        }
    }

    #[test]
    fn find_preset_ignores_case() {
        let p = find_preset("filter", "vintage").unwrap();
        assert_eq!(p.name, "Vintage");
        assert_eq!(p.params["sepia"], 30.0);
        assert!(find_preset("filter", "Neon").is_err());
        assert!(find_preset("gradient", "Normal").is_err());
    }

    #[test]
    fn merge_overrides_individual_keys() {
        let base = json!({"gap": 16, "rows": "auto"});
        let merged = merge_params(&base, &json!({"gap": 4}));
        assert_eq!(merged, json!({"gap": 4, "rows": "auto"}));
        assert_eq!(merge_params(&base, &json!(null)), base);
    }
}
