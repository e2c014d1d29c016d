//! The `Editor` trait every style editor implements.
//!
//! An editor owns one immutable parameter set and derives everything else
//! from it: exported CSS, the declarations applied to the live preview, and
//! optionally an SVG document and HTML markup. The trait is object-safe so the
//! registry can hand out `Box<dyn Editor>`.

use crate::prng::RandomSource;
use crate::style::{Declaration, StyleSheet};
use crate::svg::SvgDocument;
use serde::Serialize;
use serde_json::Value;

/// Core trait for style editors.
pub trait Editor {
    /// Registry name, e.g. `"box-shadow"`.
    fn name(&self) -> &'static str;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing every parameter: type, range or options, default.
    fn param_schema(&self) -> Value;

    /// The exported style text, structured.
    fn stylesheet(&self) -> StyleSheet;

    /// Declarations applied inline to the preview element.
    fn preview(&self) -> Vec<Declaration>;

    /// Vector document for editors that draw a shape.
    fn svg(&self) -> Option<SvgDocument> {
        None
    }

    /// HTML scaffold for layout editors.
    fn markup(&self) -> Option<String> {
        None
    }

    /// Suggested file name for the downloadable document.
    fn export_filename(&self) -> Option<&'static str> {
        None
    }

    /// Draws fresh randomness. A no-op for deterministic editors.
    fn regenerate(&mut self, _rng: &mut dyn RandomSource) {}
}

/// Everything one render pass of an editor produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendering {
    pub editor: String,
    pub css: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    pub preview: Vec<Declaration>,
}

/// Runs one render pass.
pub fn render(editor: &dyn Editor) -> Rendering {
    Rendering {
        editor: editor.name().to_owned(),
        css: editor.stylesheet().to_string(),
        svg: editor.svg().map(|doc| doc.to_pretty()),
        html: editor.markup(),
        preview: editor.preview(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::Sequence;
    use crate::style::{decl, StyleRule};
    use serde_json::json;

    /// Minimal editor used to verify trait object safety and defaults.
    struct Outline {
        width: f64,
        regenerated: usize,
    }

    impl Editor for Outline {
        fn name(&self) -> &'static str {
            "outline"
        }

        fn params(&self) -> Value {
            json!({"width": self.width})
        }

        fn param_schema(&self) -> Value {
            json!({"width": {"type": "number", "default": 1.0}})
        }

        fn stylesheet(&self) -> StyleSheet {
            StyleSheet::single(StyleRule::bare(self.preview()))
        }

        fn preview(&self) -> Vec<Declaration> {
            vec![decl("outline-width", format!("{}px", self.width))]
        }

        fn regenerate(&mut self, _rng: &mut dyn RandomSource) {
            self.regenerated += 1;
        }
    }

    fn outline() -> Outline {
        Outline {
            width: 2.0,
            regenerated: 0,
        }
    }

    #[test]
    fn editor_trait_is_object_safe() {
        let editor: Box<dyn Editor> = Box::new(outline());
        assert_eq!(editor.name(), "outline");
        assert_eq!(editor.params()["width"], 2.0);
    }

    #[test]
    fn default_optional_outputs_are_none() {
        let editor = outline();
        assert!(editor.svg().is_none());
        assert!(editor.markup().is_none());
        assert!(editor.export_filename().is_none());
    }

    #[test]
    fn regenerate_through_dyn_reference() {
        let mut editor = outline();
        let mut rng = Sequence::constant(0.5);
        let e: &mut dyn Editor = &mut editor;
        e.regenerate(&mut rng);
        assert_eq!(editor.regenerated, 1);
    }

    #[test]
    fn render_collects_css_and_preview() {
        let r = render(&outline());
        assert_eq!(r.editor, "outline");
        assert_eq!(r.css, "outline-width: 2px;");
        assert_eq!(r.preview, vec![decl("outline-width", "2px")]);
        assert!(r.svg.is_none());
    }

    #[test]
    fn rendering_serializes_without_absent_outputs() {
        let v = serde_json::to_value(render(&outline())).unwrap();
        assert!(v.get("svg").is_none());
        assert!(v.get("html").is_none());
        assert_eq!(v["css"], "outline-width: 2px;");
    }
}
