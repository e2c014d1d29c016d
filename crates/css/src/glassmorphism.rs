//! Frosted-glass panel: translucent fill, backdrop blur, faint border.

use serde::Serialize;
use serde_json::{json, Value};
use style_studio_core::color::{color_schema, param_color};
use style_studio_core::format::num;
use style_studio_core::params::{param_ranged, Range};
use style_studio_core::style::{decl, Declaration, StyleRule, StyleSheet};
use style_studio_core::{Editor, Srgb, StudioError};

pub const BLUR: Range = Range::new(0.0, 30.0, 1.0, 10.0);
pub const TRANSPARENCY: Range = Range::new(0.0, 1.0, 0.01, 0.2);
pub const BORDER_OPACITY: Range = Range::new(0.0, 1.0, 0.01, 0.3);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlassmorphismParams {
    pub blur: f64,
    /// Alpha of the fill.
    pub transparency: f64,
    /// Alpha of the border.
    pub border_opacity: f64,
    pub background_color: Srgb,
}

fn white() -> Srgb {
    Srgb::from_hex("#ffffff").expect("white is valid hex")
}

impl Default for GlassmorphismParams {
    fn default() -> Self {
        Self {
            blur: BLUR.default,
            transparency: TRANSPARENCY.default,
            border_opacity: BORDER_OPACITY.default,
            background_color: white(),
        }
    }
}

impl GlassmorphismParams {
    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self {
            blur: param_ranged(params, "blur", &BLUR),
            transparency: param_ranged(params, "transparency", &TRANSPARENCY),
            border_opacity: param_ranged(params, "borderOpacity", &BORDER_OPACITY),
            background_color: param_color(params, "backgroundColor", white())?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Glassmorphism {
    params: GlassmorphismParams,
}

impl Glassmorphism {
    pub fn new(params: GlassmorphismParams) -> Self {
        Self { params }
    }

    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self::new(GlassmorphismParams::from_json(params)?))
    }
}

impl Editor for Glassmorphism {
    fn name(&self) -> &'static str {
        "glassmorphism"
    }

    fn params(&self) -> Value {
        json!(self.params)
    }

    fn param_schema(&self) -> Value {
        json!({
            "blur": BLUR.schema("Backdrop blur in px"),
            "transparency": TRANSPARENCY.schema("Fill opacity"),
            "borderOpacity": BORDER_OPACITY.schema("Border opacity"),
            "backgroundColor": color_schema(white(), "Glass tint"),
        })
    }

    fn stylesheet(&self) -> StyleSheet {
        StyleSheet::single(StyleRule::bare(self.preview()))
    }

    fn preview(&self) -> Vec<Declaration> {
        let p = &self.params;
        let blur = format!("blur({}px)", num(p.blur));
        vec![
            decl("background", p.background_color.css_rgba(p.transparency)),
            decl("backdrop-filter", blur.clone()),
            decl("-webkit-backdrop-filter", blur),
            decl(
                "border",
                format!("1px solid {}", p.background_color.css_rgba(p.border_opacity)),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_panel() {
        let css = Glassmorphism::new(GlassmorphismParams::default()).stylesheet().to_string();
        assert_eq!(
            css,
            "background: rgba(255, 255, 255, 0.2);\n\
             backdrop-filter: blur(10px);\n\
             -webkit-backdrop-filter: blur(10px);\n\
             border: 1px solid rgba(255, 255, 255, 0.3);"
        );
    }

    #[test]
    fn tint_and_alphas_follow_params() {
        let e = Glassmorphism::from_json(&json!({
            "backgroundColor": "#102030",
            "transparency": 0.45,
            "borderOpacity": 2,
            "blur": 4
        }))
        .unwrap();
        let sheet = e.stylesheet();
        let rule = sheet.rules().next().unwrap();
        assert_eq!(rule.get("background"), Some("rgba(16, 32, 48, 0.45)"));
        assert_eq!(rule.get("border"), Some("1px solid rgba(16, 32, 48, 1)"));
        assert_eq!(rule.get("backdrop-filter"), Some("blur(4px)"));
    }

    #[test]
    fn invalid_tint_is_an_error() {
        assert!(Glassmorphism::from_json(&json!({"backgroundColor": "#12"})).is_err());
    }
}
