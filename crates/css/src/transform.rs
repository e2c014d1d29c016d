//! 2D and 3D transforms.
//!
//! In 3D mode the chain starts with `perspective` and per-axis rotations, in
//! 2D mode with a single `rotate`. Translate, scale and skew follow in both
//! modes. Every function is dropped at identity; an empty chain is `none`.

use serde::Serialize;
use serde_json::{json, Value};
use style_studio_core::format::num;
use style_studio_core::params::{param_bool, param_ranged, param_string, Range};
use style_studio_core::style::{decl, Declaration, StyleRule, StyleSheet};
use style_studio_core::{Editor, StudioError};

pub const TRANSLATE: Range = Range::new(-100.0, 100.0, 1.0, 0.0);
pub const ROTATE: Range = Range::new(-180.0, 180.0, 1.0, 0.0);
pub const SCALE: Range = Range::new(0.0, 3.0, 0.1, 1.0);
pub const SKEW: Range = Range::new(-90.0, 90.0, 1.0, 0.0);
pub const PERSPECTIVE: Range = Range::new(0.0, 1000.0, 10.0, 0.0);
pub const DEFAULT_ORIGIN: &str = "center";

pub const SELECTOR: &str = ".element";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformParams {
    pub translate_x: f64,
    pub translate_y: f64,
    /// 2D rotation; ignored in 3D mode.
    pub rotate: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub skew_x: f64,
    pub skew_y: f64,
    /// 3D only, like the per-axis rotations.
    pub perspective: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub rotate_z: f64,
    pub transform_origin: String,
    #[serde(rename = "is3D")]
    pub is_3d: bool,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            translate_x: TRANSLATE.default,
            translate_y: TRANSLATE.default,
            rotate: ROTATE.default,
            scale_x: SCALE.default,
            scale_y: SCALE.default,
            skew_x: SKEW.default,
            skew_y: SKEW.default,
            perspective: PERSPECTIVE.default,
            rotate_x: ROTATE.default,
            rotate_y: ROTATE.default,
            rotate_z: ROTATE.default,
            transform_origin: DEFAULT_ORIGIN.to_owned(),
            is_3d: false,
        }
    }
}

impl TransformParams {
    pub fn from_json(params: &Value) -> Self {
        Self {
            translate_x: param_ranged(params, "translateX", &TRANSLATE),
            translate_y: param_ranged(params, "translateY", &TRANSLATE),
            rotate: param_ranged(params, "rotate", &ROTATE),
            scale_x: param_ranged(params, "scaleX", &SCALE),
            scale_y: param_ranged(params, "scaleY", &SCALE),
            skew_x: param_ranged(params, "skewX", &SKEW),
            skew_y: param_ranged(params, "skewY", &SKEW),
            perspective: param_ranged(params, "perspective", &PERSPECTIVE),
            rotate_x: param_ranged(params, "rotateX", &ROTATE),
            rotate_y: param_ranged(params, "rotateY", &ROTATE),
            rotate_z: param_ranged(params, "rotateZ", &ROTATE),
            transform_origin: param_string(params, "transformOrigin", DEFAULT_ORIGIN),
            is_3d: param_bool(params, "is3D", false),
        }
    }

    pub fn functions(&self) -> Vec<String> {
        let deg = |name: &str, v: f64| format!("{name}({}deg)", num(v));
        let mut out = Vec::new();
        if self.is_3d {
            if self.perspective > 0.0 {
                out.push(format!("perspective({}px)", num(self.perspective)));
            }
            for (name, v) in [
                ("rotateX", self.rotate_x),
                ("rotateY", self.rotate_y),
                ("rotateZ", self.rotate_z),
            ] {
                if v != 0.0 {
                    out.push(deg(name, v));
                }
            }
        } else if self.rotate != 0.0 {
            out.push(deg("rotate", self.rotate));
        }
        if self.translate_x != 0.0 || self.translate_y != 0.0 {
            out.push(format!(
                "translate({}px, {}px)",
                num(self.translate_x),
                num(self.translate_y)
            ));
        }
        if self.scale_x != 1.0 || self.scale_y != 1.0 {
            out.push(format!("scale({}, {})", num(self.scale_x), num(self.scale_y)));
        }
        if self.skew_x != 0.0 || self.skew_y != 0.0 {
            out.push(format!("skew({}deg, {}deg)", num(self.skew_x), num(self.skew_y)));
        }
        out
    }

    pub fn value(&self) -> String {
        let functions = self.functions();
        if functions.is_empty() {
            "none".to_owned()
        } else {
            functions.join(" ")
        }
    }
}

#[derive(Debug, Clone)]
pub struct Transform {
    params: TransformParams,
}

impl Transform {
    pub fn new(params: TransformParams) -> Self {
        Self { params }
    }

    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self::new(TransformParams::from_json(params)))
    }
}

impl Editor for Transform {
    fn name(&self) -> &'static str {
        "transform"
    }

    fn params(&self) -> Value {
        json!(self.params)
    }

    fn param_schema(&self) -> Value {
        json!({
            "translateX": TRANSLATE.schema("Horizontal translation in px"),
            "translateY": TRANSLATE.schema("Vertical translation in px"),
            "rotate": ROTATE.schema("2D rotation in degrees"),
            "scaleX": SCALE.schema("Horizontal scale factor"),
            "scaleY": SCALE.schema("Vertical scale factor"),
            "skewX": SKEW.schema("Horizontal skew in degrees"),
            "skewY": SKEW.schema("Vertical skew in degrees"),
            "perspective": PERSPECTIVE.schema("3D perspective distance in px (0 disables)"),
            "rotateX": ROTATE.schema("3D rotation about x in degrees"),
            "rotateY": ROTATE.schema("3D rotation about y in degrees"),
            "rotateZ": ROTATE.schema("3D rotation about z in degrees"),
            "transformOrigin": {"type": "string", "default": DEFAULT_ORIGIN, "description": "transform-origin value"},
            "is3D": {"type": "boolean", "default": false, "description": "Use 3D rotations"},
        })
    }

    fn stylesheet(&self) -> StyleSheet {
        StyleSheet::single(StyleRule::new(SELECTOR, self.preview()))
    }

    fn preview(&self) -> Vec<Declaration> {
        vec![
            decl("transform", self.params.value()),
            decl("transform-origin", self.params.transform_origin.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(params: Value) -> String {
        TransformParams::from_json(&params).value()
    }

    #[test]
    fn identity_renders_none() {
        let css = Transform::new(TransformParams::default()).stylesheet().to_string();
        assert_eq!(
            css,
            ".element {\n  transform: none;\n  transform-origin: center;\n}"
        );
    }

    #[test]
    fn two_d_chain_order() {
        assert_eq!(
            value(json!({"rotate": 45, "translateX": 10, "scaleY": 1.5, "skewX": -5})),
            "rotate(45deg) translate(10px, 0px) scale(1, 1.5) skew(-5deg, 0deg)"
        );
    }

    #[test]
    fn three_d_replaces_rotate_with_axis_rotations() {
        assert_eq!(
            value(json!({"is3D": true, "rotate": 45, "perspective": 500, "rotateY": 30})),
            "perspective(500px) rotateY(30deg)"
        );
    }

    #[test]
    fn two_d_ignores_three_d_fields() {
        assert_eq!(value(json!({"perspective": 500, "rotateX": 10})), "none");
    }

    #[test]
    fn values_are_clamped() {
        let p = TransformParams::from_json(&json!({"scaleX": 9, "rotate": -400, "perspective": 5000}));
        assert_eq!((p.scale_x, p.rotate, p.perspective), (3.0, -180.0, 1000.0));
    }

    #[test]
    fn origin_passes_through() {
        let e = Transform::from_json(&json!({"transformOrigin": "top left"})).unwrap();
        assert_eq!(e.preview()[1], decl("transform-origin", "top left"));
        assert_eq!(e.params()["is3D"], false);
    }
}
