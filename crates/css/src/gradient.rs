//! Two-stop linear, radial and conic gradients.

use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use style_studio_core::color::{color_schema, param_color};
use style_studio_core::format::num;
use style_studio_core::params::{choice_schema, param_choice, param_ranged, param_string, Range};
use style_studio_core::style::{decl, Declaration, StyleRule, StyleSheet};
use style_studio_core::{Editor, Srgb, StudioError};

pub const ANGLE: Range = Range::new(0.0, 360.0, 1.0, 90.0);
pub const DEFAULT_POSITION: &str = "center";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    pub const NAMES: &'static [&'static str] = &["linear", "radial", "conic"];

    pub fn as_str(self) -> &'static str {
        match self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
            GradientKind::Conic => "conic",
        }
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradientKind {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(GradientKind::Linear),
            "radial" => Ok(GradientKind::Radial),
            "conic" => Ok(GradientKind::Conic),
            other => Err(StudioError::InvalidParam {
                name: "type".into(),
                reason: format!("unknown gradient type '{other}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientParams {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    pub color1: Srgb,
    pub color2: Srgb,
    /// Used by linear and conic gradients.
    pub angle: f64,
    /// Used by radial and conic gradients.
    pub position: String,
}

fn default_colors() -> (Srgb, Srgb) {
    (
        Srgb::from_hex("#3b82f6").expect("default first stop is valid hex"),
        Srgb::from_hex("#ef4444").expect("default second stop is valid hex"),
    )
}

impl Default for GradientParams {
    fn default() -> Self {
        let (color1, color2) = default_colors();
        Self {
            kind: GradientKind::default(),
            color1,
            color2,
            angle: ANGLE.default,
            position: DEFAULT_POSITION.to_owned(),
        }
    }
}

impl GradientParams {
    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        let (color1, color2) = default_colors();
        Ok(Self {
            kind: param_choice(params, "type", GradientKind::default()),
            color1: param_color(params, "color1", color1)?,
            color2: param_color(params, "color2", color2)?,
            angle: param_ranged(params, "angle", &ANGLE),
            position: param_string(params, "position", DEFAULT_POSITION),
        })
    }

    /// The gradient image, e.g. `linear-gradient(90deg, #3b82f6, #ef4444)`.
    pub fn image(&self) -> String {
        let (c1, c2) = (self.color1.to_hex(), self.color2.to_hex());
        match self.kind {
            GradientKind::Linear => format!("linear-gradient({}deg, {c1}, {c2})", num(self.angle)),
            GradientKind::Radial => {
                format!("radial-gradient(circle at {}, {c1}, {c2})", self.position)
            }
            GradientKind::Conic => format!(
                "conic-gradient(from {}deg at {}, {c1}, {c2})",
                num(self.angle),
                self.position
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Gradient {
    params: GradientParams,
}

impl Gradient {
    pub fn new(params: GradientParams) -> Self {
        Self { params }
    }

    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self::new(GradientParams::from_json(params)?))
    }
}

impl Editor for Gradient {
    fn name(&self) -> &'static str {
        "gradient"
    }

    fn params(&self) -> Value {
        json!(self.params)
    }

    fn param_schema(&self) -> Value {
        let (color1, color2) = default_colors();
        json!({
            "type": choice_schema(GradientKind::NAMES, "linear", "Gradient shape"),
            "color1": color_schema(color1, "First color stop"),
            "color2": color_schema(color2, "Second color stop"),
            "angle": ANGLE.schema("Direction in degrees (linear, conic)"),
            "position": {
                "type": "string",
                "default": DEFAULT_POSITION,
                "description": "Center position (radial, conic)",
            },
        })
    }

    fn stylesheet(&self) -> StyleSheet {
        StyleSheet::single(StyleRule::bare(self.preview()))
    }

    fn preview(&self) -> Vec<Declaration> {
        vec![decl("background", self.params.image())]
    }
}
