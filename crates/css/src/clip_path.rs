//! Basic-shape clip paths, emitted with the WebKit-prefixed twin.

use serde::Serialize;
use serde_json::{json, Value};
use std::str::FromStr;
use style_studio_core::format::num;
use style_studio_core::params::{choice_schema, param_choice, param_ranged, param_string, Range};
use style_studio_core::style::{decl, Declaration, StyleRule, StyleSheet};
use style_studio_core::{Editor, StudioError};

pub const PERCENT: Range = Range::new(0.0, 100.0, 1.0, 50.0);
pub const ELLIPSE_Y: Range = Range::new(0.0, 100.0, 1.0, 25.0);
pub const INSET: Range = Range::new(0.0, 100.0, 1.0, 10.0);
pub const ROUND: Range = Range::new(0.0, 50.0, 1.0, 0.0);
pub const DEFAULT_POLYGON: &str = "50% 0%, 100% 50%, 50% 100%, 0% 50%";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Circle,
    Ellipse,
    Polygon,
    Inset,
}

impl Shape {
    pub const NAMES: &'static [&'static str] = &["circle", "ellipse", "polygon", "inset"];
}

impl FromStr for Shape {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Shape::Circle),
            "ellipse" => Ok(Shape::Ellipse),
            "polygon" => Ok(Shape::Polygon),
            "inset" => Ok(Shape::Inset),
            other => Err(StudioError::InvalidParam {
                name: "shape".into(),
                reason: format!("unknown shape '{other}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipPathParams {
    pub shape: Shape,
    pub circle_radius: f64,
    pub ellipse_radius_x: f64,
    pub ellipse_radius_y: f64,
    pub inset_top: f64,
    pub inset_right: f64,
    pub inset_bottom: f64,
    pub inset_left: f64,
    /// Corner rounding of the inset rectangle in px; 0 omits `round`.
    pub inset_radius: f64,
    /// Raw `polygon()` point list.
    pub polygon_points: String,
}

impl Default for ClipPathParams {
    fn default() -> Self {
        Self {
            shape: Shape::default(),
            circle_radius: PERCENT.default,
            ellipse_radius_x: PERCENT.default,
            ellipse_radius_y: ELLIPSE_Y.default,
            inset_top: INSET.default,
            inset_right: INSET.default,
            inset_bottom: INSET.default,
            inset_left: INSET.default,
            inset_radius: ROUND.default,
            polygon_points: DEFAULT_POLYGON.to_owned(),
        }
    }
}

impl ClipPathParams {
    pub fn from_json(params: &Value) -> Self {
        Self {
            shape: param_choice(params, "shape", Shape::default()),
            circle_radius: param_ranged(params, "circleRadius", &PERCENT),
            ellipse_radius_x: param_ranged(params, "ellipseRadiusX", &PERCENT),
            ellipse_radius_y: param_ranged(params, "ellipseRadiusY", &ELLIPSE_Y),
            inset_top: param_ranged(params, "insetTop", &INSET),
            inset_right: param_ranged(params, "insetRight", &INSET),
            inset_bottom: param_ranged(params, "insetBottom", &INSET),
            inset_left: param_ranged(params, "insetLeft", &INSET),
            inset_radius: param_ranged(params, "insetRadius", &ROUND),
            polygon_points: param_string(params, "polygonPoints", DEFAULT_POLYGON),
        }
    }

    pub fn value(&self) -> String {
        match self.shape {
            Shape::Circle => format!("circle({}% at 50% 50%)", num(self.circle_radius)),
            Shape::Ellipse => format!(
                "ellipse({}% {}% at 50% 50%)",
                num(self.ellipse_radius_x),
                num(self.ellipse_radius_y)
            ),
            Shape::Inset => {
                let round = if self.inset_radius > 0.0 {
                    format!(" round {}px", num(self.inset_radius))
                } else {
                    String::new()
                };
                format!(
                    "inset({}% {}% {}% {}%{round})",
                    num(self.inset_top),
                    num(self.inset_right),
                    num(self.inset_bottom),
                    num(self.inset_left)
                )
            }
            Shape::Polygon => format!("polygon({})", self.polygon_points),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClipPath {
    params: ClipPathParams,
}

impl ClipPath {
    pub fn new(params: ClipPathParams) -> Self {
        Self { params }
    }

    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self::new(ClipPathParams::from_json(params)))
    }
}

impl Editor for ClipPath {
    fn name(&self) -> &'static str {
        "clip-path"
    }

    fn params(&self) -> Value {
        json!(self.params)
    }

    fn param_schema(&self) -> Value {
        json!({
            "shape": choice_schema(Shape::NAMES, "circle", "Basic shape"),
            "circleRadius": PERCENT.schema("Circle radius in %"),
            "ellipseRadiusX": PERCENT.schema("Ellipse horizontal radius in %"),
            "ellipseRadiusY": ELLIPSE_Y.schema("Ellipse vertical radius in %"),
            "insetTop": INSET.schema("Top inset in %"),
            "insetRight": INSET.schema("Right inset in %"),
            "insetBottom": INSET.schema("Bottom inset in %"),
            "insetLeft": INSET.schema("Left inset in %"),
            "insetRadius": ROUND.schema("Inset corner rounding in px"),
            "polygonPoints": {"type": "string", "default": DEFAULT_POLYGON, "description": "Polygon points"},
        })
    }

    fn stylesheet(&self) -> StyleSheet {
        StyleSheet::single(StyleRule::bare(self.preview()))
    }

    fn preview(&self) -> Vec<Declaration> {
        let value = self.params.value();
        vec![
            decl("clip-path", value.clone()),
            decl("-webkit-clip-path", value),
        ]
    }
}
