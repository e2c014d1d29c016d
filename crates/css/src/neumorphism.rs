//! Soft-UI surface lit from the top-left.
//!
//! Two shadows of the background color, one darkened and one lightened by
//! `intensity`, are cast in opposite directions. A pressed surface draws both
//! inside the element.

use serde::Serialize;
use serde_json::{json, Value};
use std::str::FromStr;
use style_studio_core::color::{color_schema, param_color};
use style_studio_core::format::num;
use style_studio_core::params::{choice_schema, param_choice, param_ranged, Range};
use style_studio_core::style::{decl, Declaration, StyleRule, StyleSheet};
use style_studio_core::{Editor, Srgb, StudioError};

pub const SIZE: Range = Range::new(50.0, 300.0, 1.0, 100.0);
pub const RADIUS: Range = Range::new(0.0, 150.0, 1.0, 50.0);
pub const DISTANCE: Range = Range::new(5.0, 50.0, 1.0, 20.0);
pub const INTENSITY: Range = Range::new(0.05, 0.3, 0.01, 0.15);
pub const BLUR: Range = Range::new(0.0, 100.0, 1.0, 60.0);

/// Continuation indent aligning the second shadow under the first.
const SHADOW_INDENT: &str = "            ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    #[default]
    Flat,
    Pressed,
}

impl FromStr for Surface {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Surface::Flat),
            "pressed" => Ok(Surface::Pressed),
            other => Err(StudioError::InvalidParam {
                name: "type".into(),
                reason: format!("expected 'flat' or 'pressed', got '{other}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeumorphismParams {
    /// Preview only.
    pub size: f64,
    pub radius: f64,
    pub distance: f64,
    pub intensity: f64,
    pub blur: f64,
    pub background_color: Srgb,
    #[serde(rename = "type")]
    pub surface: Surface,
}

fn default_background() -> Srgb {
    Srgb::from_hex("#e0e0e0").expect("default surface is valid hex")
}

impl Default for NeumorphismParams {
    fn default() -> Self {
        Self {
            size: SIZE.default,
            radius: RADIUS.default,
            distance: DISTANCE.default,
            intensity: INTENSITY.default,
            blur: BLUR.default,
            background_color: default_background(),
            surface: Surface::default(),
        }
    }
}

impl NeumorphismParams {
    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self {
            size: param_ranged(params, "size", &SIZE),
            radius: param_ranged(params, "radius", &RADIUS),
            distance: param_ranged(params, "distance", &DISTANCE),
            intensity: param_ranged(params, "intensity", &INTENSITY),
            blur: param_ranged(params, "blur", &BLUR),
            background_color: param_color(params, "backgroundColor", default_background())?,
            surface: param_choice(params, "type", Surface::default()),
        })
    }

    /// Dark shadow toward the bottom-right, light toward the top-left.
    pub fn shadows(&self) -> [String; 2] {
        let inset = match self.surface {
            Surface::Flat => "",
            Surface::Pressed => "inset ",
        };
        let d = num(self.distance);
        let blur = num(self.blur);
        let dark = self.background_color.shade(-self.intensity).css_rgba(1.0);
        let light = self.background_color.shade(self.intensity).css_rgba(1.0);
        [
            format!("{inset}{d}px {d}px {blur}px {dark}"),
            format!("{inset}-{d}px -{d}px {blur}px {light}"),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Neumorphism {
    params: NeumorphismParams,
}

impl Neumorphism {
    pub fn new(params: NeumorphismParams) -> Self {
        Self { params }
    }

    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self::new(NeumorphismParams::from_json(params)?))
    }

    fn surface_declarations(&self, shadow_separator: &str) -> Vec<Declaration> {
        let p = &self.params;
        vec![
            decl("background", p.background_color.to_hex()),
            decl("border-radius", format!("{}px", num(p.radius))),
            decl("box-shadow", p.shadows().join(shadow_separator)),
        ]
    }
}

impl Editor for Neumorphism {
    fn name(&self) -> &'static str {
        "neumorphism"
    }

    fn params(&self) -> Value {
        json!(self.params)
    }

    fn param_schema(&self) -> Value {
        json!({
            "size": SIZE.schema("Preview element size in px"),
            "radius": RADIUS.schema("Corner radius in px"),
            "distance": DISTANCE.schema("Shadow offset in px"),
            "intensity": INTENSITY.schema("Shade strength"),
            "blur": BLUR.schema("Shadow blur in px"),
            "backgroundColor": color_schema(default_background(), "Surface color"),
            "type": choice_schema(&["flat", "pressed"], "flat", "Raised or pressed surface"),
        })
    }

    fn stylesheet(&self) -> StyleSheet {
        let separator = format!(",\n{SHADOW_INDENT}");
        StyleSheet::single(StyleRule::bare(self.surface_declarations(&separator)))
    }

    fn preview(&self) -> Vec<Declaration> {
        let size = format!("{}px", num(self.params.size));
        let mut decls = vec![decl("width", size.clone()), decl("height", size)];
        decls.extend(self.surface_declarations(", "));
        decls
    }
}
