//! Single box shadow.

use serde::Serialize;
use serde_json::{json, Value};
use style_studio_core::format::num;
use style_studio_core::params::{param_bool, param_ranged, param_string, Range};
use style_studio_core::style::{decl, Declaration, StyleRule, StyleSheet};
use style_studio_core::{Editor, StudioError};

pub const OFFSET_X: Range = Range::new(-50.0, 50.0, 1.0, 5.0);
pub const OFFSET_Y: Range = Range::new(-50.0, 50.0, 1.0, 5.0);
pub const BLUR: Range = Range::new(0.0, 100.0, 1.0, 10.0);
pub const SPREAD: Range = Range::new(-50.0, 50.0, 1.0, 0.0);
pub const DEFAULT_COLOR: &str = "rgba(0, 0, 0, 0.2)";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxShadowParams {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    /// Any CSS color; passed through verbatim.
    pub color: String,
    pub inset: bool,
}

impl Default for BoxShadowParams {
    fn default() -> Self {
        Self {
            offset_x: OFFSET_X.default,
            offset_y: OFFSET_Y.default,
            blur: BLUR.default,
            spread: SPREAD.default,
            color: DEFAULT_COLOR.to_owned(),
            inset: false,
        }
    }
}

impl BoxShadowParams {
    pub fn from_json(params: &Value) -> Self {
        Self {
            offset_x: param_ranged(params, "offsetX", &OFFSET_X),
            offset_y: param_ranged(params, "offsetY", &OFFSET_Y),
            blur: param_ranged(params, "blur", &BLUR),
            spread: param_ranged(params, "spread", &SPREAD),
            color: param_string(params, "color", DEFAULT_COLOR),
            inset: param_bool(params, "inset", false),
        }
    }

    /// `[inset ]Xpx Ypx Bpx Spx color`
    pub fn shadow(&self) -> String {
        format!(
            "{}{}px {}px {}px {}px {}",
            if self.inset { "inset " } else { "" },
            num(self.offset_x),
            num(self.offset_y),
            num(self.blur),
            num(self.spread),
            self.color
        )
    }
}

#[derive(Debug, Clone)]
pub struct BoxShadow {
    params: BoxShadowParams,
}

impl BoxShadow {
    pub fn new(params: BoxShadowParams) -> Self {
        Self { params }
    }

    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self::new(BoxShadowParams::from_json(params)))
    }
}

impl Editor for BoxShadow {
    fn name(&self) -> &'static str {
        "box-shadow"
    }

    fn params(&self) -> Value {
        json!(self.params)
    }

    fn param_schema(&self) -> Value {
        json!({
            "offsetX": OFFSET_X.schema("Horizontal offset in px"),
            "offsetY": OFFSET_Y.schema("Vertical offset in px"),
            "blur": BLUR.schema("Blur radius in px"),
            "spread": SPREAD.schema("Spread radius in px"),
            "color": {"type": "string", "default": DEFAULT_COLOR, "description": "Shadow color"},
            "inset": {"type": "boolean", "default": false, "description": "Draw inside the border"},
        })
    }

    fn stylesheet(&self) -> StyleSheet {
        StyleSheet::single(StyleRule::bare(self.preview()))
    }

    fn preview(&self) -> Vec<Declaration> {
        vec![decl("box-shadow", self.params.shadow())]
    }
}
