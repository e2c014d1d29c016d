//! Single text shadow, previewed on sample text at a chosen size.

use serde::Serialize;
use serde_json::{json, Value};
use style_studio_core::format::num;
use style_studio_core::params::{param_ranged, param_string, Range};
use style_studio_core::style::{decl, Declaration, StyleRule, StyleSheet};
use style_studio_core::{Editor, StudioError};

pub const OFFSET_X: Range = Range::new(-20.0, 20.0, 1.0, 2.0);
pub const OFFSET_Y: Range = Range::new(-20.0, 20.0, 1.0, 2.0);
pub const BLUR: Range = Range::new(0.0, 20.0, 1.0, 3.0);
pub const FONT_SIZE: Range = Range::new(12.0, 72.0, 1.0, 36.0);
pub const DEFAULT_COLOR: &str = "rgba(0, 0, 0, 0.5)";
pub const DEFAULT_TEXT: &str = "Text Shadow";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextShadowParams {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub color: String,
    /// Preview only.
    pub font_size: f64,
    /// Preview only.
    pub text: String,
}

impl Default for TextShadowParams {
    fn default() -> Self {
        Self {
            offset_x: OFFSET_X.default,
            offset_y: OFFSET_Y.default,
            blur: BLUR.default,
            color: DEFAULT_COLOR.to_owned(),
            font_size: FONT_SIZE.default,
            text: DEFAULT_TEXT.to_owned(),
        }
    }
}

impl TextShadowParams {
    pub fn from_json(params: &Value) -> Self {
        Self {
            offset_x: param_ranged(params, "offsetX", &OFFSET_X),
            offset_y: param_ranged(params, "offsetY", &OFFSET_Y),
            blur: param_ranged(params, "blur", &BLUR),
            color: param_string(params, "color", DEFAULT_COLOR),
            font_size: param_ranged(params, "fontSize", &FONT_SIZE),
            text: param_string(params, "text", DEFAULT_TEXT),
        }
    }

    pub fn shadow(&self) -> String {
        format!(
            "{}px {}px {}px {}",
            num(self.offset_x),
            num(self.offset_y),
            num(self.blur),
            self.color
        )
    }
}

#[derive(Debug, Clone)]
pub struct TextShadow {
    params: TextShadowParams,
}

impl TextShadow {
    pub fn new(params: TextShadowParams) -> Self {
        Self { params }
    }

    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self::new(TextShadowParams::from_json(params)))
    }

    pub fn sample_text(&self) -> &str {
        &self.params.text
    }
}

impl Editor for TextShadow {
    fn name(&self) -> &'static str {
        "text-shadow"
    }

    fn params(&self) -> Value {
        json!(self.params)
    }

    fn param_schema(&self) -> Value {
        json!({
            "offsetX": OFFSET_X.schema("Horizontal offset in px"),
            "offsetY": OFFSET_Y.schema("Vertical offset in px"),
            "blur": BLUR.schema("Blur radius in px"),
            "color": {"type": "string", "default": DEFAULT_COLOR, "description": "Shadow color"},
            "fontSize": FONT_SIZE.schema("Preview font size in px"),
            "text": {"type": "string", "default": DEFAULT_TEXT, "description": "Preview text"},
        })
    }

    fn stylesheet(&self) -> StyleSheet {
        StyleSheet::single(StyleRule::bare(vec![decl("text-shadow", self.params.shadow())]))
    }

    fn preview(&self) -> Vec<Declaration> {
        vec![
            decl("font-size", format!("{}px", num(self.params.font_size))),
            decl("text-shadow", self.params.shadow()),
        ]
    }
}
