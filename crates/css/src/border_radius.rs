//! Per-corner border radius.

use serde::Serialize;
use serde_json::{json, Value};
use style_studio_core::format::num;
use style_studio_core::params::{param_bool, param_ranged, Range};
use style_studio_core::style::{decl, Declaration, StyleRule, StyleSheet};
use style_studio_core::{Editor, StudioError};

pub const CORNER: Range = Range::new(0.0, 100.0, 1.0, 10.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderRadiusParams {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
    /// All corners follow `top_left`.
    pub linked: bool,
}

impl Default for BorderRadiusParams {
    fn default() -> Self {
        Self {
            top_left: CORNER.default,
            top_right: CORNER.default,
            bottom_right: CORNER.default,
            bottom_left: CORNER.default,
            linked: true,
        }
    }
}

impl BorderRadiusParams {
    pub fn from_json(params: &Value) -> Self {
        let top_left = param_ranged(params, "topLeft", &CORNER);
        let linked = param_bool(params, "linked", true);
        if linked {
            return Self::uniform(top_left);
        }
        Self {
            top_left,
            top_right: param_ranged(params, "topRight", &CORNER),
            bottom_right: param_ranged(params, "bottomRight", &CORNER),
            bottom_left: param_ranged(params, "bottomLeft", &CORNER),
            linked,
        }
    }

    pub fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
            linked: true,
        }
    }

    /// Clockwise from top-left.
    pub fn corners(&self) -> [f64; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }

    /// One length when all corners agree, otherwise four.
    pub fn value(&self) -> String {
        let corners = self.corners();
        if corners.iter().all(|&c| c == self.top_left) {
            return format!("{}px", num(self.top_left));
        }
        corners
            .iter()
            .map(|&c| format!("{}px", num(c)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone)]
pub struct BorderRadius {
    params: BorderRadiusParams,
}

impl BorderRadius {
    pub fn new(params: BorderRadiusParams) -> Self {
        Self { params }
    }

    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self::new(BorderRadiusParams::from_json(params)))
    }
}

impl Editor for BorderRadius {
    fn name(&self) -> &'static str {
        "border-radius"
    }

    fn params(&self) -> Value {
        json!(self.params)
    }

    fn param_schema(&self) -> Value {
        json!({
            "topLeft": CORNER.schema("Top-left radius in px (all corners when linked)"),
            "topRight": CORNER.schema("Top-right radius in px"),
            "bottomRight": CORNER.schema("Bottom-right radius in px"),
            "bottomLeft": CORNER.schema("Bottom-left radius in px"),
            "linked": {"type": "boolean", "default": true, "description": "Edit all corners together"},
        })
    }

    fn stylesheet(&self) -> StyleSheet {
        StyleSheet::single(StyleRule::bare(self.preview()))
    }

    fn preview(&self) -> Vec<Declaration> {
        vec![decl("border-radius", self.params.value())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn css(params: Value) -> String {
        BorderRadius::from_json(&params).unwrap().stylesheet().to_string()
    }

    #[test]
    fn equal_corners_collapse_to_one_value() {
        assert_eq!(css(json!({})), "border-radius: 10px;");
        assert_eq!(
            css(json!({"linked": false, "topLeft": 4, "topRight": 4, "bottomRight": 4, "bottomLeft": 4})),
            "border-radius: 4px;"
        );
    }

    #[test]
    fn unequal_corners_list_all_four_clockwise() {
        assert_eq!(
            css(json!({"linked": false, "topLeft": 0, "topRight": 20, "bottomRight": 40, "bottomLeft": 60})),
            "border-radius: 0px 20px 40px 60px;"
        );
    }

    #[test]
    fn linked_ignores_other_corners() {
        let p = BorderRadiusParams::from_json(&json!({"topLeft": 25, "topRight": 90}));
        assert_eq!(p.corners(), [25.0; 4]);
    }

    #[test]
    fn corners_are_clamped() {
        let p = BorderRadiusParams::from_json(&json!({"linked": false, "topLeft": -5, "bottomLeft": 500}));
        assert_eq!(p.top_left, 0.0);
        assert_eq!(p.bottom_left, 100.0);
    }
}
