//! Flexbox container playground.

use crate::{numbered_items, param_keyword, Preset};
use serde::Serialize;
use serde_json::{json, Value};
use style_studio_core::format::num;
use style_studio_core::params::{choice_schema, param_ranged, param_ranged_usize, Range};
use style_studio_core::style::{decl, Declaration, StyleRule, StyleSheet};
use style_studio_core::{Editor, StudioError};

pub const GAP: Range = Range::new(0.0, 50.0, 1.0, 16.0);
pub const ITEMS: Range = Range::new(1.0, 8.0, 1.0, 4.0);
pub const DIRECTIONS: &[&str] = &["row", "row-reverse", "column", "column-reverse"];
pub const JUSTIFY: &[&str] = &[
    "flex-start",
    "flex-end",
    "center",
    "space-between",
    "space-around",
    "space-evenly",
];
pub const ALIGN: &[&str] = &["flex-start", "flex-end", "center", "stretch", "baseline"];
pub const WRAP: &[&str] = &["nowrap", "wrap", "wrap-reverse"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexboxParams {
    pub direction: &'static str,
    pub justify_content: &'static str,
    pub align_items: &'static str,
    pub flex_wrap: &'static str,
    pub gap: f64,
    pub items: usize,
}

impl Default for FlexboxParams {
    fn default() -> Self {
        Self {
            direction: "row",
            justify_content: "flex-start",
            align_items: "stretch",
            flex_wrap: "nowrap",
            gap: GAP.default,
            items: ITEMS.default as usize,
        }
    }
}

impl FlexboxParams {
    pub fn from_json(params: &Value) -> Self {
        Self {
            direction: param_keyword(params, "direction", DIRECTIONS, "row"),
            justify_content: param_keyword(params, "justifyContent", JUSTIFY, "flex-start"),
            align_items: param_keyword(params, "alignItems", ALIGN, "stretch"),
            flex_wrap: param_keyword(params, "flexWrap", WRAP, "nowrap"),
            gap: param_ranged(params, "gap", &GAP),
            items: param_ranged_usize(params, "items", &ITEMS),
        }
    }

    /// The third item's `align-self`, chosen to visibly break the pattern.
    pub fn contrasting_align_self(&self) -> &'static str {
        if self.align_items == "stretch" {
            "flex-end"
        } else {
            "stretch"
        }
    }

    fn template(
        direction: &'static str,
        justify_content: &'static str,
        align_items: &'static str,
        flex_wrap: &'static str,
        gap: f64,
    ) -> Self {
        Self {
            direction,
            justify_content,
            align_items,
            flex_wrap,
            gap,
            ..Self::default()
        }
    }
}

/// Common layouts. The item count is left alone.
pub fn templates() -> Vec<Preset<FlexboxParams>> {
    vec![
        Preset::new(
            "Navbar",
            FlexboxParams::template("row", "space-between", "center", "nowrap", 16.0),
        ),
        Preset::new(
            "Card List",
            FlexboxParams::template("row", "flex-start", "stretch", "wrap", 20.0),
        ),
        Preset::new(
            "Centered Content",
            FlexboxParams::template("column", "center", "center", "nowrap", 16.0),
        ),
        Preset::new(
            "Footer",
            FlexboxParams::template("row", "space-evenly", "flex-start", "wrap", 24.0),
        ),
        Preset::new(
            "Sidebar",
            FlexboxParams::template("column", "flex-start", "stretch", "nowrap", 8.0),
        ),
    ]
}

#[derive(Debug, Clone)]
pub struct Flexbox {
    params: FlexboxParams,
}

impl Flexbox {
    pub fn new(params: FlexboxParams) -> Self {
        Self { params }
    }

    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self::new(FlexboxParams::from_json(params)))
    }
}

impl Editor for Flexbox {
    fn name(&self) -> &'static str {
        "flexbox"
    }

    fn params(&self) -> Value {
        json!(self.params)
    }

    fn param_schema(&self) -> Value {
        json!({
            "direction": choice_schema(DIRECTIONS, "row", "flex-direction"),
            "justifyContent": choice_schema(JUSTIFY, "flex-start", "justify-content"),
            "alignItems": choice_schema(ALIGN, "stretch", "align-items"),
            "flexWrap": choice_schema(WRAP, "nowrap", "flex-wrap"),
            "gap": GAP.schema("Gap between items in px"),
            "items": ITEMS.integer_schema("Number of items in the markup"),
        })
    }

    fn stylesheet(&self) -> StyleSheet {
        StyleSheet::new()
            .rule(StyleRule::new(".container", self.preview()))
            .media(
                Some("Responsive version"),
                "(max-width: 768px)",
                vec![StyleRule::new(".container", vec![decl("flex-direction", "column")])],
            )
            .rule(
                StyleRule::new(
                    ".flex-item",
                    vec![
                        decl("padding", "1rem"),
                        decl("border-radius", "0.5rem"),
                        decl("background-color", "#f1f5f9"),
                        decl("box-shadow", "0 1px 3px rgba(0, 0, 0, 0.1)"),
                    ],
                )
                .with_comment("Example item styling"),
            )
            .rule(
                StyleRule::new(
                    ".flex-item:nth-child(1)",
                    vec![decl("flex", "2").with_note("Takes twice as much space")],
                )
                .with_comment("Example for specific flex item properties"),
            )
            .rule(StyleRule::new(
                ".flex-item:nth-child(3)",
                vec![decl("align-self", self.params.contrasting_align_self())],
            ))
    }

    fn preview(&self) -> Vec<Declaration> {
        let p = &self.params;
        vec![
            decl("display", "flex"),
            decl("flex-direction", p.direction),
            decl("justify-content", p.justify_content),
            decl("align-items", p.align_items),
            decl("flex-wrap", p.flex_wrap),
            decl("gap", format!("{}px", num(p.gap))),
        ]
    }

    fn markup(&self) -> Option<String> {
        Some(numbered_items("flex-item", self.params.items))
    }
}
