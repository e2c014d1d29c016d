//! CSS grid container with responsive fallback and example item rules.

use crate::{numbered_items, param_keyword, Preset};
use serde::Serialize;
use serde_json::{json, Value};
use style_studio_core::format::num;
use style_studio_core::params::{choice_schema, param_ranged, param_ranged_usize, param_string, Range};
use style_studio_core::style::{decl, Declaration, StyleRule, StyleSheet};
use style_studio_core::{Editor, StudioError};

pub const GAP: Range = Range::new(0.0, 50.0, 1.0, 16.0);
pub const ITEMS: Range = Range::new(1.0, 12.0, 1.0, 6.0);
pub const ALIGNMENTS: &[&str] = &["start", "end", "center", "stretch"];
pub const DEFAULT_COLUMNS: &str = "1fr 1fr 1fr";
pub const DEFAULT_ROWS: &str = "auto auto";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridParams {
    /// Raw `grid-template-columns` track list.
    pub columns: String,
    /// Raw `grid-template-rows` track list.
    pub rows: String,
    pub gap: f64,
    /// Number of children in the markup.
    pub items: usize,
    pub justify_items: &'static str,
    pub align_items: &'static str,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS.to_owned(),
            rows: DEFAULT_ROWS.to_owned(),
            gap: GAP.default,
            items: ITEMS.default as usize,
            justify_items: "stretch",
            align_items: "stretch",
        }
    }
}

impl GridParams {
    pub fn from_json(params: &Value) -> Self {
        Self {
            columns: param_string(params, "columns", DEFAULT_COLUMNS),
            rows: param_string(params, "rows", DEFAULT_ROWS),
            gap: param_ranged(params, "gap", &GAP),
            items: param_ranged_usize(params, "items", &ITEMS),
            justify_items: param_keyword(params, "justifyItems", ALIGNMENTS, "stretch"),
            align_items: param_keyword(params, "alignItems", ALIGNMENTS, "stretch"),
        }
    }

    fn template(columns: &str, rows: &str, gap: f64) -> Self {
        Self {
            columns: columns.to_owned(),
            rows: rows.to_owned(),
            gap,
            ..Self::default()
        }
    }
}

/// Common layouts. Applying one sets tracks and gap, nothing else.
pub fn templates() -> Vec<Preset<GridParams>> {
    vec![
        Preset::new("Basic 3-Column", GridParams::template("1fr 1fr 1fr", "auto", 16.0)),
        Preset::new(
            "Responsive Cards",
            GridParams::template("repeat(auto-fill, minmax(250px, 1fr))", "auto", 20.0),
        ),
        Preset::new(
            "Holy Grail Layout",
            GridParams::template("200px 1fr 200px", "auto 1fr auto", 16.0),
        ),
        Preset::new(
            "Dashboard Layout",
            GridParams::template("repeat(4, 1fr)", "auto auto auto", 16.0),
        ),
        Preset::new(
            "Magazine Layout",
            GridParams::template("repeat(6, 1fr)", "repeat(4, auto)", 12.0),
        ),
    ]
}

#[derive(Debug, Clone)]
pub struct Grid {
    params: GridParams,
}

impl Grid {
    pub fn new(params: GridParams) -> Self {
        Self { params }
    }

    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self::new(GridParams::from_json(params)))
    }
}

impl Editor for Grid {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn params(&self) -> Value {
        json!(self.params)
    }

    fn param_schema(&self) -> Value {
        json!({
            "columns": {"type": "string", "default": DEFAULT_COLUMNS, "description": "grid-template-columns"},
            "rows": {"type": "string", "default": DEFAULT_ROWS, "description": "grid-template-rows"},
            "gap": GAP.schema("Gap between tracks in px"),
            "items": ITEMS.integer_schema("Number of items in the markup"),
            "justifyItems": choice_schema(ALIGNMENTS, "stretch", "Inline-axis item alignment"),
            "alignItems": choice_schema(ALIGNMENTS, "stretch", "Block-axis item alignment"),
        })
    }

    fn stylesheet(&self) -> StyleSheet {
        StyleSheet::new()
            .rule(StyleRule::new(".container", self.preview()))
            .media(
                Some("Responsive version"),
                "(max-width: 768px)",
                vec![StyleRule::new(
                    ".container",
                    vec![decl("grid-template-columns", "1fr")],
                )],
            )
            .rule(
                StyleRule::new(
                    ".grid-item",
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
                    ".grid-item:nth-child(1)",
                    vec![decl("grid-column", "1 / 3").with_note("Spans 2 columns")],
                )
                .with_comment("Example for specific grid item placement"),
            )
            .rule(StyleRule::new(
                ".grid-item:nth-child(4)",
                vec![decl("grid-row", "span 2").with_note("Spans 2 rows")],
            ))
    }

    fn preview(&self) -> Vec<Declaration> {
        let p = &self.params;
        vec![
            decl("display", "grid"),
            decl("grid-template-columns", p.columns.clone()),
            decl("grid-template-rows", p.rows.clone()),
            decl("gap", format!("{}px", num(p.gap))),
            decl("justify-items", p.justify_items),
            decl("align-items", p.align_items),
        ]
    }

    fn markup(&self) -> Option<String> {
        Some(numbered_items("grid-item", self.params.items))
    }
}
