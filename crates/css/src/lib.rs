#![deny(unsafe_code)]
//! Parameter-to-style editors.
//!
//! Every editor here is a direct interpolation of clamped numeric and keyword
//! parameters into a fixed style template. Optional clauses are omitted when
//! their value is the identity (a zero blur, a 100% brightness, and so on).
//! Gradient, shadow, radius, glass and soft-UI editors emit bare declarations;
//! filter, transform, grid, flexbox and animation emit full rule blocks.

pub mod animation;
pub mod border_radius;
pub mod box_shadow;
pub mod clip_path;
pub mod filter;
pub mod flexbox;
pub mod gallery;
pub mod glassmorphism;
pub mod gradient;
pub mod grid;
pub mod neumorphism;
pub mod text_shadow;
pub mod transform;

pub use animation::{Animation, AnimationParams};
pub use border_radius::{BorderRadius, BorderRadiusParams};
pub use box_shadow::{BoxShadow, BoxShadowParams};
pub use clip_path::{ClipPath, ClipPathParams};
pub use filter::{Filter, FilterParams};
pub use flexbox::{Flexbox, FlexboxParams};
pub use gallery::{random_gradient, GalleryGradient};
pub use glassmorphism::{Glassmorphism, GlassmorphismParams};
pub use gradient::{Gradient, GradientParams};
pub use grid::{Grid, GridParams};
pub use neumorphism::{Neumorphism, NeumorphismParams};
pub use text_shadow::{TextShadow, TextShadowParams};
pub use transform::{Transform, TransformParams};

use serde::Serialize;
use serde_json::Value;

/// A named starting point offered next to an editor's controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preset<P> {
    pub name: &'static str,
    pub params: P,
}

impl<P> Preset<P> {
    pub const fn new(name: &'static str, params: P) -> Self {
        Self { name, params }
    }
}

/// Reads a keyword parameter restricted to `options`.
///
/// Returns the matching option itself so params can hold `&'static str`.
/// Anything not listed yields `default`.
pub(crate) fn param_keyword(
    params: &Value,
    name: &str,
    options: &'static [&'static str],
    default: &'static str,
) -> &'static str {
    params
        .get(name)
        .and_then(Value::as_str)
        .and_then(|s| options.iter().copied().find(|o| *o == s))
        .unwrap_or(default)
}

/// Markup followed by its style sheet in a `<style>` element, ready to paste.
pub fn html_snippet(markup: &str, css: &str) -> String {
    format!("{markup}\n\n<style>\n{css}\n</style>")
}

/// Container markup holding `count` numbered children of class `item_class`.
pub(crate) fn numbered_items(item_class: &str, count: usize) -> String {
    let mut html = String::from("<div class=\"container\">\n");
    for i in 1..=count {
        html.push_str(&format!("  <div class=\"{item_class}\">Item {i}</div>\n"));
    }
    html.push_str("</div>");
    html
}
