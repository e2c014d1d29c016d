#![deny(unsafe_code)]
//! Editor registry: maps editor names to implementations, lists presets, and
//! exports documents to disk.
//!
//! This crate sits between `style-studio-core` (which defines the `Editor`
//! trait) and the editor crates (`style-studio-blob`, `style-studio-wave`,
//! `style-studio-css`). Both the CLI and the WASM bindings depend on it so
//! name-based dispatch lives in one place.

#[cfg(feature = "export")]
pub mod export;
pub mod presets;

pub use presets::{find_preset, merge_params, presets, NamedParams};

use serde_json::Value;
use style_studio_blob::Blob;
use style_studio_core::prng::{RandomSource, Xorshift64};
use style_studio_core::style::{Declaration, StyleSheet};
use style_studio_core::{Editor, Recipe, StudioError, SvgDocument};
use style_studio_css::{
    Animation, BorderRadius, BoxShadow, ClipPath, Filter, Flexbox, Glassmorphism, Gradient, Grid,
    Neumorphism, TextShadow, Transform,
};
use style_studio_wave::Wave;

/// All available editor names, in menu order.
const EDITOR_NAMES: &[&str] = &[
    "gradient",
    "box-shadow",
    "text-shadow",
    "border-radius",
    "glassmorphism",
    "neumorphism",
    "grid",
    "flexbox",
    "clip-path",
    "animation",
    "transform",
    "filter",
    "blob",
    "wave",
];

/// A PRNG for `seed`, or a fresh one when absent.
///
/// Without the `entropy` feature a missing seed falls back to seed 0.
fn seeded_rng(seed: Option<u64>) -> Xorshift64 {
    #[cfg(feature = "entropy")]
    let rng = seed.map(Xorshift64::new).unwrap_or_else(Xorshift64::from_entropy);
    #[cfg(not(feature = "entropy"))]
    let rng = Xorshift64::new(seed.unwrap_or_default());
    rng
}

/// Enumeration of every style editor.
///
/// Wraps each implementation and delegates the `Editor` trait. Use
/// [`EditorKind::from_name`] for string-based construction (CLI, WASM).
#[derive(Debug, Clone)]
pub enum EditorKind {
    Gradient(Gradient),
    BoxShadow(BoxShadow),
    TextShadow(TextShadow),
    BorderRadius(BorderRadius),
    Glassmorphism(Glassmorphism),
    Neumorphism(Neumorphism),
    Grid(Grid),
    Flexbox(Flexbox),
    ClipPath(ClipPath),
    Animation(Animation),
    Transform(Transform),
    Filter(Filter),
    /// Organic closed curve; the only editor that draws randomness.
    Blob(Blob),
    Wave(Wave),
}

impl EditorKind {
    /// Constructs an editor by name.
    ///
    /// `seed` pins the randomness of editors that draw any; `None` draws a
    /// fresh seed from the environment. Returns `StudioError::UnknownEditor`
    /// if the name is not recognized.
    #[tracing::instrument(skip(params), err)]
    pub fn from_name(name: &str, params: &Value, seed: Option<u64>) -> Result<Self, StudioError> {
        let editor = match name {
            "gradient" => EditorKind::Gradient(Gradient::from_json(params)?),
            "box-shadow" => EditorKind::BoxShadow(BoxShadow::from_json(params)?),
            "text-shadow" => EditorKind::TextShadow(TextShadow::from_json(params)?),
            "border-radius" => EditorKind::BorderRadius(BorderRadius::from_json(params)?),
            "glassmorphism" => EditorKind::Glassmorphism(Glassmorphism::from_json(params)?),
            "neumorphism" => EditorKind::Neumorphism(Neumorphism::from_json(params)?),
            "grid" => EditorKind::Grid(Grid::from_json(params)?),
            "flexbox" => EditorKind::Flexbox(Flexbox::from_json(params)?),
            "clip-path" => EditorKind::ClipPath(ClipPath::from_json(params)?),
            "animation" => EditorKind::Animation(Animation::from_json(params)?),
            "transform" => EditorKind::Transform(Transform::from_json(params)?),
            "filter" => EditorKind::Filter(Filter::from_json(params)?),
            "blob" => {
                EditorKind::Blob(Blob::from_json(params, &mut seeded_rng(seed))?)
            }
            "wave" => EditorKind::Wave(Wave::from_json(params)?),
            _ => return Err(StudioError::UnknownEditor(name.to_string())),
        };
        tracing::debug!(editor = name, "constructed editor");
        Ok(editor)
    }

    /// Validates a recipe and constructs the editor it describes.
    pub fn from_recipe(recipe: &Recipe) -> Result<Self, StudioError> {
        recipe.validate()?;
        Self::from_name(&recipe.editor, &recipe.params, recipe.seed)
    }

    /// Returns a slice of all recognized editor names.
    pub fn list_editors() -> &'static [&'static str] {
        EDITOR_NAMES
    }

    fn inner(&self) -> &dyn Editor {
        match self {
            EditorKind::Gradient(e) => e,
            EditorKind::BoxShadow(e) => e,
            EditorKind::TextShadow(e) => e,
            EditorKind::BorderRadius(e) => e,
            EditorKind::Glassmorphism(e) => e,
            EditorKind::Neumorphism(e) => e,
            EditorKind::Grid(e) => e,
            EditorKind::Flexbox(e) => e,
            EditorKind::ClipPath(e) => e,
            EditorKind::Animation(e) => e,
            EditorKind::Transform(e) => e,
            EditorKind::Filter(e) => e,
            EditorKind::Blob(e) => e,
            EditorKind::Wave(e) => e,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Editor {
        match self {
            EditorKind::Gradient(e) => e,
            EditorKind::BoxShadow(e) => e,
            EditorKind::TextShadow(e) => e,
            EditorKind::BorderRadius(e) => e,
            EditorKind::Glassmorphism(e) => e,
            EditorKind::Neumorphism(e) => e,
            EditorKind::Grid(e) => e,
            EditorKind::Flexbox(e) => e,
            EditorKind::ClipPath(e) => e,
            EditorKind::Animation(e) => e,
            EditorKind::Transform(e) => e,
            EditorKind::Filter(e) => e,
            EditorKind::Blob(e) => e,
            EditorKind::Wave(e) => e,
        }
    }
}

impl Editor for EditorKind {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn params(&self) -> Value {
        self.inner().params()
    }

    fn param_schema(&self) -> Value {
        self.inner().param_schema()
    }

    fn stylesheet(&self) -> StyleSheet {
        self.inner().stylesheet()
    }

    fn preview(&self) -> Vec<Declaration> {
        self.inner().preview()
    }

    fn svg(&self) -> Option<SvgDocument> {
        self.inner().svg()
    }

    fn markup(&self) -> Option<String> {
        self.inner().markup()
    }

    fn export_filename(&self) -> Option<&'static str> {
        self.inner().export_filename()
    }

    fn regenerate(&mut self, rng: &mut dyn RandomSource) {
        self.inner_mut().regenerate(rng)
    }
}
