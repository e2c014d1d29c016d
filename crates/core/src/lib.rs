#![deny(unsafe_code)]
//! Core types and traits for the style-studio editors.
//!
//! Provides the `Editor` trait, the `Path` model with SVG path-data output,
//! `SvgDocument`, the structured `StyleSheet`, `Srgb` colors, random sources
//! (`Xorshift64`, `Sequence`), parameter helpers, and `Recipe`.

pub mod color;
pub mod editor;
pub mod error;
pub mod format;
pub mod params;
pub mod path;
pub mod prng;
pub mod recipe;
pub mod style;
pub mod svg;

pub use color::Srgb;
pub use editor::{render, Editor, Rendering};
pub use error::StudioError;
pub use path::{CommandKind, Path, PathCommand, Point};
pub use prng::{RandomSource, Sequence, Xorshift64};
pub use recipe::Recipe;
pub use style::{decl, Declaration, SheetItem, StyleRule, StyleSheet};
pub use svg::SvgDocument;
