#![deny(unsafe_code)]
//! Organic blob generator.
//!
//! Places `point_count` points at equal angular steps around the center of a
//! `size`×`size` box, each at a randomly perturbed radius, and joins them with
//! cubic segments into a closed outline. The `contrast` factor controls how far
//! radii may stray from `size / 2`: 0 gives a regular polygon-like shape, 1
//! lets radii range over the whole `[0, size]`.
//!
//! Control points sit on the *current* point's radius scaled by
//! [`CONTROL_SCALE`], at one and two thirds of a step behind its angle. This
//! yields soft, slightly bulging connectors rather than a true interpolating
//! spline; the look is intentional.

use serde::Serialize;
use serde_json::{json, Value};
use std::f64::consts::TAU;
use style_studio_core::color::{color_schema, param_color};
use style_studio_core::params::{param_ranged, param_ranged_usize, Range};
use style_studio_core::style::{decl, Declaration, StyleRule, StyleSheet};
use style_studio_core::{Editor, Path, Point, RandomSource, Srgb, StudioError, SvgDocument};

/// Radius multiplier applied to control points.
pub const CONTROL_SCALE: f64 = 1.2;

/// Number of points around the outline.
pub const COMPLEXITY: Range = Range::new(3.0, 12.0, 1.0, 5.0);
/// Radius variation in percent.
pub const CONTRAST: Range = Range::new(0.0, 100.0, 1.0, 50.0);
/// Side of the square bounding box in px.
pub const SIZE: Range = Range::new(100.0, 500.0, 10.0, 300.0);
/// Default fill.
pub const DEFAULT_COLOR: &str = "#8b5cf6";

/// Geometric input of [`generate_curve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveSpec {
    /// Number of points; 3 or more for a meaningful outline.
    pub point_count: usize,
    /// Side of the square bounding box.
    pub size: f64,
    /// Radius variation in [0, 1].
    pub contrast: f64,
}

/// Generates a closed blob outline.
///
/// Emits one move-to, `point_count - 1` cubic segments, and a close. Takes one
/// draw from `rng` per point. Never fails: `point_count` below 3 yields a
/// degenerate but well-formed path (a lone close for 0).
pub fn generate_curve<R: RandomSource + ?Sized>(spec: &CurveSpec, rng: &mut R) -> Path {
    let n = spec.point_count;
    let half = spec.size / 2.0;
    let center = Point::new(half, half);
    let step = TAU / n as f64;
    let mut path = Path::with_capacity(n + 1);

    for i in 0..n {
        let angle = i as f64 * step;
        let radius = half * (1.0 - spec.contrast + rng.next_f64() * spec.contrast * 2.0);
        let point = Point::polar(center, radius, angle);
        if i == 0 {
            path.move_to(point);
        } else {
            let reach = radius * CONTROL_SCALE;
            let c1 = Point::polar(center, reach, angle - step / 3.0);
            let c2 = Point::polar(center, reach, angle - step * 2.0 / 3.0);
            path.cubic_to(c1, c2, point);
        }
    }
    path.close();

    tracing::debug!(
        points = n,
        size = spec.size,
        contrast = spec.contrast,
        "generated blob outline"
    );
    path
}

/// Slider state of the blob editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlobParams {
    pub complexity: usize,
    /// Percent, 0..=100.
    pub contrast: f64,
    pub size: f64,
    pub color: Srgb,
}

impl Default for BlobParams {
    fn default() -> Self {
        Self {
            complexity: COMPLEXITY.default as usize,
            contrast: CONTRAST.default,
            size: SIZE.default,
            color: default_color(),
        }
    }
}

fn default_color() -> Srgb {
    Srgb::from_hex(DEFAULT_COLOR).expect("default blob color is valid hex")
}

impl BlobParams {
    /// Extracts parameters from a JSON object, clamping to slider ranges.
    ///
    /// Fails only when `color` is present but not a hex color.
    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self {
            complexity: param_ranged_usize(params, "complexity", &COMPLEXITY),
            contrast: param_ranged(params, "contrast", &CONTRAST),
            size: param_ranged(params, "size", &SIZE),
            color: param_color(params, "color", default_color())?,
        })
    }

    /// Converts slider units to generator units.
    pub fn spec(&self) -> CurveSpec {
        CurveSpec {
            point_count: self.complexity,
            size: self.size,
            contrast: self.contrast / 100.0,
        }
    }
}

/// Blob editor: the parameters plus the outline last drawn from them.
#[derive(Debug, Clone)]
pub struct Blob {
    params: BlobParams,
    path: Path,
}

impl Blob {
    /// Creates the editor and draws its first outline.
    pub fn new(params: BlobParams, rng: &mut dyn RandomSource) -> Self {
        let path = generate_curve(&params.spec(), rng);
        Self { params, path }
    }

    pub fn from_json(params: &Value, rng: &mut dyn RandomSource) -> Result<Self, StudioError> {
        Ok(Self::new(BlobParams::from_json(params)?, rng))
    }

    pub fn blob_params(&self) -> &BlobParams {
        &self.params
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn px(&self) -> String {
        format!("{}px", style_studio_core::format::num(self.params.size))
    }
}

impl Editor for Blob {
    fn name(&self) -> &'static str {
        "blob"
    }

    fn params(&self) -> Value {
        json!({
            "complexity": self.params.complexity,
            "contrast": self.params.contrast,
            "size": self.params.size,
            "color": self.params.color.to_hex(),
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "complexity": COMPLEXITY.integer_schema("Number of points around the outline"),
            "contrast": CONTRAST.integer_schema("How far radii may stray from the circle, in percent"),
            "size": SIZE.schema("Side of the square canvas in px"),
            "color": color_schema(default_color(), "Blob fill"),
        })
    }

    fn stylesheet(&self) -> StyleSheet {
        StyleSheet::single(StyleRule::new(".blob", self.preview()))
    }

    fn preview(&self) -> Vec<Declaration> {
        vec![
            decl("width", self.px()),
            decl("height", self.px()),
            decl("background", self.params.color.to_hex()),
            decl("clip-path", format!("path('{}')", self.path)),
        ]
    }

    fn svg(&self) -> Option<SvgDocument> {
        Some(SvgDocument {
            width: self.params.size,
            height: self.params.size,
            path: self.path.clone(),
            fill: self.params.color,
            sized: false,
        })
    }

    fn export_filename(&self) -> Option<&'static str> {
        Some("blob.svg")
    }

    fn regenerate(&mut self, rng: &mut dyn RandomSource) {
        self.path = generate_curve(&self.params.spec(), rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_studio_core::{CommandKind, Sequence, Xorshift64};

    const EPSILON: f64 = 1e-9;

    fn spec(point_count: usize, size: f64, contrast: f64) -> CurveSpec {
        CurveSpec {
            point_count,
            size,
            contrast,
        }
    }

    fn center_distances(path: &Path, size: f64) -> Vec<f64> {
        let c = Point::new(size / 2.0, size / 2.0);
        path.points().iter().map(|p| p.distance(c)).collect()
    }

    // ---- Generator structure ----

    #[test]
    fn outline_has_one_move_then_curves_then_close() {
        let mut rng = Xorshift64::new(42);
        let path = generate_curve(&spec(7, 300.0, 0.5), &mut rng);
        assert_eq!(path.count(CommandKind::MoveTo), 1);
        assert_eq!(path.count(CommandKind::CubicTo), 6);
        assert_eq!(path.count(CommandKind::Close), 1);
        assert_eq!(path.len(), 8);
        assert!(path.is_closed());
        assert!(path.to_string().starts_with('M'));
        assert!(path.to_string().ends_with(" Z"));
    }

    #[test]
    fn takes_one_draw_per_point() {
        let mut seq = Sequence::constant(0.25);
        let _ = generate_curve(&spec(9, 200.0, 0.3), &mut seq);
        assert_eq!(seq.draws(), 9);
    }

    #[test]
    fn zero_contrast_gives_constant_radius() {
        let mut rng = Xorshift64::new(7);
        let path = generate_curve(&spec(8, 240.0, 0.0), &mut rng);
        for d in center_distances(&path, 240.0) {
            assert!((d - 120.0).abs() < EPSILON, "distance {d} != 120");
        }
    }

    #[test]
    fn four_points_at_quarter_turns() {
        let mut rng = Xorshift64::new(1);
        let path = generate_curve(&spec(4, 300.0, 0.0), &mut rng);
        let expected = [(300.0, 150.0), (150.0, 300.0), (0.0, 150.0), (150.0, 0.0)];
        let points = path.points();
        assert_eq!(points.len(), 4);
        for (p, (x, y)) in points.iter().zip(expected) {
            assert!((p.x - x).abs() < EPSILON && (p.y - y).abs() < EPSILON, "{p:?}");
            assert!((p.distance(Point::new(150.0, 150.0)) - 150.0).abs() < EPSILON);
        }
    }

    #[test]
    fn scripted_draws_give_exact_output() {
        // u = 0.5 with contrast 0.5 keeps the radius at size / 2.
        let mut seq = Sequence::constant(0.5);
        let path = generate_curve(&spec(3, 100.0, 0.5), &mut seq);
        assert!(path.to_string().starts_with("M100,50 C"));
    }

    #[test]
    fn minimum_draw_at_full_contrast_collapses_to_center() {
        let mut seq = Sequence::new(vec![0.0, 0.5, 0.5]);
        let path = generate_curve(&spec(3, 100.0, 1.0), &mut seq);
        assert_eq!(path.points()[0], Point::new(50.0, 50.0));
    }

    #[test]
    fn control_points_follow_current_radius() {
        let mut seq = Sequence::constant(0.5);
        let path = generate_curve(&spec(4, 200.0, 0.0), &mut seq);
        let c = Point::new(100.0, 100.0);
        match path.commands()[1] {
            style_studio_core::PathCommand::CubicTo(c1, c2, _) => {
                assert!((c1.distance(c) - 120.0).abs() < EPSILON);
                assert!((c2.distance(c) - 120.0).abs() < EPSILON);
            }
            other => panic!("expected cubic, got {other:?}"),
        }
    }

    #[test]
    fn degenerate_point_counts_do_not_panic() {
        let mut rng = Xorshift64::new(3);
        assert_eq!(generate_curve(&spec(0, 100.0, 0.5), &mut rng).to_string(), "Z");
        let one = generate_curve(&spec(1, 100.0, 0.5), &mut rng);
        assert_eq!(one.len(), 2);
        assert!(one.is_closed());
    }

    #[test]
    fn same_seed_same_outline() {
        let s = spec(6, 300.0, 0.8);
        let a = generate_curve(&s, &mut Xorshift64::new(99));
        let b = generate_curve(&s, &mut Xorshift64::new(99));
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn fresh_draws_give_new_outline_with_same_structure() {
        let s = spec(6, 300.0, 0.8);
        let a = generate_curve(&s, &mut Xorshift64::new(1));
        let b = generate_curve(&s, &mut Xorshift64::new(2));
        assert_ne!(a.to_string(), b.to_string());
        assert_eq!(a.len(), b.len());
        assert_eq!(a.count(CommandKind::CubicTo), b.count(CommandKind::CubicTo));
    }

    // ---- Params ----

    #[test]
    fn from_json_uses_defaults_for_empty_json() {
        let p = BlobParams::from_json(&json!({})).unwrap();
        assert_eq!(p, BlobParams::default());
        assert_eq!(p.spec().contrast, 0.5);
    }

    #[test]
    fn from_json_clamps_to_slider_ranges() {
        let p = BlobParams::from_json(&json!({"complexity": 40, "contrast": 150, "size": 20}))
            .unwrap();
        assert_eq!(p.complexity, 12);
        assert_eq!(p.contrast, 100.0);
        assert_eq!(p.size, 100.0);
        let low = BlobParams::from_json(&json!({"complexity": 1})).unwrap();
        assert_eq!(low.complexity, 3);
    }

    #[test]
    fn from_json_rejects_bad_color() {
        assert!(BlobParams::from_json(&json!({"color": "purple"})).is_err());
    }

    // ---- Editor ----

    fn blob(seed: u64) -> Blob {
        Blob::new(BlobParams::default(), &mut Xorshift64::new(seed))
    }

    #[test]
    fn css_clips_to_generated_path() {
        let b = blob(42);
        let css = b.stylesheet().to_string();
        assert!(css.starts_with(".blob {\n  width: 300px;\n  height: 300px;\n  background: #8b5cf6;\n"));
        assert!(css.contains(&format!("clip-path: path('{}');", b.path())));
        assert!(css.ends_with("\n}"));
    }

    #[test]
    fn svg_document_uses_square_viewbox() {
        let doc = blob(42).svg().unwrap();
        let text = doc.to_pretty();
        assert!(text.starts_with("<svg viewBox=\"0 0 300 300\""));
        assert!(text.contains("fill=\"#8b5cf6\""));
        assert!(!doc.sized);
    }

    #[test]
    fn preview_and_css_agree() {
        let b = blob(5);
        let sheet = b.stylesheet();
        let rule = sheet.rules().next().unwrap();
        assert_eq!(rule.declarations, b.preview());
    }

    #[test]
    fn regenerate_draws_a_new_outline() {
        let mut b = blob(42);
        let before = b.path().clone();
        b.regenerate(&mut Xorshift64::new(43));
        assert_ne!(&before, b.path());
        assert_eq!(before.len(), b.path().len());
    }

    #[test]
    fn params_and_schema_cover_all_fields() {
        let b = blob(1);
        let params = b.params();
        let schema = b.param_schema();
        for key in ["complexity", "contrast", "size", "color"] {
            assert!(params.get(key).is_some(), "missing param {key}");
            assert!(schema.get(key).is_some(), "missing schema {key}");
        }
        assert_eq!(b.export_filename(), Some("blob.svg"));
    }

    #[test]
    fn editor_is_object_safe() {
        let editor: Box<dyn Editor> = Box::new(blob(2));
        assert_eq!(editor.name(), "blob");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn radii_stay_within_contrast_band(
                seed: u64,
                n in 3_usize..=12,
                size in 100.0_f64..500.0,
                contrast in 0.0_f64..=1.0,
            ) {
                let path = generate_curve(&spec(n, size, contrast), &mut Xorshift64::new(seed));
                let half = size / 2.0;
                for d in center_distances(&path, size) {
                    prop_assert!(d >= half * (1.0 - contrast) - 1e-6);
                    prop_assert!(d <= half * (1.0 + contrast) + 1e-6);
                }
            }

            #[test]
            fn command_structure_depends_only_on_point_count(
                seed: u64,
                n in 3_usize..=12,
                contrast in 0.0_f64..=1.0,
            ) {
                let path = generate_curve(&spec(n, 300.0, contrast), &mut Xorshift64::new(seed));
                prop_assert_eq!(path.count(CommandKind::MoveTo), 1);
                prop_assert_eq!(path.count(CommandKind::CubicTo), n - 1);
                prop_assert_eq!(path.count(CommandKind::Close), 1);
            }
        }
    }
}
