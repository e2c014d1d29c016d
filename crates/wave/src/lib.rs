#![deny(unsafe_code)]
//! Periodic wave generator.
//!
//! Traces an up/down wave across `width` and closes it into a filled band
//! against the top or bottom edge. Segment `i` alternates between a full
//! `amplitude` crest and a half-amplitude trough; the first segment is a cubic
//! curve and every later one a smooth continuation, so the outline stays
//! tangent-continuous at segment joins. Fully deterministic.

use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use style_studio_core::color::{color_schema, param_color};
use style_studio_core::format::num;
use style_studio_core::params::{choice_schema, param_choice, param_ranged, param_ranged_usize, Range};
use style_studio_core::style::{decl, Declaration, StyleRule, StyleSheet};
use style_studio_core::{Editor, Path, Point, Srgb, StudioError, SvgDocument};

pub const WIDTH: Range = Range::new(400.0, 1200.0, 50.0, 800.0);
pub const HEIGHT: Range = Range::new(50.0, 300.0, 10.0, 100.0);
pub const WAVES: Range = Range::new(1.0, 10.0, 1.0, 3.0);
pub const AMPLITUDE: Range = Range::new(10.0, 100.0, 5.0, 40.0);
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// Which edge the filled band hugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    #[default]
    Bottom,
}

impl Direction {
    pub const NAMES: &'static [&'static str] = &["top", "bottom"];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Direction::Top),
            "bottom" => Ok(Direction::Bottom),
            other => Err(StudioError::InvalidParam {
                name: "direction".into(),
                reason: format!("expected 'top' or 'bottom', got '{other}'"),
            }),
        }
    }
}

/// Geometric input of [`generate_wave`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaveSpec {
    pub width: f64,
    pub height: f64,
    /// 1 or more; 0 collapses the wave.
    pub wave_count: usize,
    /// Crest offset from the edge; sane output needs `amplitude <= height`.
    pub amplitude: f64,
    pub direction: Direction,
}

impl WaveSpec {
    /// y of the edge the band is closed against.
    pub fn baseline(&self) -> f64 {
        match self.direction {
            Direction::Bottom => self.height,
            Direction::Top => 0.0,
        }
    }

    /// y at `offset` away from the baseline, towards the opposite edge.
    fn level(&self, offset: f64) -> f64 {
        match self.direction {
            Direction::Bottom => self.height - offset,
            Direction::Top => offset,
        }
    }
}

/// Generates the closed wave band.
///
/// Emits `M0,base`, one cubic, `wave_count` smooth continuations, a line to
/// `(width, base)`, a line back to `(0, base)`, and a close.
pub fn generate_wave(spec: &WaveSpec) -> Path {
    let n = spec.wave_count;
    let segment = spec.width / n as f64;
    let base = spec.baseline();
    let crest = spec.amplitude;
    let trough = spec.amplitude / 2.0;
    let mut path = Path::with_capacity(n + 5);

    path.move_to(Point::new(0.0, base));
    for i in 0..=n {
        let (lead, trail, end) = if i % 2 == 0 {
            (crest, trough, crest)
        } else {
            (trough, crest, trough)
        };
        let x = spec.width * i as f64 / n as f64;
        let c2 = Point::new(x + segment / 4.0, spec.level(trail));
        let end = Point::new(x, spec.level(end));
        if i == 0 {
            let c1 = Point::new(x - segment / 4.0, spec.level(lead));
            path.cubic_to(c1, c2, end);
        } else {
            path.smooth_to(c2, end);
        }
    }
    path.line_to(Point::new(spec.width, base))
        .line_to(Point::new(0.0, base))
        .close();

    tracing::debug!(
        waves = n,
        width = spec.width,
        height = spec.height,
        direction = %spec.direction,
        "generated wave band"
    );
    path
}

/// Control state of the wave editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaveParams {
    pub width: f64,
    pub height: f64,
    pub waves: usize,
    pub amplitude: f64,
    pub color: Srgb,
    pub direction: Direction,
}

fn default_color() -> Srgb {
    Srgb::from_hex(DEFAULT_COLOR).expect("default wave color is valid hex")
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            width: WIDTH.default,
            height: HEIGHT.default,
            waves: WAVES.default as usize,
            amplitude: AMPLITUDE.default,
            color: default_color(),
            direction: Direction::default(),
        }
    }
}

impl WaveParams {
    /// Extracts parameters from a JSON object, clamping to slider ranges.
    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self {
            width: param_ranged(params, "width", &WIDTH),
            height: param_ranged(params, "height", &HEIGHT),
            waves: param_ranged_usize(params, "waves", &WAVES),
            amplitude: param_ranged(params, "amplitude", &AMPLITUDE),
            color: param_color(params, "color", default_color())?,
            direction: param_choice(params, "direction", Direction::default()),
        })
    }

    pub fn spec(&self) -> WaveSpec {
        WaveSpec {
            width: self.width,
            height: self.height,
            wave_count: self.waves,
            amplitude: self.amplitude,
            direction: self.direction,
        }
    }
}

/// Wave editor.
#[derive(Debug, Clone)]
pub struct Wave {
    params: WaveParams,
    path: Path,
}

impl Wave {
    pub fn new(params: WaveParams) -> Self {
        let path = generate_wave(&params.spec());
        Self { params, path }
    }

    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self::new(WaveParams::from_json(params)?))
    }

    pub fn wave_params(&self) -> &WaveParams {
        &self.params
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn document(&self) -> SvgDocument {
        SvgDocument {
            width: self.params.width,
            height: self.params.height,
            path: self.path.clone(),
            fill: self.params.color,
            sized: true,
        }
    }
}

impl Editor for Wave {
    fn name(&self) -> &'static str {
        "wave"
    }

    fn params(&self) -> Value {
        json!({
            "width": self.params.width,
            "height": self.params.height,
            "waves": self.params.waves,
            "amplitude": self.params.amplitude,
            "color": self.params.color.to_hex(),
            "direction": self.params.direction.as_str(),
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "width": WIDTH.schema("Tile width in px"),
            "height": HEIGHT.schema("Tile height in px"),
            "waves": WAVES.integer_schema("Number of wave segments across the tile"),
            "amplitude": AMPLITUDE.schema("Crest height in px"),
            "color": color_schema(default_color(), "Wave fill"),
            "direction": choice_schema(Direction::NAMES, "bottom", "Edge the band is anchored to"),
        })
    }

    fn stylesheet(&self) -> StyleSheet {
        let height = format!("{}px", num(self.params.height));
        StyleSheet::new()
            .rule(StyleRule::new(
                ".wave-container",
                vec![
                    decl("position", "relative"),
                    decl("height", height),
                    decl("width", "100%"),
                    decl("overflow", "hidden"),
                ],
            ))
            .rule(StyleRule::new(".wave", self.preview()))
    }

    fn preview(&self) -> Vec<Declaration> {
        vec![
            decl("position", "absolute"),
            decl(self.params.direction.as_str(), "0"),
            decl("left", "0"),
            decl("width", "100%"),
            decl("height", format!("{}px", num(self.params.height))),
            decl(
                "background-image",
                format!("url(\"{}\")", self.document().data_uri()),
            ),
            decl(
                "background-size",
                format!("{}px {}px", num(self.params.width), num(self.params.height)),
            ),
            decl("background-repeat", "repeat-x"),
        ]
    }

    fn svg(&self) -> Option<SvgDocument> {
        Some(self.document())
    }

    fn export_filename(&self) -> Option<&'static str> {
        Some("wave.svg")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_studio_core::CommandKind;

    fn spec(width: f64, height: f64, waves: usize, amplitude: f64, direction: Direction) -> WaveSpec {
        WaveSpec {
            width,
            height,
            wave_count: waves,
            amplitude,
            direction,
        }
    }

    fn default_spec() -> WaveSpec {
        spec(800.0, 100.0, 3, 40.0, Direction::Bottom)
    }

    // ---- Generator ----

    #[test]
    fn default_wave_starts_at_bottom_left_and_closes() {
        let d = generate_wave(&default_spec()).to_string();
        assert!(d.starts_with("M0,100 C-66.66666666666667,60 66.66666666666667,80 0,60 S"), "{d}");
        assert!(d.ends_with("L800,100 L0,100 Z"), "{d}");
    }

    #[test]
    fn one_cubic_then_one_smooth_per_wave() {
        let path = generate_wave(&default_spec());
        assert_eq!(path.count(CommandKind::MoveTo), 1);
        assert_eq!(path.count(CommandKind::CubicTo), 1);
        assert_eq!(path.count(CommandKind::SmoothTo), 3);
        assert_eq!(path.count(CommandKind::LineTo), 2);
        assert_eq!(path.count(CommandKind::Close), 1);
    }

    #[test]
    fn endpoints_alternate_between_crest_and_trough() {
        let path = generate_wave(&spec(400.0, 100.0, 4, 40.0, Direction::Bottom));
        let ys: Vec<f64> = path.points()[1..6].iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![60.0, 80.0, 60.0, 80.0, 60.0]);
    }

    #[test]
    fn top_direction_mirrors_against_upper_edge() {
        let path = generate_wave(&spec(800.0, 100.0, 3, 40.0, Direction::Top));
        let d = path.to_string();
        assert!(d.starts_with("M0,0 C"), "{d}");
        assert!(d.ends_with("L800,0 L0,0 Z"), "{d}");
        let ys: Vec<f64> = path.points()[1..5].iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![40.0, 20.0, 40.0, 20.0]);
    }

    #[test]
    fn on_curve_points_span_exactly_zero_to_width() {
        for waves in 1..=10 {
            let path = generate_wave(&spec(1150.0, 250.0, waves, 90.0, Direction::Bottom));
            let points = path.points();
            let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
            let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
            assert_eq!(min_x, 0.0);
            assert_eq!(max_x, 1150.0);
            assert_eq!(points[0], Point::new(0.0, 250.0));
            assert_eq!(points[points.len() - 1], Point::new(0.0, 250.0));
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_wave(&default_spec()).to_string();
        let b = generate_wave(&default_spec()).to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_waves_collapses_without_panicking() {
        let path = generate_wave(&spec(800.0, 100.0, 0, 40.0, Direction::Bottom));
        assert!(path.is_closed());
        assert_eq!(path.count(CommandKind::SmoothTo), 0);
    }

    // ---- Direction ----

    #[test]
    fn direction_parses_and_displays() {
        assert_eq!("top".parse::<Direction>().unwrap(), Direction::Top);
        assert_eq!(Direction::Bottom.to_string(), "bottom");
        assert!("left".parse::<Direction>().is_err());
        assert_eq!(serde_json::to_value(Direction::Top).unwrap(), json!("top"));
    }

    // ---- Params ----

    #[test]
    fn from_json_uses_defaults_for_empty_json() {
        assert_eq!(WaveParams::from_json(&json!({})).unwrap(), WaveParams::default());
    }

    #[test]
    fn from_json_clamps_and_parses_direction() {
        let p = WaveParams::from_json(&json!({
            "width": 100,
            "height": 1000,
            "waves": 0,
            "amplitude": 5,
            "direction": "top"
        }))
        .unwrap();
        assert_eq!(p.width, 400.0);
        assert_eq!(p.height, 300.0);
        assert_eq!(p.waves, 1);
        assert_eq!(p.amplitude, 10.0);
        assert_eq!(p.direction, Direction::Top);
    }

    #[test]
    fn from_json_ignores_unknown_direction() {
        let p = WaveParams::from_json(&json!({"direction": "diagonal"})).unwrap();
        assert_eq!(p.direction, Direction::Bottom);
    }

    // ---- Editor ----

    #[test]
    fn svg_document_is_sized() {
        let doc = Wave::new(WaveParams::default()).svg().unwrap().to_pretty();
        assert!(doc.starts_with(
            "<svg width=\"800\" height=\"100\" viewBox=\"0 0 800 100\" xmlns=\"http://www.w3.org/2000/svg\">\n  <path d=\"M0,100 C"
        ));
        assert!(doc.ends_with("fill=\"#3b82f6\" />\n</svg>"));
    }

    #[test]
    fn css_embeds_encoded_svg_and_anchors_to_direction() {
        let wave = Wave::new(WaveParams::default());
        let css = wave.stylesheet().to_string();
        assert!(css.starts_with(".wave-container {\n  position: relative;\n  height: 100px;"));
        assert!(css.contains("\n\n.wave {\n  position: absolute;\n  bottom: 0;\n"));
        assert!(css.contains("background-image: url(\"data:image/svg+xml,%3Csvg%20width%3D%22800%22"));
        assert!(css.contains("background-size: 800px 100px;"));
        assert!(css.contains("background-repeat: repeat-x;"));

        let top = Wave::new(WaveParams {
            direction: Direction::Top,
            ..WaveParams::default()
        });
        assert!(top.stylesheet().to_string().contains("\n  top: 0;\n"));
    }

    #[test]
    fn params_round_trip_through_json() {
        let wave = Wave::from_json(&json!({"waves": 5, "direction": "top", "color": "#ff0000"}))
            .unwrap();
        let again = Wave::from_json(&wave.params()).unwrap();
        assert_eq!(wave.wave_params(), again.wave_params());
        assert_eq!(wave.path(), again.path());
    }

    #[test]
    fn schema_covers_all_params() {
        let wave = Wave::new(WaveParams::default());
        let schema = wave.param_schema();
        for key in ["width", "height", "waves", "amplitude", "color", "direction"] {
            assert!(schema.get(key).is_some(), "missing schema {key}");
        }
        assert_eq!(wave.export_filename(), Some("wave.svg"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_direction() -> impl Strategy<Value = Direction> {
            prop_oneof![Just(Direction::Top), Just(Direction::Bottom)]
        }

        proptest! {
            #[test]
            fn band_closes_against_its_edge(
                width in 400.0_f64..=1200.0,
                height in 50.0_f64..=300.0,
                waves in 1_usize..=10,
                amplitude in 0.0_f64..=100.0,
                direction in any_direction(),
            ) {
                let s = spec(width, height, waves, amplitude, direction);
                let path = generate_wave(&s);
                let points = path.points();
                let base = s.baseline();
                prop_assert_eq!(points[0], Point::new(0.0, base));
                prop_assert_eq!(points[points.len() - 2], Point::new(width, base));
                prop_assert_eq!(points[points.len() - 1], Point::new(0.0, base));
                prop_assert!(path.is_closed());
                prop_assert_eq!(path.count(CommandKind::SmoothTo), waves);
            }

            #[test]
            fn identical_specs_give_identical_text(
                waves in 1_usize..=10,
                amplitude in 10.0_f64..=100.0,
                direction in any_direction(),
            ) {
                let s = spec(800.0, 100.0, waves, amplitude, direction);
                prop_assert_eq!(generate_wave(&s).to_string(), generate_wave(&s).to_string());
            }
        }
    }
}
