//! Image filter chain.
//!
//! Functions appear in a fixed order and each is left out while it sits at
//! its identity value. An all-identity chain renders as `none`.

use crate::Preset;
use serde::Serialize;
use serde_json::{json, Value};
use style_studio_core::format::num;
use style_studio_core::params::{param_bool, param_ranged, param_string, Range};
use style_studio_core::style::{decl, Declaration, StyleRule, StyleSheet};
use style_studio_core::{Editor, StudioError};

pub const BLUR: Range = Range::new(0.0, 20.0, 0.1, 0.0);
pub const BRIGHTNESS: Range = Range::new(0.0, 200.0, 1.0, 100.0);
pub const CONTRAST: Range = Range::new(0.0, 200.0, 1.0, 100.0);
pub const GRAYSCALE: Range = Range::new(0.0, 100.0, 1.0, 0.0);
pub const HUE_ROTATE: Range = Range::new(0.0, 360.0, 1.0, 0.0);
pub const INVERT: Range = Range::new(0.0, 100.0, 1.0, 0.0);
pub const OPACITY: Range = Range::new(0.0, 100.0, 1.0, 100.0);
pub const SATURATE: Range = Range::new(0.0, 200.0, 1.0, 100.0);
pub const SEPIA: Range = Range::new(0.0, 100.0, 1.0, 0.0);
pub const SHADOW_X: Range = Range::new(-20.0, 20.0, 1.0, 0.0);
pub const SHADOW_Y: Range = Range::new(-20.0, 20.0, 1.0, 4.0);
pub const SHADOW_BLUR: Range = Range::new(0.0, 20.0, 1.0, 4.0);
pub const DEFAULT_SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.5)";

pub const SELECTOR: &str = ".filtered-image";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    pub blur: f64,
    pub brightness: f64,
    pub contrast: f64,
    pub grayscale: f64,
    pub hue_rotate: f64,
    pub invert: f64,
    pub opacity: f64,
    pub saturate: f64,
    pub sepia: f64,
    pub drop_shadow: bool,
    pub shadow_x: f64,
    pub shadow_y: f64,
    pub shadow_blur: f64,
    pub shadow_color: String,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            blur: BLUR.default,
            brightness: BRIGHTNESS.default,
            contrast: CONTRAST.default,
            grayscale: GRAYSCALE.default,
            hue_rotate: HUE_ROTATE.default,
            invert: INVERT.default,
            opacity: OPACITY.default,
            saturate: SATURATE.default,
            sepia: SEPIA.default,
            drop_shadow: false,
            shadow_x: SHADOW_X.default,
            shadow_y: SHADOW_Y.default,
            shadow_blur: SHADOW_BLUR.default,
            shadow_color: DEFAULT_SHADOW_COLOR.to_owned(),
        }
    }
}

impl FilterParams {
    pub fn from_json(params: &Value) -> Self {
        Self {
            blur: param_ranged(params, "blur", &BLUR),
            brightness: param_ranged(params, "brightness", &BRIGHTNESS),
            contrast: param_ranged(params, "contrast", &CONTRAST),
            grayscale: param_ranged(params, "grayscale", &GRAYSCALE),
            hue_rotate: param_ranged(params, "hueRotate", &HUE_ROTATE),
            invert: param_ranged(params, "invert", &INVERT),
            opacity: param_ranged(params, "opacity", &OPACITY),
            saturate: param_ranged(params, "saturate", &SATURATE),
            sepia: param_ranged(params, "sepia", &SEPIA),
            drop_shadow: param_bool(params, "dropShadow", false),
            shadow_x: param_ranged(params, "shadowX", &SHADOW_X),
            shadow_y: param_ranged(params, "shadowY", &SHADOW_Y),
            shadow_blur: param_ranged(params, "shadowBlur", &SHADOW_BLUR),
            shadow_color: param_string(params, "shadowColor", DEFAULT_SHADOW_COLOR),
        }
    }

    /// Filter functions that differ from identity, in output order.
    pub fn functions(&self) -> Vec<String> {
        let percent = |name: &str, v: f64| format!("{name}({}%)", num(v));
        let mut out = Vec::new();
        if self.blur > 0.0 {
            out.push(format!("blur({}px)", num(self.blur)));
        }
        if self.brightness != 100.0 {
            out.push(percent("brightness", self.brightness));
        }
        if self.contrast != 100.0 {
            out.push(percent("contrast", self.contrast));
        }
        if self.grayscale > 0.0 {
            out.push(percent("grayscale", self.grayscale));
        }
        if self.hue_rotate != 0.0 {
            out.push(format!("hue-rotate({}deg)", num(self.hue_rotate)));
        }
        if self.invert > 0.0 {
            out.push(percent("invert", self.invert));
        }
        if self.opacity != 100.0 {
            out.push(percent("opacity", self.opacity));
        }
        if self.saturate != 100.0 {
            out.push(percent("saturate", self.saturate));
        }
        if self.sepia > 0.0 {
            out.push(percent("sepia", self.sepia));
        }
        if self.drop_shadow {
            out.push(format!(
                "drop-shadow({}px {}px {}px {})",
                num(self.shadow_x),
                num(self.shadow_y),
                num(self.shadow_blur),
                self.shadow_color
            ));
        }
        out
    }

    pub fn value(&self) -> String {
        let functions = self.functions();
        if functions.is_empty() {
            "none".to_owned()
        } else {
            functions.join(" ")
        }
    }

    /// Color levels over otherwise default settings.
    fn with_levels(
        brightness: f64,
        contrast: f64,
        grayscale: f64,
        hue_rotate: f64,
        saturate: f64,
        sepia: f64,
    ) -> Self {
        Self {
            brightness,
            contrast,
            grayscale,
            hue_rotate,
            saturate,
            sepia,
            ..Self::default()
        }
    }
}

/// Named filter presets. "Normal" resets every function to identity.
pub fn presets() -> Vec<Preset<FilterParams>> {
    vec![
        Preset::new("Normal", FilterParams::default()),
        Preset::new(
            "Vintage",
            FilterParams::with_levels(120.0, 90.0, 10.0, 20.0, 85.0, 30.0),
        ),
        Preset::new(
            "Grayscale",
            FilterParams::with_levels(100.0, 100.0, 100.0, 0.0, 100.0, 0.0),
        ),
        Preset::new(
            "Dramatic",
            FilterParams {
                drop_shadow: true,
                ..FilterParams::with_levels(110.0, 130.0, 0.0, 0.0, 140.0, 0.0)
            },
        ),
        Preset::new(
            "Blur",
            FilterParams {
                blur: 5.0,
                ..FilterParams::default()
            },
        ),
    ]
}

#[derive(Debug, Clone)]
pub struct Filter {
    params: FilterParams,
}

impl Filter {
    pub fn new(params: FilterParams) -> Self {
        Self { params }
    }

    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self::new(FilterParams::from_json(params)))
    }
}

impl Editor for Filter {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn params(&self) -> Value {
        json!(self.params)
    }

    fn param_schema(&self) -> Value {
        json!({
            "blur": BLUR.schema("Gaussian blur in px"),
            "brightness": BRIGHTNESS.schema("Brightness in %"),
            "contrast": CONTRAST.schema("Contrast in %"),
            "grayscale": GRAYSCALE.schema("Grayscale in %"),
            "hueRotate": HUE_ROTATE.schema("Hue rotation in degrees"),
            "invert": INVERT.schema("Inversion in %"),
            "opacity": OPACITY.schema("Opacity in %"),
            "saturate": SATURATE.schema("Saturation in %"),
            "sepia": SEPIA.schema("Sepia in %"),
            "dropShadow": {"type": "boolean", "default": false, "description": "Append a drop shadow"},
            "shadowX": SHADOW_X.schema("Drop shadow x offset in px"),
            "shadowY": SHADOW_Y.schema("Drop shadow y offset in px"),
            "shadowBlur": SHADOW_BLUR.schema("Drop shadow blur in px"),
            "shadowColor": {"type": "string", "default": DEFAULT_SHADOW_COLOR, "description": "Drop shadow color"},
        })
    }

    fn stylesheet(&self) -> StyleSheet {
        StyleSheet::single(StyleRule::new(SELECTOR, self.preview()))
    }

    fn preview(&self) -> Vec<Declaration> {
        vec![decl("filter", self.params.value())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(name: &str) -> FilterParams {
        presets()
            .into_iter()
            .find(|p| p.name == name)
            .map(|p| p.params)
            .unwrap()
    }

    #[test]
    fn identity_chain_renders_none() {
        let css = Filter::new(FilterParams::default()).stylesheet().to_string();
        assert_eq!(css, ".filtered-image {\n  filter: none;\n}");
    }

    #[test]
    fn only_non_identity_functions_are_emitted() {
        let p = FilterParams::from_json(&json!({"blur": 2.5, "saturate": 150}));
        assert_eq!(p.value(), "blur(2.5px) saturate(150%)");
    }

    #[test]
    fn functions_follow_fixed_order() {
        let p = FilterParams::from_json(&json!({
            "sepia": 10, "invert": 20, "hueRotate": 30, "brightness": 50, "blur": 1
        }));
        assert_eq!(
            p.value(),
            "blur(1px) brightness(50%) hue-rotate(30deg) invert(20%) sepia(10%)"
        );
    }

    #[test]
    fn vintage_preset() {
        assert_eq!(
            preset("Vintage").value(),
            "brightness(120%) contrast(90%) grayscale(10%) hue-rotate(20deg) saturate(85%) sepia(30%)"
        );
    }

    #[test]
    fn dramatic_preset_adds_drop_shadow() {
        assert_eq!(
            preset("Dramatic").value(),
            "brightness(110%) contrast(130%) saturate(140%) drop-shadow(0px 4px 4px rgba(0, 0, 0, 0.5))"
        );
    }

    #[test]
    fn normal_preset_resets_everything() {
        assert_eq!(preset("Normal").value(), "none");
        assert_eq!(preset("Grayscale").value(), "grayscale(100%)");
        assert_eq!(preset("Blur").value(), "blur(5px)");
    }

    #[test]
    fn presets_round_trip_through_params_json() {
        for p in presets() {
            let json = Filter::new(p.params.clone()).params();
            assert_eq!(FilterParams::from_json(&json), p.params, "{}", p.name);
        }
    }

    #[test]
    fn values_are_clamped() {
        let p = FilterParams::from_json(&json!({"brightness": 500, "blur": -3, "shadowY": 99}));
        assert_eq!((p.brightness, p.blur, p.shadow_y), (200.0, 0.0, 20.0));
    }
}
