//! Keyframe animations.
//!
//! Emits the longhand `.element` rule, the equivalent shorthand, and the
//! `@keyframes` block of the selected animation. Custom animations carry their
//! keyframes verbatim.

use crate::{param_keyword, Preset};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use style_studio_core::format::num;
use style_studio_core::params::{choice_schema, param_choice, param_ranged, param_string, Range};
use style_studio_core::style::{decl, Declaration, StyleRule, StyleSheet};
use style_studio_core::{Editor, StudioError};

pub const DURATION: Range = Range::new(0.1, 5.0, 0.1, 1.0);
pub const DELAY: Range = Range::new(0.0, 3.0, 0.1, 0.0);

pub const BOUNCE_EASING: &str = "cubic-bezier(0.175, 0.885, 0.32, 1.275)";
pub const SPRING_EASING: &str = "cubic-bezier(0.68, -0.55, 0.27, 1.55)";
pub const TIMING: &[&str] = &[
    "ease",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "linear",
    BOUNCE_EASING,
    SPRING_EASING,
];
pub const ITERATIONS: &[&str] = &["1", "2", "3", "infinite"];
pub const DIRECTIONS: &[&str] = &["normal", "reverse", "alternate", "alternate-reverse"];
pub const FILL_MODES: &[&str] = &["none", "forwards", "backwards", "both"];

pub const DEFAULT_CUSTOM_KEYFRAMES: &str = "@keyframes custom {
  0% {
    opacity: 0;
    transform: scale(0.5);
  }
  100% {
    opacity: 1;
    transform: scale(1);
  }
}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    #[default]
    Fade,
    Slide,
    Scale,
    Rotate,
    Bounce,
    Pulse,
    Custom,
}

impl AnimationKind {
    pub const NAMES: &'static [&'static str] =
        &["fade", "slide", "scale", "rotate", "bounce", "pulse", "custom"];

    /// The `animation-name`, which is also the `@keyframes` name.
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationKind::Fade => "fade",
            AnimationKind::Slide => "slide",
            AnimationKind::Scale => "scale",
            AnimationKind::Rotate => "rotate",
            AnimationKind::Bounce => "bounce",
            AnimationKind::Pulse => "pulse",
            AnimationKind::Custom => "custom",
        }
    }

    /// Built-in keyframes; `None` for custom.
    pub fn keyframes(self) -> Option<&'static str> {
        Some(match self {
            AnimationKind::Fade => {
                "@keyframes fade {\n  0% { opacity: 0; }\n  100% { opacity: 1; }\n}"
            }
            AnimationKind::Slide => {
                "@keyframes slide {\n  0% { transform: translateX(-50px); opacity: 0; }\n  100% { transform: translateX(0); opacity: 1; }\n}"
            }
            AnimationKind::Scale => {
                "@keyframes scale {\n  0% { transform: scale(0); }\n  100% { transform: scale(1); }\n}"
            }
            AnimationKind::Rotate => {
                "@keyframes rotate {\n  0% { transform: rotate(0deg); }\n  100% { transform: rotate(360deg); }\n}"
            }
            AnimationKind::Bounce => {
                "@keyframes bounce {\n  0%, 100% { transform: translateY(0); }\n  50% { transform: translateY(-20px); }\n}"
            }
            AnimationKind::Pulse => {
                "@keyframes pulse {\n  0% { transform: scale(1); }\n  50% { transform: scale(1.1); }\n  100% { transform: scale(1); }\n}"
            }
            AnimationKind::Custom => return None,
        })
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationKind {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fade" => Ok(AnimationKind::Fade),
            "slide" => Ok(AnimationKind::Slide),
            "scale" => Ok(AnimationKind::Scale),
            "rotate" => Ok(AnimationKind::Rotate),
            "bounce" => Ok(AnimationKind::Bounce),
            "pulse" => Ok(AnimationKind::Pulse),
            "custom" => Ok(AnimationKind::Custom),
            other => Err(StudioError::InvalidParam {
                name: "type".into(),
                reason: format!("unknown animation '{other}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationParams {
    #[serde(rename = "type")]
    pub kind: AnimationKind,
    /// Seconds.
    pub duration: f64,
    /// Any easing function; [`TIMING`] lists the selectable ones.
    pub timing_function: String,
    /// Seconds.
    pub delay: f64,
    pub iteration_count: &'static str,
    pub direction: &'static str,
    pub fill_mode: &'static str,
    /// Used when `kind` is custom.
    pub custom_keyframes: String,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            kind: AnimationKind::default(),
            duration: DURATION.default,
            timing_function: "ease".to_owned(),
            delay: DELAY.default,
            iteration_count: "1",
            direction: "normal",
            fill_mode: "forwards",
            custom_keyframes: DEFAULT_CUSTOM_KEYFRAMES.to_owned(),
        }
    }
}

impl AnimationParams {
    pub fn from_json(params: &Value) -> Self {
        Self {
            kind: param_choice(params, "type", AnimationKind::default()),
            duration: param_ranged(params, "duration", &DURATION),
            timing_function: param_string(params, "timingFunction", "ease"),
            delay: param_ranged(params, "delay", &DELAY),
            iteration_count: param_keyword(params, "iterationCount", ITERATIONS, "1"),
            direction: param_keyword(params, "direction", DIRECTIONS, "normal"),
            fill_mode: param_keyword(params, "fillMode", FILL_MODES, "forwards"),
            custom_keyframes: param_string(params, "customKeyframes", DEFAULT_CUSTOM_KEYFRAMES),
        }
    }

    pub fn keyframes(&self) -> &str {
        self.kind.keyframes().unwrap_or(&self.custom_keyframes)
    }

    /// `name Ds timing Ds count direction fill`
    pub fn shorthand(&self) -> String {
        format!(
            "{} {}s {} {}s {} {} {}",
            self.kind,
            num(self.duration),
            self.timing_function,
            num(self.delay),
            self.iteration_count,
            self.direction,
            self.fill_mode
        )
    }

    fn preset(
        kind: AnimationKind,
        duration: f64,
        timing_function: &str,
        iteration_count: &'static str,
        direction: &'static str,
        fill_mode: &'static str,
    ) -> Self {
        Self {
            kind,
            duration,
            timing_function: timing_function.to_owned(),
            iteration_count,
            direction,
            fill_mode,
            ..Self::default()
        }
    }
}

pub fn presets() -> Vec<Preset<AnimationParams>> {
    use AnimationKind::*;
    vec![
        Preset::new(
            "Fade In",
            AnimationParams::preset(Fade, 1.0, "ease", "1", "normal", "forwards"),
        ),
        Preset::new(
            "Slide In",
            AnimationParams::preset(Slide, 0.8, "ease-out", "1", "normal", "forwards"),
        ),
        Preset::new(
            "Pop",
            AnimationParams::preset(Scale, 0.5, BOUNCE_EASING, "1", "normal", "forwards"),
        ),
        Preset::new(
            "Spin",
            AnimationParams::preset(Rotate, 1.5, "linear", "infinite", "normal", "none"),
        ),
        Preset::new(
            "Bounce",
            AnimationParams::preset(
                Bounce,
                1.0,
                "cubic-bezier(0.28, 0.84, 0.42, 1)",
                "infinite",
                "alternate",
                "none",
            ),
        ),
        Preset::new(
            "Pulse",
            AnimationParams::preset(Pulse, 1.5, "ease-in-out", "infinite", "normal", "none"),
        ),
    ]
}

#[derive(Debug, Clone)]
pub struct Animation {
    params: AnimationParams,
}

impl Animation {
    pub fn new(params: AnimationParams) -> Self {
        Self { params }
    }

    pub fn from_json(params: &Value) -> Result<Self, StudioError> {
        Ok(Self::new(AnimationParams::from_json(params)))
    }
}

impl Editor for Animation {
    fn name(&self) -> &'static str {
        "animation"
    }

    fn params(&self) -> Value {
        json!(self.params)
    }

    fn param_schema(&self) -> Value {
        json!({
            "type": choice_schema(AnimationKind::NAMES, "fade", "Animation"),
            "duration": DURATION.schema("Duration in seconds"),
            "timingFunction": choice_schema(TIMING, "ease", "Easing"),
            "delay": DELAY.schema("Delay in seconds"),
            "iterationCount": choice_schema(ITERATIONS, "1", "Repetitions"),
            "direction": choice_schema(DIRECTIONS, "normal", "Playback direction"),
            "fillMode": choice_schema(FILL_MODES, "forwards", "Fill mode"),
            "customKeyframes": {
                "type": "string",
                "default": DEFAULT_CUSTOM_KEYFRAMES,
                "description": "@keyframes custom block used by the custom animation",
            },
        })
    }

    fn stylesheet(&self) -> StyleSheet {
        StyleSheet::new()
            .rule(StyleRule::new(".element", self.preview()))
            .rule(
                StyleRule::new(
                    ".element-shorthand",
                    vec![decl("animation", self.params.shorthand())],
                )
                .with_comment("Shorthand version"),
            )
            .raw(self.params.keyframes())
    }

    fn preview(&self) -> Vec<Declaration> {
        let p = &self.params;
        vec![
            decl("animation-name", p.kind.as_str()),
            decl("animation-duration", format!("{}s", num(p.duration))),
            decl("animation-timing-function", p.timing_function.clone()),
            decl("animation-delay", format!("{}s", num(p.delay))),
            decl("animation-iteration-count", p.iteration_count),
            decl("animation-direction", p.direction),
            decl("animation-fill-mode", p.fill_mode),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(name: &str) -> AnimationParams {
        presets()
            .into_iter()
            .find(|p| p.name == name)
            .map(|p| p.params)
            .unwrap()
    }

    #[test]
    fn default_fade_sheet() {
        let css = Animation::new(AnimationParams::default()).stylesheet().to_string();
        assert_eq!(
            css,
            ".element {
  animation-name: fade;
  animation-duration: 1s;
  animation-timing-function: ease;
  animation-delay: 0s;
  animation-iteration-count: 1;
  animation-direction: normal;
  animation-fill-mode: forwards;
}

/* Shorthand version */
.element-shorthand {
  animation: fade 1s ease 0s 1 normal forwards;
}

@keyframes fade {
  0% { opacity: 0; }
  100% { opacity: 1; }
}"
        );
    }

    #[test]
    fn pop_preset_shorthand() {
        assert_eq!(
            preset("Pop").shorthand(),
            "scale 0.5s cubic-bezier(0.175, 0.885, 0.32, 1.275) 0s 1 normal forwards"
        );
    }

    #[test]
    fn bounce_preset_uses_its_own_easing() {
        let p = preset("Bounce");
        assert_eq!(p.timing_function, "cubic-bezier(0.28, 0.84, 0.42, 1)");
        assert!(p.keyframes().starts_with("@keyframes bounce {"));
    }

    #[test]
    fn custom_keyframes_are_emitted_verbatim() {
        let e = Animation::from_json(&json!({
            "type": "custom",
            "customKeyframes": "@keyframes custom { to { color: red; } }"
        }))
        .unwrap();
        let css = e.stylesheet().to_string();
        assert!(css.contains("animation-name: custom;"));
        assert!(css.ends_with("\n\n@keyframes custom { to { color: red; } }"));
    }

    #[test]
    fn default_custom_keyframes() {
        let p = AnimationParams::from_json(&json!({"type": "custom"}));
        assert_eq!(p.keyframes(), DEFAULT_CUSTOM_KEYFRAMES);
    }

    #[test]
    fn every_builtin_kind_names_its_keyframes() {
        for name in AnimationKind::NAMES {
            let kind: AnimationKind = name.parse().unwrap();
            if let Some(frames) = kind.keyframes() {
                assert!(frames.starts_with(&format!("@keyframes {name} {{")));
            }
        }
        assert!("wiggle".parse::<AnimationKind>().is_err());
    }

    #[test]
    fn timings_are_clamped() {
        let p = AnimationParams::from_json(&json!({"duration": 0, "delay": 10, "iterationCount": "7"}));
        assert_eq!(p.duration, 0.1);
        assert_eq!(p.delay, 3.0);
        assert_eq!(p.iteration_count, "1");
    }

    #[test]
    fn presets_round_trip_through_params_json() {
        for p in presets() {
            let json = Animation::new(p.params.clone()).params();
            assert_eq!(AnimationParams::from_json(&json), p.params, "{}", p.name);
        }
    }
}
