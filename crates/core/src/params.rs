//! Parameter extraction from JSON objects, with slider-range clamping.
//!
//! Each helper takes a JSON value, a key name, and a default. A missing key or
//! a value of the wrong type yields the default. These never fail. Clamping to
//! a [`Range`] is the only validation an editor performs on its inputs.

use serde_json::{json, Value};
use std::str::FromStr;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`.
///
/// Accepts non-negative integers. Anything else yields `default`.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a `bool` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

/// Parses a string parameter into an enum-like type via [`FromStr`].
///
/// Unknown strings fall back to `default`, the way a select box can only ever
/// hold one of its listed options.
pub fn param_choice<T: FromStr>(params: &Value, name: &str, default: T) -> T {
    params
        .get(name)
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Bounds and default of one slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// Clamps `value` into `[min, max]`. NaN maps to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    /// JSON schema entry for this slider.
    pub fn schema(&self, description: &str) -> Value {
        json!({
            "type": "number",
            "default": self.default,
            "min": self.min,
            "max": self.max,
            "step": self.step,
            "description": description,
        })
    }

    /// JSON schema entry for an integer-valued slider.
    pub fn integer_schema(&self, description: &str) -> Value {
        json!({
            "type": "integer",
            "default": self.default as i64,
            "min": self.min as i64,
            "max": self.max as i64,
            "step": self.step as i64,
            "description": description,
        })
    }
}

/// Reads `params[name]` and clamps it into `range`; missing yields the default.
pub fn param_ranged(params: &Value, name: &str, range: &Range) -> f64 {
    range.clamp(param_f64(params, name, range.default))
}

/// Like [`param_ranged`] but rounds to the nearest integer first.
pub fn param_ranged_usize(params: &Value, name: &str, range: &Range) -> usize {
    let v = param_f64(params, name, range.default).round();
    range.clamp(v) as usize
}

/// JSON schema entry for a string select with fixed options.
pub fn choice_schema(options: &[&str], default: &str, description: &str) -> Value {
    json!({
        "type": "string",
        "enum": options,
        "default": default,
        "description": description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Side {
        Top,
        Bottom,
    }

    impl FromStr for Side {
        type Err = ();
        fn from_str(s: &str) -> Result<Self, ()> {
            match s {
                "top" => Ok(Side::Top),
                "bottom" => Ok(Side::Bottom),
                _ => Err(()),
            }
        }
    }

    const WIDTH: Range = Range::new(400.0, 1200.0, 50.0, 800.0);

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let params = json!({"count": 10});
        assert!((param_f64(&params, "count", 0.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_wrong_type() {
        let params = json!({"speed": "fast"});
        assert!((param_f64(&params, "speed", 1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_for_non_object() {
        let params = json!("not an object");
        assert!((param_f64(&params, "speed", 7.0) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_usize_returns_default_for_negative_integer() {
        let params = json!({"count": -1});
        assert_eq!(param_usize(&params, "count", 5), 5);
    }

    #[test]
    fn param_bool_returns_default_for_wrong_type() {
        let params = json!({"inset": 1});
        assert!(!param_bool(&params, "inset", false));
    }

    #[test]
    fn param_string_handles_empty_string_value() {
        let params = json!({"position": ""});
        assert_eq!(param_string(&params, "position", "center"), "");
    }

    #[test]
    fn param_choice_parses_known_option() {
        let params = json!({"direction": "top"});
        assert_eq!(param_choice(&params, "direction", Side::Bottom), Side::Top);
    }

    #[test]
    fn param_choice_falls_back_on_unknown_option() {
        let params = json!({"direction": "sideways"});
        assert_eq!(param_choice(&params, "direction", Side::Bottom), Side::Bottom);
    }

    #[test]
    fn ranged_missing_key_yields_default() {
        assert_eq!(param_ranged(&json!({}), "width", &WIDTH), 800.0);
    }

    #[test]
    fn ranged_clamps_below_and_above() {
        assert_eq!(param_ranged(&json!({"width": 10}), "width", &WIDTH), 400.0);
        assert_eq!(param_ranged(&json!({"width": 5000}), "width", &WIDTH), 1200.0);
        assert_eq!(param_ranged(&json!({"width": 650}), "width", &WIDTH), 650.0);
    }

    #[test]
    fn ranged_usize_rounds_then_clamps() {
        let waves = Range::new(1.0, 10.0, 1.0, 3.0);
        assert_eq!(param_ranged_usize(&json!({"waves": 4.6}), "waves", &waves), 5);
        assert_eq!(param_ranged_usize(&json!({"waves": 0}), "waves", &waves), 1);
        assert_eq!(param_ranged_usize(&json!({"waves": -3}), "waves", &waves), 1);
    }

    #[test]
    fn clamp_maps_nan_to_default() {
        assert_eq!(WIDTH.clamp(f64::NAN), 800.0);
    }

    #[test]
    fn schema_lists_bounds() {
        let s = WIDTH.schema("Canvas width in px");
        assert_eq!(s["type"], "number");
        assert_eq!(s["min"], 400.0);
        assert_eq!(s["max"], 1200.0);
        assert_eq!(s["default"], 800.0);
        let i = WIDTH.integer_schema("Canvas width in px");
        assert_eq!(i["type"], "integer");
        assert_eq!(i["max"], 1200);
    }

    #[test]
    fn choice_schema_lists_options() {
        let s = choice_schema(&["top", "bottom"], "bottom", "Fill direction");
        assert_eq!(s["enum"], json!(["top", "bottom"]));
        assert_eq!(s["default"], "bottom");
    }
}
