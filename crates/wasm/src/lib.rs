#![deny(unsafe_code)]
//! `wasm-bindgen` entry points for the browser editor.
//!
//! Every function exchanges JSON text so the front end can hold parameter
//! state as plain objects. The browser has no entropy source wired in, so
//! callers always pass a seed; "regenerate" is a render with a new seed.

use serde_json::Value;
use style_studio_core::{render, Editor, StudioError, Xorshift64};
use style_studio_css::gallery;
use style_studio_editors::EditorKind;
use wasm_bindgen::prelude::*;

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_params(params_json: &str) -> Result<Value, StudioError> {
    if params_json.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_str(params_json).map_err(|e| StudioError::InvalidParam {
        name: "params".into(),
        reason: e.to_string(),
    })
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, StudioError> {
    serde_json::to_string(value).map_err(|e| StudioError::InvalidParam {
        name: "output".into(),
        reason: e.to_string(),
    })
}

fn render_json(name: &str, params_json: &str, seed: u64) -> Result<String, StudioError> {
    let editor = EditorKind::from_name(name, &parse_params(params_json)?, Some(seed))?;
    to_json(&render(&editor))
}

fn schema_json(name: &str) -> Result<String, StudioError> {
    let editor = EditorKind::from_name(name, &Value::Object(Default::default()), Some(0))?;
    to_json(&editor.param_schema())
}

fn presets_json(name: &str) -> Result<String, StudioError> {
    to_json(&style_studio_editors::presets(name)?)
}

fn gallery_json(count: usize, seed: u64) -> Result<String, StudioError> {
    to_json(&gallery::gallery(count, &mut Xorshift64::new(seed)))
}

/// Renders an editor to a JSON `Rendering` (`editor`, `css`, `preview`, and
/// `svg`/`html` where the editor has them).
#[wasm_bindgen]
pub fn render_editor(name: &str, params_json: &str, seed: u64) -> Result<String, JsValue> {
    render_json(name, params_json, seed).map_err(js_error)
}

/// JSON array of editor names in menu order.
#[wasm_bindgen]
pub fn list_editors() -> String {
    serde_json::to_string(EditorKind::list_editors()).unwrap_or_else(|_| "[]".into())
}

#[wasm_bindgen]
pub fn param_schema(name: &str) -> Result<String, JsValue> {
    schema_json(name).map_err(js_error)
}

#[wasm_bindgen]
pub fn presets(name: &str) -> Result<String, JsValue> {
    presets_json(name).map_err(js_error)
}

/// JSON array of `count` random gradients, clamped to `MAX_COUNT`.
#[wasm_bindgen]
pub fn gallery(count: usize, seed: u64) -> Result<String, JsValue> {
    gallery_json(count, seed).map_err(js_error)
}
