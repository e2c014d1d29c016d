//! Reproducible description of one editor state.
//!
//! A [`Recipe`] names an editor, its parameter overrides, and (for editors
//! that draw randomness) the PRNG seed. Feeding the same recipe to the same
//! binary yields byte-identical CSS and SVG.

use crate::error::StudioError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub editor: String,
    #[serde(default = "empty_object")]
    pub params: serde_json::Value,
    /// Absent means "draw a fresh shape".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Recipe {
    /// Creates a recipe with empty params and no seed.
    pub fn new(editor: &str) -> Self {
        Self {
            editor: editor.to_string(),
            params: empty_object(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses and validates a recipe from JSON text.
    pub fn from_json(text: &str) -> Result<Self, StudioError> {
        let recipe: Recipe =
            serde_json::from_str(text).map_err(|e| StudioError::InvalidRecipe(e.to_string()))?;
        recipe.validate()?;
        tracing::debug!(editor = %recipe.editor, seed = ?recipe.seed, "parsed recipe");
        Ok(recipe)
    }

    /// Checks that the editor name is non-empty and params is an object.
    pub fn validate(&self) -> Result<(), StudioError> {
        if self.editor.trim().is_empty() {
            return Err(StudioError::InvalidRecipe("editor name is empty".into()));
        }
        if !self.params.is_object() {
            return Err(StudioError::InvalidRecipe(
                "params must be a JSON object".into(),
            ));
        }
        Ok(())
    }
}
