//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: editor error (unknown editor, unusable parameter, missing output)
//! - 11: I/O error (reading params or recipes, writing output)
//! - 12: input error (bad JSON params, malformed recipe)
//! - 13: serialization error

use std::fmt;
use style_studio_core::StudioError;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    Editor(StudioError),
    Io(String),
    Input(String),
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Editor(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Editor(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl From<StudioError> for CliError {
    fn from(e: StudioError) -> Self {
        match e {
            StudioError::Io(msg) => CliError::Io(msg),
            StudioError::InvalidRecipe(msg) => CliError::Input(format!("invalid recipe: {msg}")),
            other => CliError::Editor(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_error_exit_code_is_10() {
        let err = CliError::Editor(StudioError::UnknownEditor("foo".into()));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        assert_eq!(CliError::Io("write failed".into()).exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        assert_eq!(CliError::Input("bad json".into()).exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        assert_eq!(CliError::Serialization("json fail".into()).exit_code(), 13);
    }

    #[test]
    fn studio_io_routes_to_cli_io() {
        let cli_err = CliError::from(StudioError::Io("disk full".into()));
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
    }

    #[test]
    fn invalid_recipe_routes_to_input() {
        let cli_err = CliError::from(StudioError::InvalidRecipe("editor name is empty".into()));
        assert_eq!(cli_err.exit_code(), 12);
        assert!(cli_err.to_string().contains("editor name is empty"));
    }

    #[test]
    fn other_studio_errors_route_to_editor() {
        let cli_err = CliError::from(StudioError::UnsupportedOutput {
            editor: "gradient".into(),
            format: "svg".into(),
        });
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("gradient"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
