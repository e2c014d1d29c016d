#![deny(unsafe_code)]
//! CLI binary for the style-studio editors.
//!
//! Subcommands:
//! - `render <editor>`: build an editor from JSON params or a recipe, print or write its output
//! - `list`: print available editors
//! - `schema <editor>`: print an editor's parameter schema
//! - `presets <editor>`: print an editor's presets or templates
//! - `gallery`: print random gradients

mod error;
mod logging;

use clap::{Parser, Subcommand, ValueEnum};
use error::CliError;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use style_studio_core::{render, Editor, Recipe, StudioError, Xorshift64};
use style_studio_css::gallery;
use style_studio_editors::{export, find_preset, merge_params, presets, EditorKind};

#[derive(Parser)]
#[command(name = "style-studio", about = "CSS and SVG style generator CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug diagnostics to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build an editor and print or write its output.
    Render {
        /// Editor name (e.g. "box-shadow").
        #[arg(required_unless_present = "recipe", conflicts_with = "recipe")]
        editor: Option<String>,

        /// Editor parameters as a JSON string.
        #[arg(long, conflicts_with = "params_file")]
        params: Option<String>,

        /// Read editor parameters from a JSON file.
        #[arg(long)]
        params_file: Option<PathBuf>,

        /// Read editor, params, and seed from a recipe file.
        #[arg(long, conflicts_with_all = ["params", "params_file"])]
        recipe: Option<PathBuf>,

        /// Start from a named preset; explicit params override its keys.
        #[arg(long)]
        preset: Option<String>,

        /// PRNG seed for editors that draw randomness.
        #[arg(long)]
        seed: Option<u64>,

        /// What to produce.
        #[arg(short, long, value_enum, default_value_t = Format::Css)]
        format: Format,

        /// Output file path; prints to stdout when absent.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List available editors.
    List,
    /// Print the parameter schema of an editor.
    Schema {
        /// Editor name.
        editor: String,
    },
    /// List the presets or templates of an editor.
    Presets {
        /// Editor name.
        editor: String,
    },
    /// Print randomly generated gradients.
    Gallery {
        /// Number of gradients (at most 200).
        #[arg(short, long, default_value_t = gallery::DEFAULT_COUNT)]
        count: usize,

        /// PRNG seed for a reproducible gallery.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Css,
    Svg,
    Html,
    Json,
}

impl Format {
    fn as_str(self) -> &'static str {
        match self {
            Format::Css => "css",
            Format::Svg => "svg",
            Format::Html => "html",
            Format::Json => "json",
        }
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::Io(format!("{}: {e}", path.display())))
}

fn parse_params(text: &str, origin: &str) -> Result<Value, CliError> {
    let params: Value = serde_json::from_str(text)
        .map_err(|e| CliError::Input(format!("invalid {origin} JSON: {e}")))?;
    if !params.is_object() {
        return Err(CliError::Input(format!("{origin} must be a JSON object")));
    }
    Ok(params)
}

/// Resolves the render arguments into one recipe.
fn build_recipe(
    editor: Option<String>,
    params: Option<String>,
    params_file: Option<PathBuf>,
    recipe: Option<PathBuf>,
    preset: Option<String>,
    seed: Option<u64>,
) -> Result<Recipe, CliError> {
    let mut recipe = match (recipe, editor) {
        (Some(path), _) => Recipe::from_json(&read_file(&path)?)?,
        (None, Some(name)) => {
            let mut recipe = Recipe::new(&name);
            if let Some(text) = params {
                recipe.params = parse_params(&text, "--params")?;
            } else if let Some(path) = params_file {
                recipe.params = parse_params(&read_file(&path)?, &path.display().to_string())?;
            }
            recipe
        }
        (None, None) => return Err(CliError::Input("an editor name or --recipe is required".into())),
    };
    if let Some(name) = preset {
        let preset = find_preset(&recipe.editor, &name)?;
        recipe.params = merge_params(&preset.params, &recipe.params);
    }
    if seed.is_some() {
        recipe.seed = seed;
    }
    Ok(recipe)
}

/// Produces the requested output text for an editor.
fn format_output(editor: &EditorKind, format: Format) -> Result<String, CliError> {
    let unsupported = || StudioError::UnsupportedOutput {
        editor: editor.name().to_owned(),
        format: format.as_str().to_owned(),
    };
    Ok(match format {
        Format::Css => editor.stylesheet().to_string(),
        Format::Svg => editor.svg().ok_or_else(unsupported)?.to_pretty(),
        Format::Html => {
            let markup = editor.markup().ok_or_else(unsupported)?;
            style_studio_css::html_snippet(&markup, &editor.stylesheet().to_string())
        }
        Format::Json => serde_json::to_string_pretty(&render(editor))?,
    })
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let editors = EditorKind::list_editors();
            if cli.json {
                print_json(&json!({ "editors": editors }))?;
            } else {
                println!("Editors:");
                for name in editors {
                    println!("  {name}");
                }
            }
        }
        Command::Schema { editor } => {
            let editor = EditorKind::from_name(&editor, &json!({}), Some(0))?;
            print_json(&editor.param_schema())?;
        }
        Command::Presets { editor } => {
            let found = presets(&editor)?;
            if cli.json {
                print_json(&serde_json::to_value(&found)?)?;
            } else if found.is_empty() {
                eprintln!("{editor} has no presets");
            } else {
                for preset in found {
                    println!("{}", preset.name);
                }
            }
        }
        Command::Gallery { count, seed } => {
            let mut rng = seed.map(Xorshift64::new).unwrap_or_else(Xorshift64::from_entropy);
            let gradients = gallery::gallery(count, &mut rng);
            if cli.json {
                print_json(&serde_json::to_value(&gradients)?)?;
            } else {
                for g in gradients {
                    println!("{}\n  {}", g.name, g.declaration());
                }
            }
        }
        Command::Render {
            editor,
            params,
            params_file,
            recipe,
            preset,
            seed,
            format,
            output,
        } => {
            let recipe = build_recipe(editor, params, params_file, recipe, preset, seed)?;
            let editor = EditorKind::from_recipe(&recipe)?;

            match &output {
                Some(path) if format == Format::Svg => export::write_svg(&editor, path)?,
                Some(path) => export::write_text(&format_output(&editor, format)?, path)?,
                None if cli.json && format != Format::Json => {
                    let content = format_output(&editor, format)?;
                    print_json(&json!({
                        "editor": editor.name(),
                        "format": format.as_str(),
                        "content": content,
                    }))?;
                }
                None => println!("{}", format_output(&editor, format)?),
            }

            if let Some(path) = &output {
                if cli.json {
                    print_json(&json!({
                        "editor": editor.name(),
                        "format": format.as_str(),
                        "seed": recipe.seed,
                        "output": path.display().to_string(),
                    }))?;
                } else {
                    eprintln!("rendered {} ({}) -> {}", editor.name(), format.as_str(), path.display());
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
