//! CLI logic for the Partscape layout tool.
//!
//! Reads a build file, computes the requested scene descriptors and writes
//! them as JSON.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, View};

use std::fs;

use log::info;

use partscape::{
    PartscapeError, SceneBuilder,
    export::SceneBundle,
    scene::{DisplayMode, ExplosionFactor, ViewParams},
};

/// Run the Partscape CLI application
///
/// # Errors
///
/// Returns `PartscapeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid build input
/// - Export errors
pub fn run(args: &Args) -> Result<(), PartscapeError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing build"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let source = fs::read_to_string(&args.input)?;

    let builder = SceneBuilder::new(app_config);
    let build = builder.parse(&source)?;

    let scene = args
        .view
        .includes_scene()
        .then(|| builder.layout_scene(&build, &view_params(args)));
    let diagram = args
        .view
        .includes_diagram()
        .then(|| builder.layout_diagram(&build));

    SceneBundle::new(scene, diagram).write_json(&args.output)?;

    info!(output_file = args.output; "Scene exported successfully");

    Ok(())
}

fn view_params(args: &Args) -> ViewParams {
    let mode = if args.blueprint {
        DisplayMode::Blueprint
    } else {
        DisplayMode::Normal
    };
    ViewParams {
        explosion: ExplosionFactor::new(args.explode),
        mode,
        selected: args.selected,
    }
}
