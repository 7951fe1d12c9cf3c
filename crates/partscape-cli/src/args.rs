//! Command-line argument definitions for the Partscape CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the view parameters of the 3D scene, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Which scene descriptors to compute.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// The 3D build scene only
    Scene,
    /// The wiring diagram only
    Diagram,
    /// Both descriptors
    #[default]
    Both,
}

impl View {
    pub fn includes_scene(self) -> bool {
        matches!(self, View::Scene | View::Both)
    }

    pub fn includes_diagram(self) -> bool {
        matches!(self, View::Diagram | View::Both)
    }
}

/// Command-line arguments for the Partscape layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input build file (JSON)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output JSON file
    #[arg(short, long, default_value = "scene.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Exploded-view factor, clamped to [0, 1]
    #[arg(long, default_value_t = 0.0)]
    pub explode: f32,

    /// Render the scene in blueprint style
    #[arg(long)]
    pub blueprint: bool,

    /// Index of the selected part
    #[arg(long)]
    pub selected: Option<usize>,

    /// Which descriptors to write
    #[arg(long, value_enum, default_value_t = View::Both)]
    pub view: View,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["partscape", "build.json"]);
        assert_eq!(args.output, "scene.json");
        assert_eq!(args.explode, 0.0);
        assert!(!args.blueprint);
        assert_eq!(args.selected, None);
        assert_eq!(args.view, View::Both);
    }

    #[test]
    fn test_view_flags() {
        let args = Args::parse_from([
            "partscape",
            "build.json",
            "--view",
            "diagram",
            "--explode",
            "0.5",
            "--blueprint",
            "--selected",
            "2",
        ]);
        assert_eq!(args.view, View::Diagram);
        assert!(!args.view.includes_scene());
        assert_eq!(args.explode, 0.5);
        assert!(args.blueprint);
        assert_eq!(args.selected, Some(2));
    }
}
