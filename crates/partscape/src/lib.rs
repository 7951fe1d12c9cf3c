//! Partscape - deterministic layout for hardware builds.
//!
//! Turns a bill of hardware parts and a list of point-to-point wires into two
//! independent descriptors for a renderer:
//!
//! - a 3D [`LayoutScene`](scene::LayoutScene): classified parts placed per
//!   category, pushed apart by an exploded-view factor, with cables drawn as
//!   raised arcs between them
//! - a 2D [`DiagramScene`](scene::DiagramScene): the same wiring as a
//!   left-to-right layered graph
//!
//! Layout is a pure function of the build and the view parameters. Only the
//! input boundary ([`SceneBuilder::parse`]) and export can fail.

pub mod classify;
pub mod config;
pub mod diagram;
pub mod export;
pub mod scene;
pub mod solid;
pub mod spatial;
pub mod wiring;

mod error;

pub use partscape_core::{category, color, geometry, model};

pub use error::PartscapeError;

use log::{debug, info, trace, warn};

use config::{AppConfig, StyleConfig};
use model::BuildInput;
use scene::{DiagramScene, LayoutScene, ViewParams};
use wiring::WireStyle;

/// Builder for turning build payloads into scenes.
///
/// # Examples
///
/// ```
/// use partscape::{SceneBuilder, config::AppConfig, scene::ViewParams};
///
/// let source = r#"{
///     "parts": [
///         {"name": "ESP32", "type": "microcontroller"},
///         {"name": "DHT22", "type": "sensor"}
///     ],
///     "wiring": [{"from_part": "ESP32", "to_part": "DHT22", "wire_color": "red"}]
/// }"#;
///
/// let builder = SceneBuilder::new(AppConfig::default());
/// let build = builder.parse(source).expect("valid build");
///
/// let scene = builder.layout_scene(&build, &ViewParams::default());
/// assert_eq!(scene.parts.len(), 2);
/// assert_eq!(scene.wires[0].color, "#d32f2f");
///
/// let diagram = builder.layout_diagram(&build);
/// assert_eq!(diagram.edges.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SceneBuilder {
    config: AppConfig,
}

impl SceneBuilder {
    /// Create a new scene builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a JSON build payload.
    ///
    /// Missing optional fields take their defaults here, once.
    ///
    /// # Errors
    ///
    /// Returns [`PartscapeError::Input`] if the payload is not valid JSON or
    /// does not have the shape of a build.
    pub fn parse(&self, source: &str) -> Result<BuildInput, PartscapeError> {
        info!("Parsing build input");

        let build: BuildInput = serde_json::from_str(source)
            .map_err(|err| PartscapeError::new_input_error(err, source))?;

        debug!(parts = build.parts.len(), wires = build.wiring.len(); "Build input parsed");
        trace!(build:?; "Parsed build");

        Ok(build)
    }

    /// Compute the 3D scene for a build.
    pub fn layout_scene(&self, build: &BuildInput, view: &ViewParams) -> LayoutScene {
        info!(mode:? = view.mode, explosion = view.explosion.value(); "Laying out scene");

        let parts = spatial::layout_parts(&build.parts, view);
        let style = WireStyle::new(view.mode, self.blueprint_wire_color());
        let wires = wiring::route(&build.wiring, &parts, view.explosion.value(), &style);
        let plate = spatial::mounting_plate(&build.parts, view.mode);
        let selection = spatial::selection_marker(&parts, view);

        LayoutScene {
            parts,
            wires,
            plate,
            selection,
            background: spatial::background(view.mode).to_string(),
            mode: view.mode,
        }
    }

    /// Compute the wiring diagram for a build.
    pub fn layout_diagram(&self, build: &BuildInput) -> DiagramScene {
        info!(connections = build.wiring.len(); "Laying out wiring diagram");
        diagram::layout_diagram(&build.wiring, &build.parts, self.config.diagram())
    }

    fn blueprint_wire_color(&self) -> String {
        match self.config.style().blueprint_wire_color() {
            Ok(color) => color.as_css().to_string(),
            Err(err) => {
                warn!(err = err; "Falling back to the default blueprint wire color");
                StyleConfig::DEFAULT_BLUEPRINT_WIRE_COLOR.to_string()
            }
        }
    }
}
