//! Configuration types for Partscape layout and styling.
//!
//! This module provides configuration structures that control how the wiring
//! diagram is laid out and how scenes are styled. All types implement
//! [`serde::Deserialize`] for loading from external sources, and every field
//! falls back to a default when omitted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining diagram and style settings.
//! - [`DiagramConfig`] - Node box size, spacing and ordering effort for the diagram.
//! - [`StyleConfig`] - Visual styling options such as the blueprint wire color.
//!
//! # Example
//!
//! ```
//! # use partscape::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.diagram().node_width(), 180.0);
//! assert!(config.style().blueprint_wire_color().is_ok());
//! ```

use serde::Deserialize;

use partscape_core::{color::Color, geometry::Size};

/// Top-level configuration combining diagram and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Diagram layout section.
    #[serde(default)]
    diagram: DiagramConfig,

    /// Style section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified diagram and style configurations.
    pub fn new(diagram: DiagramConfig, style: StyleConfig) -> Self {
        Self { diagram, style }
    }

    /// Returns the diagram configuration.
    pub fn diagram(&self) -> &DiagramConfig {
        &self.diagram
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Layered diagram layout settings.
///
/// Every node gets the same box; ranks advance along the x-axis and nodes
/// within a rank stack along the y-axis.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    node_width: f32,
    node_height: f32,
    /// Gap between adjacent ranks.
    rank_spacing: f32,
    /// Gap between adjacent nodes of the same rank.
    node_spacing: f32,
    /// Number of barycenter sweeps used to reduce crossings.
    ordering_sweeps: usize,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            node_width: 180.0,
            node_height: 80.0,
            rank_spacing: 50.0,
            node_spacing: 50.0,
            ordering_sweeps: 24,
        }
    }
}

impl DiagramConfig {
    /// Returns the node box width.
    pub fn node_width(&self) -> f32 {
        self.node_width
    }

    /// Returns the node box height.
    pub fn node_height(&self) -> f32 {
        self.node_height
    }

    /// Returns the node box as a [`Size`].
    pub fn node_size(&self) -> Size {
        Size::new(self.node_width, self.node_height)
    }

    /// Returns the gap between adjacent ranks.
    pub fn rank_spacing(&self) -> f32 {
        self.rank_spacing
    }

    /// Returns the gap between nodes sharing a rank.
    pub fn node_spacing(&self) -> f32 {
        self.node_spacing
    }

    /// Returns the number of ordering sweeps.
    pub fn ordering_sweeps(&self) -> usize {
        self.ordering_sweeps
    }

    /// Sets the number of ordering sweeps (builder style).
    pub fn with_ordering_sweeps(mut self, sweeps: usize) -> Self {
        self.ordering_sweeps = sweeps;
        self
    }
}

/// Visual styling configuration for rendered scenes.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Wire color used in blueprint mode, as a color string.
    #[serde(default)]
    blueprint_wire_color: Option<String>,
}

impl StyleConfig {
    pub const DEFAULT_BLUEPRINT_WIRE_COLOR: &'static str = "#00ffff";

    /// Creates a style configuration with a custom blueprint wire color.
    pub fn with_blueprint_wire_color(color: impl Into<String>) -> Self {
        Self {
            blueprint_wire_color: Some(color.into()),
        }
    }

    /// Returns the parsed blueprint wire [`Color`], falling back to cyan.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn blueprint_wire_color(&self) -> Result<Color, String> {
        let color = self
            .blueprint_wire_color
            .as_deref()
            .unwrap_or(Self::DEFAULT_BLUEPRINT_WIRE_COLOR);
        Color::new(color).map_err(|err| format!("Invalid blueprint wire color in config: {err}"))
    }
}
