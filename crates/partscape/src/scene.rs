//! Scene descriptors handed to the rendering collaborator.
//!
//! Two independent outputs are produced from a build:
//!
//! - [`LayoutScene`] - placed 3D parts, cable curves and scene dressing
//! - [`DiagramScene`] - a left-to-right wiring diagram of boxes and arrows
//!
//! Both are plain data and serialize to JSON.

use serde::Serialize;

use partscape_core::{
    category::Category,
    geometry::{Point, Size, Vec3},
};

use crate::spatial::ShapeKind;

/// Scalar driving the exploded view, clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
pub struct ExplosionFactor(f32);

impl ExplosionFactor {
    /// Fully collapsed view.
    pub const NONE: Self = Self(0.0);

    /// Creates a factor, clamping into `[0, 1]`. NaN becomes zero.
    pub fn new(t: f32) -> Self {
        if t.is_nan() {
            return Self::NONE;
        }
        Self(t.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

/// Styling switch for the rendered scene.
///
/// Never affects positions, ranks or endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    Normal,
    Blueprint,
}

impl DisplayMode {
    pub fn is_blueprint(self) -> bool {
        self == DisplayMode::Blueprint
    }
}

/// Transient view state, owned by the caller and passed on every recomputation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewParams {
    pub explosion: ExplosionFactor,
    pub mode: DisplayMode,
    /// Index of the selected part, if any.
    pub selected: Option<usize>,
}

impl ViewParams {
    pub fn new(explosion: ExplosionFactor, mode: DisplayMode) -> Self {
        Self {
            explosion,
            mode,
            selected: None,
        }
    }

    /// Selects a part by index (builder style).
    pub fn with_selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }
}

/// The 3D build scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutScene {
    /// One entry per input part, in input order.
    pub parts: Vec<PlacedPart>,
    pub wires: Vec<WireCurve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate: Option<MountingPlate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionMarker>,
    pub background: String,
    pub mode: DisplayMode,
}

/// A part positioned in the scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedPart {
    /// Index of the part in the input sequence.
    pub index: usize,
    pub name: String,
    pub category: Category,
    pub shape: ShapeKind,
    /// Exploded position.
    pub position: Vec3,
    /// Position before the explosion transform.
    pub base_position: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
    /// True when the position came from an explicit placement.
    pub overridden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<PartLabel>,
    pub wireframe: bool,
}

/// Floating name tag above a part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartLabel {
    pub text: String,
    /// Vertical offset from the part's position.
    pub offset_y: f32,
    pub color: String,
    pub outlined: bool,
}

/// A cable drawn as a quadratic arc through `mid`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireCurve {
    pub start: Vec3,
    pub mid: Vec3,
    pub end: Vec3,
    pub color: String,
    pub width: f32,
    pub dashed: bool,
}

/// Board under the electronics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MountingPlate {
    /// Side length of the square footprint.
    pub size: f32,
    pub height: f32,
    pub style: PlateStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateStyle {
    Solid,
    Outline,
}

/// Highlight sphere above the selected part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionMarker {
    pub index: usize,
    pub position: Vec3,
    pub radius: f32,
    pub color: String,
    pub opacity: f32,
    pub wireframe: bool,
}

/// The 2D wiring diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramScene {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
    /// Extent of the laid out diagram.
    pub size: Size,
}

/// A box in the wiring diagram. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramNode {
    pub id: String,
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
    pub border_color: String,
    /// Layer index, increasing left to right.
    pub rank: usize,
}

/// A directed arrow between two diagram nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
    pub color: String,
    /// Arrowhead drawn at the target end.
    pub arrow_head: bool,
    /// Polyline from the source's right side to the target's left side.
    pub points: Vec<Point>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explosion_factor_clamps() {
        assert_eq!(ExplosionFactor::new(-0.5).value(), 0.0);
        assert_eq!(ExplosionFactor::new(0.25).value(), 0.25);
        assert_eq!(ExplosionFactor::new(3.0).value(), 1.0);
        assert_eq!(ExplosionFactor::new(f32::NAN).value(), 0.0);
    }

    #[test]
    fn test_view_params_default() {
        let view = ViewParams::default();
        assert_eq!(view.explosion, ExplosionFactor::NONE);
        assert_eq!(view.mode, DisplayMode::Normal);
        assert_eq!(view.selected, None);
    }
}
