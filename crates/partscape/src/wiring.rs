//! Wire router.
//!
//! Resolves the free-text endpoints of each [`WireConnection`] against the
//! placed parts and builds a quadratic cable arc between them.
//!
//! # Endpoint matching
//!
//! A reference `r` matches the first part (in input order) whose name equals
//! `r`, is contained in `r`, or contains `r`. Parts with an empty name never
//! match. A reference that matches nothing resolves to the world origin.
//!
//! ```text
//!              mid (raised 4 + 2t)
//!            ╭───●───╮
//!          ╱           ╲
//!   start ●             ● end
//! ```

use log::{debug, info, trace};

use partscape_core::{geometry::Vec3, model::WireConnection};

use crate::scene::{DisplayMode, PlacedPart, WireCurve};

/// Clearance between a part's anchor and its cable end.
const ENDPOINT_LIFT: f32 = 0.5;
/// Extra endpoint rise per unit of explosion for heuristically placed parts.
const EXPLODED_RISE: f32 = 3.0;
/// Odd-indexed parts rise faster, fanning out the cable ends.
const ODD_RISE_FACTOR: f32 = 1.5;

const ARC_HEIGHT: f32 = 4.0;
const ARC_GROWTH: f32 = 2.0;

const NORMAL_WIDTH: f32 = 3.0;
const BLUEPRINT_WIDTH: f32 = 1.0;

/// Color used for wires with no color of their own.
pub const NEUTRAL_WIRE_COLOR: &str = "gray";

/// Known wire color names, mapped to concrete colors.
const COLOR_ALIASES: &[(&[&str], &str)] = &[
    (&["vcc", "5v", "red"], "#d32f2f"),
    (&["gnd", "ground", "black"], "#212121"),
    (&["blue"], "#1976d2"),
    (&["yellow"], "#fbc02d"),
    (&["green"], "#388e3c"),
];

/// Stroke settings shared by every wire in a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct WireStyle {
    mode: DisplayMode,
    blueprint_color: String,
}

impl WireStyle {
    pub fn new(mode: DisplayMode, blueprint_color: impl Into<String>) -> Self {
        Self {
            mode,
            blueprint_color: blueprint_color.into(),
        }
    }

    fn stroke(&self, wire_color: Option<&str>) -> (String, f32, bool) {
        match self.mode {
            DisplayMode::Normal => (resolve_wire_color(wire_color), NORMAL_WIDTH, false),
            DisplayMode::Blueprint => (self.blueprint_color.clone(), BLUEPRINT_WIDTH, true),
        }
    }
}

/// Build one cable curve per connection, in connection order.
pub fn route(
    connections: &[WireConnection],
    placed: &[PlacedPart],
    t: f32,
    style: &WireStyle,
) -> Vec<WireCurve> {
    let curves: Vec<WireCurve> = connections
        .iter()
        .map(|connection| {
            let start = endpoint(&connection.from_part, placed, t);
            let end = endpoint(&connection.to_part, placed, t);
            let mid = start.midpoint(end).raise(ARC_HEIGHT + ARC_GROWTH * t);
            let (color, width, dashed) = style.stroke(connection.wire_color.as_deref());

            trace!(from = connection.from_part, to = connection.to_part, color = color; "Routed wire");
            WireCurve {
                start,
                mid,
                end,
                color,
                width,
                dashed,
            }
        })
        .collect();

    info!(wires = curves.len(); "Routed wires");
    curves
}

/// Find the part a free-text reference points at.
///
/// # Examples
///
/// ```
/// use partscape::{scene::ViewParams, spatial::layout_parts, wiring::resolve_endpoint};
/// use partscape_core::model::Part;
///
/// let parts = vec![Part::new("ESP32"), Part::new("ESP32-CAM")];
/// let placed = layout_parts(&parts, &ViewParams::default());
///
/// // "ESP32" is contained in "ESP32-CAM", and comes first
/// assert_eq!(resolve_endpoint("ESP32-CAM", &placed).map(|p| p.index), Some(0));
/// assert!(resolve_endpoint("Relay", &placed).is_none());
/// ```
pub fn resolve_endpoint<'a>(reference: &str, placed: &'a [PlacedPart]) -> Option<&'a PlacedPart> {
    if reference.is_empty() {
        return None;
    }
    placed.iter().find(|part| {
        let name = part.name.as_str();
        !name.is_empty()
            && (name == reference || reference.contains(name) || name.contains(reference))
    })
}

fn endpoint(reference: &str, placed: &[PlacedPart], t: f32) -> Vec3 {
    let Some(part) = resolve_endpoint(reference, placed) else {
        debug!(reference = reference; "Unmatched wire endpoint, using origin");
        return Vec3::ZERO;
    };

    if part.overridden {
        return part.position.raise(ENDPOINT_LIFT);
    }

    let parity = if part.index % 2 == 0 { 1.0 } else { ODD_RISE_FACTOR };
    part.position
        .with_y(part.base_position.y() + ENDPOINT_LIFT + EXPLODED_RISE * t * parity)
}

/// Map a free-text wire color to a renderable color.
///
/// Known names resolve to a fixed palette; any other non-empty value passes
/// through lowercased; a missing or empty value is neutral gray.
pub fn resolve_wire_color(wire_color: Option<&str>) -> String {
    let color = wire_color.unwrap_or_default().to_lowercase();
    if color.is_empty() {
        return NEUTRAL_WIRE_COLOR.to_string();
    }

    COLOR_ALIASES
        .iter()
        .find(|(names, _)| names.contains(&color.as_str()))
        .map(|(_, hex)| hex.to_string())
        .unwrap_or(color)
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use partscape_core::model::{Part, Placement};

    use super::*;
    use crate::{
        scene::{ExplosionFactor, ViewParams},
        spatial::layout_parts,
    };

    fn placed_at(parts: &[Part], t: f32) -> Vec<PlacedPart> {
        layout_parts(
            parts,
            &ViewParams::new(ExplosionFactor::new(t), DisplayMode::Normal),
        )
    }

    fn normal() -> WireStyle {
        WireStyle::new(DisplayMode::Normal, "#00ffff")
    }

    #[test]
    fn test_color_aliases() {
        assert_eq!(resolve_wire_color(Some("Red")), "#d32f2f");
        assert_eq!(resolve_wire_color(Some("VCC")), "#d32f2f");
        assert_eq!(resolve_wire_color(Some("5v")), "#d32f2f");
        assert_eq!(resolve_wire_color(Some("GND")), "#212121");
        assert_eq!(resolve_wire_color(Some("ground")), "#212121");
        assert_eq!(resolve_wire_color(Some("blue")), "#1976d2");
        assert_eq!(resolve_wire_color(Some("yellow")), "#fbc02d");
        assert_eq!(resolve_wire_color(Some("green")), "#388e3c");
    }

    #[test]
    fn test_color_passthrough_and_default() {
        assert_eq!(resolve_wire_color(Some("Orange")), "orange");
        assert_eq!(resolve_wire_color(Some("#FF00AA")), "#ff00aa");
        assert_eq!(resolve_wire_color(Some("")), "gray");
        assert_eq!(resolve_wire_color(None), "gray");
    }

    #[test]
    fn test_first_match_wins() {
        let parts = vec![
            Part::new("Motor Driver"),
            Part::new("Motor"),
            Part::new(""),
        ];
        let placed = placed_at(&parts, 0.0);

        assert_eq!(resolve_endpoint("Motor", &placed).unwrap().index, 0);
        assert_eq!(resolve_endpoint("Motor Driver L298N", &placed).unwrap().index, 0);
        assert!(resolve_endpoint("", &placed).is_none());
        // The unnamed part never matches
        assert!(resolve_endpoint("Servo", &placed).is_none());
    }

    #[test]
    fn test_unmatched_endpoint_is_origin() {
        let parts = vec![Part::new("DHT22").with_kind("sensor")];
        let placed = placed_at(&parts, 0.0);
        let wires = route(&[WireConnection::new("DHT22", "Relay")], &placed, 0.0, &normal());

        assert_eq!(wires.len(), 1);
        assert_eq!(wires[0].end, Vec3::ZERO);
    }

    #[test]
    fn test_override_endpoint_lift() {
        let parts = vec![Part::new("Lid").with_placement(Placement::new(1.0, 2.0, 0.0))];
        let placed = placed_at(&parts, 1.0);
        let wires = route(&[WireConnection::new("Lid", "Lid")], &placed, 1.0, &normal());

        // exploded (1.5, 7, 0) plus 0.5
        assert_eq!(wires[0].start, Vec3::new(1.5, 7.5, 0.0));
    }

    #[test]
    fn test_heuristic_endpoint_lift_by_parity() {
        let parts = vec![
            Part::new("ESP32").with_kind("microcontroller"),
            Part::new("DHT22").with_kind("sensor"),
        ];
        let placed = placed_at(&parts, 1.0);
        let wires = route(&[WireConnection::new("ESP32", "DHT22")], &placed, 1.0, &normal());

        assert!(approx_eq!(f32, wires[0].start.y(), 0.2 + 0.5 + 3.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, wires[0].end.y(), 0.2 + 0.5 + 4.5, epsilon = 1e-5));
        assert_eq!(wires[0].start.x(), placed[0].position.x());
        assert_eq!(wires[0].end.z(), placed[1].position.z());
    }

    #[test]
    fn test_arc_grows_with_explosion() {
        let parts = vec![Part::new("A"), Part::new("B")];
        let connection = [WireConnection::new("A", "B")];

        let collapsed = route(&connection, &placed_at(&parts, 0.0), 0.0, &normal());
        let c = &collapsed[0];
        let rise = c.mid.y() - (c.start.y() + c.end.y()) / 2.0;
        assert!(approx_eq!(f32, rise, 4.0, epsilon = 1e-5));

        let exploded = route(&connection, &placed_at(&parts, 1.0), 1.0, &normal());
        let e = &exploded[0];
        let rise = e.mid.y() - (e.start.y() + e.end.y()) / 2.0;
        assert!(approx_eq!(f32, rise, 6.0, epsilon = 1e-5));
    }

    #[test]
    fn test_blueprint_stroke() {
        let parts = vec![Part::new("A"), Part::new("B")];
        let placed = placed_at(&parts, 0.0);
        let connection = [WireConnection::new("A", "B").with_color("red")];

        let normal = route(&connection, &placed, 0.0, &normal());
        assert_eq!(normal[0].color, "#d32f2f");
        assert_eq!(normal[0].width, 3.0);
        assert!(!normal[0].dashed);

        let style = WireStyle::new(DisplayMode::Blueprint, "#00ffff");
        let blueprint = route(&connection, &placed, 0.0, &style);
        assert_eq!(blueprint[0].color, "#00ffff");
        assert_eq!(blueprint[0].width, 1.0);
        assert!(blueprint[0].dashed);
        assert_eq!(blueprint[0].start, normal[0].start);
        assert_eq!(blueprint[0].mid, normal[0].mid);
    }
}
