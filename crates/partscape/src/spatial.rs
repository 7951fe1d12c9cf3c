//! Spatial layout of the 3D build scene.
//!
//! Each part is classified, placed by [`place_as`], and pushed apart by the
//! [`explode`] transform. The same module also produces the scene dressing
//! around the parts: the mounting plate and the selection marker.

mod explode;
mod placement;
mod shape;

use log::{debug, info};

use partscape_core::{geometry::Vec3, model::Part};

use crate::{
    classify::classify,
    scene::{
        DisplayMode, MountingPlate, PartLabel, PlacedPart, PlateStyle, SelectionMarker, ViewParams,
    },
};

pub use explode::explode;
pub use placement::{GridCell, Placed, place, place_as};
pub use shape::{ShapeKind, has_label};

/// Base height of floating labels above a part.
const LABEL_OFFSET: f32 = 2.0;

const PLATE_MIN_SIZE: f32 = 10.0;
const PLATE_CELL: f32 = 7.0;
const PLATE_MARGIN: f32 = 2.0;
const PLATE_HEIGHT: f32 = -0.2;

const MARKER_OFFSET: f32 = 2.0;
const MARKER_RADIUS: f32 = 0.5;
const MARKER_OPACITY: f32 = 0.6;

/// Place every part and apply the explosion transform.
///
/// The result has one entry per part, in input order.
pub fn layout_parts(parts: &[Part], view: &ViewParams) -> Vec<PlacedPart> {
    let total = parts.len();
    let t = view.explosion.value();
    let blueprint = view.mode.is_blueprint();

    let placed: Vec<PlacedPart> = parts
        .iter()
        .enumerate()
        .map(|(index, part)| {
            let category = classify(part);
            let Placed {
                position,
                rotation,
                overridden,
            } = place_as(part, category, index, total);

            let label = has_label(&part.name).then(|| PartLabel {
                text: part.name.clone(),
                offset_y: LABEL_OFFSET + t,
                color: String::from(if blueprint { "#ffffff" } else { "#333333" }),
                outlined: !blueprint,
            });

            PlacedPart {
                index,
                name: part.name.clone(),
                category,
                shape: ShapeKind::from(category),
                position: explode(position, t),
                base_position: position,
                rotation,
                overridden,
                label,
                wireframe: blueprint,
            }
        })
        .collect();

    let overrides = placed.iter().filter(|p| p.overridden).count();
    info!(parts = total, overrides = overrides, explosion = t; "Placed parts");

    placed
}

/// The board under the electronics, if one is drawn.
///
/// Normal mode hides the plate when the build already has a frame or arms to
/// sit on. Blueprint mode always draws it as an outline.
pub fn mounting_plate(parts: &[Part], mode: DisplayMode) -> Option<MountingPlate> {
    let board = PLATE_MIN_SIZE.max((parts.len() as f32).sqrt().ceil() * PLATE_CELL);
    let size = board + PLATE_MARGIN;

    let style = match mode {
        DisplayMode::Blueprint => PlateStyle::Outline,
        DisplayMode::Normal if has_structure(parts) => {
            debug!("Build has its own structure, skipping mounting plate");
            return None;
        }
        DisplayMode::Normal => PlateStyle::Solid,
    };

    Some(MountingPlate {
        size,
        height: PLATE_HEIGHT,
        style,
    })
}

fn has_structure(parts: &[Part]) -> bool {
    parts.iter().any(|part| {
        let name = part.name.to_lowercase();
        part.kind_lowercase() == "frame" || name.contains("chassis") || name.contains("arm")
    })
}

/// Highlight sphere above the selected part.
///
/// Returns `None` when nothing is selected or the index is out of range.
pub fn selection_marker(placed: &[PlacedPart], view: &ViewParams) -> Option<SelectionMarker> {
    let index = view.selected?;
    let Some(part) = placed.get(index) else {
        debug!(index = index, parts = placed.len(); "Selected index out of range");
        return None;
    };

    let blueprint = view.mode.is_blueprint();
    Some(SelectionMarker {
        index,
        position: part.position.add(Vec3::new(0.0, MARKER_OFFSET, 0.0)),
        radius: MARKER_RADIUS,
        color: String::from(if blueprint { "#00ffff" } else { "#3b82f6" }),
        opacity: MARKER_OPACITY,
        wireframe: blueprint,
    })
}

/// Scene clear color for the display mode.
pub fn background(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::Normal => "#f3f4f6",
        DisplayMode::Blueprint => "#001020",
    }
}
