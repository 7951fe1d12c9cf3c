//! Per-category placement strategies.
//!
//! An explicit [`Placement`](partscape_core::model::Placement) always wins.
//! Otherwise the category picks a strategy:
//!
//! ```text
//! Wheel              four corners of a rover, rolled onto their side
//! Motor (servo)      left/right pairs
//! Motor, Propeller   tips of a four-arm drone frame
//! Frame, Enclosure   origin
//! interior parts     tight grid inside the enclosure (spacing 1.5)
//! everything else    loose grid (spacing 7)
//! ```

use std::f32::consts::FRAC_PI_2;

use partscape_core::{category::Category, geometry::Vec3, model::Part};

use crate::classify::classify;

/// Distance from the frame center to each drone arm tip.
const ARM_RADIUS: f32 = 4.8;
/// Arm headings in degrees, selected by `index mod 4`.
const ARM_ANGLES: [f32; 4] = [45.0, 135.0, 225.0, 315.0];

const WHEEL_TRACK: f32 = 1.8;
const WHEEL_BASE: f32 = 1.5;
const SERVO_OFFSET: f32 = 2.0;
const MOTOR_HEIGHT: f32 = 0.5;
const PROPELLER_HEIGHT: f32 = 1.0;

const INTERIOR_SPACING: f32 = 1.5;
const FALLBACK_SPACING: f32 = 7.0;
const GRID_HEIGHT: f32 = 0.2;

/// Quarter turn about the roll (z) axis.
const ROLLED: Vec3 = Vec3::new(0.0, 0.0, FRAC_PI_2);

/// Result of placing a single part, before the explosion transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placed {
    pub position: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
    /// True when the position came from an explicit placement.
    pub overridden: bool,
}

/// A cell of a square placement grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub columns: usize,
}

impl GridCell {
    /// Cell of `index` in a square grid sized for `total` parts.
    pub fn of(index: usize, total: usize) -> Self {
        let columns = ((total as f64).sqrt().ceil() as usize).max(1);
        Self {
            row: index / columns,
            col: index % columns,
            columns,
        }
    }

    /// Position of the cell center, with the grid centered on the origin.
    fn position(self, spacing: f32, height: f32) -> Vec3 {
        let half = self.columns as f32 / 2.0;
        let offset = |i: usize| (i as f32 - half) * spacing + spacing / 2.0;
        Vec3::new(offset(self.col), height, offset(self.row))
    }
}

/// Place `part`, the `index`-th of `total` parts.
///
/// # Examples
///
/// ```
/// use partscape::spatial::place;
/// use partscape_core::{geometry::Vec3, model::{Part, Placement}};
///
/// let part = Part::new("Lid").with_placement(Placement::new(1.0, 2.0, 3.0));
/// let placed = place(&part, 7, 9);
/// assert!(placed.overridden);
/// assert_eq!(placed.position, Vec3::new(1.0, 2.0, 3.0));
/// ```
pub fn place(part: &Part, index: usize, total: usize) -> Placed {
    place_as(part, classify(part), index, total)
}

/// Place `part` using an already computed category.
pub fn place_as(part: &Part, category: Category, index: usize, total: usize) -> Placed {
    if let Some(placement) = &part.placement {
        return Placed {
            position: placement.position(),
            rotation: placement.rotation_degrees().to_radians(),
            overridden: true,
        };
    }

    let (position, rotation) = match category {
        Category::Wheel => (wheel_corner(index), ROLLED),
        Category::Motor if part.name.to_lowercase().contains("servo") => {
            (servo_side(index), Vec3::ZERO)
        }
        Category::Motor => (arm_tip(index, MOTOR_HEIGHT), Vec3::ZERO),
        Category::Propeller => (arm_tip(index, PROPELLER_HEIGHT), Vec3::ZERO),
        category if category.is_anchor() => (Vec3::ZERO, Vec3::ZERO),
        Category::Battery => (
            GridCell::of(index, total).position(INTERIOR_SPACING, GRID_HEIGHT),
            ROLLED,
        ),
        category if category.is_interior() => (
            GridCell::of(index, total).position(INTERIOR_SPACING, GRID_HEIGHT),
            Vec3::ZERO,
        ),
        _ => (
            GridCell::of(index, total).position(FALLBACK_SPACING, GRID_HEIGHT),
            Vec3::ZERO,
        ),
    };

    Placed {
        position,
        rotation,
        overridden: false,
    }
}

fn wheel_corner(index: usize) -> Vec3 {
    let side = if index % 2 == 0 { 1.0 } else { -1.0 };
    let front = if index < 2 { 1.0 } else { -1.0 };
    Vec3::new(side * WHEEL_TRACK, 0.0, front * WHEEL_BASE)
}

fn servo_side(index: usize) -> Vec3 {
    let side = if index % 2 == 0 { 1.0 } else { -1.0 };
    Vec3::new(side * SERVO_OFFSET, 0.0, 0.0)
}

fn arm_tip(index: usize, height: f32) -> Vec3 {
    let angle = ARM_ANGLES[index % ARM_ANGLES.len()].to_radians();
    Vec3::new(angle.sin() * ARM_RADIUS, height, angle.cos() * ARM_RADIUS)
}
