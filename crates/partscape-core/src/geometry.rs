//! Geometric primitives for scene and diagram layout.
//!
//! This module provides the coordinate types used throughout Partscape.
//!
//! # Overview
//!
//! - [`Vec3`] - A position or Euler rotation in the 3D build scene
//! - [`Point`] - A 2D coordinate in wiring diagram space
//! - [`Size`] - Width and height dimensions of a diagram element
//!
//! # Coordinate Systems
//!
//! The 3D scene is Y-up: parts rest on the XZ plane and the exploded view
//! lifts them along +Y.
//!
//! ```text
//!        +Y
//!         │
//!         │
//!         └──────► +X
//!        ╱
//!       ▼
//!     +Z
//! ```
//!
//! The 2D diagram uses screen coordinates, with the origin at the top-left
//! corner, X increasing rightward and Y increasing downward.

use serde::{Deserialize, Serialize};

/// A 3D vector in scene space.
///
/// Used both for positions (scene units) and for Euler rotations (radians,
/// applied in X, Y, Z order).
///
/// # Examples
///
/// ```
/// # use partscape_core::geometry::Vec3;
/// let start = Vec3::new(0.0, 1.0, 2.0);
/// let end = Vec3::new(4.0, 1.0, -2.0);
///
/// let mid = start.midpoint(end);
/// assert_eq!(mid, Vec3::new(2.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    x: f32,
    y: f32,
    z: f32,
}

impl Vec3 {
    /// The world origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new vector with the specified components
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the x-component
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-component (height)
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the z-component
    pub fn z(self) -> f32 {
        self.z
    }

    /// Creates a new vector with the specified y-component
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Adds another vector to this one, returning a new vector
    pub fn add(self, other: Vec3) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Returns the vector raised by `dy` along the vertical axis
    pub fn raise(self, dy: f32) -> Self {
        self.with_y(self.y + dy)
    }

    /// Calculates the midpoint between this vector and another
    pub fn midpoint(self, other: Vec3) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            z: (self.z + other.z) / 2.0,
        }
    }

    /// Converts a vector of degree values into radians
    pub fn to_radians(self) -> Self {
        Self {
            x: self.x.to_radians(),
            y: self.y.to_radians(),
            z: self.z.to_radians(),
        }
    }
}

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use partscape_core::geometry::Point;
/// let center = Point::new(90.0, 40.0);
/// let half = Point::new(90.0, 40.0);
///
/// assert_eq!(center.sub_point(half), Point::default());
/// assert_eq!(center.add_point(half), Point::new(180.0, 80.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the offset from an element's center to its top-left corner
    pub fn half_extent(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_raise_only_touches_height() {
        let v = Vec3::new(1.0, 2.0, 3.0).raise(0.5);
        assert_eq!(v, Vec3::new(1.0, 2.5, 3.0));
    }

    #[test]
    fn test_vec3_to_radians() {
        let r = Vec3::new(0.0, 180.0, 90.0).to_radians();
        assert_eq!(r.x(), 0.0);
        assert!((r.y() - std::f32::consts::PI).abs() < 1e-6);
        assert!((r.z() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_vec3_serializes_as_object() {
        let json = serde_json::to_string(&Vec3::new(1.0, 0.5, -2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":0.5,"z":-2.0}"#);
    }

    #[test]
    fn test_size_half_extent() {
        let half = Size::new(180.0, 80.0).half_extent();
        assert_eq!(half, Point::new(90.0, 40.0));
    }
}
