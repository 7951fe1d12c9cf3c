//! Exploded-view transform.

use partscape_core::geometry::Vec3;

/// Horizontal spread per unit of explosion.
const SPREAD: f32 = 0.5;
/// Vertical lift per unit of explosion.
const LIFT: f32 = 5.0;

/// Pushes a position outward and upward by the explosion factor `t`.
///
/// `x` and `z` scale by `1 + 0.5t`; `y` rises by `5t`. The identity at
/// `t = 0`, and applied the same way to every position regardless of
/// where it came from.
///
/// # Examples
///
/// ```
/// use partscape::spatial::explode;
/// use partscape_core::geometry::Vec3;
///
/// let p = Vec3::new(2.0, 1.0, -4.0);
/// assert_eq!(explode(p, 0.0), p);
/// assert_eq!(explode(p, 1.0), Vec3::new(3.0, 6.0, -6.0));
/// ```
pub fn explode(p: Vec3, t: f32) -> Vec3 {
    let spread = 1.0 + SPREAD * t;
    Vec3::new(p.x() * spread, p.y() + LIFT * t, p.z() * spread)
}
