//! Analytic circle collision primitives
//!
//! Stateless routines shared by the per-shape tile resolvers. Both work in
//! world units and report or apply the minimal displacement that clears the
//! penetration.

use crate::core::types::Vec2;

/// Minimal displacement to move a circle's center out of an axis-aligned
/// square, `Vec2::ZERO` if the circle does not penetrate.
///
/// When the center lies outside the square the push is along the vector from
/// the nearest point on the perimeter (corner contacts included). When the
/// center is inside, the push is along the shallower axis, out to the
/// Minkowski-expanded boundary. A center exactly on the square's center
/// resolves toward +x rather than panicking or oscillating.
pub fn circle_vs_square(square_center: Vec2, half_side: f32, circle_center: Vec2, radius: f32) -> Vec2 {
    let d = circle_center - square_center;

    if d.x.abs() > half_side || d.y.abs() > half_side {
        // Center outside the square: resolve against the nearest perimeter point.
        let nearest = square_center + d.clamp(Vec2::splat(-half_side), Vec2::splat(half_side));
        let offset = circle_center - nearest;
        let dist = offset.length();
        if dist >= radius {
            return Vec2::ZERO;
        }
        offset / dist * (radius - dist)
    } else {
        // Center inside the square: push along the axis with less penetration.
        let pen_x = half_side + radius - d.x.abs();
        let pen_y = half_side + radius - d.y.abs();
        if pen_x <= pen_y {
            Vec2::new(pen_x * d.x.signum(), 0.0)
        } else {
            Vec2::new(0.0, pen_y * d.y.signum())
        }
    }
}

/// Push a circle's center out to exactly `radius` away from a point.
///
/// No-op when the center is at least `radius` away already, and also when the
/// center coincides with the point: the push direction is undefined there, so
/// the caller gets "no resolution possible this tick" instead of NaN.
pub fn circle_vs_point(point: Vec2, circle_center: &mut Vec2, radius: f32) {
    let dist = circle_center.distance(point);
    if dist < radius && dist > 0.0 {
        let normal = (*circle_center - point) / dist;
        *circle_center = point + normal * radius;
    }
}
