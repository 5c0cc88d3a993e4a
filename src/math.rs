//! Small planar helpers shared by the placement code.
//!
//! All angles come in as degrees; y increases downward to match the SVG
//! coordinate convention, so "up" is negative y throughout.

use glam::Vec2;

/// Unit vector at `deg` from the +X axis, y increasing downward
#[inline]
pub fn angle_dir(deg: f32) -> Vec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    Vec2::new(cos, sin)
}

/// Unit vector pitched `deg` above horizontal (screen up is negative y)
#[inline]
pub fn elevation_dir(deg: f32) -> Vec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    Vec2::new(cos, -sin)
}

/// Unit vector of an axis leaning forward, measured `deg` from vertical
#[inline]
pub fn from_vertical_dir(deg: f32) -> Vec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    Vec2::new(sin, -cos)
}

/// Horizontal leg of a right triangle, collapsing to zero when the
/// hypotenuse is shorter than the vertical leg
pub fn horiz_reach(hypotenuse: f32, vertical: f32) -> f32 {
    (hypotenuse * hypotenuse - vertical * vertical).max(0.0).sqrt()
}
