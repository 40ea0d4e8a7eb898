//! Near-plane test. Anything at or behind camera-space `z = 0` is not drawn.

use crate::math::Vec3;

pub fn in_front(camera_space: Vec3) -> bool {
    camera_space.z > 0.0
}

pub fn is_behind(camera_space: Vec3) -> bool {
    !in_front(camera_space)
}

/// A polygon is kept only when every vertex passes; there is no partial clipping.
pub fn all_in_front(points: &[Vec3]) -> bool {
    points.iter().copied().all(in_front)
}
