use crate::math::{Vec2, Vec3};
use crate::visibility;

/// Pinhole divide with unit focal length.
///
/// Returns `None` for points at or behind the camera so that no infinity or
/// NaN ever reaches screen space.
pub fn project(camera_space: Vec3) -> Option<Vec2> {
    if visibility::is_behind(camera_space) {
        return None;
    }
    Some(Vec2::new(
        camera_space.x / camera_space.z,
        camera_space.y / camera_space.z,
    ))
}

/// Pixel dimensions of the render target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    /// NDC is Y-up, pixels are Y-down.
    pub fn to_screen(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            ((ndc.x + 1.0) / 2.0) * self.width,
            (1.0 - (ndc.y + 1.0) / 2.0) * self.height,
        )
    }

    pub fn project_to_screen(&self, camera_space: Vec3) -> Option<Vec2> {
        project(camera_space).map(|ndc| self.to_screen(ndc))
    }
}
