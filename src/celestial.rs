//! Sun and moon billboards.

use crate::camera::Camera;
use crate::draw::DrawTarget;
use crate::math::{Vec2, Vec3};
use crate::projection::Viewport;
use crate::shading::{self, Color};

/// A sky object that keeps a fixed offset from the viewer, so it never gets
/// closer however far the camera travels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CelestialBody {
    pub base_offset: Vec3,
    pub mirrored: bool,
    pub color: Color,
}

impl CelestialBody {
    pub fn sun(offset: Vec3) -> Self {
        Self {
            base_offset: offset,
            mirrored: false,
            color: shading::SUN,
        }
    }

    /// Opposite the sun across the horizon.
    pub fn moon(sun_offset: Vec3) -> Self {
        Self {
            base_offset: sun_offset,
            mirrored: true,
            color: shading::MOON,
        }
    }

    pub fn offset(&self) -> Vec3 {
        if self.mirrored {
            self.base_offset * Vec3::new(1.0, -1.0, 1.0)
        } else {
            self.base_offset
        }
    }

    pub fn camera_space(&self, camera: &Camera) -> Vec3 {
        camera.to_camera_space(camera.position + self.offset())
    }

    /// Screen rectangle centred on the projected position, or `None` when
    /// the body is behind the viewer.
    pub fn screen_rect(
        &self,
        camera: &Camera,
        viewport: &Viewport,
        size: f32,
    ) -> Option<(Vec2, Vec2)> {
        let center = viewport.project_to_screen(self.camera_space(camera))?;
        let extent = Vec2::new(size, size);
        Some((center - extent.scale(0.5), extent))
    }

    /// Returns whether anything was drawn.
    pub fn draw(
        &self,
        camera: &Camera,
        viewport: &Viewport,
        size: f32,
        target: &mut impl DrawTarget,
    ) -> bool {
        match self.screen_rect(camera, viewport, size) {
            Some((origin, extent)) => {
                target.fill_rect(origin, extent, self.color);
                true
            }
            None => false,
        }
    }
}
