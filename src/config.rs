use std::f32::consts::PI;

use anyhow::{ensure, Result};

use crate::math::{Vec2, Vec3};
use crate::shading::Color;

/// Fixed simulation tick the input constants are expressed in.
pub const FRAME_DT: f32 = 1.0 / 60.0;

/// Camera pitch bounds in the rotation operator's convention.
pub const MAX_PITCH: f32 = -PI * 0.5;
pub const MIN_PITCH: f32 = -PI * 1.5;

#[derive(Clone, Debug)]
pub struct Settings {
    pub title: &'static str,
    pub width: usize,
    pub height: usize,
    /// Radians of rotation per pixel of pointer travel.
    pub pointer_sensitivity: f32,
    pub move_step: f32,
    pub jump_step: f32,
    pub celestial_size: f32,
    pub sun_offset: Vec3,
    pub camera_start: Vec3,
    pub camera_rotation: Vec2,
    pub sky_top: Color,
    pub sky_bottom: Color,
    pub show_gizmo: bool,
    pub show_outlines: bool,
    pub depth_shading: bool,
    pub show_border: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Voxel Painter",
            width: 800,
            height: 800,
            pointer_sensitivity: FRAME_DT * PI,
            move_step: FRAME_DT,
            jump_step: FRAME_DT,
            celestial_size: 64.0,
            sun_offset: Vec3::new(0.0, 10.0, 0.0),
            camera_start: Vec3::new(5.0, 5.0, 5.0),
            camera_rotation: Vec2::ZERO,
            sky_top: Color::rgb(0x0B, 0x12, 0x2A),
            sky_bottom: Color::rgb(0x02, 0x04, 0x0C),
            show_gizmo: false,
            show_outlines: false,
            depth_shading: false,
            show_border: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "viewport must be non-empty, got {}x{}",
            self.width,
            self.height
        );
        ensure!(
            self.move_step > 0.0 && self.jump_step > 0.0,
            "movement steps must be positive"
        );
        ensure!(
            self.pointer_sensitivity.is_finite(),
            "pointer sensitivity must be finite"
        );
        ensure!(self.celestial_size > 0.0, "celestial size must be positive");
        Ok(())
    }
}
