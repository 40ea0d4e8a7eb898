use log::debug;

use crate::config::{MAX_PITCH, MIN_PITCH};
use crate::math::{Vec2, Vec3};

/// Axis-aligned horizontal movement; the camera's facing is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Back,
    Left,
    Right,
}

impl Movement {
    pub fn direction(self) -> Vec3 {
        match self {
            Movement::Forward => Vec3::new(1.0, 0.0, 0.0),
            Movement::Back => Vec3::new(-1.0, 0.0, 0.0),
            Movement::Left => Vec3::new(0.0, 0.0, 1.0),
            Movement::Right => Vec3::new(0.0, 0.0, -1.0),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: Vec3,
    /// Yaw in `x`, pitch in `y`, radians.
    pub rotation: Vec2,
    pub last_cursor: Vec2,
}

impl Camera {
    /// Pitch starts clamped, so a camera is never drawn from outside the bounds.
    pub fn new(position: Vec3, rotation: Vec2) -> Self {
        let mut camera = Self {
            position,
            rotation,
            last_cursor: Vec2::ZERO,
        };
        camera.clamp_pitch();
        camera
    }

    /// `rotate(world - position)`.
    pub fn to_camera_space(&self, world: Vec3) -> Vec3 {
        (world - self.position).rotate_yaw_pitch(self.rotation)
    }

    pub fn to_world_space(&self, camera_space: Vec3) -> Vec3 {
        camera_space.unrotate_yaw_pitch(self.rotation) + self.position
    }

    /// Turns by the pointer travel since the previous sample and clamps pitch.
    pub fn look(&mut self, cursor: Vec2, sensitivity: f32) {
        let delta = (self.last_cursor - cursor).scale(sensitivity);
        self.rotation += delta;
        self.clamp_pitch();
        self.last_cursor = cursor;
    }

    pub fn clamp_pitch(&mut self) {
        let pitch = self.rotation.y;
        if pitch > MAX_PITCH {
            self.rotation.y = MAX_PITCH;
        } else if pitch < MIN_PITCH {
            self.rotation.y = MIN_PITCH;
        } else {
            return;
        }
        debug!("pitch {pitch:.3} clamped to {:.3}", self.rotation.y);
    }

    pub fn step(&mut self, movement: Movement, step: f32) {
        self.position += movement.direction().scale(step);
    }

    pub fn rise(&mut self, step: f32) {
        self.position.y += step;
    }
}
