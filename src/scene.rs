//! Per-frame driver: input, then billboards, then blocks back to front.

use log::info;

use crate::block::Block;
use crate::camera::Camera;
use crate::celestial::CelestialBody;
use crate::config::Settings;
use crate::depth::{self, DepthFace};
use crate::draw::DrawTarget;
use crate::face::build_faces;
use crate::gizmo;
use crate::input::FrameInput;
use crate::math::{Vec2, Vec3};
use crate::projection::Viewport;
use crate::shading::{self, Color, GREEN};
use crate::visibility;

const OUTLINE: Color = Color::gray(0);
const BORDER_WIDTH: f32 = 2.0;

/// Counters for one [`Scene::draw`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub blocks: usize,
    pub faces_drawn: usize,
    pub faces_culled: usize,
    pub celestials_drawn: usize,
    pub axes_drawn: usize,
}

/// Everything one render session owns: the viewer, the world and the sky.
pub struct Scene {
    pub camera: Camera,
    blocks: Vec<Block>,
    sun: CelestialBody,
    moon: CelestialBody,
    viewport: Viewport,
    settings: Settings,
    /// Set by the first pointer sample, which only seeds `camera.last_cursor`.
    cursor_seen: bool,
}

impl Scene {
    pub fn new(settings: Settings, blocks: Vec<Block>) -> Self {
        Self {
            camera: Camera::new(settings.camera_start, settings.camera_rotation),
            blocks,
            sun: CelestialBody::sun(settings.sun_offset),
            moon: CelestialBody::moon(settings.sun_offset),
            viewport: Viewport::new(settings.width, settings.height),
            settings,
            cursor_seen: false,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn update(&mut self, input: &FrameInput) {
        if let Some(cursor) = input.cursor {
            if self.cursor_seen {
                self.camera.look(cursor, self.settings.pointer_sensitivity);
            } else {
                self.camera.last_cursor = cursor;
                self.cursor_seen = true;
            }
        }
        if let Some(movement) = input.movement() {
            self.camera.step(movement, self.settings.move_step);
        }
        if input.jump {
            self.camera.rise(self.settings.jump_step);
        }

        if input.toggle_gizmo {
            self.settings.show_gizmo = !self.settings.show_gizmo;
            info!("world axes {}", on_off(self.settings.show_gizmo));
        }
        if input.toggle_outlines {
            self.settings.show_outlines = !self.settings.show_outlines;
            info!("face outlines {}", on_off(self.settings.show_outlines));
        }
        if input.toggle_depth_shading {
            self.settings.depth_shading = !self.settings.depth_shading;
            info!("depth shading {}", on_off(self.settings.depth_shading));
        }
    }

    /// Camera-space faces of `block` that pass the near-plane test, farthest first.
    pub fn visible_faces(&self, block: &Block) -> (Vec<DepthFace>, usize) {
        let mut culled = 0;
        let mut faces = Vec::with_capacity(6);
        for face in build_faces(block) {
            let face = face.map(|p| self.camera.to_camera_space(p));
            if !visibility::all_in_front(&face.vertices) {
                culled += 1;
                continue;
            }
            faces.push(DepthFace::new(face));
        }
        depth::sort_faces(&mut faces);
        (faces, culled)
    }

    pub fn draw(&self, target: &mut impl DrawTarget) -> FrameStats {
        let mut stats = FrameStats::default();
        let size = self.settings.celestial_size;

        for body in [&self.moon, &self.sun] {
            if body.draw(&self.camera, &self.viewport, size, target) {
                stats.celestials_drawn += 1;
            }
        }

        for block in depth::sort_blocks(&self.blocks, self.camera.position) {
            self.draw_block(block, target, &mut stats);
            stats.blocks += 1;
        }

        if self.settings.show_gizmo {
            stats.axes_drawn = gizmo::draw_world_axes(&self.camera, &self.viewport, target);
        }
        if self.settings.show_border {
            self.draw_border(target);
        }
        stats
    }

    fn draw_block(&self, block: &Block, target: &mut impl DrawTarget, stats: &mut FrameStats) {
        let (faces, culled) = self.visible_faces(block);
        stats.faces_culled += culled;

        let max_depth = depth::max_depth(&faces);
        let base = block.material.base_value();
        for DepthFace { face, depth } in faces {
            let Some(points) = face
                .vertices
                .iter()
                .map(|v| self.viewport.project_to_screen(*v))
                .collect::<Option<Vec<Vec2>>>()
            else {
                stats.faces_culled += 1;
                continue;
            };

            let factor = if self.settings.depth_shading {
                shading::depth_shade(depth, max_depth)
            } else {
                face.shade
            };
            target.fill_polygon(&points, shading::shade_color(base, factor));
            if self.settings.show_outlines {
                target.stroke_polygon(&points, OUTLINE);
            }
            stats.faces_drawn += 1;
        }
    }

    fn draw_border(&self, target: &mut impl DrawTarget) {
        let Viewport { width, height } = self.viewport;
        let w = BORDER_WIDTH;
        target.fill_rect(Vec2::ZERO, Vec2::new(width, w), GREEN);
        target.fill_rect(Vec2::new(0.0, height - w), Vec2::new(width, w), GREEN);
        target.fill_rect(Vec2::ZERO, Vec2::new(w, height), GREEN);
        target.fill_rect(Vec2::new(width - w, 0.0), Vec2::new(w, height), GREEN);
    }

    /// Camera position and rotation, for the window title.
    pub fn overlay(&self) -> String {
        let Vec3 { x, y, z } = self.camera.position;
        let Vec2 { x: yaw, y: pitch } = self.camera.rotation;
        format!("POS: X: {x:.02} Y: {y:.02} Z: {z:.02}  ROT: X: {yaw:.02} Y: {pitch:.02}")
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
