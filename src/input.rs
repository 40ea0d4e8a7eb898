//! Per-frame input snapshot.

use minifb::{Key, KeyRepeat, MouseMode, Window};

use crate::camera::Movement;
use crate::math::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Absolute pointer position in window pixels, `None` while the pointer
    /// is outside the window.
    pub cursor: Option<Vec2>,
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub toggle_gizmo: bool,
    pub toggle_outlines: bool,
    pub toggle_depth_shading: bool,
}

impl FrameInput {
    /// At most one direction per frame: W, then S, then A, then D.
    pub fn movement(&self) -> Option<Movement> {
        if self.forward {
            Some(Movement::Forward)
        } else if self.back {
            Some(Movement::Back)
        } else if self.left {
            Some(Movement::Left)
        } else if self.right {
            Some(Movement::Right)
        } else {
            None
        }
    }

    pub fn from_window(window: &Window) -> Self {
        let cursor = window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Vec2::new(x, y));
        Self {
            cursor,
            forward: window.is_key_down(Key::W),
            back: window.is_key_down(Key::S),
            left: window.is_key_down(Key::A),
            right: window.is_key_down(Key::D),
            jump: window.is_key_down(Key::Space),
            toggle_gizmo: window.is_key_pressed(Key::G, KeyRepeat::No),
            toggle_outlines: window.is_key_pressed(Key::F, KeyRepeat::No),
            toggle_depth_shading: window.is_key_pressed(Key::L, KeyRepeat::No),
        }
    }
}
