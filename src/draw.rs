//! Screen-space draw calls handed to a rasterizer, in painting order.

use crate::math::Vec2;
use crate::shading::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    /// Axis-aligned filled rectangle; `origin` is the top-left pixel.
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    /// Closed convex polygon.
    FillPolygon { points: Vec<Vec2>, color: Color },
    /// Debug line.
    Line { from: Vec2, to: Vec2, color: Color },
}

/// Anything draw calls can be issued against.
///
/// Calls must be executed in the order they arrive; that order is the only
/// occlusion mechanism.
pub trait DrawTarget {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color);

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color) {
        for (i, from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.stroke_line(*from, to, color);
        }
    }

    fn submit(&mut self, call: &DrawCall) {
        match call {
            DrawCall::FillRect {
                origin,
                size,
                color,
            } => self.fill_rect(*origin, *size, *color),
            DrawCall::FillPolygon { points, color } => self.fill_polygon(points, *color),
            DrawCall::Line { from, to, color } => self.stroke_line(*from, *to, *color),
        }
    }
}

/// Records calls instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the list, keeping its allocation for the next frame.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Issues every recorded call against `target`, oldest first.
    pub fn replay(&self, target: &mut impl DrawTarget) {
        for call in &self.calls {
            target.submit(call);
        }
    }

    pub fn polygons(&self) -> impl Iterator<Item = (&[Vec2], Color)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::FillPolygon { points, color } => Some((points.as_slice(), *color)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (Vec2, Vec2, Color)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::FillRect {
                origin,
                size,
                color,
            } => Some((*origin, *size, *color)),
            _ => None,
        })
    }
}

impl DrawTarget for DrawList {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.calls.push(DrawCall::FillRect {
            origin,
            size,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.calls.push(DrawCall::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.calls.push(DrawCall::Line { from, to, color });
    }
}
