//! CPU framebuffer with no depth buffer; later calls overwrite earlier ones.

use crate::draw::DrawTarget;
use crate::math::Vec2;
use crate::shading::Color;

pub struct Framebuffer {
    width: usize,
    height: usize,
    color: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn color_buffer(&self) -> &[u32] {
        &self.color
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Color::from_u32(self.color[y * self.width + x]))
    }

    /// Vertical sky gradient.
    pub fn clear_gradient(&mut self, top: Color, bottom: Color) {
        for y in 0..self.height {
            let t = y as f32 / (self.height.max(1) as f32);
            let row = Color::lerp(top, bottom, t).to_u32();
            self.color[y * self.width..(y + 1) * self.width].fill(row);
        }
    }

    fn put(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.color[y as usize * self.width + x as usize] = color;
        }
    }

    /// Samples the visible part of the segment once per pixel along its
    /// longer axis.
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let max = Vec2::new(self.width as f32 - 1.0, self.height as f32 - 1.0);
        let Some((from, to)) = clip_segment(from, to, max) else {
            return;
        };
        let color = color.to_u32();
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let p = from + delta.scale(i as f32 / steps as f32);
            self.put(p.x.round() as i32, p.y.round() as i32, color);
        }
    }

    /// Bounding-box scan with edge functions; either winding is accepted.
    fn rasterize_triangle(&mut self, v0: Vec2, v1: Vec2, v2: Vec2, color: u32) {
        let min_x = v0.x.min(v1.x).min(v2.x).floor().max(0.0) as i32;
        let max_x = v0.x.max(v1.x).max(v2.x).ceil().min(self.width as f32 - 1.0) as i32;
        let min_y = v0.y.min(v1.y).min(v2.y).floor().max(0.0) as i32;
        let max_y = v0.y.max(v1.y).max(v2.y).ceil().min(self.height as f32 - 1.0) as i32;
        if min_x > max_x || min_y > max_y {
            return;
        }
        if edge(v0, v1, v2).abs() < 1e-6 {
            return;
        }
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let w0 = edge(v1, v2, p);
                let w1 = edge(v2, v0, p);
                let w2 = edge(v0, v1, p);
                if (w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0) || (w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0) {
                    self.color[y as usize * self.width + x as usize] = color;
                }
            }
        }
    }
}

/// Cuts a segment down to the box `[0, max]`, or `None` when it misses it.
fn clip_segment(from: Vec2, to: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    let delta = to - from;
    let (mut enter, mut exit) = (0.0f32, 1.0f32);
    let bounds = [
        (-delta.x, from.x),
        (delta.x, max.x - from.x),
        (-delta.y, from.y),
        (delta.y, max.y - from.y),
    ];
    for (direction, room) in bounds {
        if direction == 0.0 {
            if room < 0.0 {
                return None;
            }
            continue;
        }
        let t = room / direction;
        if direction < 0.0 {
            enter = enter.max(t);
        } else {
            exit = exit.min(t);
        }
    }
    (enter <= exit).then(|| (from + delta.scale(enter), from + delta.scale(exit)))
}

fn edge(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (c.x - a.x) * (b.y - a.y) - (c.y - a.y) * (b.x - a.x)
}

impl DrawTarget for Framebuffer {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        let color = color.to_u32();
        let x0 = origin.x.round().max(0.0) as usize;
        let y0 = origin.y.round().max(0.0) as usize;
        let x1 = ((origin.x + size.x).round().max(0.0) as usize).min(self.width);
        let y1 = ((origin.y + size.y).round().max(0.0) as usize).min(self.height);
        for y in y0..y1 {
            if x0 < x1 {
                self.color[y * self.width + x0..y * self.width + x1].fill(color);
            }
        }
    }

    /// Convex polygons only: filled as a fan around the first vertex.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        let color = color.to_u32();
        for pair in rest.windows(2) {
            self.rasterize_triangle(first, pair[0], pair[1], color);
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.draw_line(from, to, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shading::{MOON, SUN};

    fn count(fb: &Framebuffer, color: Color) -> usize {
        let packed = color.to_u32();
        fb.color_buffer().iter().filter(|&&p| p == packed).count()
    }

    #[test]
    fn rect_is_clipped_to_viewport() {
        let mut fb = Framebuffer::new(10, 10);
        fb.fill_rect(Vec2::new(6.0, 6.0), Vec2::new(64.0, 64.0), SUN);
        assert_eq!(count(&fb, SUN), 16);
        fb.fill_rect(Vec2::new(-70.0, 2.0), Vec2::new(64.0, 64.0), MOON);
        assert_eq!(count(&fb, MOON), 0);
    }

    #[test]
    fn square_fills_in_either_winding() {
        let ccw = [
            Vec2::new(2.0, 2.0),
            Vec2::new(6.0, 2.0),
            Vec2::new(6.0, 6.0),
            Vec2::new(2.0, 6.0),
        ];
        let mut cw = ccw;
        cw.reverse();
        for quad in [ccw, cw] {
            let mut fb = Framebuffer::new(8, 8);
            fb.fill_polygon(&quad, SUN);
            assert_eq!(count(&fb, SUN), 16);
            assert_eq!(fb.pixel(3, 3), Some(SUN));
            assert_eq!(fb.pixel(7, 7), Some(Color::rgb(0, 0, 0)));
        }
    }

    #[test]
    fn later_polygons_overwrite_earlier_ones() {
        let mut fb = Framebuffer::new(8, 8);
        let quad = [
            Vec2::new(0.0, 0.0),
            Vec2::new(8.0, 0.0),
            Vec2::new(8.0, 8.0),
            Vec2::new(0.0, 8.0),
        ];
        fb.fill_polygon(&quad, MOON);
        fb.fill_polygon(&quad, SUN);
        assert_eq!(count(&fb, SUN), 64);
    }

    #[test]
    fn degenerate_polygon_draws_nothing() {
        let mut fb = Framebuffer::new(8, 8);
        fb.fill_polygon(&[Vec2::new(1.0, 1.0), Vec2::new(5.0, 5.0)], SUN);
        fb.fill_polygon(&[], SUN);
        fb.fill_polygon(
            &[Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0)],
            SUN,
        );
        assert_eq!(count(&fb, SUN), 0);
    }

    #[test]
    fn line_touches_both_endpoints() {
        let mut fb = Framebuffer::new(10, 10);
        fb.stroke_line(Vec2::new(1.0, 1.0), Vec2::new(8.0, 5.0), SUN);
        assert_eq!(fb.pixel(1, 1), Some(SUN));
        assert_eq!(fb.pixel(8, 5), Some(SUN));
        assert_eq!(count(&fb, SUN), 8);
    }

    #[test]
    fn long_line_is_clipped_to_viewport() {
        let mut fb = Framebuffer::new(10, 10);
        fb.stroke_line(Vec2::new(-1000.0, 4.0), Vec2::new(1000.0, 4.0), SUN);
        assert_eq!(count(&fb, SUN), 10);
        assert_eq!(fb.pixel(0, 4), Some(SUN));
        assert_eq!(fb.pixel(9, 4), Some(SUN));

        fb.stroke_line(Vec2::new(-50.0, -3.0), Vec2::new(50.0, -3.0), MOON);
        fb.stroke_line(Vec2::new(20.0, -5.0), Vec2::new(30.0, 40.0), MOON);
        assert_eq!(count(&fb, MOON), 0);
    }

    #[test]
    fn gradient_runs_top_to_bottom() {
        let mut fb = Framebuffer::new(4, 4);
        fb.clear_gradient(Color::gray(200), Color::gray(0));
        assert_eq!(fb.pixel(0, 0), Some(Color::gray(200)));
        assert!(fb.pixel(0, 3).map(|c| c.r) < Some(200));
    }
}
