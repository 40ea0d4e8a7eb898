use crate::camera::Camera;
use crate::draw::DrawTarget;
use crate::math::Vec3;
use crate::projection::Viewport;
use crate::shading::{Color, BLUE, GREEN, RED};

const AXIS_EXTENT: f32 = 1000.0;

const AXES: [(Vec3, Vec3, Color); 3] = [
    (Vec3::new(-AXIS_EXTENT, 0.0, 0.0), Vec3::new(AXIS_EXTENT, 0.0, 0.0), RED),
    (Vec3::new(0.0, AXIS_EXTENT, 0.0), Vec3::new(0.0, -AXIS_EXTENT, 0.0), GREEN),
    (Vec3::new(0.0, 0.0, -AXIS_EXTENT), Vec3::new(0.0, 0.0, AXIS_EXTENT), BLUE),
];

/// World axes through the origin. An axis with either end behind the viewer
/// is dropped. Returns the number of lines drawn.
pub fn draw_world_axes(
    camera: &Camera,
    viewport: &Viewport,
    target: &mut impl DrawTarget,
) -> usize {
    let mut drawn = 0;
    for (from, to, color) in AXES {
        let from = viewport.project_to_screen(camera.to_camera_space(from));
        let to = viewport.project_to_screen(camera.to_camera_space(to));
        if let (Some(from), Some(to)) = (from, to) {
            target.stroke_line(from, to, color);
            drawn += 1;
        }
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{DrawCall, DrawList};
    use crate::math::Vec2;
    use std::f32::consts::PI;

    #[test]
    fn only_fully_visible_axes_are_drawn() {
        // Above the origin looking straight down: the Y axis reaches past
        // the viewer, the other two lie fully in front.
        let camera = Camera::new(Vec3::new(0.5, 500.0, 0.5), Vec2::new(0.0, -0.5 * PI));
        let mut list = DrawList::new();
        let drawn = draw_world_axes(&camera, &Viewport::new(800, 800), &mut list);
        assert_eq!(drawn, 2);
        let colors: Vec<Color> = list
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Line { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(colors, vec![RED, BLUE]);
    }
}
