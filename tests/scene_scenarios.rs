use std::f32::consts::PI;

use voxel_painter::block::{Block, Material};
use voxel_painter::config::{Settings, MAX_PITCH};
use voxel_painter::depth::block_sort_key;
use voxel_painter::draw::{DrawCall, DrawList};
use voxel_painter::input::FrameInput;
use voxel_painter::math::{Vec2, Vec3};
use voxel_painter::projection::{project, Viewport};
use voxel_painter::raster::Framebuffer;
use voxel_painter::scene::Scene;
use voxel_painter::shading::{Color, MOON, SUN};

fn settings_at(position: Vec3) -> Settings {
    Settings {
        camera_start: position,
        show_border: false,
        ..Settings::default()
    }
}

/// Runs one idle frame and records the draw calls.
fn idle_frame(scene: &mut Scene) -> DrawList {
    scene.update(&FrameInput::default());
    let mut list = DrawList::new();
    scene.draw(&mut list);
    list
}

fn polygon_colors(list: &DrawList) -> Vec<Color> {
    list.polygons().map(|(_, color)| color).collect()
}

#[test]
fn single_block_paints_far_side_first() {
    let mut scene = Scene::new(
        settings_at(Vec3::new(5.0, 5.0, 5.0)),
        vec![Block::new(Material::Grass, 0, 0, 0)],
    );
    let list = idle_frame(&mut scene);

    let block = scene.blocks()[0];
    let (faces, culled) = scene.visible_faces(&block);
    assert_eq!(culled, 0);
    assert_eq!(faces.len(), 6);

    // From above, the bottom is farthest and the top nearest.
    let colors = polygon_colors(&list);
    assert_eq!(colors.len(), 6);
    assert_eq!(colors[0], Color::gray(90));
    assert_eq!(colors[5], Color::gray(150));
    for pair in faces.windows(2) {
        assert!(pair[0].depth >= pair[1].depth);
    }
}

#[test]
fn farther_block_is_painted_completely_first() {
    let eye = Vec3::new(0.0, 3.0, 0.0);
    let near = Block::new(Material::Grass, 1, 0, 0);
    let far = Block::new(Material::Dirt, 5, 0, 4);
    assert_eq!(block_sort_key(&near, eye), 10.0);
    assert_eq!(block_sort_key(&far, eye), 50.0);

    let mut scene = Scene::new(settings_at(eye), vec![near, far]);
    let colors = polygon_colors(&idle_frame(&mut scene));
    assert_eq!(colors.len(), 12);

    let dirt = [60, 80, 100].map(Color::gray);
    let grass = [90, 120, 150].map(Color::gray);
    assert!(colors[..6].iter().all(|c| dirt.contains(c)), "{colors:?}");
    assert!(colors[6..].iter().all(|c| grass.contains(c)), "{colors:?}");
}

#[test]
fn draw_order_does_not_depend_on_world_order() {
    let a = Block::new(Material::Grass, 0, 0, 0);
    let b = Block::new(Material::Dirt, -3, 1, 0);
    let c = Block::new(Material::Grass, 2, 0, -2);
    let eye = Vec3::new(1.0, 6.0, 2.0);

    let mut first = Scene::new(settings_at(eye), vec![a, b, c]);
    let mut second = Scene::new(settings_at(eye), vec![c, a, b]);
    assert_eq!(idle_frame(&mut first).calls, idle_frame(&mut second).calls);
}

#[test]
fn sort_key_grows_when_backing_away() {
    let target = Block::new(Material::Grass, 0, 0, 0);
    let reference = Block::new(Material::Dirt, 2, 0, 0);
    let sight = Vec3::new(1.0, 2.0, 3.0);
    let start = Vec3::new(3.0, 4.0, 5.0);

    let mut previous = block_sort_key(&target, start) - block_sort_key(&reference, start);
    for step in 1..20 {
        let eye = start + sight.scale(step as f32 * 0.5);
        let relative = block_sort_key(&target, eye) - block_sort_key(&reference, eye);
        assert!(block_sort_key(&target, eye) > block_sort_key(&target, start));
        assert!(relative >= previous - 1e-3, "step {step}: {relative} < {previous}");
        previous = relative;
    }
}

#[test]
fn pointer_cannot_push_pitch_past_straight_down() {
    let mut scene = Scene::new(settings_at(Vec3::ZERO), vec![]);
    let mut input = FrameInput::default();
    let mut cursor = Vec2::new(400.0, 400.0);
    for _ in 0..200 {
        cursor.y -= 7.0;
        input.cursor = Some(cursor);
        scene.update(&input);
        assert!(scene.camera.rotation.y <= MAX_PITCH);
    }
    assert_eq!(scene.camera.rotation.y, -0.5 * PI);
}

#[test]
fn sun_behind_viewer_is_not_drawn() {
    let mut scene = Scene::new(settings_at(Vec3::new(5.0, 5.0, 5.0)), vec![]);
    let list = idle_frame(&mut scene);
    // Looking straight down puts the sun offset (0, 10, 0) at camera-space
    // z <= 0, and celestials share the faces' near-plane test.
    let colors: Vec<Color> = list.rects().map(|(_, _, color)| color).collect();
    assert!(!colors.contains(&SUN));
    assert_eq!(colors, vec![MOON]);
}

#[test]
fn moon_is_painted_before_blocks() {
    let mut scene = Scene::new(
        settings_at(Vec3::new(5.0, 5.0, 5.0)),
        vec![Block::new(Material::Grass, 0, 0, 0)],
    );
    let list = idle_frame(&mut scene);
    assert!(matches!(list.calls[0], DrawCall::FillRect { color, .. } if color == MOON));
}

#[test]
fn nothing_behind_the_camera_reaches_screen_space() {
    let world: Vec<Block> = voxel_painter::block::DEFAULT_WORLD.to_vec();
    let mut scene = Scene::new(settings_at(Vec3::new(0.5, 5.0, 0.5)), world);
    let mut input = FrameInput::default();
    for frame in 0..120 {
        input.cursor = Some(Vec2::new(frame as f32 * 3.0, (frame % 17) as f32 * 5.0));
        input.forward = frame % 3 == 0;
        input.right = frame % 5 == 0;
        input.jump = frame % 7 == 0;
        scene.update(&input);
        let mut list = DrawList::new();
        scene.draw(&mut list);
        for (points, _) in list.polygons() {
            assert_eq!(points.len(), 4);
            assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }
    assert_eq!(project(Vec3::new(1.0, 1.0, 0.0)), None);
}

#[test]
fn frame_renders_into_framebuffer() {
    let settings = Settings::default();
    let (width, height) = (settings.width, settings.height);
    let mut scene = Scene::new(settings, voxel_painter::block::DEFAULT_WORLD.to_vec());
    scene.update(&FrameInput::default());

    let mut framebuffer = Framebuffer::new(width, height);
    let stats = scene.draw(&mut framebuffer);
    assert!(stats.faces_drawn > 0);
    assert_eq!(stats.blocks, 16);

    // The moon sits dead centre when looking straight down, so something
    // has been painted there even if blocks cover it.
    let black = Some(Color::rgb(0, 0, 0));
    let center = Viewport::new(width, height).to_screen(Vec2::ZERO);
    assert_ne!(framebuffer.pixel(center.x as usize, center.y as usize), black);
    assert_ne!(framebuffer.pixel(0, 0), black);
}
