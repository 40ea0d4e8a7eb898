use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, trace};
use minifb::{Key, Window, WindowOptions};

use voxel_painter::block::DEFAULT_WORLD;
use voxel_painter::config::Settings;
use voxel_painter::draw::DrawList;
use voxel_painter::input::FrameInput;
use voxel_painter::raster::Framebuffer;
use voxel_painter::scene::Scene;

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::default();
    settings.validate().context("invalid settings")?;

    let mut window = Window::new(
        settings.title,
        settings.width,
        settings.height,
        WindowOptions {
            resize: false,
            scale: minifb::Scale::X1,
            ..WindowOptions::default()
        },
    )
    .context("failed to open window")?;
    window.limit_update_rate(Some(Duration::from_micros(16_600)));
    info!(
        "opened {}x{} window with {} blocks",
        settings.width,
        settings.height,
        DEFAULT_WORLD.len()
    );

    let mut framebuffer = Framebuffer::new(settings.width, settings.height);
    let mut frame = DrawList::new();
    let mut scene = Scene::new(settings, DEFAULT_WORLD.to_vec());

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let input = FrameInput::from_window(&window);
        scene.update(&input);

        frame.clear();
        let stats = scene.draw(&mut frame);
        trace!("{stats:?}, {} draw calls", frame.calls.len());

        let sky = scene.settings();
        framebuffer.clear_gradient(sky.sky_top, sky.sky_bottom);
        frame.replay(&mut framebuffer);

        window.set_title(&format!("{} - {}", scene.settings().title, scene.overlay()));
        window
            .update_with_buffer(
                framebuffer.color_buffer(),
                framebuffer.width(),
                framebuffer.height(),
            )
            .context("failed to present frame")?;
    }

    info!("window closed");
    Ok(())
}
