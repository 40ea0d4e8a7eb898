//! Flat per-face shading.

/// Opaque 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Packs into the `0RGB` layout the window buffer expects.
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn from_u32(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    pub fn lerp(a: Color, b: Color, t: f32) -> Color {
        let mix = |from: u8, to: u8| {
            (from as f32 + (to as f32 - from as f32) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Color::rgb(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }
}

pub const SUN: Color = Color::rgb(255, 200, 0);
pub const MOON: Color = Color::rgb(0xDD, 0xE8, 0xEA);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 150, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);

/// Grayscale intensity `round(factor * base)` as an opaque colour.
pub fn shade_color(base: f32, factor: f32) -> Color {
    let value = (factor.clamp(0.0, 1.0) * base).round().clamp(0.0, 255.0) as u8;
    Color::gray(value)
}

/// Relative-depth shade factor for a face within its block.
///
/// A zero, negative or non-finite `max_distance` (every face equidistant,
/// or no faces at all) yields full brightness instead of dividing by zero.
pub fn depth_shade(distance: f32, max_distance: f32) -> f32 {
    if max_distance > 0.0 && max_distance.is_finite() {
        (distance / max_distance).clamp(0.0, 1.0)
    } else {
        1.0
    }
}
