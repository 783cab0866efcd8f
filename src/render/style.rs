// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Defines draw colors. In config files a color is written as `[r, g, b, a]`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(0xff, 0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 0xff);
    pub const RED: Color = Color::rgba(0xff, 0, 0, 0xff);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Color::rgba(c[0], c[1], c[2], c[3])
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[cfg(feature = "sdl")]
impl From<Color> for sdl2::pixels::Color {
    fn from(c: Color) -> Self {
        sdl2::pixels::Color::RGBA(c.r, c.g, c.b, c.a)
    }
}
