// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! The Adapter trait is the only door to the graphics library.
//! Context, LessonRender and Game talk to it and never to sdl directly,
//! so the frame loop can be driven by a recording adapter in tests.
//!
//! Textures are owned by the adapter and handed out as plain indices (TextureId).
//! An index stays valid until `release` or `shutdown`.

use crate::{
    asset::LoadedImage,
    error::SetupResult,
    event::Event,
    render::{style::Color, text::FontSpec},
    util::Rect,
};
use std::path::Path;

#[cfg(feature = "sdl")]
pub mod sdl_adapter;

pub type TextureId = usize;

pub trait Adapter {
    /// Starts the library, creates the window (undefined position, shown)
    /// and then the accelerated renderer, in this order.
    fn init(&mut self, title: &str, w: u32, h: u32) -> SetupResult<()>;

    /// Decodes an image file and uploads it to a texture.
    /// The decoded bitmap is released before returning.
    fn load_image(&mut self, path: &Path) -> SetupResult<LoadedImage>;

    /// Checks that a font can be opened, called once at setup
    fn open_font(&mut self, font: &FontSpec) -> SetupResult<()>;

    /// Rasterizes text into a new texture
    fn create_text(&mut self, text: &str, font: &FontSpec, color: Color)
        -> Result<LoadedImage, String>;

    /// Frees one texture, unknown or already freed ids are ignored
    fn release(&mut self, texture: TextureId);

    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Copies image into dst, rotated clockwise by angle degrees about the
    /// centre of dst and optionally mirrored horizontally
    fn blit(&mut self, image: &LoadedImage, dst: Rect, angle: f64, flip_h: bool)
        -> Result<(), String>;

    fn present(&mut self);

    /// Drains every pending event without blocking
    fn poll_event(&mut self, es: &mut Vec<Event>);

    /// Releases renderer, window and library context in this order
    fn shutdown(&mut self);
}
