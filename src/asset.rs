// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Asset module keeps the images loaded at startup.
//! Images are only ever appended, callers refer to them by load order
//! (0 is the first image loaded, 1 the second ...).
//! Textures stay alive until the context is torn down.

use crate::{
    error::SetupResult,
    render::{Adapter, TextureId},
    util::get_abs_path,
};
use log::info;

/// A texture plus its size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedImage {
    pub texture: TextureId,
    pub width: u32,
    pub height: u32,
}

impl LoadedImage {
    pub fn new(texture: TextureId, width: u32, height: u32) -> Self {
        Self {
            texture,
            width,
            height,
        }
    }
}

#[derive(Default)]
pub struct AssetManager {
    pub images: Vec<LoadedImage>,
}

impl AssetManager {
    pub fn new() -> Self {
        Self { images: vec![] }
    }

    /// Loads loc (relative to project_path) through the adapter and appends it.
    /// Returns the index of the new image.
    pub fn load(
        &mut self,
        adapter: &mut dyn Adapter,
        project_path: &str,
        loc: &str,
    ) -> SetupResult<usize> {
        let fpath = get_abs_path(project_path, loc);
        let img = adapter.load_image(&fpath)?;
        info!("asset load:{:?} {}x{}", fpath, img.width, img.height);
        self.images.push(img);
        Ok(self.images.len() - 1)
    }

    pub fn get(&self, idx: usize) -> Option<&LoadedImage> {
        self.images.get(idx)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Frees every texture, used once at teardown
    pub fn release_all(&mut self, adapter: &mut dyn Adapter) {
        for img in self.images.drain(..) {
            adapter.release(img.texture);
        }
    }
}
