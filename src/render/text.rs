// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Text labels. Each label keeps the texture of the last text it rendered,
//! keyed by (text, font, size, color). A texture is only rasterized when the
//! key changes, and the old one is released at that moment.

use crate::{
    asset::LoadedImage,
    render::{style::Color, Adapter},
};
use log::warn;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontSpec {
    pub path: String,
    pub size: u16,
}

impl FontSpec {
    pub fn new(path: &str, size: u16) -> Self {
        Self {
            path: path.to_string(),
            size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextKey {
    pub text: String,
    pub font: FontSpec,
    pub color: Color,
}

#[derive(Default)]
pub struct TextLabel {
    cached: Option<(TextKey, LoadedImage)>,
    // last key that failed to render, not retried until the key changes
    failed: Option<TextKey>,
}

impl TextLabel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the texture for text, rendering it only if the key changed.
    /// Empty text has no texture.
    pub fn image(
        &mut self,
        adapter: &mut dyn Adapter,
        text: &str,
        font: &FontSpec,
        color: Color,
    ) -> Option<LoadedImage> {
        if text.is_empty() {
            self.release(adapter);
            return None;
        }
        if let Some((key, img)) = &self.cached {
            if key.text == text && key.font == *font && key.color == color {
                return Some(*img);
            }
        }
        let key = TextKey {
            text: text.to_string(),
            font: font.clone(),
            color,
        };
        if self.failed.as_ref() == Some(&key) {
            return None;
        }
        self.release(adapter);
        match adapter.create_text(text, font, color) {
            Ok(img) => {
                self.failed = None;
                self.cached = Some((key, img));
                Some(img)
            }
            Err(e) => {
                warn!("render text {:?} failed: {}", text, e);
                self.failed = Some(key);
                None
            }
        }
    }

    pub fn cached_key(&self) -> Option<&TextKey> {
        self.cached.as_ref().map(|(k, _)| k)
    }

    /// Frees the cached texture, if any
    pub fn release(&mut self, adapter: &mut dyn Adapter) {
        if let Some((_, img)) = self.cached.take() {
            adapter.release(img.texture);
        }
    }
}
