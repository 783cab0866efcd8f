// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! LessonRender draws one frame: white background, one random black cell,
//! the corner icon, the rotating mirrored sprite, the caption and, while its
//! countdown runs, the debug caption. Presenting is left to the caller.
//!
//! Draw call failures are logged and skipped, a frame is never aborted.

use crate::{
    asset::AssetManager,
    config::GameConfig,
    context::Context,
    error::SetupResult,
    model::LessonModel,
    render::{
        style::Color,
        text::{FontSpec, TextLabel},
        Adapter,
    },
    util::Rect,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};
use log::warn;

/// image index of the static corner icon
pub const ICON_IMAGE: usize = 0;
/// image index of the rotating sprite
pub const SPRITE_IMAGE: usize = 1;
/// distance of the sprite from the top edge
pub const SPRITE_TOP: i32 = 20;
pub const TEXT_MARGIN: i32 = 10;

pub const BACKGROUND: Color = Color::WHITE;
pub const FOREGROUND: Color = Color::BLACK;

pub struct LessonRender {
    pub font: Option<FontSpec>,
    pub caption: String,
    pub caption_color: Color,
    pub debug_color: Color,
    caption_label: TextLabel,
    debug_label: TextLabel,
}

impl LessonRender {
    /// Fails with SetupError::Font when the configured font can not be opened
    pub fn new(ctx: &mut Context, cfg: &GameConfig) -> SetupResult<Self> {
        let font = cfg.font_spec();
        if let Some(f) = &font {
            ctx.adapter.open_font(f)?;
        }
        Ok(Self {
            font,
            caption: cfg.caption.clone(),
            caption_color: cfg.caption_color,
            debug_color: cfg.debug_color,
            caption_label: TextLabel::new(),
            debug_label: TextLabel::new(),
        })
    }

    /// icon dst: top left corner, native size
    pub fn icon_rect(w: u32, h: u32) -> Rect {
        Rect::new(0, 0, w, h)
    }

    /// sprite dst: horizontally centred near the top
    pub fn sprite_rect(w: u32, h: u32) -> Rect {
        Rect::new((SCREEN_WIDTH as i32 - w as i32) / 2, SPRITE_TOP, w, h)
    }

    /// caption dst: bottom left
    pub fn caption_rect(w: u32, h: u32) -> Rect {
        Rect::new(TEXT_MARGIN, SCREEN_HEIGHT as i32 - h as i32 - TEXT_MARGIN, w, h)
    }

    /// debug caption dst: bottom right
    pub fn debug_rect(w: u32, h: u32) -> Rect {
        Rect::new(
            SCREEN_WIDTH as i32 - w as i32 - TEXT_MARGIN,
            SCREEN_HEIGHT as i32 - h as i32 - TEXT_MARGIN,
            w,
            h,
        )
    }

    pub fn draw(&mut self, ctx: &mut Context, model: &mut LessonModel) {
        let adapter = ctx.adapter.as_mut();
        adapter.clear(BACKGROUND);

        let cell = model.pick_cell();
        if let Err(e) = adapter.fill_rect(cell, FOREGROUND) {
            warn!("fill cell {:?}: {}", cell, e);
        }

        self.draw_sprites(adapter, &ctx.asset_manager, model.angle);

        let show_debug = model.take_debug_frame();
        self.draw_text(adapter, &model.debug_text, show_debug);
    }

    fn draw_sprites(&mut self, adapter: &mut dyn Adapter, assets: &AssetManager, angle: u16) {
        if let Some(icon) = assets.get(ICON_IMAGE) {
            let dst = Self::icon_rect(icon.width, icon.height);
            if let Err(e) = adapter.blit(icon, dst, 0.0, false) {
                warn!("blit icon: {}", e);
            }
        }
        if let Some(sprite) = assets.get(SPRITE_IMAGE) {
            let dst = Self::sprite_rect(sprite.width, sprite.height);
            if let Err(e) = adapter.blit(sprite, dst, angle as f64, true) {
                warn!("blit sprite: {}", e);
            }
        }
    }

    fn draw_text(&mut self, adapter: &mut dyn Adapter, debug_text: &str, show_debug: bool) {
        let font = match &self.font {
            Some(f) => f,
            None => return,
        };
        if let Some(img) = self
            .caption_label
            .image(adapter, &self.caption, font, self.caption_color)
        {
            let dst = Self::caption_rect(img.width, img.height);
            if let Err(e) = adapter.blit(&img, dst, 0.0, false) {
                warn!("blit caption: {}", e);
            }
        }
        if !show_debug {
            return;
        }
        if let Some(img) = self
            .debug_label
            .image(adapter, debug_text, font, self.debug_color)
        {
            let dst = Self::debug_rect(img.width, img.height);
            if let Err(e) = adapter.blit(&img, dst, 0.0, false) {
                warn!("blit debug text: {}", e);
            }
        }
    }

    /// Frees the text textures, called once at teardown
    pub fn release(&mut self, adapter: &mut dyn Adapter) {
        self.caption_label.release(adapter);
        self.debug_label.release(adapter);
    }
}
