// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Implements an Adapter trait. Moreover, all SDL related processing is handled here.
//! Uses the sdl2 accelerated canvas for drawing, SDL2_image for decoding
//! and SDL2_ttf for text.
//!
//! Built with the `unsafe_textures` feature, so textures carry no lifetime and
//! are destroyed by hand in `release` and `shutdown`.

use crate::{
    asset::LoadedImage,
    error::{SetupError, SetupResult},
    event::{Event, KeyEvent, KeyEventKind, KeyModifiers},
    render::{adapter::Adapter, style::Color, text::FontSpec, TextureId},
    util::Rect,
};
use log::{debug, info, warn};
use sdl2::{
    event::Event as SEvent,
    image::{InitFlag, LoadSurface, Sdl2ImageContext},
    keyboard::{Keycode as SKeycode, Mod},
    rect::Point,
    render::{Texture, TextureCreator, WindowCanvas},
    surface::Surface,
    ttf::Sdl2TtfContext,
    video::WindowContext,
    EventPump, Sdl, VideoSubsystem,
};
use std::path::Path;

#[derive(Default)]
pub struct SdlAdapter {
    // sdl object
    pub sdl_context: Option<Sdl>,
    pub video_subsystem: Option<VideoSubsystem>,
    pub image_context: Option<Sdl2ImageContext>,
    pub ttf_context: Option<Sdl2TtfContext>,
    pub event_pump: Option<EventPump>,

    // window + renderer
    pub canvas: Option<WindowCanvas>,
    pub texture_creator: Option<TextureCreator<WindowContext>>,

    // indexed by TextureId, None once released
    textures: Vec<Option<Texture>>,
}

impl SdlAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    fn upload(&mut self, surface: &Surface) -> Result<TextureId, String> {
        let creator = self
            .texture_creator
            .as_ref()
            .ok_or_else(|| "renderer not created".to_string())?;
        let texture = creator
            .create_texture_from_surface(surface)
            .map_err(|e| e.to_string())?;
        self.textures.push(Some(texture));
        Ok(self.textures.len() - 1)
    }
}

impl Adapter for SdlAdapter {
    fn init(&mut self, title: &str, w: u32, h: u32) -> SetupResult<()> {
        let sdl_context = sdl2::init().map_err(SetupError::LibInit)?;
        let video_subsystem = sdl_context.video().map_err(SetupError::LibInit)?;
        let image_context =
            sdl2::image::init(InitFlag::PNG | InitFlag::JPG).map_err(SetupError::LibInit)?;
        let ttf_context = sdl2::ttf::init().map_err(|e| SetupError::LibInit(e.to_string()))?;
        let event_pump = sdl_context.event_pump().map_err(SetupError::LibInit)?;

        // WindowBuilder leaves the position undefined unless asked otherwise
        let window = video_subsystem
            .window(title, w, h)
            .build()
            .map_err(|e| SetupError::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| SetupError::Renderer(e.to_string()))?;

        if !sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "1") {
            warn!("render scale quality hint not accepted");
        }

        self.texture_creator = Some(canvas.texture_creator());
        self.canvas = Some(canvas);
        self.event_pump = Some(event_pump);
        self.ttf_context = Some(ttf_context);
        self.image_context = Some(image_context);
        self.video_subsystem = Some(video_subsystem);
        self.sdl_context = Some(sdl_context);
        info!("sdl window {}x{} '{}' ready", w, h, title);
        Ok(())
    }

    fn load_image(&mut self, path: &Path) -> SetupResult<LoadedImage> {
        let ps = path.display().to_string();
        let surface = Surface::from_file(path).map_err(|e| SetupError::ImageDecode(ps.clone(), e))?;
        // size is read before the surface goes away
        let (width, height) = (surface.width(), surface.height());
        let texture = self
            .upload(&surface)
            .map_err(|e| SetupError::TextureUpload(ps.clone(), e))?;
        drop(surface);
        debug!("image {} -> texture {} ({}x{})", ps, texture, width, height);
        Ok(LoadedImage::new(texture, width, height))
    }

    fn open_font(&mut self, font: &FontSpec) -> SetupResult<()> {
        let ttf = self
            .ttf_context
            .as_ref()
            .ok_or_else(|| SetupError::Font(font.path.clone(), "ttf not initialized".into()))?;
        ttf.load_font(&font.path, font.size)
            .map(|_| ())
            .map_err(|e| SetupError::Font(font.path.clone(), e))
    }

    fn create_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        color: Color,
    ) -> Result<LoadedImage, String> {
        let surface = {
            let ttf = self
                .ttf_context
                .as_ref()
                .ok_or_else(|| "ttf not initialized".to_string())?;
            let f = ttf.load_font(&font.path, font.size)?;
            f.render(text)
                .blended(sdl2::pixels::Color::from(color))
                .map_err(|e| e.to_string())?
        };
        let (width, height) = (surface.width(), surface.height());
        let texture = self.upload(&surface)?;
        Ok(LoadedImage::new(texture, width, height))
    }

    fn release(&mut self, texture: TextureId) {
        if let Some(slot) = self.textures.get_mut(texture) {
            if let Some(t) = slot.take() {
                // only this adapter ever held the texture
                unsafe { t.destroy() };
            }
        }
    }

    fn clear(&mut self, color: Color) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.set_draw_color(color);
            canvas.clear();
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        let canvas = self.canvas.as_mut().ok_or("renderer not created")?;
        canvas.set_draw_color(color);
        canvas.fill_rect(sdl2::rect::Rect::from(rect))
    }

    fn blit(
        &mut self,
        image: &LoadedImage,
        dst: Rect,
        angle: f64,
        flip_h: bool,
    ) -> Result<(), String> {
        let canvas = self.canvas.as_mut().ok_or("renderer not created")?;
        let texture = self
            .textures
            .get(image.texture)
            .and_then(|t| t.as_ref())
            .ok_or_else(|| format!("texture {} released", image.texture))?;
        let center = Point::new(dst.w as i32 / 2, dst.h as i32 / 2);
        canvas.copy_ex(
            texture,
            None,
            Some(sdl2::rect::Rect::from(dst)),
            angle,
            Some(center),
            flip_h,
            false,
        )
    }

    fn present(&mut self) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.present();
        }
    }

    fn poll_event(&mut self, es: &mut Vec<Event>) {
        if let Some(ep) = self.event_pump.as_mut() {
            for event in ep.poll_iter() {
                // convert sdl events to pixel events, providing a unified processing interface
                if let Some(et) = input_events_from_sdl(&event) {
                    es.push(et);
                }
            }
        }
    }

    fn shutdown(&mut self) {
        for slot in self.textures.iter_mut() {
            if let Some(t) = slot.take() {
                unsafe { t.destroy() };
            }
        }
        // the canvas keeps the window alive through its renderer context,
        // dropping it destroys the renderer first, then the window
        self.texture_creator = None;
        self.canvas = None;
        info!("renderer and window destroyed");
        self.event_pump = None;
        self.ttf_context = None;
        self.image_context = None;
        self.video_subsystem = None;
        self.sdl_context = None;
        info!("sdl quit");
    }
}

fn key_from_sdl(
    kind: KeyEventKind,
    timestamp: u32,
    keycode: Option<SKeycode>,
    keymod: Mod,
    repeat: bool,
) -> Event {
    let (sym, name) = match keycode {
        Some(k) => (k as i32, k.name()),
        None => (0, "Unknown".to_string()),
    };
    let mut ke = KeyEvent::new(kind, sym, &name)
        .with_timestamp(timestamp)
        .with_modifiers(KeyModifiers::from_bits_truncate(keymod.bits()));
    ke.repeat = repeat as u8;
    Event::Key(ke)
}

/// Convert sdl input events to unified events, everything but quit and keys is dropped
pub fn input_events_from_sdl(e: &SEvent) -> Option<Event> {
    match e {
        SEvent::Quit { .. } => Some(Event::Quit),
        SEvent::KeyDown {
            timestamp,
            keycode,
            keymod,
            repeat,
            ..
        } => Some(key_from_sdl(
            KeyEventKind::Press,
            *timestamp,
            *keycode,
            *keymod,
            *repeat,
        )),
        SEvent::KeyUp {
            timestamp,
            keycode,
            keymod,
            repeat,
            ..
        } => Some(key_from_sdl(
            KeyEventKind::Release,
            *timestamp,
            *keycode,
            *keymod,
            *repeat,
        )),
        _ => None,
    }
}
