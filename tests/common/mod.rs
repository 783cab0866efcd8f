#![allow(dead_code)]

use pixel_lesson::{
    asset::LoadedImage,
    config::GameConfig,
    error::{SetupError, SetupResult},
    event::Event,
    render::{Adapter, Color, FontSpec, TextureId},
    util::Rect,
};
use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    path::{Path, PathBuf},
    rc::Rc,
};

/// Everything the frame loop asked the adapter to do, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Init { title: String, w: u32, h: u32 },
    LoadImage(PathBuf, TextureId),
    OpenFont(FontSpec),
    CreateText { text: String, color: Color, texture: TextureId },
    Release(TextureId),
    Clear(Color),
    Fill(Rect, Color),
    Blit { texture: TextureId, dst: Rect, angle: f64, flip_h: bool },
    Present,
    Poll,
    Shutdown,
}

/// Adapter that records calls and replays scripted events, one batch per poll
#[derive(Default)]
pub struct RecordingAdapter {
    pub calls: Rc<RefCell<Vec<Call>>>,
    pub image_sizes: HashMap<String, (u32, u32)>,
    pub fail_init: Option<SetupError>,
    pub fail_decode: Option<String>,
    pub fail_upload: Option<String>,
    pub fail_font: bool,
    pub events: VecDeque<Vec<Event>>,
    next_texture: TextureId,
}

impl RecordingAdapter {
    pub fn new() -> (Self, Rc<RefCell<Vec<Call>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                calls: calls.clone(),
                ..Default::default()
            },
            calls,
        )
    }

    pub fn with_image(mut self, name: &str, w: u32, h: u32) -> Self {
        self.image_sizes.insert(name.to_string(), (w, h));
        self
    }

    /// events returned by the n-th poll (1 based)
    pub fn with_events_at(mut self, poll: usize, es: Vec<Event>) -> Self {
        while self.events.len() < poll {
            self.events.push_back(vec![]);
        }
        self.events[poll - 1] = es;
        self
    }

    fn record(&self, c: Call) {
        self.calls.borrow_mut().push(c);
    }

    fn texture(&mut self) -> TextureId {
        self.next_texture += 1;
        self.next_texture - 1
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

impl Adapter for RecordingAdapter {
    fn init(&mut self, title: &str, w: u32, h: u32) -> SetupResult<()> {
        if let Some(e) = self.fail_init.take() {
            return Err(e);
        }
        self.record(Call::Init {
            title: title.to_string(),
            w,
            h,
        });
        Ok(())
    }

    fn load_image(&mut self, path: &Path) -> SetupResult<LoadedImage> {
        let name = file_name(path);
        let ps = path.display().to_string();
        if self.fail_decode.as_deref() == Some(name.as_str()) {
            return Err(SetupError::ImageDecode(ps, "unsupported format".into()));
        }
        if self.fail_upload.as_deref() == Some(name.as_str()) {
            return Err(SetupError::TextureUpload(ps, "out of video memory".into()));
        }
        let (w, h) = self.image_sizes.get(&name).copied().unwrap_or((16, 16));
        let id = self.texture();
        self.record(Call::LoadImage(path.to_path_buf(), id));
        Ok(LoadedImage::new(id, w, h))
    }

    fn open_font(&mut self, font: &FontSpec) -> SetupResult<()> {
        if self.fail_font {
            return Err(SetupError::Font(font.path.clone(), "no such file".into()));
        }
        self.record(Call::OpenFont(font.clone()));
        Ok(())
    }

    fn create_text(
        &mut self,
        text: &str,
        _font: &FontSpec,
        color: Color,
    ) -> Result<LoadedImage, String> {
        let id = self.texture();
        self.record(Call::CreateText {
            text: text.to_string(),
            color,
            texture: id,
        });
        Ok(LoadedImage::new(id, 8 * text.len() as u32, 16))
    }

    fn release(&mut self, texture: TextureId) {
        self.record(Call::Release(texture));
    }

    fn clear(&mut self, color: Color) {
        self.record(Call::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.record(Call::Fill(rect, color));
        Ok(())
    }

    fn blit(
        &mut self,
        image: &LoadedImage,
        dst: Rect,
        angle: f64,
        flip_h: bool,
    ) -> Result<(), String> {
        self.record(Call::Blit {
            texture: image.texture,
            dst,
            angle,
            flip_h,
        });
        Ok(())
    }

    fn present(&mut self) {
        self.record(Call::Present);
    }

    fn poll_event(&mut self, es: &mut Vec<Event>) {
        self.record(Call::Poll);
        if let Some(batch) = self.events.pop_front() {
            es.extend(batch);
        }
    }

    fn shutdown(&mut self) {
        self.record(Call::Shutdown);
    }
}

/// config without sleep or font, seeded
pub fn test_config() -> GameConfig {
    GameConfig {
        frame_delay_ms: 0,
        seed: Some(1),
        ..GameConfig::default()
    }
}

pub fn count(calls: &Rc<RefCell<Vec<Call>>>, pred: impl Fn(&Call) -> bool) -> usize {
    calls.borrow().iter().filter(|c| pred(c)).count()
}
