// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Game configuration, read from an optional toml file.
//!
//! ```toml
//! title = "RustPixel SDL2 Lesson"
//! images = ["assets/icon.png", "assets/sprite.png"]
//! font = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"
//! font_size = 18
//! caption = "press any key"
//! caption_color = [0, 0, 0, 255]
//! debug_color = [255, 0, 0, 255]
//! frame_delay_ms = 1
//! seed = 7
//! log_level = "debug"
//! log_file = "log/pixel_lesson.log"
//! ```
//!
//! Every key is optional. The window size is not configurable.

use crate::{
    error::{SetupError, SetupResult},
    render::{style::Color, text::FontSpec},
    FRAME_DELAY_MS,
};
use log::LevelFilter;
use serde::Deserialize;
use std::{path::Path, str::FromStr, time::Duration};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub title: String,
    /// loaded in order, index 0 is the corner icon, index 1 the rotating sprite
    pub images: Vec<String>,
    /// ttf file, empty disables all text
    pub font: String,
    pub font_size: u16,
    pub caption: String,
    pub caption_color: Color,
    pub debug_color: Color,
    pub frame_delay_ms: u64,
    /// fixed rng seed, seeded from the clock when absent
    pub seed: Option<u64>,
    pub log_level: String,
    pub log_file: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "RustPixel SDL2 Lesson".to_string(),
            images: vec![
                "assets/icon.png".to_string(),
                "assets/sprite.png".to_string(),
            ],
            font: String::new(),
            font_size: 18,
            caption: "RustPixel SDL2 Lesson".to_string(),
            caption_color: Color::BLACK,
            debug_color: Color::RED,
            frame_delay_ms: FRAME_DELAY_MS,
            seed: None,
            log_level: "info".to_string(),
            log_file: "log/pixel_lesson.log".to_string(),
        }
    }
}

impl GameConfig {
    /// Reads path, or returns the defaults when no path is given
    pub fn load(path: Option<&Path>) -> SetupResult<Self> {
        match path {
            None => Ok(Self::default()),
            Some(p) => {
                let s = std::fs::read_to_string(p)
                    .map_err(|e| SetupError::Config(format!("{}: {}", p.display(), e)))?;
                Self::parse(&s)
            }
        }
    }

    pub fn parse(s: &str) -> SetupResult<Self> {
        let cfg: GameConfig = toml::from_str(s).map_err(|e| SetupError::Config(e.to_string()))?;
        cfg.level_filter()?;
        Ok(cfg)
    }

    pub fn level_filter(&self) -> SetupResult<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| SetupError::Config(format!("bad log_level {:?}", self.log_level)))
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    pub fn font_spec(&self) -> Option<FontSpec> {
        if self.font.is_empty() {
            None
        } else {
            Some(FontSpec::new(&self.font, self.font_size))
        }
    }
}
