// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Game ties Context, LessonModel and LessonRender together
//! and implements the main loop.
//!
//! # Example
//!
//! ```ignore
//! let cfg = GameConfig::load(None)?;
//! let mut g = Game::new(Box::new(SdlAdapter::new()), &cfg, ".")?;
//! g.run();
//! g.shutdown();
//! ```
//!
//! Each iteration: turn the sprite, draw, present, sleep, drain events.
//! The sleep is a plain fixed delay, the real frame rate depends on how long
//! drawing takes.

use crate::{
    config::GameConfig,
    context::Context,
    error::SetupResult,
    event::Event,
    model::LessonModel,
    render::{Adapter, LessonRender},
    SCREEN_HEIGHT, SCREEN_WIDTH,
};
use log::{debug, info};
use std::time::Duration;

pub struct Game {
    pub context: Context,
    pub model: LessonModel,
    pub render: LessonRender,
    pub frame_delay: Duration,
}

impl Game {
    /// Opens the window, loads cfg.images in order and checks the font.
    /// Any failure is returned before a loop exists.
    pub fn new(
        adapter: Box<dyn Adapter>,
        cfg: &GameConfig,
        project_path: &str,
    ) -> SetupResult<Self> {
        info!("Init game...");
        let mut context = Context::init(adapter, project_path, &cfg.title, SCREEN_WIDTH, SCREEN_HEIGHT)?;
        for loc in &cfg.images {
            context.load_image(loc)?;
        }
        let render = LessonRender::new(&mut context, cfg)?;
        let mut model = LessonModel::new();
        match cfg.seed {
            Some(seed) => model.rand.srand(seed),
            None => model.rand.srand_now(),
        }
        Ok(Self {
            context,
            model,
            render,
            frame_delay: cfg.frame_delay(),
        })
    }

    /// Main loop, runs until a quit event (or the frame limit) is seen
    pub fn run(&mut self) {
        info!("Begin run...");
        while self.model.is_running() {
            self.on_tick();
        }
        info!("End run after {} frames", self.model.frame);
    }

    /// one iteration of the loop
    pub fn on_tick(&mut self) {
        self.context.stage += 1;
        self.model.update();
        self.render.draw(&mut self.context, &mut self.model);
        self.context.adapter.present();
        if !self.frame_delay.is_zero() {
            std::thread::sleep(self.frame_delay);
        }
        self.handle_events();
        self.model.check_frame_limit();
    }

    fn handle_events(&mut self) {
        self.context.input_events.clear();
        self.context
            .adapter
            .poll_event(&mut self.context.input_events);
        for e in self.context.input_events.iter() {
            if let Event::Key(ke) = e {
                let line = ke.diagnostic_line(SCREEN_WIDTH);
                eprintln!("{}", line);
                debug!("{}", line);
            }
            self.model.handle_event(e);
        }
    }

    /// Releases text textures, images, renderer, window and library, once
    pub fn shutdown(&mut self) {
        if self.context.is_torn_down() {
            return;
        }
        self.render.release(self.context.adapter.as_mut());
        self.context.shutdown();
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        self.shutdown();
    }
}
