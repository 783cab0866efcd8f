// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Context owns the render adapter (window, renderer, library context)
//! and the images loaded through it. There is exactly one per process,
//! nothing created from it may outlive it.
//!
//! `Context::init` is the only way to get one, so a failed setup never
//! leaves a half built context behind.

use crate::{asset::AssetManager, error::SetupResult, event::Event, render::Adapter};
use log::info;

pub struct Context {
    pub project_path: String,
    pub stage: u32,
    pub asset_manager: AssetManager,
    pub input_events: Vec<Event>,
    pub adapter: Box<dyn Adapter>,
    torn_down: bool,
}

impl Context {
    /// Starts the library and opens a w x h window titled title.
    /// Asset paths are later resolved against project_path.
    pub fn init(
        mut adapter: Box<dyn Adapter>,
        project_path: &str,
        title: &str,
        w: u32,
        h: u32,
    ) -> SetupResult<Self> {
        adapter.init(title, w, h)?;
        info!("context ready, asset path {}", project_path);
        Ok(Self {
            project_path: project_path.to_string(),
            stage: 0,
            asset_manager: AssetManager::new(),
            input_events: vec![],
            adapter,
            torn_down: false,
        })
    }

    /// Loads one image, see `AssetManager::load`
    pub fn load_image(&mut self, loc: &str) -> SetupResult<usize> {
        self.asset_manager
            .load(self.adapter.as_mut(), &self.project_path, loc)
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Releases images, then renderer, window and library. Only the first call does anything.
    pub fn shutdown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.asset_manager.release_all(self.adapter.as_mut());
        self.adapter.shutdown();
        info!("context shut down after {} frames", self.stage);
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        self.shutdown();
    }
}
