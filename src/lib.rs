// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! pixel_lesson drives a 2D hardware-accelerated renderer the simplest way possible:
//! open a window, load a couple of images into textures, and in a fixed-delay loop
//! draw one random black square from a 64x48 grid, a static icon, a rotating mirrored
//! sprite and some text, until the window is closed.
//!
//! Graphical Mode (SDL2): built with the sdl2 crate behind the `sdl` feature.
//! Without that feature only the backend independent parts are compiled
//! (grid, loop state, text cache, config), which is what the tests exercise
//! through their own recording adapter.
//!
//! Modules asset, config, context, event, game, grid, log, model, render, util
//! are offered, wired together by `game::Game`.

/// logical window size in pixels, the window is never resized
pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;

/// every grid cell is a CELL_SIZE x CELL_SIZE square
pub const CELL_SIZE: u32 = 10;
pub const GRID_COLS: usize = (SCREEN_WIDTH / CELL_SIZE) as usize;
pub const GRID_ROWS: usize = (SCREEN_HEIGHT / CELL_SIZE) as usize;

/// frames the debug caption stays visible after a key event
pub const DEBUG_TEXT_FRAMES: u32 = 300;

/// default sleep between present and event drain, in milliseconds
pub const FRAME_DELAY_MS: u64 = 1;

/// asset: image loading and the ordered image collection
pub mod asset;

/// config: toml game config
pub mod config;

/// context: owns the render adapter and loaded images
pub mod context;

/// error: setup errors and their process exit codes
pub mod error;

/// event: unified input events
pub mod event;

/// game: main loop and teardown
pub mod game;

/// grid: the fixed cell grid
pub mod grid;

/// log: log4rs setup
pub mod log;

/// model: per frame loop state
pub mod model;

/// render: adapter interface, colors and text cache
pub mod render;

/// util: rect, paths and random
pub mod util;
