// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Utilities for random, rect and asset path resolving

use std::path::{Path, PathBuf};

mod rand;
pub use self::rand::*;

/// Determines the asset directory from the environment.
///
/// When started by `cargo run` CARGO_MANIFEST_DIR points at the crate root,
/// which is where the assets folder lives. Otherwise the current directory is used.
pub fn get_project_path() -> String {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        manifest_dir
    } else {
        ".".to_string()
    }
}

/// Resolves fpath against base unless it is already absolute
pub fn get_abs_path(base: &str, fpath: &str) -> PathBuf {
    let p = Path::new(fpath);
    if p.is_relative() {
        Path::new(base).join(p)
    } else {
        p.to_path_buf()
    }
}

/// Axis aligned rectangle in window pixels
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Rect {
        Rect { x, y, w, h }
    }

    pub fn area(self) -> u32 {
        self.w * self.h
    }

    pub fn left(self) -> i32 {
        self.x
    }

    pub fn right(self) -> i32 {
        self.x.saturating_add(self.w as i32)
    }

    pub fn top(self) -> i32 {
        self.y
    }

    pub fn bottom(self) -> i32 {
        self.y.saturating_add(self.h as i32)
    }

    pub fn center(self) -> (i32, i32) {
        (self.x + self.w as i32 / 2, self.y + self.h as i32 / 2)
    }

    pub fn intersects(self, other: Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(feature = "sdl")]
impl From<Rect> for sdl2::rect::Rect {
    fn from(r: Rect) -> Self {
        sdl2::rect::Rect::new(r.x, r.y, r.w, r.h)
    }
}
