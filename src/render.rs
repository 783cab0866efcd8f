// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Render module.
//!
//! - `adapter`: render adapter interface, the sdl implementation lives behind the `sdl` feature
//! - `style`: rgba colors
//! - `text`: cached text textures, one per label
//! - `lesson`: draws one frame of the lesson

pub mod adapter;
pub mod lesson;
pub mod style;
pub mod text;

pub use adapter::{Adapter, TextureId};
pub use lesson::LessonRender;
pub use style::Color;
pub use text::{FontSpec, TextKey, TextLabel};
