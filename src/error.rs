// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Setup errors. Every step before the frame loop returns one of these,
//! main prints it and exits with `exit_code()`.
//! Nothing after the loop starts produces a SetupError.

/// Result type for setup steps
pub type SetupResult<T> = Result<T, SetupError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// sdl (or one of its sub libraries) failed to start
    LibInit(String),
    /// window creation failed
    Window(String),
    /// accelerated renderer creation failed
    Renderer(String),
    /// config file missing or invalid
    Config(String),
    /// image file could not be decoded, (path, reason)
    ImageDecode(String, String),
    /// decoded bitmap could not be uploaded, (path, reason)
    TextureUpload(String, String),
    /// font file could not be opened, (path, reason)
    Font(String, String),
}

impl SetupError {
    pub fn exit_code(&self) -> i32 {
        match self {
            SetupError::LibInit(_) => 1,
            SetupError::Window(_) | SetupError::Renderer(_) => 2,
            SetupError::Config(_) => 3,
            SetupError::ImageDecode(..) => 4,
            SetupError::TextureUpload(..) => 5,
            SetupError::Font(..) => 6,
        }
    }
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::LibInit(msg) => write!(f, "Failed to initialize sdl: {}", msg),
            SetupError::Window(msg) => write!(f, "Failed to create window: {}", msg),
            SetupError::Renderer(msg) => write!(f, "Failed to create renderer: {}", msg),
            SetupError::Config(msg) => write!(f, "Failed to load config: {}", msg),
            SetupError::ImageDecode(path, msg) => {
                write!(f, "Failed to load image {}: {}", path, msg)
            }
            SetupError::TextureUpload(path, msg) => {
                write!(f, "Failed to create texture from {}: {}", path, msg)
            }
            SetupError::Font(path, msg) => write!(f, "Failed to open font {}: {}", path, msg),
        }
    }
}

impl std::error::Error for SetupError {}
