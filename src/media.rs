//! Platform media layer
//!
//! The game never talks to a window, audio device or font rasterizer
//! directly. A platform supplies these three traits; `headless` provides an
//! in-memory version.

use std::fmt;
use std::path::{Path, PathBuf};

use glam::{UVec2, Vec2};

/// RGB color
pub type Color = [u8; 3];

pub const BLACK: Color = [0, 0, 0];

/// Something that can be blitted onto the frame surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawable {
    pub id: u32,
    pub size: UVec2,
}

impl Drawable {
    /// Size as floats, for layout math
    pub fn sizef(&self) -> Vec2 {
        self.size.as_vec2()
    }
}

/// A loaded sound clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Playable {
    pub id: u32,
}

/// Font family and point size for `render_text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    /// System font name or path to a font file
    pub name: String,
    pub size: u32,
}

impl FontSpec {
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Failure to acquire an image, sound, or font
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLoadError {
    /// File does not exist
    Missing { path: PathBuf },
    /// File exists but could not be decoded
    Decode { path: PathBuf, reason: String },
    /// Font unavailable or text could not be rasterized
    Font { name: String, reason: String },
}

impl fmt::Display for ResourceLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { path } => write!(f, "resource not found: {}", path.display()),
            Self::Decode { path, reason } => {
                write!(f, "failed to decode {}: {}", path.display(), reason)
            }
            Self::Font { name, reason } => write!(f, "font {name:?}: {reason}"),
        }
    }
}

impl std::error::Error for ResourceLoadError {}

/// Asset acquisition
pub trait MediaLayer {
    fn load_image(&mut self, path: &Path) -> Result<Drawable, ResourceLoadError>;
    fn load_sound(&mut self, path: &Path) -> Result<Playable, ResourceLoadError>;
    fn render_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        color: Color,
    ) -> Result<Drawable, ResourceLoadError>;
}

/// Double-buffered frame. Nothing drawn is visible until `present`.
pub trait FrameSurface {
    fn size(&self) -> UVec2;
    fn blit(&mut self, drawable: &Drawable, pos: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn present(&mut self);
}

/// Sound triggers. Volume is in `[0, 1]`.
pub trait AudioOut {
    fn play_once(&mut self, sound: Playable, volume: f32);
    fn play_looping(&mut self, sound: Playable, volume: f32);
    fn stop(&mut self, sound: Playable);
}

/// Everything the driver needs from a platform
pub trait Platform: MediaLayer + FrameSurface + AudioOut {}

impl<T: MediaLayer + FrameSurface + AudioOut> Platform for T {}
