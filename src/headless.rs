//! In-memory media layer
//!
//! Records every draw and sound call instead of touching real devices. Used
//! by the test suite and by the native demo binary.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

use glam::{UVec2, Vec2};

use crate::assets::{ENEMY_IMAGE, IMAGE_FILES, PLAYER_IMAGE, SOUND_FILES};
use crate::media::{
    AudioOut, Color, Drawable, FontSpec, FrameSurface, MediaLayer, Playable, ResourceLoadError,
};
use crate::settings::Settings;

/// Number of presented frames kept for inspection
const FRAME_HISTORY: usize = 64;

/// One recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Blit { id: u32, pos: Vec2 },
    Circle { center: Vec2, radius: f32, color: Color },
}

/// One recorded sound call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SoundCommand {
    PlayOnce { id: u32, volume: f32 },
    PlayLooping { id: u32, volume: f32 },
    Stop { id: u32 },
}

#[derive(Debug)]
pub struct HeadlessMedia {
    size: UVec2,
    images: HashMap<PathBuf, UVec2>,
    sounds: HashSet<PathBuf>,
    fonts: HashSet<String>,
    next_id: u32,
    /// Path or text behind each handle
    labels: HashMap<u32, String>,
    pending: Vec<DrawCommand>,
    frames: VecDeque<Vec<DrawCommand>>,
    frames_presented: u64,
    sound_log: Vec<SoundCommand>,
    looping: HashSet<u32>,
}

impl HeadlessMedia {
    pub fn new(size: UVec2) -> Self {
        Self {
            size,
            images: HashMap::new(),
            sounds: HashSet::new(),
            fonts: HashSet::new(),
            next_id: 1,
            labels: HashMap::new(),
            pending: Vec::new(),
            frames: VecDeque::with_capacity(FRAME_HISTORY),
            frames_presented: 0,
            sound_log: Vec::new(),
            looping: HashSet::new(),
        }
    }

    /// Media layer with every asset the game needs, using the given sprite
    /// sizes for the player and the enemy.
    pub fn stocked(settings: &Settings, size: UVec2, player: UVec2, enemy: UVec2) -> Self {
        let mut media = Self::new(size);
        for &file in IMAGE_FILES {
            let sprite = match file {
                PLAYER_IMAGE => player,
                ENEMY_IMAGE => enemy,
                _ => size,
            };
            media.add_image(settings.asset_dir.join(file), sprite);
        }
        for &file in SOUND_FILES {
            media.add_sound(settings.asset_dir.join(file));
        }
        media.add_font(&settings.hud_font);
        media.add_font(&settings.title_font);
        media
    }

    pub fn add_image(&mut self, path: impl Into<PathBuf>, size: UVec2) {
        self.images.insert(path.into(), size);
    }

    pub fn add_sound(&mut self, path: impl Into<PathBuf>) {
        self.sounds.insert(path.into());
    }

    pub fn add_font(&mut self, name: impl Into<String>) {
        self.fonts.insert(name.into());
    }

    pub fn remove_font(&mut self, name: &str) {
        self.fonts.remove(name);
    }

    fn allocate(&mut self, label: String) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.labels.insert(id, label);
        id
    }

    /// Path or text a handle was created from
    pub fn label(&self, id: u32) -> Option<&str> {
        self.labels.get(&id).map(String::as_str)
    }

    /// Most recently presented frame
    pub fn last_frame(&self) -> Option<&[DrawCommand]> {
        self.frames.back().map(Vec::as_slice)
    }

    /// Labels of everything blitted in the most recent frame, in draw order
    pub fn last_frame_labels(&self) -> Vec<&str> {
        self.last_frame()
            .unwrap_or_default()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Blit { id, .. } => self.label(*id),
                DrawCommand::Circle { .. } => None,
            })
            .collect()
    }

    /// Draw calls issued since the last present (not yet visible)
    pub fn pending_draws(&self) -> &[DrawCommand] {
        &self.pending
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn sound_log(&self) -> &[SoundCommand] {
        &self.sound_log
    }

    pub fn clear_sound_log(&mut self) {
        self.sound_log.clear();
    }

    pub fn is_looping(&self, sound: Playable) -> bool {
        self.looping.contains(&sound.id)
    }
}

impl MediaLayer for HeadlessMedia {
    fn load_image(&mut self, path: &Path) -> Result<Drawable, ResourceLoadError> {
        let size = *self.images.get(path).ok_or_else(|| ResourceLoadError::Missing {
            path: path.to_path_buf(),
        })?;
        if size.x == 0 || size.y == 0 {
            return Err(ResourceLoadError::Decode {
                path: path.to_path_buf(),
                reason: "image has no pixels".into(),
            });
        }
        let id = self.allocate(path.display().to_string());
        log::debug!("Loaded image {} ({}x{})", path.display(), size.x, size.y);
        Ok(Drawable { id, size })
    }

    fn load_sound(&mut self, path: &Path) -> Result<Playable, ResourceLoadError> {
        if !self.sounds.contains(path) {
            return Err(ResourceLoadError::Missing {
                path: path.to_path_buf(),
            });
        }
        let id = self.allocate(path.display().to_string());
        log::debug!("Loaded sound {}", path.display());
        Ok(Playable { id })
    }

    fn render_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        _color: Color,
    ) -> Result<Drawable, ResourceLoadError> {
        if !self.fonts.contains(&font.name) {
            return Err(ResourceLoadError::Font {
                name: font.name.clone(),
                reason: "not available".into(),
            });
        }
        // Fixed-pitch approximation: half an em per character
        let width = text.chars().count() as u32 * font.size / 2;
        let id = self.allocate(text.to_string());
        Ok(Drawable {
            id,
            size: UVec2::new(width, font.size),
        })
    }
}

impl FrameSurface for HeadlessMedia {
    fn size(&self) -> UVec2 {
        self.size
    }

    fn blit(&mut self, drawable: &Drawable, pos: Vec2) {
        self.pending.push(DrawCommand::Blit {
            id: drawable.id,
            pos,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.pending.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn present(&mut self) {
        if self.frames.len() == FRAME_HISTORY {
            self.frames.pop_front();
        }
        self.frames.push_back(std::mem::take(&mut self.pending));
        self.frames_presented += 1;
    }
}

impl AudioOut for HeadlessMedia {
    fn play_once(&mut self, sound: Playable, volume: f32) {
        self.sound_log.push(SoundCommand::PlayOnce {
            id: sound.id,
            volume,
        });
    }

    fn play_looping(&mut self, sound: Playable, volume: f32) {
        self.looping.insert(sound.id);
        self.sound_log.push(SoundCommand::PlayLooping {
            id: sound.id,
            volume,
        });
    }

    fn stop(&mut self, sound: Playable) {
        self.looping.remove(&sound.id);
        self.sound_log.push(SoundCommand::Stop { id: sound.id });
    }
}
