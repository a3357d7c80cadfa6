//! Startup asset loading
//!
//! Every image, sound and static message is acquired once, before the first
//! frame. Any failure aborts startup with a `ResourceLoadError`.

use glam::Vec2;

use crate::audio::SoundBank;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::media::{BLACK, Drawable, FontSpec, MediaLayer, ResourceLoadError};
use crate::settings::Settings;
use crate::sim::Dimensions;

pub const BACKGROUND_IMAGE: &str = "bg.png";
pub const ENEMY_IMAGE: &str = "zombie.png";
pub const PLAYER_IMAGE: &str = "soldier.png";
pub const IMAGE_FILES: &[&str] = &[BACKGROUND_IMAGE, ENEMY_IMAGE, PLAYER_IMAGE];

pub const LOSE_LIFE_SOUND: &str = "LoseLife.wav";
pub const GAME_OVER_SOUND: &str = "GameOver.wav";
pub const GAME_PLAY_SOUND: &str = "GamePlay.wav";
pub const GUNSHOT_SOUND: &str = "gunshot.wav";
pub const SOUND_FILES: &[&str] = &[
    LOSE_LIFE_SOUND,
    GAME_OVER_SOUND,
    GAME_PLAY_SOUND,
    GUNSHOT_SOUND,
];

/// HUD counters (lives, score)
pub const HUD_TEXT_SIZE: u32 = 20;
pub const LOSE_LIFE_TEXT_SIZE: u32 = 60;
pub const TITLE_TEXT_SIZE: u32 = 80;
pub const PROMPT_TEXT_SIZE: u32 = 30;

/// Loaded images, sounds and pre-rendered messages
#[derive(Debug, Clone)]
pub struct Assets {
    pub background: Drawable,
    pub enemy: Drawable,
    pub player: Drawable,
    pub sounds: SoundBank,
    /// Shown during the pause after a hit
    pub lose_life_msg: Drawable,
    /// Title before the first game
    pub intro_title: Drawable,
    /// Title after a game has ended
    pub game_over_title: Drawable,
    pub start_prompt: Drawable,
    pub retry_prompt: Drawable,
    /// Font for the per-frame lives/score text
    pub hud_font: FontSpec,
}

impl Assets {
    pub fn load<M: MediaLayer + ?Sized>(
        media: &mut M,
        settings: &Settings,
    ) -> Result<Self, ResourceLoadError> {
        let dir = &settings.asset_dir;
        log::info!("Loading assets from {}", dir.display());

        let sounds = SoundBank {
            lose_life: media.load_sound(&dir.join(LOSE_LIFE_SOUND))?,
            game_over: media.load_sound(&dir.join(GAME_OVER_SOUND))?,
            game_play: media.load_sound(&dir.join(GAME_PLAY_SOUND))?,
            gunshot: media.load_sound(&dir.join(GUNSHOT_SOUND))?,
        };

        let hud = FontSpec::new(settings.hud_font.clone(), HUD_TEXT_SIZE);
        let lose_life_font = FontSpec::new(settings.hud_font.clone(), LOSE_LIFE_TEXT_SIZE);
        let title_font = FontSpec::new(settings.title_font.clone(), TITLE_TEXT_SIZE);
        let prompt_font = FontSpec::new(settings.title_font.clone(), PROMPT_TEXT_SIZE);

        let assets = Self {
            background: media.load_image(&dir.join(BACKGROUND_IMAGE))?,
            enemy: media.load_image(&dir.join(ENEMY_IMAGE))?,
            player: media.load_image(&dir.join(PLAYER_IMAGE))?,
            sounds,
            lose_life_msg: media.render_text("You Lose a life", &lose_life_font, BLACK)?,
            intro_title: media.render_text("Zombie Game", &title_font, BLACK)?,
            game_over_title: media.render_text("Game Over", &title_font, BLACK)?,
            start_prompt: media.render_text("Press Space to Start", &prompt_font, BLACK)?,
            retry_prompt: media.render_text("Press Space to Retry", &prompt_font, BLACK)?,
            hud_font: hud,
        };

        log::info!(
            "Assets loaded (player {}x{}, enemy {}x{})",
            assets.player.size.x,
            assets.player.size.y,
            assets.enemy.size.x,
            assets.enemy.size.y
        );
        Ok(assets)
    }

    /// Simulation geometry taken from the sprite sizes
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            field: Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
            player: self.player.sizef(),
            enemy: self.enemy.sizef(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessMedia;
    use glam::UVec2;

    fn media(settings: &Settings) -> HeadlessMedia {
        HeadlessMedia::stocked(
            settings,
            UVec2::new(800, 600),
            UVec2::new(60, 100),
            UVec2::new(160, 150),
        )
    }

    #[test]
    fn dimensions_follow_sprite_sizes() {
        let settings = Settings::default();
        let assets = Assets::load(&mut media(&settings), &settings).unwrap();
        let dims = assets.dimensions();
        assert_eq!(dims.player, Vec2::new(60.0, 100.0));
        assert_eq!(dims.enemy, Vec2::new(160.0, 150.0));
        assert_eq!(dims.field, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn missing_sound_fails_startup() {
        let settings = Settings::default();
        let mut media = HeadlessMedia::new(UVec2::new(800, 600));
        media.add_image(settings.asset_dir.join(BACKGROUND_IMAGE), UVec2::new(800, 600));
        let err = Assets::load(&mut media, &settings).unwrap_err();
        assert_eq!(
            err,
            ResourceLoadError::Missing {
                path: settings.asset_dir.join(LOSE_LIFE_SOUND)
            }
        );
    }

    #[test]
    fn missing_title_font_fails_startup() {
        let settings = Settings::default();
        let mut media = media(&settings);
        media.remove_font(&settings.title_font);
        let err = Assets::load(&mut media, &settings).unwrap_err();
        assert!(matches!(err, ResourceLoadError::Font { .. }));
    }
}
