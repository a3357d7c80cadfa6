//! Frame rendering
//!
//! Reads the post-tick game state and issues blit calls. Never mutates the
//! simulation. One call draws and presents exactly one frame.

pub mod layout;

use glam::Vec2;

use crate::assets::Assets;
use crate::consts::{MARGIN, PROJECTILE_RADIUS};
use crate::media::{BLACK, FrameSurface, MediaLayer};
use crate::sim::{GamePhase, GameState};

pub use layout::{centered, top_right};

/// Vertical offset of the prompt below the centered title
pub const PROMPT_OFFSET_Y: f32 = 100.0;

/// Draw one complete frame and present it
pub fn render_frame<P>(state: &GameState, assets: &Assets, platform: &mut P)
where
    P: MediaLayer + FrameSurface + ?Sized,
{
    let field = state.dims.field;
    platform.blit(&assets.background, Vec2::ZERO);

    if state.started() {
        draw_hud(state, assets, platform);
    }

    match state.phase {
        GamePhase::Playing => {
            if state.projectile.active {
                platform.fill_circle(state.projectile.pos, PROJECTILE_RADIUS, BLACK);
            }
            platform.blit(&assets.enemy, state.enemy.pos);
            platform.blit(&assets.player, state.player.pos);
        }
        GamePhase::RoundPause => {
            let msg = &assets.lose_life_msg;
            platform.blit(msg, centered(field, msg.sizef()));
        }
        GamePhase::Intro | GamePhase::GameOver => {
            let (title, prompt) = if state.started() {
                (&assets.game_over_title, &assets.retry_prompt)
            } else {
                (&assets.intro_title, &assets.start_prompt)
            };
            platform.blit(title, centered(field, title.sizef()));
            let prompt_pos = centered(field, prompt.sizef()) + Vec2::new(0.0, PROMPT_OFFSET_Y);
            platform.blit(prompt, prompt_pos);
        }
    }

    platform.present();
}

/// Lives top-left, score top-right
fn draw_hud<P>(state: &GameState, assets: &Assets, platform: &mut P)
where
    P: MediaLayer + FrameSurface + ?Sized,
{
    let field = state.dims.field;
    let lives = format!("Lives: {}", state.lives);
    match platform.render_text(&lives, &assets.hud_font, BLACK) {
        Ok(text) => platform.blit(&text, Vec2::splat(MARGIN)),
        Err(e) => log::warn!("HUD text skipped: {}", e),
    }

    let score = format!("Score: {}", state.score);
    match platform.render_text(&score, &assets.hud_font, BLACK) {
        Ok(text) => platform.blit(&text, top_right(field, text.sizef(), MARGIN)),
        Err(e) => log::warn!("HUD text skipped: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{DrawCommand, HeadlessMedia};
    use crate::settings::Settings;
    use glam::UVec2;

    fn setup() -> (HeadlessMedia, Assets, GameState) {
        let settings = Settings::default();
        let mut media = HeadlessMedia::stocked(
            &settings,
            UVec2::new(800, 600),
            UVec2::new(60, 100),
            UVec2::new(160, 150),
        );
        let assets = Assets::load(&mut media, &settings).unwrap();
        let state = GameState::new(assets.dimensions());
        (media, assets, state)
    }

    #[test]
    fn intro_shows_title_and_start_prompt_without_hud() {
        let (mut media, assets, state) = setup();
        render_frame(&state, &assets, &mut media);
        assert_eq!(
            media.last_frame_labels(),
            vec!["assets/bg.png", "Zombie Game", "Press Space to Start"]
        );
    }

    #[test]
    fn prompt_sits_below_title() {
        let (mut media, assets, state) = setup();
        render_frame(&state, &assets, &mut media);
        let frame = media.last_frame().unwrap();
        // "Press Space to Start": 20 chars at size 30 -> 300x30
        assert_eq!(
            frame[2],
            DrawCommand::Blit {
                id: assets.start_prompt.id,
                pos: Vec2::new(250.0, 385.0)
            }
        );
    }

    #[test]
    fn playing_frame_has_hud_sprites_and_projectile() {
        let (mut media, assets, mut state) = setup();
        state.restart();
        state.score = 40;
        state.projectile.active = true;
        state.projectile.pos = Vec2::new(300.0, 525.0);
        render_frame(&state, &assets, &mut media);

        assert_eq!(
            media.last_frame_labels(),
            vec![
                "assets/bg.png",
                "Lives: 3",
                "Score: 40",
                "assets/zombie.png",
                "assets/soldier.png"
            ]
        );
        let frame = media.last_frame().unwrap();
        assert!(frame.contains(&DrawCommand::Circle {
            center: Vec2::new(300.0, 525.0),
            radius: PROJECTILE_RADIUS,
            color: BLACK
        }));
        // "Score: 40" is 9 chars at size 20 -> 90 wide
        assert!(frame.contains(&DrawCommand::Blit {
            id: text_id(&media, "Score: 40"),
            pos: Vec2::new(700.0, 10.0)
        }));
    }

    #[test]
    fn round_pause_shows_message_only() {
        let (mut media, assets, mut state) = setup();
        state.restart();
        state.phase = GamePhase::RoundPause;
        render_frame(&state, &assets, &mut media);
        assert_eq!(
            media.last_frame_labels(),
            vec!["assets/bg.png", "Lives: 3", "Score: 0", "You Lose a life"]
        );
    }

    #[test]
    fn game_over_after_first_game_offers_retry() {
        let (mut media, assets, mut state) = setup();
        state.restart();
        state.phase = GamePhase::GameOver;
        state.lives = 0;
        render_frame(&state, &assets, &mut media);
        let labels = media.last_frame_labels();
        assert_eq!(&labels[3..], &["Game Over", "Press Space to Retry"]);
        assert_eq!(labels[1], "Lives: 0");
    }

    #[test]
    fn missing_hud_font_still_presents_frame() {
        let (mut media, assets, mut state) = setup();
        media.remove_font(&Settings::default().hud_font);
        state.restart();
        render_frame(&state, &assets, &mut media);
        assert_eq!(media.frames_presented(), 1);
        assert_eq!(
            media.last_frame_labels(),
            vec!["assets/bg.png", "assets/zombie.png", "assets/soldier.png"]
        );
    }

    /// Id of the text drawable blitted in the last frame with this label
    fn text_id(media: &HeadlessMedia, text: &str) -> u32 {
        media
            .last_frame()
            .unwrap()
            .iter()
            .find_map(|cmd| match cmd {
                DrawCommand::Blit { id, .. } if media.label(*id) == Some(text) => Some(*id),
                _ => None,
            })
            .unwrap()
    }
}
