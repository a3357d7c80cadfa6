//! Audio system
//!
//! Turns simulation events into sound-trigger calls on the platform's
//! `AudioOut`. The background track loops for the length of a round.

use crate::media::{AudioOut, Playable};
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player lost a life but the game goes on
    LoseLife,
    /// Last life lost
    GameOver,
    /// Background loop during a round
    GamePlay,
    /// Weapon fired
    Gunshot,
}

/// The four loaded clips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundBank {
    pub lose_life: Playable,
    pub game_over: Playable,
    pub game_play: Playable,
    pub gunshot: Playable,
}

impl SoundBank {
    pub fn get(&self, effect: SoundEffect) -> Playable {
        match effect {
            SoundEffect::LoseLife => self.lose_life,
            SoundEffect::GameOver => self.game_over,
            SoundEffect::GamePlay => self.game_play,
            SoundEffect::Gunshot => self.gunshot,
        }
    }
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    bank: SoundBank,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(bank: SoundBank, settings: &Settings) -> Self {
        Self {
            bank,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = match effect {
            SoundEffect::GamePlay => self.music_volume,
            _ => self.sfx_volume,
        };
        self.master_volume * channel
    }

    /// Play a one-shot effect, or start the loop for `GamePlay`
    pub fn play<A: AudioOut + ?Sized>(&self, effect: SoundEffect, out: &mut A) {
        let vol = self.effective_volume(effect);
        if vol <= 0.0 {
            return;
        }
        let sound = self.bank.get(effect);
        match effect {
            SoundEffect::GamePlay => out.play_looping(sound, vol),
            _ => out.play_once(sound, vol),
        }
    }

    /// Stop the background loop
    pub fn stop_music<A: AudioOut + ?Sized>(&self, out: &mut A) {
        out.stop(self.bank.game_play);
    }

    /// React to one simulation event
    pub fn handle<A: AudioOut + ?Sized>(&self, event: &GameEvent, out: &mut A) {
        match event {
            GameEvent::RoundStarted => self.play(SoundEffect::GamePlay, out),
            GameEvent::LifeLost { .. } => {
                self.stop_music(out);
                self.play(SoundEffect::LoseLife, out);
            }
            GameEvent::GameOver { .. } => {
                self.stop_music(out);
                self.play(SoundEffect::GameOver, out);
            }
            GameEvent::ShotFired => self.play(SoundEffect::Gunshot, out),
            GameEvent::EnemyShot { .. } | GameEvent::ProjectileExpired => {}
        }
    }
}
