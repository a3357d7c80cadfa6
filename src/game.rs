//! Event loop driver
//!
//! Owns the game state, the loaded assets and the audio manager. Each event
//! from the platform is processed to completion before the next is read.

use crate::assets::Assets;
use crate::audio::AudioManager;
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::input::HeldKeys;
use crate::media::{AudioOut, MediaLayer, Platform, ResourceLoadError};
use crate::renderer::render_frame;
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GameState, TickInput};

/// Longest frame time `advance` will simulate in one call
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Platform events the loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Window closed
    Quit,
    /// Refresh timer fired (30 Hz)
    Refresh,
    /// Primary pointer button pressed
    PointerDown,
}

/// Source of platform events and keyboard state
pub trait EventSource {
    /// Block until the next event is available
    fn wait_event(&mut self) -> Event;
    /// Keys held right now
    fn held_keys(&self) -> HeldKeys;
}

pub struct Game {
    state: GameState,
    assets: Assets,
    audio: AudioManager,
    /// Unsimulated wall-clock time for `advance`
    accumulator: f32,
}

impl Game {
    /// Load all assets and build the title-screen state
    pub fn new<M: MediaLayer + ?Sized>(
        media: &mut M,
        settings: &Settings,
    ) -> Result<Self, ResourceLoadError> {
        let assets = Assets::load(media, settings)?;
        let audio = AudioManager::new(assets.sounds, settings);
        let state = GameState::new(assets.dimensions());
        Ok(Self {
            state,
            assets,
            audio,
            accumulator: 0.0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    /// Run one tick, react to its events, then draw the frame
    pub fn step<P: Platform + ?Sized>(&mut self, input: &TickInput, platform: &mut P) {
        sim::tick(&mut self.state, input);
        self.flush_events(platform);
        self.render(platform);
    }

    /// Pull the trigger. Returns whether a projectile was launched.
    pub fn fire<A: AudioOut + ?Sized>(&mut self, out: &mut A) -> bool {
        let fired = sim::fire(&mut self.state);
        self.flush_events(out);
        fired
    }

    /// Draw the current state without simulating
    pub fn render<P: Platform + ?Sized>(&self, platform: &mut P) {
        render_frame(&self.state, &self.assets, platform);
    }

    /// Process exactly one event. Returns false once the loop should stop.
    pub fn handle_event<P: Platform + ?Sized>(
        &mut self,
        event: Event,
        held: &HeldKeys,
        platform: &mut P,
    ) -> bool {
        match event {
            Event::Quit => {
                log::info!("Quit requested");
                return false;
            }
            Event::Refresh => self.step(&TickInput::from_keys(held), platform),
            Event::PointerDown => {
                self.fire(platform);
            }
        }
        true
    }

    /// Block on events until `Quit`
    pub fn run<E, P>(&mut self, events: &mut E, platform: &mut P)
    where
        E: EventSource + ?Sized,
        P: Platform + ?Sized,
    {
        log::info!("Entering event loop");
        loop {
            let event = events.wait_event();
            let held = events.held_keys();
            if !self.handle_event(event, &held, platform) {
                break;
            }
        }
        log::info!(
            "Event loop finished after {} ticks (score {})",
            self.state.time_ticks,
            self.state.score
        );
    }

    /// Simulate `elapsed` seconds of wall-clock time in fixed ticks, then
    /// draw once. For hosts that report frame deltas instead of firing a
    /// 30 Hz timer. Returns the number of ticks run.
    pub fn advance<P: Platform + ?Sized>(
        &mut self,
        elapsed: f32,
        input: &TickInput,
        platform: &mut P,
    ) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            sim::tick(&mut self.state, input);
            self.flush_events(platform);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        self.render(platform);
        substeps
    }

    fn flush_events<A: AudioOut + ?Sized>(&mut self, out: &mut A) {
        for event in self.state.drain_events() {
            log::debug!("Game event: {:?}", event);
            if let GameEvent::EnemyShot { level, .. } = event {
                log::info!("Enemy down, now level {} (score {})", level, self.state.score);
            }
            self.audio.handle(&event, out);
        }
    }
}
