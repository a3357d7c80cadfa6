use std::collections::VecDeque;

use glam::UVec2;

use zombie_shooter::consts::{INITIAL_LIVES, ROUND_PAUSE_TICKS};
use zombie_shooter::headless::{HeadlessMedia, SoundCommand};
use zombie_shooter::input::{HeldKeys, Key};
use zombie_shooter::sim::GamePhase;
use zombie_shooter::{Event, EventSource, Game, Settings};

/// Replays a fixed list of events, then quits
struct ScriptedEvents {
    queue: VecDeque<(Event, HeldKeys)>,
    held: HeldKeys,
}

impl ScriptedEvents {
    fn new(events: impl IntoIterator<Item = (Event, HeldKeys)>) -> Self {
        Self {
            queue: events.into_iter().collect(),
            held: HeldKeys::new(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn wait_event(&mut self) -> Event {
        match self.queue.pop_front() {
            Some((event, held)) => {
                self.held = held;
                event
            }
            None => Event::Quit,
        }
    }

    fn held_keys(&self) -> HeldKeys {
        self.held
    }
}

fn space() -> HeldKeys {
    [Key::Space].into_iter().collect()
}

fn setup() -> (Game, HeadlessMedia) {
    let settings = Settings::default();
    let mut media = HeadlessMedia::stocked(
        &settings,
        UVec2::new(800, 600),
        UVec2::new(60, 100),
        UVec2::new(160, 150),
    );
    let game = Game::new(&mut media, &settings).expect("assets load");
    (game, media)
}

fn refresh(game: &mut Game, media: &mut HeadlessMedia, held: HeldKeys) {
    assert!(game.handle_event(Event::Refresh, &held, media));
}

#[test]
fn quit_before_anything_draws_nothing() {
    let (mut game, mut media) = setup();
    let mut events = ScriptedEvents::new(Vec::new());
    game.run(&mut events, &mut media);
    assert_eq!(media.frames_presented(), 0);
    assert_eq!(game.state().phase, GamePhase::Intro);
}

#[test]
fn title_screen_ignores_the_trigger() {
    let (mut game, mut media) = setup();
    let mut events = ScriptedEvents::new([
        (Event::PointerDown, HeldKeys::new()),
        (Event::Refresh, HeldKeys::new()),
    ]);
    game.run(&mut events, &mut media);
    assert!(!game.state().projectile.active);
    assert!(media.sound_log().is_empty());
    assert_eq!(
        media.last_frame_labels(),
        vec!["assets/bg.png", "Zombie Game", "Press Space to Start"]
    );
}

#[test]
fn enemy_walking_into_player_costs_a_life() {
    let (mut game, mut media) = setup();
    let script = std::iter::once((Event::Refresh, space()))
        .chain(std::iter::repeat_n((Event::Refresh, HeldKeys::new()), 150));
    let mut events = ScriptedEvents::new(script);
    game.run(&mut events, &mut media);

    let state = game.state();
    assert_eq!(state.phase, GamePhase::RoundPause);
    assert_eq!(state.lives, INITIAL_LIVES - 1);
    assert_eq!(media.frames_presented(), 151);
    assert!(media.last_frame_labels().contains(&"You Lose a life"));

    let sounds = game.assets().sounds;
    assert!(!media.is_looping(sounds.game_play));
    assert!(media.sound_log().iter().any(
        |cmd| matches!(cmd, SoundCommand::PlayOnce { id, .. } if *id == sounds.lose_life.id)
    ));
}

#[test]
fn full_session_ends_in_game_over_and_retry_restarts() {
    let (mut game, mut media) = setup();
    refresh(&mut game, &mut media, space());
    assert_eq!(game.state().phase, GamePhase::Playing);

    let mut pauses = 0;
    let mut last_lives = game.state().lives;
    for _ in 0..2_000 {
        refresh(&mut game, &mut media, HeldKeys::new());
        let state = game.state();
        assert!(state.lives <= last_lives);
        if state.lives < last_lives && state.phase == GamePhase::RoundPause {
            pauses += 1;
        }
        last_lives = state.lives;
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let state = game.state();
    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(state.lives, 0);
    assert_eq!(pauses, INITIAL_LIVES - 1);

    let labels = media.last_frame_labels();
    assert!(labels.contains(&"Game Over"));
    assert!(labels.contains(&"Press Space to Retry"));

    let sounds = game.assets().sounds;
    assert!(matches!(
        media.sound_log().last(),
        Some(SoundCommand::PlayOnce { id, .. }) if *id == sounds.game_over.id
    ));

    refresh(&mut game, &mut media, space());
    let state = game.state();
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!((state.lives, state.score, state.level), (INITIAL_LIVES, 0, 1));
    assert!(media.is_looping(sounds.game_play));
}

#[test]
fn round_resumes_after_pause_with_music() {
    let (mut game, mut media) = setup();
    refresh(&mut game, &mut media, space());
    while game.state().phase == GamePhase::Playing {
        refresh(&mut game, &mut media, HeldKeys::new());
    }
    assert_eq!(game.state().phase, GamePhase::RoundPause);

    for _ in 0..ROUND_PAUSE_TICKS {
        refresh(&mut game, &mut media, HeldKeys::new());
    }
    assert_eq!(game.state().phase, GamePhase::RoundPause);
    refresh(&mut game, &mut media, HeldKeys::new());
    assert_eq!(game.state().phase, GamePhase::Playing);
    assert_eq!(game.state().enemy.pos.x, 0.0);
    assert!(media.is_looping(game.assets().sounds.game_play));
}

#[test]
fn shooting_the_enemy_scores() {
    let (mut game, mut media) = setup();
    refresh(&mut game, &mut media, space());
    {
        let state = game.state_mut();
        state.player.pos.x = 600.0;
        state.enemy.pos.x = 540.0;
    }
    assert!(game.handle_event(Event::PointerDown, &HeldKeys::new(), &mut media));
    assert!(game.state().projectile.active);
    refresh(&mut game, &mut media, HeldKeys::new());

    let state = game.state();
    assert_eq!(state.score, 10);
    assert_eq!(state.level, 2);
    assert_eq!(state.enemy.pos.x, -160.0);
    assert!(media.last_frame_labels().contains(&"Score: 10"));
}
