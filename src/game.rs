//! Screen state machine: Menu → Playing → GameOver → Menu.
//!
//! `Game::update` runs exactly one frame of whichever screen is active and
//! returns what to draw and which sounds to play.  Timing, event polling and
//! the actual drawing belong to the caller.

use rand::Rng;

use crate::audio::SoundCue;
use crate::compute::{init_state, move_player_left, move_player_right, player_shoot, tick};
use crate::entities::{GameStatus, PlayState};
use crate::highscore::{record_if_higher, HighScoreStore};
use crate::input::{FrameInput, InputEvent, Key};
use crate::render::{
    game_over_commands, menu_commands, menu_play_button, menu_quit_button, playing_commands,
    DrawCommand,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    GameOver,
    /// The process should exit.  Terminal.
    Terminated,
}

/// Output of one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    pub cues: Vec<SoundCue>,
}

pub struct Game<S: HighScoreStore> {
    screen: Screen,
    state: PlayState,
    high_score: u32,
    store: S,
}

impl<S: HighScoreStore> Game<S> {
    pub fn new(store: S) -> Self {
        let high_score = store.load();
        log::info!("starting at menu, high score {}", high_score);
        Game {
            screen: Screen::Menu,
            state: init_state(),
            high_score,
            store,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_running(&self) -> bool {
        self.screen != Screen::Terminated
    }

    pub fn state(&self) -> &PlayState {
        &self.state
    }

    /// Direct access to the round, for scripted scenarios.
    pub fn state_mut(&mut self) -> &mut PlayState {
        &mut self.state
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one frame of the active screen.  Events in `input` are consumed
    /// here; once a transition fires, the remaining events are discarded.
    pub fn update(&mut self, input: &FrameInput, rng: &mut impl Rng) -> Frame {
        match self.screen {
            Screen::Menu => self.update_menu(input),
            Screen::Playing => self.update_playing(input, rng),
            Screen::GameOver => self.update_game_over(input),
            Screen::Terminated => Frame::default(),
        }
    }

    // ── Menu ──────────────────────────────────────────────────────────────────

    fn update_menu(&mut self, input: &FrameInput) -> Frame {
        for event in &input.events {
            match *event {
                InputEvent::Close => return self.terminate(),
                InputEvent::PointerDown { x, y } if menu_play_button().contains_point(x, y) => {
                    return self.start_round();
                }
                InputEvent::PointerDown { x, y } if menu_quit_button().contains_point(x, y) => {
                    return self.terminate();
                }
                InputEvent::KeyDown(Key::Activate) => return self.start_round(),
                _ => {}
            }
        }
        Frame {
            commands: menu_commands(self.high_score),
            cues: Vec::new(),
        }
    }

    fn start_round(&mut self) -> Frame {
        log::info!("round started");
        self.state.reset();
        self.screen = Screen::Playing;
        Frame {
            commands: playing_commands(&self.state, self.high_score),
            cues: Vec::new(),
        }
    }

    // ── Playing ───────────────────────────────────────────────────────────────

    fn update_playing(&mut self, input: &FrameInput, rng: &mut impl Rng) -> Frame {
        let mut cues = Vec::new();

        for event in &input.events {
            match event {
                InputEvent::Close => {
                    log::info!("round abandoned at score {}", self.state.score);
                    return self.terminate();
                }
                InputEvent::KeyDown(Key::Fire) => {
                    self.state = player_shoot(&self.state);
                    cues.push(SoundCue::Shoot);
                }
                _ => {}
            }
        }

        if input.held.left {
            self.state = move_player_left(&self.state);
        }
        if input.held.right {
            self.state = move_player_right(&self.state);
        }

        let (next, tick_cues) = tick(&self.state, rng);
        self.state = next;
        cues.extend(tick_cues);

        // The frame that ended the round is still drawn as a playing frame.
        let commands = playing_commands(&self.state, self.high_score);
        if self.state.status == GameStatus::GameOver {
            self.enter_game_over();
        }
        Frame { commands, cues }
    }

    fn enter_game_over(&mut self) {
        let score = self.state.score;
        log::info!("game over, final score {}", score);
        match record_if_higher(&mut self.store, score) {
            Ok(true) => log::info!("new high score {}", score),
            Ok(false) => {}
            Err(e) => log::error!("could not save high score {}: {}", score, e),
        }
        self.high_score = self.high_score.max(score);
        self.screen = Screen::GameOver;
    }

    // ── Game over ─────────────────────────────────────────────────────────────

    fn update_game_over(&mut self, input: &FrameInput) -> Frame {
        for event in &input.events {
            match event {
                InputEvent::Close => return self.terminate(),
                InputEvent::PointerDown { .. } | InputEvent::KeyDown(Key::Activate) => {
                    self.screen = Screen::Menu;
                    return Frame {
                        commands: menu_commands(self.high_score),
                        cues: Vec::new(),
                    };
                }
                _ => {}
            }
        }
        Frame {
            commands: game_over_commands(self.state.score),
            cues: Vec::new(),
        }
    }

    fn terminate(&mut self) -> Frame {
        log::info!("terminating from {:?}", self.screen);
        self.screen = Screen::Terminated;
        Frame::default()
    }
}
