//! Terminal input → per-frame snapshots.
//!
//! Input model: instead of acting on each key event individually, we maintain
//! a `key_frame` map that records the frame number of the last press/repeat
//! event for every key.  Each frame we check which keys are still "fresh"
//! (within `HOLD_WINDOW` frames), so Space + ←/→ can be held together.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
//!   `Press` / `Repeat` / `Release` events → keys are removed on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows as
//!   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames of
//!   silence.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::render::Viewport;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  At 60 FPS this is ≈133 ms, longer than any OS
/// key-repeat interval.
pub const HOLD_WINDOW: u64 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Fire,
    /// Keyboard stand-in for clicking the focused control.
    Activate,
}

/// Edge-triggered input, consumed exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    /// Pointer press in logical pixels.
    PointerDown { x: i32, y: i32 },
    /// The player closed the game (window close / Ctrl+C / Esc / q).
    Close,
}

/// Level-triggered input: what is held down right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    /// Reported for polling only.  Firing itself is edge-triggered through
    /// `InputEvent::KeyDown(Key::Fire)`.
    pub fire: bool,
}

/// Everything the game sees in one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub held: HeldKeys,
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    pub fn with_events(events: Vec<InputEvent>) -> Self {
        FrameInput { held: HeldKeys::default(), events }
    }

    pub fn with_held(held: HeldKeys) -> Self {
        FrameInput { held, events: Vec::new() }
    }
}

fn key_for(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Activate),
        _ => None,
    }
}

fn is_close(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Turns raw terminal events into `FrameInput`s.
#[derive(Debug)]
pub struct KeyTracker {
    /// Maps each held key → the frame it was last seen (press or repeat).
    key_frame: HashMap<Key, u64>,
    frame: u64,
    events: Vec<InputEvent>,
    viewport: Viewport,
}

impl KeyTracker {
    pub fn new(viewport: Viewport) -> Self {
        KeyTracker {
            key_frame: HashMap::new(),
            frame: 0,
            events: Vec::new(),
            viewport,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Feed one raw event for the current frame.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                // Press: record key + queue the one-shot event
                KeyEventKind::Press => {
                    if is_close(code, modifiers) {
                        self.events.push(InputEvent::Close);
                    } else if let Some(key) = key_for(code) {
                        self.key_frame.insert(key, self.frame);
                        self.events.push(InputEvent::KeyDown(key));
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    if let Some(key) = key_for(code) {
                        self.key_frame.insert(key, self.frame);
                    }
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    if let Some(key) = key_for(code) {
                        self.key_frame.remove(&key);
                    }
                }
            },
            Event::Mouse(MouseEvent { kind: MouseEventKind::Down(_), column, row, .. }) => {
                let (x, y) = self.viewport.to_logical(column, row);
                self.events.push(InputEvent::PointerDown { x, y });
            }
            Event::Resize(cols, rows) => {
                self.viewport = Viewport::new(cols, rows);
            }
            _ => {}
        }
    }

    /// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
    pub fn is_held(&self, key: Key) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Close the current frame: snapshot held keys, hand over every queued
    /// event and start the next frame with an empty queue.
    pub fn finish_frame(&mut self) -> FrameInput {
        let input = FrameInput {
            held: HeldKeys {
                left: self.is_held(Key::Left),
                right: self.is_held(Key::Right),
                fire: self.is_held(Key::Fire),
            },
            events: std::mem::take(&mut self.events),
        };
        self.frame += 1;
        input
    }
}
