//! Galaxy Defender: a single-screen arcade shooter.
//!
//! The library holds every piece of game logic; the binary only owns the
//! terminal (polling, drawing, timing).

pub mod assets;
pub mod audio;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod game;
pub mod highscore;
pub mod input;
pub mod particles;
pub mod render;
pub mod spawner;

pub use error::{GameError, Result};
