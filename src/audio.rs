//! Sound cues.  The terminal front end has exactly one speaker: the bell.

use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Shoot,
    Explosion,
}

impl SoundCue {
    /// File whose presence in the assets directory enables this cue.
    pub fn file_name(self) -> &'static str {
        match self {
            SoundCue::Shoot => "shoot.wav",
            SoundCue::Explosion => "explosion.wav",
        }
    }
}

/// Fire-and-forget playback.  Implementations must never fail.
pub trait Audio {
    fn play(&mut self, cue: SoundCue);
}

/// Cues backed by the terminal bell, enabled per cue when its sound file is
/// shipped in the assets directory.
#[derive(Debug, Default)]
pub struct SoundBank {
    shoot: bool,
    explosion: bool,
    played: u64,
}

impl SoundBank {
    pub fn load(dir: &Path) -> Self {
        let shoot = dir.join(SoundCue::Shoot.file_name()).is_file();
        let explosion = dir.join(SoundCue::Explosion.file_name()).is_file();
        if !shoot || !explosion {
            log::warn!(
                "sound files missing in {} (shoot: {}, explosion: {}); muted cues are skipped",
                dir.display(),
                shoot,
                explosion
            );
        }
        SoundBank { shoot, explosion, played: 0 }
    }

    pub fn is_loaded(&self, cue: SoundCue) -> bool {
        match cue {
            SoundCue::Shoot => self.shoot,
            SoundCue::Explosion => self.explosion,
        }
    }

    /// Number of cues actually sounded so far.
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl Audio for SoundBank {
    fn play(&mut self, cue: SoundCue) {
        if !self.is_loaded(cue) {
            return;
        }
        self.played += 1;
        // stderr shares the terminal with the frame buffer on stdout but is
        // unbuffered, so the bell is not held back until the next flush.
        let _ = std::io::stderr().write_all(b"\x07");
    }
}
