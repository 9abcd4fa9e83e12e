mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{error, info};
use rand::thread_rng;

use galaxy_defender::assets::Assets;
use galaxy_defender::audio::{Audio, SoundBank};
use galaxy_defender::config::{ASSETS_DIR, FRAME, HIGH_SCORE_FILE, LOG_FILE};
use galaxy_defender::game::Game;
use galaxy_defender::highscore::JsonFileStore;
use galaxy_defender::input::KeyTracker;
use galaxy_defender::render::Viewport;

use display::Canvas;

// ── Frame loop ────────────────────────────────────────────────────────────────

/// One input → update → render → wait cycle per iteration until the game
/// terminates.  Events arriving mid-frame are picked up by the next frame.
fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> galaxy_defender::Result<()> {
    let assets_dir = Path::new(ASSETS_DIR);
    let assets = Assets::load(assets_dir);
    let mut audio = SoundBank::load(assets_dir);
    let mut game = Game::new(JsonFileStore::new(HIGH_SCORE_FILE));
    let mut rng = thread_rng();

    let (cols, rows) = terminal::size()?;
    let mut tracker = KeyTracker::new(Viewport::new(cols, rows));
    let mut canvas = Canvas::new(tracker.viewport());

    while game.is_running() {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            tracker.handle(ev);
        }
        let input = tracker.finish_frame();

        let frame = game.update(&input, &mut rng);
        for cue in &frame.cues {
            audio.play(*cue);
        }

        if !frame.commands.is_empty() {
            canvas.resize(tracker.viewport());
            display::render(out, &mut canvas, &frame.commands, &assets)?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
    Ok(())
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

/// Raw mode, alternate screen, mouse capture, hidden cursor.  Returns whether
/// the terminal accepted the keyboard-enhancement flags.
fn setup_terminal<W: Write>(out: &mut W) -> std::io::Result<bool> {
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    Ok(out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok())
}

/// Undo `setup_terminal`, however far it got.  Every step is best effort.
fn restore_terminal<W: Write>(out: &mut W, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> galaxy_defender::Result<()> {
    if let Err(e) = simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info) {
        eprintln!("logging disabled: {}", e);
    }
    info!("Starting Galaxy Defender.");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    let (keyboard_enhanced, result) = match setup_terminal(&mut out) {
        Ok(enhanced) => {
            info!("keyboard enhancement: {}", enhanced);

            // Dedicate a thread exclusively to blocking event reads, sending
            // them through a channel so the game loop never blocks on I/O.
            let (tx, rx) = mpsc::channel::<Event>();
            thread::spawn(move || loop {
                match event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break; // receiver dropped → program exiting
                        }
                    }
                    Err(e) => {
                        error!("event read failed: {}", e);
                        break;
                    }
                }
            });
            (enhanced, run(&mut out, &rx))
        }
        Err(e) => {
            error!("terminal setup failed: {}", e);
            (false, Err(e.into()))
        }
    };
    if let Err(e) = &result {
        error!("game loop failed: {}", e);
    }

    // Always restore the terminal
    restore_terminal(&mut out, keyboard_enhanced);

    info!("Exiting.");
    result
}
