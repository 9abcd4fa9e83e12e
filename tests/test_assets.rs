use std::fs;

use galaxy_defender::assets::*;
use galaxy_defender::audio::*;
use galaxy_defender::config::*;
use galaxy_defender::render::SpriteId;

use tempfile::TempDir;

fn write_all_sprites(dir: &TempDir) {
    fs::write(dir.path().join("player_ship.txt"), "  ^  \n /#\\ \n/###\\\n").unwrap();
    fs::write(dir.path().join("bullet.txt"), "|\n|\n").unwrap();
    fs::write(dir.path().join("enemy_ship.txt"), "\\###/\n \\#/ \n  v  \n").unwrap();
}

// ── Sprite ────────────────────────────────────────────────────────────────────

#[test]
fn ascii_space_is_transparent() {
    let s = Sprite::from_ascii("# \n##\n", C_PLAYER).unwrap();
    assert_eq!(s.mask, vec![vec![true, false], vec![true, true]]);
}

#[test]
fn ascii_short_lines_are_padded() {
    let s = Sprite::from_ascii("###\n#\n", C_ENEMY).unwrap();
    assert_eq!(s.cols(), 3);
    assert_eq!(s.mask[1], vec![true, false, false]);
}

#[test]
fn ascii_blank_text_is_rejected() {
    assert!(Sprite::from_ascii("", C_ENEMY).is_none());
    assert!(Sprite::from_ascii("   \n\n", C_ENEMY).is_none());
}

#[test]
fn sample_scales_to_any_size() {
    let s = Sprite::from_ascii("# \n #\n", C_UI).unwrap();
    assert!(s.sample(0.1, 0.1));
    assert!(!s.sample(0.9, 0.1));
    assert!(s.sample(0.9, 0.9));
    assert!(s.sample(1.0, 1.0)); // clamped into the last cell
}

// ── Placeholders ──────────────────────────────────────────────────────────────

#[test]
fn placeholder_player_points_up() {
    let a = Assets::placeholders();
    assert!(a.fallback);
    // Filled near the nose, empty top corners, both wing tips at the bottom
    assert!(a.player.sample(0.5, 0.3));
    assert!(!a.player.sample(0.05, 0.05));
    assert!(!a.player.sample(0.95, 0.05));
    assert!(a.player.sample(0.05, 0.95));
    assert!(a.player.sample(0.95, 0.95));
}

#[test]
fn placeholder_enemy_points_down() {
    let a = Assets::placeholders();
    assert!(a.enemy.sample(0.5, 0.7));
    assert!(!a.enemy.sample(0.05, 0.95));
    assert!(a.enemy.sample(0.05, 0.05));
}

#[test]
fn placeholder_bullet_is_solid() {
    let a = Assets::placeholders();
    assert!(a.bullet.sample(0.0, 0.0));
    assert!(a.bullet.sample(0.99, 0.99));
    assert_eq!(a.get(SpriteId::Bullet).color, C_BULLET);
}

// ── Loading ───────────────────────────────────────────────────────────────────

#[test]
fn load_reads_all_three_sprites() {
    let dir = TempDir::new().unwrap();
    write_all_sprites(&dir);
    let a = Assets::load(dir.path());
    assert!(!a.fallback);
    assert_eq!(a.player.rows(), 3);
    assert_eq!(a.bullet.cols(), 1);
    assert_eq!(a.get(SpriteId::Enemy).color, C_ENEMY);
}

#[test]
fn missing_directory_falls_back() {
    let dir = TempDir::new().unwrap();
    let a = Assets::load(&dir.path().join("nowhere"));
    assert!(a.fallback);
}

#[test]
fn one_missing_sprite_falls_back_for_all() {
    let dir = TempDir::new().unwrap();
    write_all_sprites(&dir);
    fs::remove_file(dir.path().join("bullet.txt")).unwrap();
    let a = Assets::load(dir.path());
    assert!(a.fallback);
    assert_eq!(a.player, Assets::placeholders().player);
}

#[test]
fn empty_sprite_file_falls_back() {
    let dir = TempDir::new().unwrap();
    write_all_sprites(&dir);
    fs::write(dir.path().join("enemy_ship.txt"), "\n").unwrap();
    assert!(Assets::load(dir.path()).fallback);
}

// ── Sounds ────────────────────────────────────────────────────────────────────

#[test]
fn missing_sounds_are_silent_no_ops() {
    let dir = TempDir::new().unwrap();
    let mut bank = SoundBank::load(dir.path());
    assert!(!bank.is_loaded(SoundCue::Shoot));
    bank.play(SoundCue::Shoot);
    bank.play(SoundCue::Explosion);
    assert_eq!(bank.played(), 0);
}

#[test]
fn present_sound_is_played() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("explosion.wav"), b"RIFF").unwrap();
    let mut bank = SoundBank::load(dir.path());
    assert!(bank.is_loaded(SoundCue::Explosion));
    assert!(!bank.is_loaded(SoundCue::Shoot));
    bank.play(SoundCue::Explosion);
    bank.play(SoundCue::Shoot);
    assert_eq!(bank.played(), 1);
}
