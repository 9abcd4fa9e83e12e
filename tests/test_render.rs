use galaxy_defender::config::*;
use galaxy_defender::entities::*;
use galaxy_defender::render::*;

fn texts(cmds: &[DrawCommand]) -> Vec<String> {
    cmds.iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

// ── Screens ───────────────────────────────────────────────────────────────────

#[test]
fn menu_shows_title_buttons_and_high_score() {
    let cmds = menu_commands(17);
    assert_eq!(cmds[0], DrawCommand::Clear(C_BG));
    assert_eq!(
        texts(&cmds),
        vec!["GALAXY DEFENDER", "PLAY", "QUIT", "HIGH SCORE: 17"]
    );
    assert!(cmds.contains(&DrawCommand::OutlineRect { rect: menu_play_button(), color: C_UI }));
    assert!(cmds.contains(&DrawCommand::OutlineRect { rect: menu_quit_button(), color: C_UI }));
}

#[test]
fn menu_buttons_do_not_overlap() {
    assert!(!menu_play_button().overlaps(&menu_quit_button()));
    assert_eq!(menu_play_button(), Rect::new(412, 384, 200, 50));
    assert_eq!(menu_quit_button(), Rect::new(412, 464, 200, 50));
}

#[test]
fn playing_draws_every_entity_once() {
    let mut s = PlayState::new();
    s.add_bullet(Bullet::at(10, 10));
    s.add_bullet(Bullet::at(20, 10));
    s.add_enemy(Enemy::at(100, 100));
    s.add_particles(vec![Particle { x: 5.7, y: 9.2, vx: 0.0, vy: 0.0, lifetime: PARTICLE_LIFETIME }]);

    let cmds = playing_commands(&s, 3);
    let sprites = |id| {
        cmds.iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { sprite, .. } if *sprite == id))
            .count()
    };
    assert_eq!(sprites(SpriteId::Player), 1);
    assert_eq!(sprites(SpriteId::Bullet), 2);
    assert_eq!(sprites(SpriteId::Enemy), 1);
    assert!(cmds.contains(&DrawCommand::Circle {
        center: (5, 9),
        radius: 3,
        color: C_PARTICLE,
        alpha: 255,
    }));
    assert_eq!(texts(&cmds), vec!["SCORE: 0", "HIGH SCORE: 3"]);
}

#[test]
fn shield_bar_scales_with_shield() {
    assert_eq!(shield_bar(100), Rect::new(10, 10, 200, 20));
    assert_eq!(shield_bar(60), Rect::new(10, 10, 120, 20));
    assert_eq!(shield_bar(0).w, 0);
}

#[test]
fn game_over_shows_final_score() {
    let cmds = game_over_commands(50);
    assert_eq!(
        texts(&cmds),
        vec!["GAME OVER", "FINAL SCORE: 50", "CLICK TO RETURN TO MENU"]
    );
}

// ── Colour & viewport ─────────────────────────────────────────────────────────

#[test]
fn alpha_blend_endpoints() {
    assert_eq!(C_PARTICLE.over(C_BG, 255), C_PARTICLE);
    assert_eq!(C_PARTICLE.over(C_BG, 0), C_BG);
}

#[test]
fn viewport_maps_corners() {
    let v = Viewport::new(128, 48);
    assert_eq!(v.to_cell(0, 0), (0, 0));
    assert_eq!(v.to_cell(WIDTH - 1, HEIGHT - 1), (127, 47));
    assert_eq!(v.to_cell(-1, -1), (-1, -1));
    assert_eq!(v.to_cell(WIDTH, HEIGHT), (128, 48));
}

#[test]
fn viewport_round_trips_cell_centres() {
    let v = Viewport::new(100, 30);
    for col in [0u16, 17, 99] {
        for row in [0u16, 11, 29] {
            let (x, y) = v.to_logical(col, row);
            assert_eq!(v.to_cell(x, y), (col as i32, row as i32));
        }
    }
}
