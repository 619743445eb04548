mod common;

use bevy::prelude::*;
use common::{press, sim_app, step, transition_to};
use prompt_runner::core::config::GameConfig;
use prompt_runner::gameplay::player::{rest_height, Player};
use prompt_runner::gameplay::session::GameSpeed;
use prompt_runner::AppState;

fn player_y(app: &mut App) -> f32 {
    let mut q = app
        .world_mut()
        .query_filtered::<&Transform, With<Player>>();
    q.single(app.world()).unwrap().translation.y
}

#[test]
fn player_never_sinks_below_ground_line() {
    let cfg = GameConfig::default();
    let rest = rest_height(&cfg.player);
    let mut app = sim_app(cfg);
    transition_to(&mut app, AppState::Playing);

    for _ in 0..30 {
        step(&mut app, 1);
        assert_eq!(player_y(&mut app), rest);
    }
}

#[test]
fn jump_key_launches_and_player_settles_back() {
    let cfg = GameConfig::default();
    let rest = rest_height(&cfg.player);
    let mut app = sim_app(cfg);
    transition_to(&mut app, AppState::Playing);

    press(&mut app, KeyCode::Space);
    {
        let mut q = app.world_mut().query::<&Player>();
        let player = q.single(app.world()).unwrap();
        assert!(player.airborne);
        assert_eq!(player.vel_y, 15.0);
    }

    let mut peak = rest;
    for _ in 0..120 {
        step(&mut app, 1);
        let y = player_y(&mut app);
        assert!(y >= rest, "player dipped below the ground line");
        peak = peak.max(y);
    }
    assert!(peak > rest + 100.0, "jump arc never left the ground");
    assert_eq!(player_y(&mut app), rest);
    let mut q = app.world_mut().query::<&Player>();
    let player = q.single(app.world()).unwrap();
    assert!(!player.airborne);
    assert_eq!(player.vel_y, 0.0);
}

#[test]
fn game_speed_grows_linearly_per_step() {
    let mut app = sim_app(GameConfig::default());
    transition_to(&mut app, AppState::Playing);
    assert_eq!(app.world().resource::<GameSpeed>().0, 1.0);

    step(&mut app, 100);
    let speed = app.world().resource::<GameSpeed>().0;
    assert!((speed - 1.01).abs() < 1e-5, "speed was {speed}");

    // Monotone: more steps never lower it.
    step(&mut app, 50);
    assert!(app.world().resource::<GameSpeed>().0 > speed);
}
