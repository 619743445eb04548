mod common;

use bevy::prelude::*;
use common::{sim_app, step, transition_to};
use prompt_runner::core::config::GameConfig;
use prompt_runner::core::layout::HALF_WIDTH;
use prompt_runner::gameplay::prompt::Prompt;
use prompt_runner::AppState;

#[test]
fn spawner_cadence_follows_the_interval() {
    let mut app = sim_app(GameConfig::default());
    transition_to(&mut app, AppState::Playing);

    let mut prompts = |app: &mut App| {
        app.world_mut()
            .query::<&Prompt>()
            .iter(app.world())
            .count()
    };

    step(&mut app, 59);
    assert_eq!(prompts(&mut app), 0, "nothing spawns before the interval");
    step(&mut app, 1);
    assert_eq!(prompts(&mut app), 1, "first spawn lands on step 60");
    step(&mut app, 60);
    assert_eq!(prompts(&mut app), 2, "counter resets after each spawn");
}

#[test]
fn spawned_prompts_start_at_the_right_edge_inside_the_safe_band() {
    let mut app = sim_app(GameConfig::default());
    transition_to(&mut app, AppState::Playing);
    step(&mut app, 60);

    let mut q = app.world_mut().query_filtered::<&Transform, With<Prompt>>();
    let tf = q.single(app.world()).unwrap();
    // Spawned with its left edge at the right screen boundary (center
    // x = 400 + 40), then moved once in the same step like every live prompt.
    assert!(tf.translation.x <= HALF_WIDTH + 40.0);
    assert!(tf.translation.x > HALF_WIDTH + 40.0 - 10.0);
    // Vertical safe band: clear of the top margin and the ground.
    assert!(tf.translation.y >= -170.0 && tf.translation.y <= 180.0);
}
