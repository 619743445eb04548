use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use prompt_runner::app::game_over::GameOverPlugin;
use prompt_runner::app::menu::MenuPlugin;
use prompt_runner::core::config::GameConfig;
use prompt_runner::gameplay::collision::CollisionPlugin;
use prompt_runner::gameplay::particle::ParticlePlugin;
use prompt_runner::gameplay::player::PlayerPlugin;
use prompt_runner::gameplay::prompt::PromptPlugin;
use prompt_runner::gameplay::session::SessionPlugin;
use prompt_runner::AppState;

/// Headless app with the simulation plugins only (no rendering, no audio,
/// no windowing). Virtual time is paused so FixedUpdate never runs on its
/// own; tests drive logical steps explicitly via [`step`].
pub fn sim_app(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .init_state::<AppState>()
        .insert_resource(ButtonInput::<KeyCode>::default())
        .insert_resource(cfg)
        .add_plugins((
            SessionPlugin,
            PlayerPlugin,
            PromptPlugin,
            CollisionPlugin,
            ParticlePlugin,
        ));
    app.world_mut().resource_mut::<Time<Virtual>>().pause();
    app.update();
    app
}

/// Like [`sim_app`] but with the menu and game-over screens, for tests that
/// exercise the full state flow through keyboard input.
#[allow(dead_code)]
pub fn flow_app(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .init_state::<AppState>()
        .insert_resource(ButtonInput::<KeyCode>::default())
        .insert_resource(cfg)
        .add_plugins((
            SessionPlugin,
            PlayerPlugin,
            PromptPlugin,
            CollisionPlugin,
            ParticlePlugin,
            MenuPlugin,
            GameOverPlugin,
        ));
    app.world_mut().resource_mut::<Time<Virtual>>().pause();
    app.update();
    app
}

/// Run `n` logical 60 Hz steps.
pub fn step(app: &mut App, n: usize) {
    for _ in 0..n {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

/// Set the next app state and apply the transition.
#[allow(dead_code)]
pub fn transition_to(app: &mut App, state: AppState) {
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(state);
    app.update();
}

/// Press a key, run two frames so edge-triggered input systems fire and the
/// resulting state transition (if any) applies, then clear the edge.
#[allow(dead_code)]
pub fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    app.update();
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    input.release(key);
    input.clear();
}

#[allow(dead_code)]
pub fn current_state(app: &App) -> AppState {
    *app.world().resource::<State<AppState>>().get()
}
