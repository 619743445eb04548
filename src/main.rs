use bevy::prelude::*;

use prompt_runner::{GameConfig, GamePlugin};

fn main() {
    // Load configuration, falling back to defaults if missing or malformed.
    let (cfg, load_err) = GameConfig::load_or_default("assets/config/game.ron");

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: cfg.window.title.clone(),
            resolution: (cfg.window.width, cfg.window.height).into(),
            resizable: false,
            ..default()
        }),
        ..default()
    }));

    // The log subscriber only exists once DefaultPlugins is built.
    if let Some(err) = load_err {
        warn!(target: "config", "assets/config/game.ron unusable ({err}); using defaults");
    }
    for finding in cfg.validate() {
        warn!(target: "config", "{finding}");
    }

    app.insert_resource(cfg).add_plugins(GamePlugin).run();
}
