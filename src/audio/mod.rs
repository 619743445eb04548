use bevy::prelude::*;
use std::path::Path;

/// Optional sound effect handles; a `None` slot means the file was missing at
/// startup and that effect stays silent for the rest of the process.
#[derive(Resource, Default)]
pub struct SoundEffects {
    pub jump: Option<Handle<AudioSource>>,
    pub good_collect: Option<Handle<AudioSource>>,
    pub bad_collect: Option<Handle<AudioSource>>,
    pub game_over: Option<Handle<AudioSource>>,
}

pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sounds);
    }
}

/// Best-effort load of the four effects from assets/sounds/. Missing files
/// are reported once and never retried.
fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    let mut missing: Vec<&str> = Vec::new();
    let mut load = |name: &'static str, missing: &mut Vec<&'static str>| {
        if Path::new("assets/sounds").join(name).is_file() {
            Some(asset_server.load(format!("sounds/{name}")))
        } else {
            missing.push(name);
            None
        }
    };
    let effects = SoundEffects {
        jump: load("jump.ogg", &mut missing),
        good_collect: load("good_collect.ogg", &mut missing),
        bad_collect: load("bad_collect.ogg", &mut missing),
        game_over: load("game_over.ogg", &mut missing),
    };
    if !missing.is_empty() {
        warn!(
            target: "audio",
            "Sound files not found ({}); those effects are disabled",
            missing.join(", ")
        );
    }
    commands.insert_resource(effects);
}

/// Fire-and-forget playback; a silent no-op when the effect is absent.
pub fn play(commands: &mut Commands, handle: Option<&Handle<AudioSource>>) {
    if let Some(handle) = handle {
        commands.spawn((AudioPlayer(handle.clone()), PlaybackSettings::DESPAWN));
    }
}
