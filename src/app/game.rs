use bevy::prelude::*;

use crate::app::game_over::GameOverPlugin;
use crate::app::menu::MenuPlugin;
use crate::app::quit::QuitPlugin;
use crate::app::state::AppState;
use crate::audio::AudioPlugin;
use crate::debug::DebugPlugin;
use crate::gameplay::collision::CollisionPlugin;
use crate::gameplay::particle::ParticlePlugin;
use crate::gameplay::player::PlayerPlugin;
use crate::gameplay::prompt::PromptPlugin;
use crate::gameplay::session::{SessionPlugin, STEP_HZ};
use crate::rendering::background::BackgroundPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::ground::GroundPlugin;
use crate::rendering::hud::HudPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            // One logical step per 60 Hz frame; all per-step tuning assumes this.
            .insert_resource(Time::<Fixed>::from_hz(STEP_HZ))
            .add_plugins((
                CameraPlugin,
                BackgroundPlugin,
                GroundPlugin,
                SessionPlugin,
                PlayerPlugin,
                PromptPlugin,
                CollisionPlugin,
                ParticlePlugin,
                HudPlugin,
                MenuPlugin,
                GameOverPlugin,
                AudioPlugin,
                QuitPlugin,
                DebugPlugin,
            ));
    }
}
