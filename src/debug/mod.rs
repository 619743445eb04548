#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::app::state::AppState;
#[cfg(feature = "debug")]
use crate::gameplay::particle::Particle;
#[cfg(feature = "debug")]
use crate::gameplay::prompt::Prompt;
#[cfg(feature = "debug")]
use crate::gameplay::session::{GameSpeed, Score};

#[cfg(feature = "debug")]
#[derive(Resource)]
pub struct DebugStats {
    time_accum: f32,
    frames: u32,
    log_interval: f32,
}

#[cfg(feature = "debug")]
impl Default for DebugStats {
    fn default() -> Self {
        Self {
            time_accum: 0.0,
            frames: 0,
            log_interval: 5.0,
        }
    }
}

pub struct DebugPlugin;

#[cfg(feature = "debug")]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, app: &mut bevy::prelude::App) {
        app.init_resource::<DebugStats>()
            .add_systems(Update, debug_logging_system);
    }
}

#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}

#[cfg(feature = "debug")]
fn debug_logging_system(
    time: Res<Time>,
    mut stats: ResMut<DebugStats>,
    state: Res<State<AppState>>,
    score: Res<Score>,
    speed: Res<GameSpeed>,
    q_prompts: Query<(), With<Prompt>>,
    q_particles: Query<(), With<Particle>>,
) {
    stats.frames += 1;
    stats.time_accum += time.delta_secs();
    if stats.time_accum < stats.log_interval {
        return;
    }
    let fps = stats.frames as f32 / stats.time_accum;
    info!(
        "SIM state={:?} score={} speed={:.2} prompts={} particles={} fps={:.1}",
        state.get(),
        score.0,
        speed.0,
        q_prompts.iter().count(),
        q_particles.iter().count(),
        fps
    );
    stats.time_accum = 0.0;
    stats.frames = 0;
}
