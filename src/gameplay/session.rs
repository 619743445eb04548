use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::config::GameConfig;
use crate::core::system_order::StepSet;
use crate::gameplay::particle::Particle;
use crate::gameplay::player::Player;
use crate::gameplay::prompt::Prompt;

/// Logical simulation rate. Physics constants are per step at this rate.
pub const STEP_HZ: f64 = 60.0;

/// Session score; +10 per good prompt, reset on every session start.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct Score(pub u32);

/// Scalar applied to prompt speed and spawn cadence. Grows every step while
/// Playing, never decreases within a session, uncapped.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct GameSpeed(pub f32);
impl Default for GameSpeed {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Steps elapsed since the last prompt spawn.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct SpawnCounter(pub u32);

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .init_resource::<GameSpeed>()
            .init_resource::<SpawnCounter>()
            .configure_sets(
                FixedUpdate,
                (
                    StepSet::Speed,
                    StepSet::Player,
                    StepSet::Spawn,
                    StepSet::Move,
                    StepSet::Collide,
                    StepSet::Particles,
                )
                    .chain(),
            )
            .add_systems(OnEnter(AppState::Playing), reset_session)
            .add_systems(
                FixedUpdate,
                advance_game_speed
                    .in_set(StepSet::Speed)
                    .run_if(in_state(AppState::Playing)),
            );
    }
}

/// Restore the initial session values and clear every leftover session
/// entity. Runs on every entry into Playing, both first start and restart.
pub fn reset_session(
    mut commands: Commands,
    mut score: ResMut<Score>,
    mut speed: ResMut<GameSpeed>,
    mut counter: ResMut<SpawnCounter>,
    q_leftover: Query<Entity, Or<(With<Prompt>, With<Particle>, With<Player>)>>,
) {
    score.0 = 0;
    speed.0 = 1.0;
    counter.0 = 0;
    for entity in &q_leftover {
        commands.entity(entity).despawn();
    }
    info!(target: "session", "Session started: score=0 speed=1.00");
}

fn advance_game_speed(cfg: Res<GameConfig>, mut speed: ResMut<GameSpeed>) {
    speed.0 += cfg.prompts.speed_increase;
}
