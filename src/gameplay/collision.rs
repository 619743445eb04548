use bevy::math::bounding::{Aabb2d, IntersectsVolume};
use bevy::prelude::*;

use crate::app::state::AppState;
use crate::audio::{self, SoundEffects};
use crate::core::config::GameConfig;
use crate::core::layout::HALF_WIDTH;
use crate::core::system_order::StepSet;
use crate::gameplay::particle;
use crate::gameplay::player::Player;
use crate::gameplay::prompt::Prompt;
use crate::gameplay::session::Score;
use crate::rendering::palette;

/// Axis-aligned overlap test between two centered rectangles.
pub fn aabb_overlap(center_a: Vec2, half_a: Vec2, center_b: Vec2, half_b: Vec2) -> bool {
    Aabb2d::new(center_a, half_a).intersects(&Aabb2d::new(center_b, half_b))
}

pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            resolve_collisions
                .in_set(StepSet::Collide)
                .run_if(in_state(AppState::Playing)),
        );
    }
}

/// Per-step collision and cull pass. A collided prompt despawns with its
/// effect applied; a prompt whose right edge has passed the left screen
/// boundary despawns with no effect. The two cases are checked in that order
/// and are mutually exclusive for a given prompt within one step.
///
/// Overlap is tested against the untransformed prompt rectangle (rotation and
/// pulse are presentation only). Game speed is uncapped, so an extremely long
/// session could in principle move a prompt through the player's box in a
/// single step; preserved as-is.
fn resolve_collisions(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut score: ResMut<Score>,
    mut next_state: ResMut<NextState<AppState>>,
    sounds: Option<Res<SoundEffects>>,
    q_player: Query<&Transform, With<Player>>,
    q_prompts: Query<(Entity, &Transform, &Prompt), Without<Player>>,
) {
    let Ok(player_tf) = q_player.single() else {
        return;
    };
    let player_half = Vec2::new(cfg.player.width, cfg.player.height) / 2.0;
    let prompt_half = Vec2::new(cfg.prompts.width, cfg.prompts.height) / 2.0;
    let cull_x = -HALF_WIDTH - prompt_half.x;

    for (entity, tf, prompt) in &q_prompts {
        let pos = tf.translation.truncate();
        if aabb_overlap(
            player_tf.translation.truncate(),
            player_half,
            pos,
            prompt_half,
        ) {
            if prompt.good {
                score.0 += 10;
                particle::spawn_burst(&mut commands, &cfg.particles, pos, palette::GOOD_GREEN);
                audio::play(
                    &mut commands,
                    sounds.as_ref().and_then(|s| s.good_collect.as_ref()),
                );
            } else {
                particle::spawn_burst(&mut commands, &cfg.particles, pos, palette::BAD_RED);
                audio::play(
                    &mut commands,
                    sounds.as_ref().and_then(|s| s.bad_collect.as_ref()),
                );
                info!(target: "session", "Bad prompt hit; game over at score {}", score.0);
                next_state.set(AppState::GameOver);
            }
            commands.entity(entity).despawn();
        } else if pos.x < cull_x {
            commands.entity(entity).despawn();
        }
    }
}
