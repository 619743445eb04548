use bevy::prelude::*;

use crate::app::state::AppState;
use crate::audio::{self, SoundEffects};
use crate::core::config::{GameConfig, PlayerConfig};
use crate::core::layout::{GROUND_Y, HALF_WIDTH};
use crate::core::system_order::StepSet;
use crate::gameplay::session::reset_session;
use crate::rendering::palette;

/// Player kinematic state. Horizontal position is fixed; only the vertical
/// axis is simulated.
#[derive(Component, Debug, Default)]
pub struct Player {
    pub vel_y: f32,
    pub airborne: bool,
    /// Animation phase accumulator; wraps at 4.0.
    pub phase: f32,
}

impl Player {
    /// Apply the jump impulse unless already airborne (no double jumps, no
    /// air control). Returns whether the jump fired.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.vel_y = impulse;
        self.airborne = true;
        true
    }

    /// One gravity step: integrate velocity into the given center y, clamp to
    /// the rest height with a velocity reset on ground contact, advance the
    /// animation phase. Returns the new center y.
    pub fn step(&mut self, y: f32, cfg: &PlayerConfig) -> f32 {
        self.vel_y -= cfg.gravity;
        let mut y = y + self.vel_y;
        let rest = rest_height(cfg);
        if y < rest {
            y = rest;
            self.vel_y = 0.0;
            self.airborne = false;
        }
        self.phase += cfg.anim_rate;
        if self.phase >= 4.0 {
            self.phase = 0.0;
        }
        y
    }
}

/// World y of the player's center when standing on the ground.
pub fn rest_height(cfg: &PlayerConfig) -> f32 {
    GROUND_Y + cfg.height / 2.0
}

/// World x of the player's center for the whole session.
pub fn start_x(cfg: &PlayerConfig) -> f32 {
    -HALF_WIDTH + cfg.start_offset_x + cfg.width / 2.0
}

/// Mouth sprite; vertical offset follows the run cycle while grounded.
#[derive(Component)]
pub struct Mouth;

/// Leg sprite; swings while grounded, splays while airborne.
#[derive(Component)]
pub struct Leg {
    pub base_x: f32,
    /// -1.0 for the left leg, 1.0 for the right.
    pub side: f32,
}

/// Entity handles for the animated child sprites of one character.
#[derive(Component)]
pub struct PlayerRig {
    mouth: Entity,
    left_leg: Entity,
    right_leg: Entity,
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(AppState::Playing),
            spawn_player.after(reset_session),
        )
        .add_systems(
            FixedUpdate,
            player_step
                .in_set(StepSet::Player)
                .run_if(in_state(AppState::Playing)),
        )
        .add_systems(
            Update,
            (
                jump_input.run_if(in_state(AppState::Playing)),
                animate_pose,
            ),
        );
    }
}

fn spawn_player(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<ColorMaterial>>>,
) {
    let pos = Vec2::new(start_x(&cfg.player), rest_height(&cfg.player));
    spawn_character(&mut commands, &cfg.player, pos, meshes, materials);
}

/// Spawn a character entity at `pos`: blue body with mouth and leg sprites,
/// plus circle-mesh eyes when the mesh assets are available (they are absent
/// in headless use). Shared by the session player and the menu idler.
pub fn spawn_character(
    commands: &mut Commands,
    cfg: &PlayerConfig,
    pos: Vec2,
    mut meshes: Option<ResMut<Assets<Mesh>>>,
    mut materials: Option<ResMut<Assets<ColorMaterial>>>,
) -> Entity {
    let hip_y = -(cfg.height / 2.0 + 7.0);
    let body = commands
        .spawn((
            Player::default(),
            Sprite::from_color(palette::PLAYER_BLUE, Vec2::new(cfg.width, cfg.height)),
            Transform::from_translation(pos.extend(2.0)),
        ))
        .id();

    let mut mouth = Entity::PLACEHOLDER;
    let mut left_leg = Entity::PLACEHOLDER;
    let mut right_leg = Entity::PLACEHOLDER;
    commands.entity(body).with_children(|parent| {
        mouth = parent
            .spawn((
                Mouth,
                Sprite::from_color(palette::BLACK, Vec2::new(30.0, 3.0)),
                Transform::from_xyz(5.0, 0.0, 0.2),
            ))
            .id();
        left_leg = parent
            .spawn((
                Leg {
                    base_x: -10.0,
                    side: -1.0,
                },
                Sprite::from_color(palette::PLAYER_BLUE, Vec2::new(5.0, 15.0)),
                Transform::from_xyz(-10.0, hip_y, -0.1),
            ))
            .id();
        right_leg = parent
            .spawn((
                Leg {
                    base_x: 10.0,
                    side: 1.0,
                },
                Sprite::from_color(palette::PLAYER_BLUE, Vec2::new(5.0, 15.0)),
                Transform::from_xyz(10.0, hip_y, -0.1),
            ))
            .id();

        if let (Some(meshes), Some(materials)) = (meshes.as_mut(), materials.as_mut()) {
            let circle = meshes.add(Mesh::from(Circle { radius: 0.5 }));
            let white = materials.add(palette::WHITE);
            let black = materials.add(palette::BLACK);
            for eye_x in [0.0, 15.0] {
                parent.spawn((
                    Mesh2d(circle.clone()),
                    MeshMaterial2d(white.clone()),
                    Transform::from_xyz(eye_x, 20.0, 0.1).with_scale(Vec3::new(20.0, 20.0, 1.0)),
                ));
                parent.spawn((
                    Mesh2d(circle.clone()),
                    MeshMaterial2d(black.clone()),
                    Transform::from_xyz(eye_x, 20.0, 0.2).with_scale(Vec3::new(10.0, 10.0, 1.0)),
                ));
            }
        }
    });

    commands.entity(body).insert(PlayerRig {
        mouth,
        left_leg,
        right_leg,
    });
    body
}

fn player_step(cfg: Res<GameConfig>, mut q_player: Query<(&mut Player, &mut Transform)>) {
    for (mut player, mut tf) in &mut q_player {
        tf.translation.y = player.step(tf.translation.y, &cfg.player);
    }
}

fn jump_input(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    sounds: Option<Res<SoundEffects>>,
    mut q_player: Query<&mut Player>,
) {
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }
    for mut player in &mut q_player {
        if player.jump(cfg.player.jump_impulse) {
            audio::play(
                &mut commands,
                sounds.as_ref().and_then(|s| s.jump.as_ref()),
            );
        }
    }
}

/// Position the mouth and legs from the owning character's phase. Runs in
/// every state so the menu idler animates too.
fn animate_pose(
    q_players: Query<(&Player, &PlayerRig)>,
    mut q_mouth: Query<&mut Transform, (With<Mouth>, Without<Leg>)>,
    mut q_legs: Query<(&mut Transform, &Leg), Without<Mouth>>,
) {
    for (player, rig) in &q_players {
        if let Ok(mut tf) = q_mouth.get_mut(rig.mouth) {
            tf.translation.y = if player.airborne {
                0.0
            } else {
                -(player.phase.sin() * 5.0)
            };
        }
        for leg_entity in [rig.left_leg, rig.right_leg] {
            let Ok((mut tf, leg)) = q_legs.get_mut(leg_entity) else {
                continue;
            };
            if player.airborne {
                tf.translation.x = leg.base_x + leg.side * 5.0;
                tf.rotation = Quat::from_rotation_z(-leg.side * 0.35);
            } else {
                let swing = (player.phase * 2.0).sin() * 10.0;
                tf.translation.x = leg.base_x + leg.side * swing * 0.5;
                tf.rotation = Quat::from_rotation_z(leg.side * swing * 0.04);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> PlayerConfig {
        PlayerConfig::default()
    }

    #[test]
    fn jump_from_ground_sets_impulse_and_flag() {
        let mut player = Player::default();
        assert!(player.jump(15.0));
        assert_eq!(player.vel_y, 15.0);
        assert!(player.airborne);
    }

    #[test]
    fn jump_is_ignored_while_airborne() {
        let mut player = Player {
            vel_y: 3.0,
            airborne: true,
            phase: 0.0,
        };
        assert!(!player.jump(15.0));
        assert_eq!(player.vel_y, 3.0);
        assert!(player.airborne);
    }

    #[test]
    fn grounded_player_stays_clamped_to_rest_height() {
        let cfg = cfg();
        let mut player = Player::default();
        let mut y = rest_height(&cfg);
        for _ in 0..10 {
            y = player.step(y, &cfg);
            assert_eq!(y, rest_height(&cfg));
            assert_eq!(player.vel_y, 0.0);
            assert!(!player.airborne);
        }
    }

    #[test]
    fn jump_arc_returns_to_rest() {
        let cfg = cfg();
        let mut player = Player::default();
        let rest = rest_height(&cfg);
        let mut y = rest;
        player.jump(cfg.jump_impulse);
        let mut peak = y;
        for _ in 0..120 {
            y = player.step(y, &cfg);
            assert!(y >= rest);
            peak = peak.max(y);
        }
        assert!(peak > rest + 100.0);
        assert_eq!(y, rest);
        assert!(!player.airborne);
        assert_eq!(player.vel_y, 0.0);
    }

    #[test]
    fn animation_phase_wraps_at_four() {
        let cfg = cfg();
        let mut player = Player::default();
        let mut y = rest_height(&cfg);
        for _ in 0..200 {
            y = player.step(y, &cfg);
            assert!(player.phase < 4.0);
            assert!(player.phase >= 0.0);
        }
    }
}
