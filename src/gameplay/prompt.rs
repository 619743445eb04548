use bevy::prelude::*;
use rand::Rng;

use crate::app::state::AppState;
use crate::core::config::{GameConfig, PromptConfig};
use crate::core::layout::{screen_y_to_world, GROUND_HEIGHT, HALF_WIDTH, SCREEN_HEIGHT};
use crate::core::system_order::StepSet;
use crate::gameplay::session::{GameSpeed, SpawnCounter};
use crate::rendering::palette;

pub const GOOD_LABELS: [&str; 3] = ["Good!", "Nice!", "Great!"];
pub const BAD_LABELS: [&str; 3] = ["Bad!", "Wrong!", "Avoid!"];

/// A scrolling collectible (good) or hazard (bad).
#[derive(Component, Debug)]
pub struct Prompt {
    pub good: bool,
    /// Accumulated rotation in degrees.
    pub rotation: f32,
    /// Degrees per step; fixed per prompt at spawn.
    pub rotation_speed: f32,
    /// Bounded size oscillator in [0, 1], reversing at the bounds.
    pub pulse: f32,
    pulse_dir: f32,
}

impl Prompt {
    pub fn new(good: bool, rotation_speed: f32) -> Self {
        Self {
            good,
            rotation: 0.0,
            rotation_speed,
            pulse: 0.0,
            pulse_dir: 1.0,
        }
    }

    /// Advance rotation and the pulse oscillator one step.
    pub fn advance(&mut self) {
        self.rotation += self.rotation_speed;
        self.pulse += 0.1 * self.pulse_dir;
        if self.pulse > 1.0 || self.pulse < 0.0 {
            self.pulse_dir = -self.pulse_dir;
        }
    }
}

pub struct PromptPlugin;

impl Plugin for PromptPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                spawn_prompts.in_set(StepSet::Spawn),
                move_prompts.in_set(StepSet::Move),
            )
                .run_if(in_state(AppState::Playing)),
        );
    }
}

/// Spawn cadence: one prompt every `spawn_interval / game_speed` steps, class
/// chosen uniformly at random.
fn spawn_prompts(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    speed: Res<GameSpeed>,
    mut counter: ResMut<SpawnCounter>,
) {
    counter.0 += 1;
    if (counter.0 as f32) < cfg.prompts.spawn_interval / speed.0 {
        return;
    }
    counter.0 = 0;
    let mut rng = rand::thread_rng();
    let good = rng.gen_bool(0.5);
    spawn_prompt(&mut commands, &cfg.prompts, good, &mut rng);
}

/// Spawn one prompt with its left edge at the right screen boundary and a
/// random vertical position inside the safe band (clear of the top margin
/// and the ground).
pub fn spawn_prompt(
    commands: &mut Commands,
    cfg: &PromptConfig,
    good: bool,
    rng: &mut impl Rng,
) -> Entity {
    let half_h = cfg.height / 2.0;
    let y_min = screen_y_to_world(SCREEN_HEIGHT - GROUND_HEIGHT - 100.0 + half_h);
    let y_max = screen_y_to_world(100.0 + half_h);
    let y = rng.gen_range(y_min..y_max);
    let x = HALF_WIDTH + cfg.width / 2.0;
    let rotation_speed = rng.gen_range(cfg.rotation_speed_range.min..cfg.rotation_speed_range.max);
    let (color, labels) = if good {
        (palette::GOOD_GREEN, &GOOD_LABELS)
    } else {
        (palette::BAD_RED, &BAD_LABELS)
    };
    let label = labels[rng.gen_range(0..labels.len())];

    commands
        .spawn((
            Prompt::new(good, rotation_speed),
            Sprite::from_color(color, Vec2::new(cfg.width, cfg.height)),
            Transform::from_xyz(x, y, 3.0),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text2d::new(label),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(palette::WHITE),
                Transform::from_xyz(0.0, 0.0, 0.1),
            ));
        })
        .id()
}

/// Scroll, rotate and pulse every live prompt. Culling happens in the
/// collision pass so a prompt can never both collide and fall off screen in
/// the same step.
fn move_prompts(
    cfg: Res<GameConfig>,
    speed: Res<GameSpeed>,
    mut q_prompts: Query<(&mut Prompt, &mut Transform, &mut Sprite)>,
) {
    for (mut prompt, mut tf, mut sprite) in &mut q_prompts {
        tf.translation.x -= cfg.prompts.base_speed * speed.0;
        prompt.advance();
        tf.rotation = Quat::from_rotation_z(prompt.rotation.to_radians());
        sprite.custom_size = Some(Vec2::new(
            cfg.prompts.width + prompt.pulse,
            cfg.prompts.height + prompt.pulse,
        ));
    }
}
