use bevy::prelude::*;
use rand::Rng;

use crate::core::layout::{GROUND_HEIGHT, GROUND_Y, HALF_HEIGHT, HALF_WIDTH, SCREEN_WIDTH};
use crate::rendering::palette;

pub struct GroundPlugin;

impl Plugin for GroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_ground);
    }
}

/// Static ground decoration: gray band, grass strip, dirt dashes, and sparse
/// random grass blades. Fixed at startup for the process lifetime.
fn spawn_ground(mut commands: Commands) {
    let mut rng = rand::thread_rng();

    commands.spawn((
        Sprite::from_color(
            palette::GROUND_GRAY,
            Vec2::new(SCREEN_WIDTH, GROUND_HEIGHT),
        ),
        Transform::from_xyz(0.0, -HALF_HEIGHT + GROUND_HEIGHT / 2.0, 1.0),
    ));
    commands.spawn((
        Sprite::from_color(palette::GOOD_GREEN, Vec2::new(SCREEN_WIDTH, 5.0)),
        Transform::from_xyz(0.0, GROUND_Y - 2.5, 1.1),
    ));

    let mut x = 0.0;
    while x < SCREEN_WIDTH {
        commands.spawn((
            Sprite::from_color(palette::DIRT_GRAY, Vec2::new(25.0, 2.0)),
            Transform::from_xyz(x + 12.5 - HALF_WIDTH, GROUND_Y - 15.0, 1.1),
        ));
        if rng.gen::<f32>() > 0.7 {
            let blade_x = x + rng.gen_range(0.0..50.0) - HALF_WIDTH;
            let blade_h = rng.gen_range(5.0..10.0);
            commands.spawn((
                Sprite::from_color(palette::GRASS_GREEN, Vec2::new(2.0, blade_h)),
                Transform::from_xyz(blade_x, GROUND_Y + blade_h / 2.0, 1.2),
            ));
        }
        x += 50.0;
    }
}
