use bevy::prelude::*;
use rand::Rng;

use crate::core::config::{CloudConfig, GameConfig};
use crate::core::layout::{screen_y_to_world, HALF_WIDTH};
use crate::core::system_order::StepSet;
use crate::rendering::palette;

/// Decorative background entity; scrolls left forever and wraps to the right
/// edge. Never interacts with gameplay and keeps moving in every state.
#[derive(Component, Debug)]
pub struct Cloud {
    pub speed: f32,
    pub width: f32,
    pub height: f32,
}

pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(palette::SKY_BLUE))
            .add_systems(Startup, spawn_clouds)
            .add_systems(FixedUpdate, drift_clouds.before(StepSet::Speed));
    }
}

fn random_cloud_x(rng: &mut impl Rng, width: f32) -> f32 {
    HALF_WIDTH + rng.gen_range(0.0..100.0) + width / 2.0
}

fn random_cloud_y(rng: &mut impl Rng, height: f32) -> f32 {
    screen_y_to_world(rng.gen_range(50.0..200.0) + height / 2.0)
}

fn spawn_clouds(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let circle = meshes.add(Mesh::from(Circle { radius: 0.5 }));
    let white = materials.add(palette::CLOUD_WHITE);
    let mut rng = rand::thread_rng();
    let c: &CloudConfig = &cfg.clouds;

    for _ in 0..c.count {
        let width = rng.gen_range(c.width_range.min..c.width_range.max);
        let height = rng.gen_range(c.height_range.min..c.height_range.max);
        let speed = rng.gen_range(c.speed_range.min..c.speed_range.max);
        let x = random_cloud_x(&mut rng, width);
        let y = random_cloud_y(&mut rng, height);

        commands
            .spawn((
                Cloud {
                    speed,
                    width,
                    height,
                },
                Transform::from_xyz(x, y, 0.5),
                Visibility::default(),
            ))
            .with_children(|parent| {
                // Three overlapping soft ellipses make one fluffy cloud.
                let puffs = [
                    (Vec2::ZERO, Vec2::new(width, height), 0.0),
                    (
                        Vec2::new(0.0, height * 0.4),
                        Vec2::new(width * 0.6, height * 0.6),
                        0.01,
                    ),
                    (
                        Vec2::new(width * 0.2, height * 0.1),
                        Vec2::new(width * 0.6, height * 0.6),
                        0.02,
                    ),
                ];
                for (offset, size, z) in puffs {
                    parent.spawn((
                        Mesh2d(circle.clone()),
                        MeshMaterial2d(white.clone()),
                        Transform::from_xyz(offset.x, offset.y, z)
                            .with_scale(Vec3::new(size.x, size.y, 1.0)),
                    ));
                }
            });
    }
}

fn drift_clouds(cfg: Res<GameConfig>, mut q_clouds: Query<(&mut Cloud, &mut Transform)>) {
    let mut rng = rand::thread_rng();
    for (mut cloud, mut tf) in &mut q_clouds {
        tf.translation.x -= cloud.speed;
        if tf.translation.x < -HALF_WIDTH - cloud.width / 2.0 {
            // Respawn beyond the right edge with a fresh height and speed;
            // the cloud keeps its size for its whole lifetime.
            let height = cloud.height;
            tf.translation.x = random_cloud_x(&mut rng, cloud.width);
            tf.translation.y = random_cloud_y(&mut rng, height);
            cloud.speed = rng.gen_range(cfg.clouds.speed_range.min..cfg.clouds.speed_range.max);
        }
    }
}
