use bevy::prelude::*;
use rand::Rng;

use crate::app::state::AppState;
use crate::core::config::{GameConfig, ParticleConfig};
use crate::core::system_order::StepSet;

/// Short-lived collection feedback. Carries its own velocity and gravity,
/// shrinks as it falls.
#[derive(Component, Debug)]
pub struct Particle {
    pub vel: Vec2,
    pub radius: f32,
    pub life: i32,
}

impl Particle {
    /// One decay step: gravity, lifetime countdown, shrink. Returns false
    /// once the particle is spent (lifetime or size exhausted).
    pub fn step(&mut self, cfg: &ParticleConfig) -> bool {
        self.vel.y -= cfg.gravity;
        self.life -= 1;
        self.radius = (self.radius - cfg.shrink).max(0.0);
        self.life > 0 && self.radius > 0.0
    }
}

pub struct ParticlePlugin;

impl Plugin for ParticlePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            update_particles
                .in_set(StepSet::Particles)
                .run_if(in_state(AppState::Playing)),
        );
    }
}

/// Spawn one burst at `center` with upward-biased random velocities.
pub fn spawn_burst(commands: &mut Commands, cfg: &ParticleConfig, center: Vec2, color: Color) {
    let mut rng = rand::thread_rng();
    for _ in 0..cfg.burst {
        let radius = rng.gen_range(cfg.radius_range.min..cfg.radius_range.max);
        let vel = Vec2::new(
            rng.gen_range(cfg.vel_x_range.min..cfg.vel_x_range.max),
            rng.gen_range(cfg.vel_y_range.min..cfg.vel_y_range.max),
        );
        commands.spawn((
            Particle {
                vel,
                radius,
                life: cfg.life,
            },
            Sprite::from_color(color, Vec2::splat(radius * 2.0)),
            Transform::from_translation(center.extend(4.0)),
        ));
    }
}

fn update_particles(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut q_particles: Query<(Entity, &mut Particle, &mut Transform, &mut Sprite)>,
) {
    for (entity, mut particle, mut tf, mut sprite) in &mut q_particles {
        tf.translation.x += particle.vel.x;
        tf.translation.y += particle.vel.y;
        if particle.step(&cfg.particles) {
            sprite.custom_size = Some(Vec2::splat(particle.radius * 2.0));
        } else {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifetime_countdown_expires_particle() {
        let cfg = ParticleConfig {
            shrink: 0.0,
            ..default()
        };
        let mut particle = Particle {
            vel: Vec2::new(1.0, 3.0),
            radius: 5.0,
            life: cfg.life,
        };
        for step in 1..=cfg.life {
            let alive = particle.step(&cfg);
            assert_eq!(alive, step < cfg.life);
        }
    }

    #[test]
    fn shrinking_to_zero_expires_before_lifetime() {
        let cfg = ParticleConfig::default();
        let mut particle = Particle {
            vel: Vec2::ZERO,
            radius: 0.25,
            life: 30,
        };
        let mut steps = 0;
        while particle.step(&cfg) {
            steps += 1;
        }
        assert!(steps < 30);
        assert_eq!(particle.radius, 0.0);
    }

    #[test]
    fn gravity_pulls_velocity_down() {
        let cfg = ParticleConfig::default();
        let mut particle = Particle {
            vel: Vec2::new(0.0, 5.0),
            radius: 8.0,
            life: 30,
        };
        particle.step(&cfg);
        assert_eq!(particle.vel.y, 5.0 - cfg.gravity);
    }
}
