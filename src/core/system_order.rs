use bevy::prelude::*;

/// Ordering of the fixed-step simulation pipeline while Playing: speed
/// growth, player physics, spawning, prompt motion, collision resolution,
/// particle decay.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StepSet {
    Speed,
    Player,
    Spawn,
    Move,
    Collide,
    Particles,
}
