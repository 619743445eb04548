use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Prompt Runner".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TuningRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for TuningRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

/// Player kinematics. All rates are per logical 60 Hz step.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    pub gravity: f32,
    pub jump_impulse: f32,
    pub anim_rate: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal distance of the player's left edge from the left screen edge.
    pub start_offset_x: f32,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_impulse: 15.0,
            anim_rate: 0.2,
            width: 50.0,
            height: 80.0,
            start_offset_x: 100.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PromptConfig {
    pub base_speed: f32,
    /// Steps between spawns at game speed 1.0; divided by the current speed.
    pub spawn_interval: f32,
    /// Game speed growth per step. Uncapped: speed rises for the whole session.
    pub speed_increase: f32,
    pub width: f32,
    pub height: f32,
    pub rotation_speed_range: TuningRange<f32>,
}
impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            base_speed: 5.0,
            spawn_interval: 60.0,
            speed_increase: 0.0001,
            width: 80.0,
            height: 40.0,
            rotation_speed_range: TuningRange {
                min: -2.0,
                max: 2.0,
            },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CloudConfig {
    pub count: usize,
    pub speed_range: TuningRange<f32>,
    pub width_range: TuningRange<f32>,
    pub height_range: TuningRange<f32>,
}
impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            count: 5,
            speed_range: TuningRange { min: 0.5, max: 1.5 },
            width_range: TuningRange {
                min: 60.0,
                max: 120.0,
            },
            height_range: TuningRange {
                min: 30.0,
                max: 60.0,
            },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
    /// Particles spawned per collected prompt.
    pub burst: usize,
    pub gravity: f32,
    /// Lifetime in steps.
    pub life: i32,
    pub shrink: f32,
    pub radius_range: TuningRange<f32>,
    pub vel_x_range: TuningRange<f32>,
    pub vel_y_range: TuningRange<f32>,
}
impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            burst: 15,
            gravity: 0.2,
            life: 30,
            shrink: 0.1,
            radius_range: TuningRange { min: 3.0, max: 8.0 },
            vel_x_range: TuningRange {
                min: -3.0,
                max: 3.0,
            },
            vel_y_range: TuningRange { min: 1.0, max: 5.0 },
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub prompts: PromptConfig,
    pub clouds: CloudConfig,
    pub particles: ParticleConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Non-fatal sanity checks; each finding is logged once at startup.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.player.gravity <= 0.0 {
            warnings.push("player.gravity should be > 0 (player would never fall)".into());
        }
        if self.player.jump_impulse <= 0.0 {
            warnings.push("player.jump_impulse should be > 0 (jump would do nothing)".into());
        }
        if self.prompts.spawn_interval < 1.0 {
            warnings.push("prompts.spawn_interval < 1 step spawns a prompt every step".into());
        }
        if self.prompts.speed_increase < 0.0 {
            warnings.push("prompts.speed_increase is negative; game speed must not decay".into());
        }
        if self.particles.burst == 0 {
            warnings.push("particles.burst is 0; collection feedback disabled".into());
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            warnings.push("window dimensions must be positive".into());
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_tuning() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.window.width, 800.0);
        assert_eq!(cfg.window.height, 600.0);
        assert_eq!(cfg.player.gravity, 0.6);
        assert_eq!(cfg.player.jump_impulse, 15.0);
        assert_eq!(cfg.prompts.base_speed, 5.0);
        assert_eq!(cfg.prompts.spawn_interval, 60.0);
        assert_eq!(cfg.prompts.speed_increase, 0.0001);
        assert_eq!(cfg.particles.burst, 15);
        assert_eq!(cfg.particles.life, 30);
        assert_eq!(cfg.clouds.count, 5);
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn partial_ron_overrides_only_named_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                window: (title: "Test Runner", autoClose: 2.5),
                player: (jump_impulse: 20.0),
            )"#
        )
        .unwrap();
        let cfg = GameConfig::load_from_file(file.path()).unwrap();
        assert_eq!(cfg.window.title, "Test Runner");
        assert_eq!(cfg.window.auto_close, 2.5);
        assert_eq!(cfg.player.jump_impulse, 20.0);
        // Untouched sections keep their defaults.
        assert_eq!(cfg.window.width, 800.0);
        assert_eq!(cfg.player.gravity, 0.6);
        assert_eq!(cfg.prompts.base_speed, 5.0);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let (cfg, err) = GameConfig::load_or_default("does/not/exist.ron");
        assert_eq!(cfg, GameConfig::default());
        assert!(err.is_some());
    }

    #[test]
    fn validate_flags_degenerate_tuning() {
        let mut cfg = GameConfig::default();
        cfg.player.gravity = 0.0;
        cfg.particles.burst = 0;
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 2);
    }
}
