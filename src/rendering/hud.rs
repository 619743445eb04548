use bevy::prelude::*;

use crate::app::state::AppState;
use crate::gameplay::session::{GameSpeed, Score};
use crate::rendering::palette;

#[derive(Component)]
struct HudRoot;
#[derive(Component)]
struct ScoreText;
#[derive(Component)]
struct SpeedText;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), spawn_hud)
            .add_systems(
                Update,
                (update_score_text, update_speed_text).run_if(in_state(AppState::Playing)),
            )
            .add_systems(OnExit(AppState::Playing), despawn_hud);
    }
}

fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            HudRoot,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(20.0),
                top: Val::Px(20.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                ScoreText,
                Text::new("Score: 0"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(palette::BLACK),
            ));
            parent.spawn((
                SpeedText,
                Text::new("Speed: 1.00x"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(palette::BLACK),
            ));
        });
}

fn update_score_text(score: Res<Score>, mut q_text: Query<&mut Text, With<ScoreText>>) {
    if !score.is_changed() {
        return;
    }
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    *text = Text::new(format!("Score: {}", score.0));
}

fn update_speed_text(speed: Res<GameSpeed>, mut q_text: Query<&mut Text, With<SpeedText>>) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    let s = format!("Speed: {:.2}x", speed.0);
    if text.as_str() != s {
        *text = Text::new(s);
    }
}

fn despawn_hud(mut commands: Commands, q_root: Query<Entity, With<HudRoot>>) {
    for entity in &q_root {
        commands.entity(entity).despawn();
    }
}
