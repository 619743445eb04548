use bevy::color::Alpha;
use bevy::prelude::*;

use crate::app::state::AppState;
use crate::audio::{self, SoundEffects};
use crate::core::layout::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::system_order::StepSet;
use crate::gameplay::session::Score;
use crate::rendering::palette;

/// Overlay alpha ramps to ~0.78 in steps of 5/255, leaving the frozen
/// playfield dimly visible underneath.
const FADE_TARGET: f32 = 200.0 / 255.0;
const FADE_STEP: f32 = 5.0 / 255.0;

#[derive(Component)]
struct FadeOverlay;
#[derive(Component)]
struct GameOverUiRoot;

pub struct GameOverPlugin;

impl Plugin for GameOverPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::GameOver), (spawn_game_over_screen, play_game_over_sound))
            .add_systems(
                FixedUpdate,
                advance_fade
                    .before(StepSet::Speed)
                    .run_if(in_state(AppState::GameOver)),
            )
            .add_systems(
                Update,
                handle_restart_input.run_if(in_state(AppState::GameOver)),
            )
            .add_systems(OnExit(AppState::GameOver), despawn_game_over_screen);
    }
}

fn play_game_over_sound(mut commands: Commands, sounds: Option<Res<SoundEffects>>) {
    audio::play(
        &mut commands,
        sounds.as_ref().and_then(|s| s.game_over.as_ref()),
    );
}

fn spawn_game_over_screen(mut commands: Commands, score: Res<Score>) {
    commands.spawn((
        FadeOverlay,
        Sprite::from_color(
            Color::srgba(0.0, 0.0, 0.0, 0.0),
            Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        ),
        Transform::from_xyz(0.0, 0.0, 10.0),
    ));

    commands
        .spawn((
            GameOverUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::top(Val::Px(120.0)),
                row_gap: Val::Px(40.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("GAME OVER"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(palette::BAD_RED),
            ));
            parent.spawn((
                Text::new(format!("Final Score: {}", score.0)),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(palette::WHITE),
            ));
            for line in ["Press ENTER to play again", "Press ESC to quit"] {
                parent.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 24.0,
                        ..default()
                    },
                    TextColor(palette::WHITE),
                ));
            }
        });
}

fn advance_fade(mut q_overlay: Query<&mut Sprite, With<FadeOverlay>>) {
    let Ok(mut sprite) = q_overlay.single_mut() else {
        return;
    };
    let alpha = (sprite.color.alpha() + FADE_STEP).min(FADE_TARGET);
    sprite.color.set_alpha(alpha);
}

fn handle_restart_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if keys.just_pressed(KeyCode::Enter) {
        info!(target: "session", "Restarting session");
        next_state.set(AppState::Playing);
    }
}

fn despawn_game_over_screen(
    mut commands: Commands,
    q_overlay: Query<Entity, With<FadeOverlay>>,
    q_ui: Query<Entity, With<GameOverUiRoot>>,
) {
    for entity in q_overlay.iter().chain(q_ui.iter()) {
        commands.entity(entity).despawn();
    }
}
