use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::config::GameConfig;
use crate::gameplay::player::{spawn_character, Player};
use crate::rendering::palette;

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Menu), (spawn_menu_ui, spawn_menu_idler))
            .add_systems(
                Update,
                (handle_menu_input, animate_idler).run_if(in_state(AppState::Menu)),
            )
            .add_systems(OnExit(AppState::Menu), despawn_menu);
    }
}

#[derive(Component)]
struct MenuUiRoot;

/// The animated character shown on the title screen. Not part of a session;
/// its run cycle is driven by wall-clock time.
#[derive(Component)]
struct MenuIdler;

fn handle_menu_input(keys: Res<ButtonInput<KeyCode>>, mut next_state: ResMut<NextState<AppState>>) {
    if keys.just_pressed(KeyCode::Enter) {
        info!(target: "menu", "Starting session");
        next_state.set(AppState::Playing);
    }
}

fn spawn_menu_ui(mut commands: Commands) {
    commands
        .spawn((
            MenuUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::top(Val::Px(120.0)),
                row_gap: Val::Px(30.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PROMPT RUNNER"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(palette::TITLE_YELLOW),
                TextShadow {
                    offset: Vec2::splat(3.0),
                    color: palette::BLACK,
                },
            ));
            parent
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(20.0)),
                        row_gap: Val::Px(14.0),
                        border: UiRect::all(Val::Px(3.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.196, 0.196, 0.196, 0.78)),
                    BorderColor(palette::WHITE),
                ))
                .with_children(|parent| {
                    let instructions = [
                        "Collect good prompts (green) and avoid bad prompts (red)",
                        "Press SPACE to jump",
                        "Press ENTER to start",
                        "Press ESC to quit",
                    ];
                    for line in instructions {
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
        });
}

fn spawn_menu_idler(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<ColorMaterial>>>,
) {
    // Centered, hovering a bit above the ground line.
    let entity = spawn_character(
        &mut commands,
        &cfg.player,
        Vec2::new(0.0, -160.0),
        meshes,
        materials,
    );
    commands.entity(entity).insert(MenuIdler);
}

fn animate_idler(time: Res<Time>, mut q_idler: Query<&mut Player, With<MenuIdler>>) {
    let Ok(mut player) = q_idler.single_mut() else {
        return;
    };
    player.phase = (time.elapsed_secs() * 5.0) % 4.0;
}

fn despawn_menu(
    mut commands: Commands,
    q_ui: Query<Entity, With<MenuUiRoot>>,
    q_idler: Query<Entity, With<MenuIdler>>,
) {
    for entity in q_ui.iter().chain(q_idler.iter()) {
        commands.entity(entity).despawn();
    }
}
