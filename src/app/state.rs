use bevy::prelude::*;

/// High-level app lifecycle state.
/// Menu -> Playing -> GameOver -> Playing... (Escape exits from anywhere)
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Title screen with instructions and an idle animated character.
    #[default]
    Menu,
    /// Active session: physics, spawning, collisions, HUD.
    Playing,
    /// Bad prompt collected; fade overlay + final score until restart.
    GameOver,
}
