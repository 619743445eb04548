pub mod app;
pub mod audio;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::app::state::AppState;
pub use crate::core::config::GameConfig;
