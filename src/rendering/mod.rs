pub mod background;
pub mod camera;
pub mod ground;
pub mod hud;
pub mod palette;
