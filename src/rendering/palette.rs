use bevy::prelude::*;

pub const WHITE: Color = Color::srgb(1.0, 1.0, 1.0);
pub const BLACK: Color = Color::srgb(0.0, 0.0, 0.0);
pub const GOOD_GREEN: Color = Color::srgb(0.0, 0.784, 0.0);
pub const BAD_RED: Color = Color::srgb(0.784, 0.0, 0.0);
pub const PLAYER_BLUE: Color = Color::srgb(0.0, 0.0, 0.784);
pub const GROUND_GRAY: Color = Color::srgb(0.392, 0.392, 0.392);
pub const DIRT_GRAY: Color = Color::srgb(0.314, 0.314, 0.314);
pub const GRASS_GREEN: Color = Color::srgb(0.0, 0.588, 0.0);
pub const TITLE_YELLOW: Color = Color::srgb(1.0, 1.0, 0.0);
pub const SKY_BLUE: Color = Color::srgb(0.529, 0.808, 0.922);
pub const CLOUD_WHITE: Color = Color::srgb(0.941, 0.941, 0.941);
