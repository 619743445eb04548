//! Logical playfield geometry.
//!
//! The simulation runs on a fixed 800x600 plane centered on the origin
//! (Bevy world coordinates, y up), independent of the OS window size.

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const HALF_WIDTH: f32 = SCREEN_WIDTH / 2.0;
pub const HALF_HEIGHT: f32 = SCREEN_HEIGHT / 2.0;

/// Height of the ground band at the bottom of the playfield.
pub const GROUND_HEIGHT: f32 = 50.0;

/// World y of the ground line (top edge of the ground band). Entities that
/// rest on the ground sit with their bottom edge on this line.
pub const GROUND_Y: f32 = -HALF_HEIGHT + GROUND_HEIGHT;

/// Convert a top-left screen-space y (y down, origin at the window's top
/// left) to a world-space y.
pub fn screen_y_to_world(y: f32) -> f32 {
    HALF_HEIGHT - y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_line_sits_above_band() {
        assert_eq!(GROUND_Y, -250.0);
        assert!(GROUND_Y > -HALF_HEIGHT);
    }

    #[test]
    fn screen_conversion_flips_axis() {
        assert_eq!(screen_y_to_world(0.0), HALF_HEIGHT);
        assert_eq!(screen_y_to_world(SCREEN_HEIGHT), -HALF_HEIGHT);
    }
}
