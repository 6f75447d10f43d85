//! Villa Olympics - a race-style live leaderboard
//!
//! Core modules:
//! - `board`: Deterministic scoreboard (roster, ranking, progress animation, layout)
//! - `renderer`: One-way snapshot consumers and avatar resolution
//! - `platform`: Fixed-tick runner and demo input feed
//! - `persistence`: Roster CSV load/save
//! - `settings`: Host-settable configuration

pub mod board;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;

pub use board::{Command, Frame, Player, PlayerRecord, Roster, Scoreboard, tick};
pub use settings::Settings;

/// Scoreboard configuration constants
pub mod consts {
    /// Score that maps to progress 1.0
    pub const FINISH_LINE: f64 = 100.0;
    /// Exponential easing speed (higher = snappier)
    pub const EASING_SPEED: f64 = 6.0;
    /// Display refresh rate
    pub const TICK_RATE_HZ: u32 = 60;

    /// Race lane bounds (pixels)
    pub const LANE_HEIGHT_MIN: i32 = 40;
    pub const LANE_HEIGHT_MAX: i32 = 90;
    pub const LANE_GAP_MIN: i32 = 6;
    pub const LANE_GAP_MAX: i32 = 18;

    /// Leaderboard row bounds (pixels); spacing is fixed
    pub const ROW_HEIGHT_MIN: i32 = 40;
    pub const ROW_HEIGHT_MAX: i32 = 76;
    pub const ROW_SPACING: i32 = 8;

    /// Window and pane placement
    pub const WINDOW_W: i32 = 1200;
    pub const WINDOW_H: i32 = 700;
    pub const TRACK_LEFT: i32 = 40;
    pub const TRACK_RIGHT: i32 = 860; // rest of the window is leaderboard
    pub const TOP_MARGIN: i32 = 90;
    pub const BOTTOM_MARGIN: i32 = 40;
    pub const LEADERBOARD_X: i32 = 880;
    pub const LEADERBOARD_TOP: i32 = 70;
    pub const LEADERBOARD_RIGHT_MARGIN: i32 = 30;
    pub const LEADERBOARD_RESERVED: i32 = 100; // title + footer

    /// Avatar sizing
    pub const AVATAR_SIZE: i32 = 72;
    pub const AVATAR_OUTLINE: i32 = 3;
    pub const AVATAR_MIN_RADIUS: i32 = 8;
}

/// Format points for display: whole numbers without decimals, otherwise one decimal
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{:.0}", points)
    } else {
        format!("{:.1}", points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(12.0), "12");
        assert_eq!(format_points(0.0), "0");
        assert_eq!(format_points(12.5), "12.5");
        assert_eq!(format_points(110.0), "110");
    }
}
