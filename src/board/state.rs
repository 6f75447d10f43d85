//! Scoreboard state
//!
//! Owns the roster plus the fixed configuration needed to animate and lay it
//! out. Passed explicitly into every tick; there is no global session.

use serde::{Deserialize, Serialize};

use super::layout::{
    BandBounds, LaneGeometry, RowGeometry, TrackLayout, lane_geometry_with, row_geometry_with,
};
use super::player::PlayerRecord;
use super::progress::ProgressModel;
use super::roster::Roster;
use crate::consts::*;
use crate::settings::Settings;

/// Discrete external actions, applied in order before a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Replace the roster with freshly loaded records
    Load(Vec<PlayerRecord>),
    /// Replay the race from the start line
    ResetAllProgress,
    /// Add `delta` points to a player (clamped at 0)
    Bump { name: String, delta: f64 },
}

impl Command {
    pub fn bump(name: impl Into<String>, delta: f64) -> Self {
        Command::Bump {
            name: name.into(),
            delta,
        }
    }
}

/// Window size and the space given to each pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub window_width: i32,
    pub window_height: i32,
    /// Height available to race lanes
    pub race_height: i32,
    /// Height available to leaderboard rows
    pub board_height: i32,
    /// Top of the first leaderboard row
    pub board_top: i32,
    /// Left edge and width of the leaderboard pane
    pub board_x: i32,
    pub board_width: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            window_width: WINDOW_W,
            window_height: WINDOW_H,
            race_height: WINDOW_H - TOP_MARGIN - BOTTOM_MARGIN,
            board_height: WINDOW_H - LEADERBOARD_RESERVED,
            board_top: LEADERBOARD_TOP,
            board_x: LEADERBOARD_X,
            board_width: WINDOW_W - LEADERBOARD_X - LEADERBOARD_RIGHT_MARGIN,
        }
    }
}

/// Complete scoreboard state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scoreboard {
    pub roster: Roster,
    pub progress: ProgressModel,
    pub lane_bounds: BandBounds,
    pub row_bounds: BandBounds,
    pub track: TrackLayout,
    pub viewport: Viewport,
    /// Ticks processed so far
    pub time_ticks: u64,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            roster: Roster::default(),
            progress: ProgressModel::default(),
            lane_bounds: BandBounds::LANES,
            row_bounds: BandBounds::ROWS,
            track: TrackLayout::default(),
            viewport: Viewport::default(),
            time_ticks: 0,
        }
    }
}

impl Scoreboard {
    /// Empty scoreboard with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty scoreboard configured from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            roster: Roster::new(settings.finish_line),
            progress: ProgressModel::new(settings.easing_speed),
            lane_bounds: settings.lanes,
            row_bounds: settings.rows,
            track: settings.track_layout(),
            viewport: settings.viewport(),
            time_ticks: 0,
        }
    }

    /// Apply one external action
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Load(records) => self.roster.load(records),
            Command::ResetAllProgress => {
                log::debug!("Resetting race progress");
                self.roster.reset_progress();
            }
            Command::Bump { name, delta } => {
                self.roster.bump(&name, delta);
            }
        }
    }

    pub fn lane_geometry(&self) -> LaneGeometry {
        lane_geometry_with(&self.lane_bounds, self.roster.len(), self.viewport.race_height)
    }

    pub fn row_geometry(&self) -> RowGeometry {
        row_geometry_with(&self.row_bounds, self.roster.len(), self.viewport.board_height)
    }

    /// Whether every racer has reached its target
    pub fn is_settled(&self, epsilon: f64) -> bool {
        self.roster
            .iter()
            .all(|p| super::progress::is_settled(p, epsilon))
    }
}
