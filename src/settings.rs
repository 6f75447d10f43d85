//! Scoreboard settings
//!
//! Host-settable constants, persisted as JSON next to the roster. Missing
//! fields fall back to defaults, so a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::board::{BandBounds, TrackLayout, Viewport};
use crate::consts::*;

/// Scoreboard settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Race ===
    /// Score that maps to progress 1.0
    pub finish_line: f64,
    /// Easing speed for the progress animation
    pub easing_speed: f64,
    /// Display refresh rate
    pub tick_rate_hz: u32,

    // === Layout ===
    pub window_width: i32,
    pub window_height: i32,
    pub track_left: i32,
    pub track_right: i32,
    pub top_margin: i32,
    pub bottom_margin: i32,
    pub leaderboard_x: i32,
    pub leaderboard_right_margin: i32,
    pub leaderboard_top: i32,
    /// Height kept free for the leaderboard title and footer
    pub leaderboard_reserved: i32,
    pub avatar_size: i32,
    pub avatar_outline: i32,
    pub lanes: BandBounds,
    pub rows: BandBounds,

    // === Files ===
    /// Roster CSV (`name,points,avatar`)
    pub roster_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            finish_line: FINISH_LINE,
            easing_speed: EASING_SPEED,
            tick_rate_hz: TICK_RATE_HZ,

            window_width: WINDOW_W,
            window_height: WINDOW_H,
            track_left: TRACK_LEFT,
            track_right: TRACK_RIGHT,
            top_margin: TOP_MARGIN,
            bottom_margin: BOTTOM_MARGIN,
            leaderboard_x: LEADERBOARD_X,
            leaderboard_right_margin: LEADERBOARD_RIGHT_MARGIN,
            leaderboard_top: LEADERBOARD_TOP,
            leaderboard_reserved: LEADERBOARD_RESERVED,
            avatar_size: AVATAR_SIZE,
            avatar_outline: AVATAR_OUTLINE,
            lanes: BandBounds::LANES,
            rows: BandBounds::ROWS,

            roster_path: PathBuf::from("players.csv"),
        }
    }
}

impl Settings {
    /// Seconds per display tick
    pub fn tick_interval(&self) -> f64 {
        1.0 / f64::from(self.tick_rate_hz.max(1))
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            window_width: self.window_width,
            window_height: self.window_height,
            race_height: self.window_height - self.top_margin - self.bottom_margin,
            board_height: self.window_height - self.leaderboard_reserved,
            board_top: self.leaderboard_top,
            board_x: self.leaderboard_x,
            board_width: self.window_width - self.leaderboard_x - self.leaderboard_right_margin,
        }
    }

    pub fn track_layout(&self) -> TrackLayout {
        TrackLayout {
            left: self.track_left,
            right: self.track_right,
            top: self.top_margin,
            avatar_radius_max: self.avatar_size / 2,
            avatar_outline: self.avatar_outline,
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize settings")?;
        fs::write(path, json).with_context(|| format!("write settings {}", path.display()))?;
        log::info!("Settings saved");
        Ok(())
    }
}
