//! Adaptive sizing for race lanes and leaderboard rows
//!
//! Everything here is a pure function of the player count, the available
//! space and the bound constants. Arithmetic is integer pixels with floor
//! division, so every renderer backend gets identical geometry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Min/max bounds for a band size and the gap between bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandBounds {
    pub size_min: i32,
    pub size_max: i32,
    pub gap_min: i32,
    pub gap_max: i32,
}

impl BandBounds {
    pub const LANES: BandBounds = BandBounds {
        size_min: LANE_HEIGHT_MIN,
        size_max: LANE_HEIGHT_MAX,
        gap_min: LANE_GAP_MIN,
        gap_max: LANE_GAP_MAX,
    };

    pub const ROWS: BandBounds = BandBounds {
        size_min: ROW_HEIGHT_MIN,
        size_max: ROW_HEIGHT_MAX,
        gap_min: ROW_SPACING,
        gap_max: ROW_SPACING,
    };

    /// Fit `count` bands into `available` pixels: ideal size assuming minimum
    /// gaps, clamped, then the gap that fills what is left, clamped.
    pub fn fit(&self, count: usize, available: i32) -> (i32, i32) {
        if count == 0 {
            return (self.size_max, self.gap_max);
        }
        let n = i32::try_from(count).unwrap_or(i32::MAX);
        let size_min = self.size_min.min(self.size_max);
        let gap_min = self.gap_min.min(self.gap_max);

        let ideal = available
            .saturating_sub(n.saturating_sub(1).saturating_mul(gap_min))
            .div_euclid(n);
        let size = ideal.clamp(size_min, self.size_max);

        let leftover = available.saturating_sub(n.saturating_mul(size));
        let gap = leftover.div_euclid((n - 1).max(1)).clamp(gap_min, self.gap_max);
        (size, gap)
    }

    /// Smallest height that holds `count` bands at minimum size and gap
    pub fn min_extent(&self, count: usize) -> i32 {
        let n = i32::try_from(count).unwrap_or(i32::MAX);
        n.saturating_mul(self.size_min)
            .saturating_add(n.saturating_sub(1).max(0).saturating_mul(self.gap_min))
    }
}

impl Default for BandBounds {
    fn default() -> Self {
        Self::LANES
    }
}

/// Per-lane sizing for the race pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneGeometry {
    pub lane_height: i32,
    pub lane_gap: i32,
}

impl LaneGeometry {
    /// Top edge of lane `index`, relative to the first lane
    pub fn lane_offset(&self, index: usize) -> i32 {
        index as i32 * (self.lane_height + self.lane_gap)
    }

    /// Total height used by `count` lanes
    pub fn extent(&self, count: usize) -> i32 {
        extent(count, self.lane_height, self.lane_gap)
    }
}

/// Per-row sizing for the leaderboard list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowGeometry {
    pub row_height: i32,
    pub spacing: i32,
}

impl RowGeometry {
    pub fn row_offset(&self, index: usize) -> i32 {
        index as i32 * (self.row_height + self.spacing)
    }

    pub fn extent(&self, count: usize) -> i32 {
        extent(count, self.row_height, self.spacing)
    }

    /// Rank badge radius
    pub fn rank_radius(&self) -> i32 {
        (self.row_height / 3).max(14)
    }

    /// Side of the square mini avatar
    pub fn mini_avatar_size(&self) -> i32 {
        (self.row_height - 28).max(24)
    }

    /// Side of the square +/- buttons
    pub fn button_size(&self) -> i32 {
        (self.row_height / 3).max(16)
    }
}

fn extent(count: usize, size: i32, gap: i32) -> i32 {
    if count == 0 {
        return 0;
    }
    let n = count as i32;
    n * size + (n - 1) * gap
}

pub fn lane_geometry(count: usize, available_height: i32) -> LaneGeometry {
    lane_geometry_with(&BandBounds::LANES, count, available_height)
}

pub fn lane_geometry_with(bounds: &BandBounds, count: usize, available_height: i32) -> LaneGeometry {
    let (lane_height, lane_gap) = bounds.fit(count, available_height);
    LaneGeometry {
        lane_height,
        lane_gap,
    }
}

pub fn row_geometry(count: usize, available_height: i32) -> RowGeometry {
    row_geometry_with(&BandBounds::ROWS, count, available_height)
}

pub fn row_geometry_with(bounds: &BandBounds, count: usize, available_height: i32) -> RowGeometry {
    let (row_height, spacing) = bounds.fit(count, available_height);
    RowGeometry {
        row_height,
        spacing,
    }
}

/// Horizontal extent of the race track and where lanes start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackLayout {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    /// Largest avatar radius, reached in full-height lanes
    pub avatar_radius_max: i32,
    /// White ring drawn around each avatar
    pub avatar_outline: i32,
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self {
            left: TRACK_LEFT,
            right: TRACK_RIGHT,
            top: TOP_MARGIN,
            avatar_radius_max: AVATAR_SIZE / 2,
            avatar_outline: AVATAR_OUTLINE,
        }
    }
}

impl TrackLayout {
    /// Avatar radius that fits a lane together with its outline
    pub fn avatar_radius(&self, lanes: &LaneGeometry) -> i32 {
        (lanes.lane_height / 2 - self.avatar_outline)
            .min(self.avatar_radius_max)
            .max(AVATAR_MIN_RADIUS)
    }

    /// Top edge of lane `index`
    pub fn lane_top(&self, lanes: &LaneGeometry, index: usize) -> i32 {
        self.top + lanes.lane_offset(index)
    }

    /// Centre of a racer's avatar for the given displayed progress
    pub fn racer_center(&self, lanes: &LaneGeometry, index: usize, progress: f64) -> Vec2 {
        let radius = self.avatar_radius(lanes);
        let min_x = self.left + radius;
        let max_x = (self.right - radius).max(min_x);
        let span = f64::from(max_x - min_x);
        let x = min_x + (progress.clamp(0.0, 1.0) * span).floor() as i32;
        let y = self.lane_top(lanes, index) + lanes.lane_height / 2;
        Vec2::new(x as f32, y as f32)
    }

    /// Centre of the name tag drawn above an avatar
    pub fn name_tag_center(&self, lanes: &LaneGeometry, index: usize, progress: f64) -> Vec2 {
        let center = self.racer_center(lanes, index, progress);
        let offset = self.avatar_radius(lanes) + 16;
        Vec2::new(center.x, center.y - offset as f32)
    }

    /// X position of a vertical grid line at `fraction` of the track
    pub fn grid_x(&self, fraction: f64) -> i32 {
        self.left + (fraction * f64::from(self.right - self.left)) as i32
    }
}

/// Grid lines drawn across the race pane
pub const GRID_FRACTIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];
