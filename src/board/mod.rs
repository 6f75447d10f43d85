//! Deterministic scoreboard module
//!
//! All scoring, ranking, animation and layout logic lives here. This module
//! must stay pure and deterministic:
//! - Explicit `dt` only, no clock reads
//! - Stable iteration order (roster order)
//! - Integer-pixel geometry
//! - No rendering, file or platform dependencies

pub mod layout;
pub mod player;
pub mod progress;
pub mod ranking;
pub mod roster;
pub mod state;
pub mod tick;

pub use layout::{
    BandBounds, GRID_FRACTIONS, LaneGeometry, RowGeometry, TrackLayout, lane_geometry,
    row_geometry,
};
pub use player::{Player, PlayerRecord, ScoreField, target_progress};
pub use progress::ProgressModel;
pub use ranking::{rank, rank_positions};
pub use roster::Roster;
pub use state::{Command, Scoreboard, Viewport};
pub use tick::{Frame, RacerView, RowView, snapshot, tick};
