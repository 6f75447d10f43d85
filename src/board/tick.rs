//! Per-frame update
//!
//! A tick applies queued commands, steps the animation for every player,
//! then ranks and lays out the result into an immutable [`Frame`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::{LaneGeometry, RowGeometry, TrackLayout};
use super::ranking::rank_positions;
use super::state::{Command, Scoreboard, Viewport};

/// A racer as the race pane should draw it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacerView {
    /// Lane index (roster order)
    pub lane: usize,
    pub name: String,
    pub score: f64,
    pub avatar_ref: String,
    /// Displayed progress in [0, 1]
    pub progress: f64,
    pub center: Vec2,
    pub avatar_radius: i32,
    pub lane_top: i32,
}

/// A leaderboard row as the list pane should draw it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowView {
    /// 1-based rank
    pub rank: usize,
    pub name: String,
    pub score: f64,
    pub avatar_ref: String,
    /// Top edge in pixels
    pub top: i32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub finish_line: f64,
    pub racers: Vec<RacerView>,
    pub leaderboard: Vec<RowView>,
    pub lanes: LaneGeometry,
    pub rows: RowGeometry,
    pub track: TrackLayout,
    /// Window size and pane placement
    pub viewport: Viewport,
}

/// Advance the scoreboard by one display tick of `dt` seconds
pub fn tick<I>(state: &mut Scoreboard, commands: I, dt: f64) -> Frame
where
    I: IntoIterator<Item = Command>,
{
    for command in commands {
        state.apply(command);
    }

    state.time_ticks += 1;
    state.progress.step_all(state.roster.players_mut(), dt);

    snapshot(state)
}

/// Build a frame from the current state without advancing it
pub fn snapshot(state: &Scoreboard) -> Frame {
    let lanes = state.lane_geometry();
    let rows = state.row_geometry();
    let track = state.track;
    let avatar_radius = track.avatar_radius(&lanes);

    let racers = state
        .roster
        .iter()
        .enumerate()
        .map(|(lane, p)| RacerView {
            lane,
            name: p.name.clone(),
            score: p.score,
            avatar_ref: p.avatar_ref.clone(),
            progress: p.progress_displayed,
            center: track.racer_center(&lanes, lane, p.progress_displayed),
            avatar_radius,
            lane_top: track.lane_top(&lanes, lane),
        })
        .collect();

    let leaderboard = rank_positions(&state.roster)
        .into_iter()
        .map(|(rank, p)| RowView {
            rank,
            name: p.name.clone(),
            score: p.score,
            avatar_ref: p.avatar_ref.clone(),
            top: state.viewport.board_top + rows.row_offset(rank - 1),
        })
        .collect();

    Frame {
        tick: state.time_ticks,
        finish_line: state.roster.finish_line(),
        racers,
        leaderboard,
        lanes,
        rows,
        track,
        viewport: state.viewport,
    }
}
