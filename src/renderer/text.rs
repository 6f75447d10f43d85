//! Plain-text frame renderer
//!
//! Draws the race as one bar per lane and the leaderboard as ranked rows.
//! Useful headless and in the terminal.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use super::Renderer;
use super::avatar::AvatarSource;
use crate::board::Frame;
use crate::format_points;

/// Character cells between start and finish
pub const TRACK_CELLS: usize = 40;

pub struct TextRenderer<W: Write> {
    out: W,
    /// Draw every Nth tick (1 = every tick)
    every: u64,
    /// Directory relative avatar paths resolve against
    base_dir: PathBuf,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, every: u64, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            out,
            every: every.max(1),
            base_dir: base_dir.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn race_line(name: &str, progress: f64, width: usize) -> String {
        let pos = ((progress.clamp(0.0, 1.0) * TRACK_CELLS as f64).floor() as usize).min(TRACK_CELLS);
        let mut lane = String::with_capacity(TRACK_CELLS + 1);
        for cell in 0..=TRACK_CELLS {
            lane.push(if cell == pos {
                'o'
            } else if cell < pos {
                '-'
            } else {
                ' '
            });
        }
        format!("{:<width$} |{}|", name, lane, width = width)
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        if frame.tick % self.every != 0 {
            return Ok(());
        }

        let width = frame
            .racers
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(self.out, "== tick {} (finish {}) ==", frame.tick, format_points(frame.finish_line))?;
        for racer in &frame.racers {
            writeln!(self.out, "{}", Self::race_line(&racer.name, racer.progress, width))?;
        }
        for row in &frame.leaderboard {
            let avatar = AvatarSource::resolve(&row.avatar_ref, &self.base_dir);
            writeln!(
                self.out,
                "{:>2}. {:<width$} {:>6} pts  [{}]",
                row.rank,
                row.name,
                format_points(row.score),
                avatar.label(),
                width = width
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}
