//! Fixed-rate display loop
//!
//! Owns the scoreboard, queues external actions and applies them at the
//! start of the next tick, so no frame ever sees a half-applied change.

use std::collections::VecDeque;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use super::demo::DemoFeed;
use crate::board::{Command, Frame, Scoreboard, tick};
use crate::persistence;
use crate::renderer::Renderer;
use crate::settings::Settings;

pub struct App<R: Renderer> {
    settings: Settings,
    state: Scoreboard,
    pending: VecDeque<Command>,
    renderer: R,
    demo: Option<DemoFeed>,
    last_time: Option<Instant>,
}

impl<R: Renderer> App<R> {
    pub fn new(settings: Settings, renderer: R) -> Self {
        Self {
            state: Scoreboard::from_settings(&settings),
            settings,
            pending: VecDeque::new(),
            renderer,
            demo: None,
            last_time: None,
        }
    }

    pub fn with_demo(mut self, demo: DemoFeed) -> Self {
        self.demo = Some(demo);
        self
    }

    pub fn state(&self) -> &Scoreboard {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Read the roster file and queue a load; a missing file loads empty
    pub fn reload_roster(&mut self) -> Result<()> {
        let records = persistence::load_records(&self.settings.roster_path)?;
        self.pending.push_back(Command::Load(records));
        Ok(())
    }

    pub fn reset_all_progress(&mut self) {
        self.pending.push_back(Command::ResetAllProgress);
    }

    pub fn bump(&mut self, name: &str, delta: f64) {
        self.pending.push_back(Command::bump(name, delta));
    }

    /// Write the current roster back to the roster file
    pub fn save_roster(&self) -> Result<()> {
        self.save_roster_to(&self.settings.roster_path)
    }

    pub fn save_roster_to(&self, path: &Path) -> Result<()> {
        persistence::save_roster(path, &self.state.roster)
    }

    /// Run one tick of `dt` seconds and hand the frame to the renderer
    pub fn frame(&mut self, dt: f64) -> Frame {
        if let Some(demo) = self.demo.as_mut()
            && let Some(command) = demo.next(&self.state.roster)
        {
            self.pending.push_back(command);
        }

        let frame = tick(&mut self.state, self.pending.drain(..), dt);
        if let Err(e) = self.renderer.present(&frame) {
            log::warn!("Render failed on tick {}: {:#}", frame.tick, e);
        }
        frame
    }

    /// Run at the configured tick rate; `None` runs until the process ends
    pub fn run_for(&mut self, frames: Option<u64>) {
        let interval = Duration::from_secs_f64(self.settings.tick_interval());
        let mut next_deadline = Instant::now();
        let mut count = 0u64;

        log::info!(
            "Running at {} Hz with {} players",
            self.settings.tick_rate_hz,
            self.state.roster.len()
        );

        while frames.is_none_or(|limit| count < limit) {
            let now = Instant::now();
            let dt = self
                .last_time
                .map(|last| now.duration_since(last).as_secs_f64())
                .unwrap_or(0.0);
            self.last_time = Some(now);

            self.frame(dt);
            count += 1;

            next_deadline += interval;
            let now = Instant::now();
            if next_deadline > now {
                thread::sleep(next_deadline - now);
            } else {
                // Fell behind (slow load or render); don't try to catch up
                next_deadline = now;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PlayerRecord;
    use crate::renderer::{NullRenderer, RecordingRenderer};

    fn app_with_roster(dir: &Path) -> App<RecordingRenderer> {
        let path = dir.join("players.csv");
        std::fs::write(&path, "name,points,avatar\nA,40,\nB,40,\nC,90,\n").unwrap();
        let settings = Settings {
            roster_path: path,
            ..Default::default()
        };
        App::new(settings, RecordingRenderer::default())
    }

    #[test]
    fn test_actions_apply_on_next_frame() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_roster(dir.path());
        app.reload_roster().unwrap();
        assert!(app.state().roster.is_empty());

        app.frame(1.0 / 60.0);
        assert_eq!(app.state().roster.len(), 3);

        app.bump("A", 70.0);
        app.bump("nobody", 5.0);
        let frame = app.frame(1.0 / 60.0);
        let order: Vec<&str> = frame.leaderboard.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["A", "C", "B"]);
        assert_eq!(app.renderer().frames.len(), 2);
    }

    #[test]
    fn test_missing_roster_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            roster_path: dir.path().join("absent.csv"),
            ..Default::default()
        };
        let mut app = App::new(settings, RecordingRenderer::default());
        app.state.roster.load(vec![PlayerRecord::new("Old", 1.0, "")]);
        app.reload_roster().unwrap();
        app.frame(0.0);
        assert!(app.state().roster.is_empty());
    }

    #[test]
    fn test_reset_replays_race() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_roster(dir.path());
        app.reload_roster().unwrap();
        app.frame(1.0);
        assert!(app.state().is_settled(0.0));
        app.reset_all_progress();
        let frame = app.frame(0.0);
        assert!(frame.racers.iter().all(|r| r.progress == 0.0));
    }

    #[test]
    fn test_save_roster_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_roster(dir.path());
        app.reload_roster().unwrap();
        app.bump("B", -100.0);
        app.frame(0.0);
        app.save_roster().unwrap();

        let records = persistence::load_records(&app.settings().roster_path).unwrap();
        let b = records.iter().find(|r| r.name == "B").unwrap();
        assert_eq!(b.score.value(), 0.0);
    }

    #[test]
    fn test_demo_feed_bumps() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_roster(dir.path()).with_demo(DemoFeed::new(3, 1));
        app.reload_roster().unwrap();
        app.frame(0.0);
        let before: f64 = app.state().roster.iter().map(|p| p.score).sum();
        app.frame(0.0);
        let after: f64 = app.state().roster.iter().map(|p| p.score).sum();
        // Exactly one +/-1 bump, and nobody sits at 0
        assert_eq!((after - before).abs(), 1.0);
    }

    #[test]
    fn test_run_for_counts_frames() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_roster(dir.path());
        app.settings.tick_rate_hz = 1000;
        app.reload_roster().unwrap();
        app.run_for(Some(3));
        assert_eq!(app.renderer().frames.len(), 3);
        assert_eq!(app.state().time_ticks, 3);
    }

    #[test]
    fn test_headless_run_with_null_renderer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.csv");
        std::fs::write(&path, "name,points,avatar
A,50,
").unwrap();
        let settings = Settings {
            roster_path: path,
            tick_rate_hz: 1000,
            ..Default::default()
        };
        let mut app = App::new(settings, NullRenderer);
        app.reload_roster().unwrap();
        app.run_for(Some(2));
        assert_eq!(app.state().time_ticks, 2);
        assert_eq!(app.state().roster.get("A").map(|p| p.progress_target), Some(0.5));
    }
}
