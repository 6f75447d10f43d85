//! Villa Olympics entry point
//!
//! Loads settings and the roster, then runs the display loop with the text
//! renderer on stdout.
//!
//! Flags:
//! - `--settings <path>`: settings JSON (default `settings.json`)
//! - `--roster <path>`: roster CSV, overrides the settings file
//! - `--frames <n>`: stop after `n` ticks (default: run forever)
//! - `--demo <seed>`: drive the board with seeded random bumps
//! - `--every <n>`: print every `n`th frame (default: once per second)
//! - `--save`: write the roster back on exit

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use villa_olympics::Settings;
use villa_olympics::platform::{App, DemoFeed};
use villa_olympics::renderer::TextRenderer;

/// Seconds between demo bumps
const DEMO_INTERVAL_SECS: u64 = 1;

#[derive(Debug, Default)]
struct Args {
    settings: Option<PathBuf>,
    roster: Option<PathBuf>,
    frames: Option<u64>,
    demo: Option<u64>,
    every: Option<u64>,
    save: bool,
}

fn parse_args() -> Result<Args> {
    let raw = std::env::args().skip(1).collect::<Vec<_>>();
    let mut args = Args::default();
    let mut iter = raw.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| anyhow!("{flag} needs a value"))
        };
        match arg.as_str() {
            "--settings" => args.settings = Some(PathBuf::from(value("--settings")?)),
            "--roster" => args.roster = Some(PathBuf::from(value("--roster")?)),
            "--frames" => {
                args.frames = Some(value("--frames")?.parse().context("--frames must be a number")?)
            }
            "--demo" => {
                args.demo = Some(value("--demo")?.parse().context("--demo seed must be a number")?)
            }
            "--every" => {
                args.every = Some(value("--every")?.parse().context("--every must be a number")?)
            }
            "--save" => args.save = true,
            other => return Err(anyhow!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Villa Olympics starting...");

    let args = parse_args()?;
    let settings_path = args
        .settings
        .clone()
        .unwrap_or_else(|| PathBuf::from("settings.json"));
    let mut settings = Settings::load(&settings_path);
    if let Some(roster) = args.roster.clone() {
        settings.roster_path = roster;
    }

    let base_dir = settings
        .roster_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let every = args.every.unwrap_or(u64::from(settings.tick_rate_hz));
    let renderer = TextRenderer::new(io::stdout(), every, base_dir);

    let mut app = App::new(settings, renderer);
    if let Some(seed) = args.demo {
        let interval = DEMO_INTERVAL_SECS * u64::from(app.settings().tick_rate_hz);
        app = app.with_demo(DemoFeed::new(seed, interval));
    }

    if let Err(e) = app.reload_roster() {
        log::warn!("Starting with an empty roster: {:#}", e);
    }
    app.run_for(args.frames);

    if args.save {
        app.save_roster()?;
    }
    Ok(())
}
