//! Platform layer
//!
//! Handles everything outside the pure scoreboard:
//! - Wall-clock pacing of the tick loop
//! - Queuing input actions between ticks
//! - Demo input when no input surface is attached

pub mod app;
pub mod demo;

pub use app::App;
pub use demo::DemoFeed;
