//! Rendering boundary
//!
//! The scoreboard hands each frame to a renderer one way; renderers own all
//! pixel specifics and never write back into scoreboard state.

pub mod avatar;
pub mod text;

use anyhow::Result;

use crate::board::Frame;

pub use avatar::AvatarSource;
pub use text::TextRenderer;

/// Anything that can draw a scoreboard frame
pub trait Renderer {
    fn present(&mut self, frame: &Frame) -> Result<()>;
}

/// Renderer that draws nothing
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn present(&mut self, _frame: &Frame) -> Result<()> {
        Ok(())
    }
}

/// Keeps every frame it is given
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Frame>,
}

impl Renderer for RecordingRenderer {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
