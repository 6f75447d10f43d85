//! Race progress animation
//!
//! Displayed progress chases the score-derived target with exponential
//! smoothing. The blend factor is capped at 1, so a long stall snaps to the
//! target instead of overshooting.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::consts::EASING_SPEED;

/// Easing parameters for the progress animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressModel {
    /// Higher = snappier interpolation
    pub easing_speed: f64,
}

impl Default for ProgressModel {
    fn default() -> Self {
        Self {
            easing_speed: EASING_SPEED,
        }
    }
}

impl ProgressModel {
    pub fn new(easing_speed: f64) -> Self {
        Self { easing_speed }
    }

    /// Blend factor for a step of `dt` seconds, in [0, 1]
    #[inline]
    pub fn blend(&self, dt: f64) -> f64 {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let k = if self.easing_speed.is_finite() {
            self.easing_speed.max(0.0)
        } else {
            0.0
        };
        (k * dt).min(1.0)
    }

    /// Advance one player's displayed progress toward its target
    pub fn step(&self, player: &mut Player, dt: f64) {
        let t = self.blend(dt);
        if t >= 1.0 {
            player.progress_displayed = player.progress_target;
        } else {
            player.progress_displayed += (player.progress_target - player.progress_displayed) * t;
        }
    }

    /// Advance every player by one tick
    pub fn step_all(&self, players: &mut [Player], dt: f64) {
        for player in players {
            self.step(player, dt);
        }
    }
}

/// Put a racer back at the start line, regardless of its target
pub fn reset(player: &mut Player) {
    player.progress_displayed = 0.0;
}

/// Whether the displayed position is within `epsilon` of the target
pub fn is_settled(player: &Player, epsilon: f64) -> bool {
    (player.progress_target - player.progress_displayed).abs() <= epsilon
}
