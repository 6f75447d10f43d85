//! Player records and the per-player race state

use serde::{Deserialize, Serialize};

/// Score as supplied by a loader: already numeric, or raw text from a file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreField {
    Number(f64),
    Text(String),
}

impl ScoreField {
    /// Numeric value; unparsable or non-finite input becomes 0
    pub fn value(&self) -> f64 {
        let v = match self {
            ScoreField::Number(n) => *n,
            ScoreField::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        };
        if v.is_finite() { v } else { 0.0 }
    }
}

impl From<f64> for ScoreField {
    fn from(n: f64) -> Self {
        ScoreField::Number(n)
    }
}

impl From<&str> for ScoreField {
    fn from(s: &str) -> Self {
        ScoreField::Text(s.to_string())
    }
}

/// One `{name, score, avatar}` row exchanged with loaders and persisters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub score: ScoreField,
    #[serde(default)]
    pub avatar_ref: String,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, score: impl Into<ScoreField>, avatar_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: score.into(),
            avatar_ref: avatar_ref.into(),
        }
    }
}

/// A participant in the race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, also the identity key (trimmed, never empty)
    pub name: String,
    /// Points; never driven below 0 by a bump
    pub score: f64,
    /// Opaque avatar reference resolved by the renderer
    pub avatar_ref: String,
    /// Ideal race position in [0, 1] derived from the score
    pub progress_target: f64,
    /// Animated race position in [0, 1]
    pub progress_displayed: f64,
}

impl Player {
    pub fn new(name: impl Into<String>, score: f64, avatar_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score,
            avatar_ref: avatar_ref.into(),
            progress_target: 0.0,
            progress_displayed: 0.0,
        }
    }

    /// Recompute `progress_target` against the finish line
    pub fn retarget(&mut self, finish_line: f64) {
        self.progress_target = target_progress(self.score, finish_line);
    }

    /// Persister view of this player
    pub fn to_record(&self) -> PlayerRecord {
        PlayerRecord::new(self.name.clone(), self.score, self.avatar_ref.clone())
    }
}

/// `clamp(score / finish_line, 0, 1)`, 0 for a degenerate finish line or score
pub fn target_progress(score: f64, finish_line: f64) -> f64 {
    if finish_line.is_nan() || finish_line <= 0.0 || !score.is_finite() {
        return 0.0;
    }
    (score / finish_line).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_field_parsing() {
        assert_eq!(ScoreField::from("42").value(), 42.0);
        assert_eq!(ScoreField::from(" 12.5 ").value(), 12.5);
        assert_eq!(ScoreField::from("abc").value(), 0.0);
        assert_eq!(ScoreField::from("").value(), 0.0);
        assert_eq!(ScoreField::from("NaN").value(), 0.0);
        assert_eq!(ScoreField::from("inf").value(), 0.0);
        assert_eq!(ScoreField::from(7.0).value(), 7.0);
    }

    #[test]
    fn test_score_field_json_untagged() {
        let rec: PlayerRecord =
            serde_json::from_str(r#"{"name":"A","score":"40","avatar_ref":"a.png"}"#).unwrap();
        assert_eq!(rec.score.value(), 40.0);
        let rec: PlayerRecord = serde_json::from_str(r#"{"name":"B","score":3.5}"#).unwrap();
        assert_eq!(rec.score.value(), 3.5);
        assert_eq!(rec.avatar_ref, "");
    }

    #[test]
    fn test_target_progress() {
        assert_eq!(target_progress(90.0, 100.0), 0.9);
        assert_eq!(target_progress(110.0, 100.0), 1.0);
        assert_eq!(target_progress(-5.0, 100.0), 0.0);
        assert_eq!(target_progress(50.0, 0.0), 0.0);
        assert_eq!(target_progress(50.0, -10.0), 0.0);
        assert_eq!(target_progress(50.0, f64::NAN), 0.0);
    }
}
