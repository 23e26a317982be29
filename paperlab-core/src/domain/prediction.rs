//! Strategy output: a directional forecast with a confidence score.

use serde::{Deserialize, Serialize};

/// Next-day direction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// +1.0 for Up, -1.0 for Down — the sign applied to a step's stake.
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A single day-ahead forecast produced fresh at each simulation step.
///
/// `confidence` is in [0, 1]. For the trained classifier it is the
/// training-set accuracy of the freshly fit model (in-sample fit quality,
/// not a held-out estimate); the rule-based strategy pins it at 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub direction: Direction,
    pub confidence: f64,
}
