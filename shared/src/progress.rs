//! Goal progress for the circular progress rings

use crate::chart_scale::reaches_goal;
use serde::{Deserialize, Serialize};

/// Progress of a value towards a daily goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Unclamped percentage, may exceed 100
    pub percent: f64,
    /// Filled share of the ring, 0.0 to 1.0
    pub fraction: f64,
    /// Arc sweep in degrees, 0 to 360
    pub sweep_degrees: f64,
    pub achieved: bool,
}

/// Compute progress = (value / goal) * 100.
///
/// A goal of zero or less yields no progress.
pub fn goal_progress(value: f64, goal: f64) -> GoalProgress {
    let percent = if goal > 0.0 && value.is_finite() {
        (value.max(0.0) / goal) * 100.0
    } else {
        0.0
    };
    let fraction = (percent / 100.0).clamp(0.0, 1.0);

    GoalProgress {
        percent,
        fraction,
        sweep_degrees: fraction * 360.0,
        achieved: reaches_goal(value, goal),
    }
}
