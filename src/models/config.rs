//! Tournament configuration: group sizes and point values.

use serde::{Deserialize, Serialize};

/// Points credited per match outcome.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PointValues {
    #[serde(default = "default_win_points")]
    pub win: i64,
    #[serde(default)]
    pub loss: i64,
    #[serde(default = "default_draw_points")]
    pub draw: i64,
}

fn default_win_points() -> i64 {
    3
}

fn default_draw_points() -> i64 {
    1
}

impl Default for PointValues {
    fn default() -> Self {
        Self {
            win: default_win_points(),
            loss: 0,
            draw: default_draw_points(),
        }
    }
}

/// Ordered group sizes plus scoring. `group_sizes` must add up to the participant count before a draw.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    #[serde(default)]
    pub group_sizes: Vec<usize>,
    #[serde(default)]
    pub points: PointValues,
}

impl TournamentConfig {
    pub fn new(group_sizes: Vec<usize>) -> Self {
        Self {
            group_sizes,
            points: PointValues::default(),
        }
    }

    pub fn with_points(mut self, points: PointValues) -> Self {
        self.points = points;
        self
    }

    /// Number of participants the configured groups hold. None if the sizes overflow `usize`.
    pub fn total_slots(&self) -> Option<usize> {
        total_group_slots(&self.group_sizes)
    }
}

/// Sum of group sizes, or None on overflow.
pub fn total_group_slots(group_sizes: &[usize]) -> Option<usize> {
    group_sizes
        .iter()
        .try_fold(0usize, |total, &size| total.checked_add(size))
}
