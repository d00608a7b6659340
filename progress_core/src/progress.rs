use serde::{Deserialize, Serialize};

// Points needed to advance one level.
pub const POINTS_PER_LEVEL: i64 = 100;

/// Accumulated progress for one learner.
///
/// `level` is always `level_for_points(total_points)`; it is only ever
/// written by [`Progress::new`] and [`next_record`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub completed_content: Vec<String>,
    pub total_points: i64,
    #[serde(alias = "currentLevel")]
    pub level: i64,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            completed_content: Vec::new(),
            total_points: 0,
            level: level_for_points(0),
        }
    }

    pub fn has_completed(&self, content_id: &str) -> bool {
        self.completed_content.iter().any(|id| id == content_id)
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

/// Server-side progress keyed by learner id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub user_id: String,
    #[serde(flatten)]
    pub progress: Progress,
}

impl ProgressRecord {
    // Fresh record for a learner seen for the first time.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            progress: Progress::new(),
        }
    }

    pub fn record_completion(&self, content_id: &str, points: i64) -> Self {
        Self {
            user_id: self.user_id.clone(),
            progress: next_record(&self.progress, content_id, points),
        }
    }
}

// Level for a point total: floor(points / 100) + 1.
pub fn level_for_points(total_points: i64) -> i64 {
    total_points.div_euclid(POINTS_PER_LEVEL) + 1
}

/// Applies one lesson completion and returns the resulting progress.
///
/// Points are added even when `content_id` was completed before; the
/// completed list only records each id once. The level is derived from the
/// new total.
pub fn next_record(progress: &Progress, content_id: &str, points: i64) -> Progress {
    let total_points = progress.total_points.saturating_add(points);

    let mut completed_content = progress.completed_content.clone();
    if !progress.has_completed(content_id) {
        completed_content.push(content_id.to_string());
    }

    Progress {
        completed_content,
        total_points,
        level: level_for_points(total_points),
    }
}
