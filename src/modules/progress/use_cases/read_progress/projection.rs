// Read model handed to the display surface.
//
// Purpose
// - Everything a progress bar and its counters need, in one serializable value.

use chrono::SecondsFormat;
use serde::Serialize;
use std::num::NonZeroUsize;

use crate::modules::progress::core::completion::completion_percentage;
use crate::modules::progress::core::visited_set::VisitedSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub visited_sections: Vec<String>,
    pub visited_count: usize,
    pub total_sections: usize,
    pub completion_percentage: u8,
    pub last_visited: Option<String>,
}

impl ProgressSnapshot {
    pub fn project(visited: &VisitedSet, total: NonZeroUsize) -> Self {
        Self {
            visited_sections: visited.sections().map(str::to_string).collect(),
            visited_count: visited.len(),
            total_sections: total.get(),
            completion_percentage: completion_percentage(visited.len(), total),
            last_visited: visited
                .last_visited()
                .map(|at| at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}
