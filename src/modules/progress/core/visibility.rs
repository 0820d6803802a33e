// Visibility notification for one section.
//
// A section counts as visited once its visible fraction exceeds VISIBLE_THRESHOLD.
// The comparison is strict, and NaN never counts as visible.

use serde::{Deserialize, Serialize};

pub const VISIBLE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityEvent {
    pub section_id: String,
    pub intersection_ratio: f64,
}

impl VisibilityEvent {
    pub fn new(section_id: impl Into<String>, intersection_ratio: f64) -> Self {
        Self {
            section_id: section_id.into(),
            intersection_ratio,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.intersection_ratio > VISIBLE_THRESHOLD
    }
}
