// Stored shape of the visited set.
//
// Format
// - {"visitedSections": [...], "lastVisited": "2024-01-15T10:30:00.000Z"}
// - lastVisited is written with millisecond precision and a Z suffix. Any RFC 3339
//   instant is accepted on read, and a missing or null value reads as no timestamp.
// - Unknown fields are ignored on read.
//
// Versioning and evolution
// - Prefer adding optional fields. Older readers skip what they do not know.

use crate::modules::progress::core::visited_set::VisitedSet;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const STORAGE_KEY: &str = "webdev-docs-progress";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed progress record: {0}")]
pub struct ParseError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedRecord {
    #[serde(default)]
    pub visited_sections: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visited: Option<String>,
}

impl PersistedRecord {
    pub fn from_visited_set(set: &VisitedSet) -> Self {
        Self {
            visited_sections: set.sections().map(str::to_string).collect(),
            last_visited: set
                .last_visited()
                .map(|at| at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }

    pub fn decode(raw: &str) -> Result<Self, ParseError> {
        serde_json::from_str(raw).map_err(|error| ParseError(error.to_string()))
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn into_visited_set(self) -> Result<VisitedSet, ParseError> {
        let last_visited = self
            .last_visited
            .as_deref()
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw)
                    .map(|at| at.with_timezone(&Utc))
                    .map_err(|error| ParseError(format!("lastVisited {raw:?}: {error}")))
            })
            .transpose()?;
        Ok(VisitedSet::from_parts(self.visited_sections, last_visited))
    }
}
