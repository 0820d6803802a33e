use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::progress::use_cases::read_progress::projection::ProgressSnapshot;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProgress {
    pub visited_sections: Vec<String>,
    pub visited_count: i64,
    pub total_sections: i64,
    pub completion_percentage: i32,
    pub last_visited: Option<String>,
}

impl From<ProgressSnapshot> for GqlProgress {
    fn from(s: ProgressSnapshot) -> Self {
        Self {
            visited_sections: s.visited_sections,
            visited_count: s.visited_count as i64,
            total_sections: s.total_sections as i64,
            completion_percentage: i32::from(s.completion_percentage),
            last_visited: s.last_visited,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn progress(&self, context: &Context<'_>) -> GqlResult<GqlProgress> {
        let state = context.data_unchecked::<AppState>();
        let snapshot = state
            .tracker
            .lock()
            .await
            .snapshot()
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(snapshot.into())
    }
}
