use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// True when the section was not visited before.
    async fn mark_visited(&self, context: &Context<'_>, section_id: String) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let newly_visited = state
            .tracker
            .lock()
            .await
            .mark_visited(&section_id)
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(newly_visited)
    }
}
