use async_graphql::{EmptySubscription, Schema};

pub use crate::modules::progress::use_cases::read_progress::inbound::graphql::QueryRoot;
pub use crate::modules::progress::use_cases::track_progress::inbound::graphql::MutationRoot;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
