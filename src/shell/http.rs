use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::Html,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::progress::use_cases::read_progress::inbound::http as read_http;
use crate::modules::progress::use_cases::report_visibility::inbound::http as visibility_http;
use crate::modules::progress::use_cases::track_progress::inbound::http as track_http;
use crate::shell::graphql::{AppSchema, schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/progress", get(read_http::handle))
        .route("/sections/{section_id}/visit", post(track_http::handle))
        .route("/visibility", post(visibility_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state.clone())))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
