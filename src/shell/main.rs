use std::sync::Arc;
use tokio::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

use docs_progress::modules::progress::use_cases::report_visibility::worker::run_visibility_worker;
use docs_progress::modules::progress::use_cases::track_progress::tracker::ProgressTracker;
use docs_progress::shared::infrastructure::persistence_store::PersistenceStore;
use docs_progress::shared::infrastructure::persistence_store::json_file::JsonFileStore;
use docs_progress::shared::infrastructure::viewport_observer::channel::visibility_channel;
use docs_progress::shell::config::Config;
use docs_progress::shell::http::router;
use docs_progress::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let file_store = JsonFileStore::new(&config.store_dir);
    tracing::info!(dir = %file_store.dir().display(), "using file store");
    let store: Arc<dyn PersistenceStore> = Arc::new(file_store);

    let mut tracker = ProgressTracker::new(store);
    tracker.initialize(config.total_sections)?;
    let tracker = Arc::new(Mutex::new(tracker));

    let (visibility, observer) = visibility_channel(config.channel_capacity);
    tokio::spawn(run_visibility_worker(observer, tracker.clone()));

    let app = router(AppState {
        tracker,
        visibility,
    });

    tracing::info!("Progress API: http://{}/progress", config.addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
