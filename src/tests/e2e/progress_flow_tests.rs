use crate::modules::progress::use_cases::report_visibility::worker::run_visibility_worker;
use crate::modules::progress::use_cases::track_progress::tracker::ProgressTracker;
use crate::shared::infrastructure::persistence_store::PersistenceStore;
use crate::shared::infrastructure::persistence_store::json_file::JsonFileStore;
use crate::shared::infrastructure::viewport_observer::channel::visibility_channel;
use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;

fn file_backed_tracker(dir: &std::path::Path, total: usize) -> ProgressTracker<dyn PersistenceStore> {
    let store: Arc<dyn PersistenceStore> = Arc::new(JsonFileStore::new(dir));
    let mut tracker = ProgressTracker::new(store);
    tracker.initialize(total).unwrap();
    tracker
}

#[tokio::test]
async fn reading_progress_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = Arc::new(Mutex::new(file_backed_tracker(dir.path(), 4)));
    let (visibility, observer) = visibility_channel(8);
    let worker = tokio::spawn(run_visibility_worker(observer, tracker.clone()));
    let app = router(AppState {
        tracker: tracker.clone(),
        visibility: visibility.clone(),
    });

    for body in [
        r#"{"sectionId":"introduction","intersectionRatio":0.9}"#,
        r#"{"sectionId":"css-basics","intersectionRatio":0.2}"#,
        r#"{"sectionId":"css-basics","intersectionRatio":0.7}"#,
        r#"{"sectionId":"introduction","intersectionRatio":1.0}"#,
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::post("/visibility")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }
    drop(app);
    drop(visibility);
    assert_eq!(worker.await.unwrap(), 2);

    let response = router(AppState {
        tracker: tracker.clone(),
        visibility: visibility_channel(1).0,
    })
    .oneshot(Request::get("/progress").body(Body::empty()).unwrap())
    .await
    .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["visitedSections"], serde_json::json!(["css-basics", "introduction"]));
    assert_eq!(json["completionPercentage"], serde_json::json!(50));

    let restarted = file_backed_tracker(dir.path(), 4);
    assert_eq!(restarted.visited_count(), Ok(2));
    assert_eq!(restarted.is_visited("css-basics"), Ok(true));
    assert_eq!(restarted.completion_percentage(), Ok(50));
    assert!(restarted.last_load_error().is_none());
}
