// Visibility worker: the adapter between a ViewportObserver and the tracker.
//
// Responsibilities
// - Pull events one at a time, in delivery order, and hand each to `observe`.
// - Hold the tracker lock only for the synchronous call, never across an await.
// - Stop when the observer closes and report how many sections became visited.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::modules::progress::use_cases::track_progress::tracker::ProgressTracker;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::persistence_store::PersistenceStore;
use crate::shared::infrastructure::viewport_observer::ViewportObserver;

pub async fn run_visibility_worker<TObserver, TStore, TClock>(
    mut observer: TObserver,
    tracker: Arc<Mutex<ProgressTracker<TStore, TClock>>>,
) -> usize
where
    TObserver: ViewportObserver,
    TStore: PersistenceStore + ?Sized,
    TClock: Clock,
{
    let mut newly_visited = 0;
    while let Some(event) = observer.next_visibility().await {
        let outcome = tracker.lock().await.observe(&event);
        match outcome {
            Ok(true) => {
                newly_visited += 1;
                tracing::info!(section_id = %event.section_id, "section marked visited");
            }
            Ok(false) => {}
            Err(error) => {
                tracing::warn!(%error, section_id = %event.section_id, "visibility event dropped");
            }
        }
    }
    tracing::info!(newly_visited, "visibility worker stopped");
    newly_visited
}
