use crate::modules::progress::use_cases::track_progress::tracker::ProgressTracker;
use crate::shared::infrastructure::persistence_store::PersistenceStore;
use crate::shared::infrastructure::persistence_store::in_memory::InMemoryPersistenceStore;
use crate::shared::infrastructure::viewport_observer::channel::{
    ChannelViewportObserver, visibility_channel,
};
use crate::shell::state::AppState;
use std::sync::Arc;
use tokio::sync::Mutex;

pub fn make_state_with_store(
    store: InMemoryPersistenceStore,
    total_sections: usize,
) -> (AppState, ChannelViewportObserver) {
    let store: Arc<dyn PersistenceStore> = Arc::new(store);
    let mut tracker = ProgressTracker::new(store);
    if total_sections > 0 {
        tracker.initialize(total_sections).unwrap();
    }
    let (visibility, observer) = visibility_channel(8);
    let state = AppState {
        tracker: Arc::new(Mutex::new(tracker)),
        visibility,
    };
    (state, observer)
}

// A total of 0 leaves the tracker uninitialized.
pub fn make_test_state(total_sections: usize) -> (AppState, ChannelViewportObserver) {
    make_state_with_store(InMemoryPersistenceStore::new(), total_sections)
}
