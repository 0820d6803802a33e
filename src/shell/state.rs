use crate::modules::progress::core::visibility::VisibilityEvent;
use crate::modules::progress::use_cases::track_progress::tracker::ProgressTracker;
use crate::shared::infrastructure::persistence_store::PersistenceStore;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub type SharedTracker = Arc<Mutex<ProgressTracker<dyn PersistenceStore>>>;

#[derive(Clone)]
pub struct AppState {
    pub tracker: SharedTracker,
    pub visibility: mpsc::Sender<VisibilityEvent>,
}
