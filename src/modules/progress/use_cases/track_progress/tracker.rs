// Progress tracker: owns the visited set and keeps a persisted mirror of it.
//
// Lifecycle
// - Uninitialized until `initialize` succeeds, Ready afterwards. There is no way back.
// - Every operation other than `initialize` fails with NotInitialized while Uninitialized.
//
// Responsibilities
// - Hydrate once from the store. Missing or malformed records start empty and never fail.
// - Write the full record on every insertion that changes the set, and only then.
// - Keep the in-memory set authoritative. A failed write is logged, never rolled back.

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::modules::progress::core::completion::completion_percentage;
use crate::modules::progress::core::record::{ParseError, PersistedRecord, STORAGE_KEY};
use crate::modules::progress::core::visibility::VisibilityEvent;
use crate::modules::progress::core::visited_set::VisitedSet;
use crate::modules::progress::use_cases::read_progress::projection::ProgressSnapshot;
use crate::modules::progress::use_cases::track_progress::errors::{
    LoadError, PreconditionError, TrackerError,
};
use crate::shared::core::clock::{Clock, SystemClock};
use crate::shared::infrastructure::persistence_store::{PersistenceError, PersistenceStore};

#[derive(Debug)]
enum TrackerState {
    Uninitialized,
    Ready {
        visited: VisitedSet,
        total: NonZeroUsize,
    },
}

pub struct ProgressTracker<TStore, TClock = SystemClock>
where
    TStore: PersistenceStore + ?Sized,
    TClock: Clock,
{
    store: Arc<TStore>,
    clock: TClock,
    state: TrackerState,
    last_load_error: Option<LoadError>,
}

impl<TStore> ProgressTracker<TStore, SystemClock>
where
    TStore: PersistenceStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<TStore, TClock> ProgressTracker<TStore, TClock>
where
    TStore: PersistenceStore + ?Sized,
    TClock: Clock,
{
    pub fn with_clock(store: Arc<TStore>, clock: TClock) -> Self {
        Self {
            store,
            clock,
            state: TrackerState::Uninitialized,
            last_load_error: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, TrackerState::Ready { .. })
    }

    pub fn initialize(&mut self, total_section_count: usize) -> Result<(), PreconditionError> {
        if self.is_ready() {
            return Err(PreconditionError::AlreadyInitialized);
        }
        let total = NonZeroUsize::new(total_section_count).ok_or(PreconditionError::NoSections)?;

        let visited = match self.read_stored() {
            Ok(visited) => {
                tracing::info!(
                    visited = visited.len(),
                    total = total.get(),
                    "hydrated progress"
                );
                visited
            }
            Err(error) => {
                tracing::warn!(%error, "stored progress unusable, starting empty");
                self.last_load_error = Some(error);
                VisitedSet::empty()
            }
        };

        self.state = TrackerState::Ready { visited, total };
        Ok(())
    }

    /// Returns true when the section was newly added.
    pub fn mark_visited(&mut self, section_id: &str) -> Result<bool, PreconditionError> {
        let now = self.clock.now();
        let visited = self.visited_mut()?;
        if section_id.is_empty() {
            return Err(PreconditionError::EmptySectionId);
        }
        if !visited.insert(section_id, now) {
            return Ok(false);
        }
        tracing::debug!(section_id, visited = visited.len(), "section visited");

        if let Err(error) = self.save() {
            tracing::warn!(%error, section_id, "progress not persisted");
        }
        Ok(true)
    }

    pub fn observe(&mut self, event: &VisibilityEvent) -> Result<bool, PreconditionError> {
        if !event.is_visible() {
            self.visited()?;
            return Ok(false);
        }
        self.mark_visited(&event.section_id)
    }

    pub fn completion_percentage(&self) -> Result<u8, PreconditionError> {
        let (visited, total) = self.ready()?;
        Ok(completion_percentage(visited.len(), total))
    }

    pub fn visited_count(&self) -> Result<usize, PreconditionError> {
        Ok(self.visited()?.len())
    }

    pub fn total_sections(&self) -> Result<usize, PreconditionError> {
        Ok(self.ready()?.1.get())
    }

    pub fn is_visited(&self, section_id: &str) -> Result<bool, PreconditionError> {
        Ok(self.visited()?.contains(section_id))
    }

    pub fn snapshot(&self) -> Result<ProgressSnapshot, PreconditionError> {
        let (visited, total) = self.ready()?;
        Ok(ProgressSnapshot::project(visited, total))
    }

    pub fn last_load_error(&self) -> Option<&LoadError> {
        self.last_load_error.as_ref()
    }

    pub fn save(&self) -> Result<(), TrackerError> {
        let record = PersistedRecord::from_visited_set(self.visited()?);
        let raw = record
            .encode()
            .map_err(|error| PersistenceError::Rejected(format!("record not encodable: {error}")))?;
        self.store.set(STORAGE_KEY, &raw)?;
        Ok(())
    }

    /// Reads the stored record without touching the in-memory set.
    pub fn load(&self) -> Result<VisitedSet, TrackerError> {
        self.visited()?;
        Ok(self.read_stored()?)
    }

    fn read_stored(&self) -> Result<VisitedSet, LoadError> {
        let stored = match self.store.get(STORAGE_KEY) {
            Ok(stored) => stored,
            Err(PersistenceError::Undecodable(reason)) => return Err(ParseError(reason).into()),
            Err(error) => return Err(error.into()),
        };
        match stored {
            None => Ok(VisitedSet::empty()),
            Some(raw) => Ok(PersistedRecord::decode(&raw)?.into_visited_set()?),
        }
    }

    fn ready(&self) -> Result<(&VisitedSet, NonZeroUsize), PreconditionError> {
        match &self.state {
            TrackerState::Ready { visited, total } => Ok((visited, *total)),
            TrackerState::Uninitialized => Err(PreconditionError::NotInitialized),
        }
    }

    fn visited(&self) -> Result<&VisitedSet, PreconditionError> {
        Ok(self.ready()?.0)
    }

    fn visited_mut(&mut self) -> Result<&mut VisitedSet, PreconditionError> {
        match &mut self.state {
            TrackerState::Ready { visited, .. } => Ok(visited),
            TrackerState::Uninitialized => Err(PreconditionError::NotInitialized),
        }
    }
}
