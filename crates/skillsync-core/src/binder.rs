//! View binder: ties user actions to store calls and the list view.
//!
//! Every mutating action ends with a full `list` re-fetch; nothing is
//! reconciled locally. Overlapping refreshes are not serialized, so the
//! response that completes last is the one on screen.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use tracing::{error, info, instrument};

use crate::error::{ActionError, ApiError};
use crate::model::{Assessment, AssessmentDraft, AssessmentId};
use crate::traits::{AssessmentStore, Confirm, GridSink, SkillsDataLoaded};
use crate::view::{Banner, ViewState};

/// Prompt shown before a record is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this assessment?";

const EVENT_CAPACITY: usize = 16;

/// Result of a delete request that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
}

/// Owns a store and the state of the list view built on top of it.
pub struct ViewBinder<S> {
    store: S,
    state: Mutex<ViewState>,
    banner: Mutex<Option<Banner>>,
    grid: Option<Arc<dyn GridSink>>,
    events: broadcast::Sender<SkillsDataLoaded>,
}

impl<S: AssessmentStore> ViewBinder<S> {
    pub fn new(store: S) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            store,
            state: Mutex::new(ViewState::Loading),
            banner: Mutex::new(None),
            grid: None,
            events,
        }
    }

    /// Attach a grid that mirrors the list after every sync.
    pub fn with_grid(mut self, grid: Arc<dyn GridSink>) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Receive a `SkillsDataLoaded` event after every grid sync.
    pub fn subscribe(&self) -> broadcast::Receiver<SkillsDataLoaded> {
        self.events.subscribe()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Snapshot of the list view.
    pub fn state(&self) -> ViewState {
        lock(&self.state).clone()
    }

    /// The banner currently set, whether or not it has expired.
    pub fn banner(&self) -> Option<Banner> {
        lock(&self.banner).clone()
    }

    /// The banner still on screen at `now`; expired banners are not shown.
    pub fn visible_banner_at(&self, now: DateTime<Utc>) -> Option<Banner> {
        lock(&self.banner)
            .as_ref()
            .filter(|banner| banner.is_visible_at(now))
            .cloned()
    }

    pub fn visible_banner(&self) -> Option<Banner> {
        self.visible_banner_at(Utc::now())
    }

    pub fn dismiss_banner(&self) {
        *lock(&self.banner) = None;
    }

    /// Re-fetch the full list and replace the view with it.
    #[instrument(skip(self), fields(store = self.store.name()))]
    pub async fn refresh(&self) -> ViewState {
        self.set_state(ViewState::Loading);

        let next = match self.store.list().await {
            Ok(records) => {
                info!(count = records.len(), "loaded assessments");
                ViewState::from_records(records)
            }
            Err(e) => {
                error!(error = %e, "error loading assessments");
                ViewState::Failed(e.to_string())
            }
        };

        self.set_state(next.clone());
        next
    }

    /// Handle a quick-add submission.
    ///
    /// Invalid drafts never reach the store. Otherwise exactly one `create`
    /// is issued, followed by a refresh and a grid sync whatever its outcome.
    #[instrument(skip(self, draft), fields(store = self.store.name()))]
    pub async fn submit(&self, draft: AssessmentDraft) -> Result<Assessment, ActionError> {
        let record = match draft.into_assessment() {
            Ok(record) => record,
            Err(e) => {
                self.set_banner(Banner::error(format!("Error adding assessment: {e}")));
                return Err(e.into());
            }
        };

        let result = self.store.create(&record).await;
        match &result {
            Ok(_) => {
                info!(id = %record.id, "assessment added");
                self.set_banner(Banner::success("Assessment added successfully!"));
            }
            Err(e) => {
                error!(error = %e, "error adding assessment");
                self.set_banner(Banner::error(format!("Error adding assessment: {e}")));
            }
        }

        self.refresh().await;
        self.sync_grid().await;

        result.map(|_| record).map_err(ActionError::from)
    }

    /// Persist edits to an existing record, then refresh.
    #[instrument(skip(self, record), fields(store = self.store.name(), id = %record.id))]
    pub async fn update(&self, record: &Assessment) -> Result<(), ApiError> {
        let result = self.store.update(record).await;
        match &result {
            Ok(_) => self.set_banner(Banner::success("Assessment updated successfully!")),
            Err(e) => {
                error!(error = %e, "error updating assessment");
                self.set_banner(Banner::error(format!("Error updating assessment: {e}")));
            }
        }

        self.refresh().await;
        result.map(|_| ())
    }

    /// Delete a record after the user confirms.
    #[instrument(skip(self, confirm), fields(store = self.store.name()))]
    pub async fn delete(
        &self,
        id: &AssessmentId,
        confirm: &dyn Confirm,
    ) -> Result<DeleteOutcome, ApiError> {
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(DeleteOutcome::Cancelled);
        }

        let result = self.store.delete(id).await;
        match &result {
            Ok(_) => {
                info!(%id, "assessment deleted");
                self.set_banner(Banner::success("Assessment deleted successfully!"));
            }
            Err(e) => {
                error!(error = %e, "error deleting assessment");
                self.set_banner(Banner::error(format!("Error deleting assessment: {e}")));
            }
        }

        self.refresh().await;
        result.map(|_| DeleteOutcome::Deleted)
    }

    /// Push a fresh list into the attached grid and broadcast it.
    ///
    /// Best effort: a failed fetch is logged and nothing is pushed.
    pub async fn sync_grid(&self) {
        let rows = match self.store.list().await {
            Ok(rows) => rows,
            Err(e) => {
                error!(error = %e, "error populating grid");
                return;
            }
        };

        if let Some(grid) = &self.grid {
            grid.set_rows(&rows);
        }
        // No subscribers is fine.
        let _ = self.events.send(SkillsDataLoaded { rows });
    }

    fn set_state(&self, state: ViewState) {
        *lock(&self.state) = state;
    }

    fn set_banner(&self, banner: Banner) {
        *lock(&self.banner) = Some(banner);
    }
}

/// Lock ignoring poisoning; the guarded values are plain snapshots.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
