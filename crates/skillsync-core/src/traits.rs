//! Core trait definitions for assessment stores and view collaborators.
//!
//! `AssessmentStore` is implemented by the `skillsync-client` crate; the
//! `Confirm` and `GridSink` seams are implemented by whoever hosts the view.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::model::{Assessment, AssessmentId};

// ---------------------------------------------------------------------------
// Store trait
// ---------------------------------------------------------------------------

/// The five operations exposed by the assessments endpoint.
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Human-readable backend name (e.g. "http").
    fn name(&self) -> &str;

    /// Fetch every record.
    async fn list(&self) -> Result<Vec<Assessment>, ApiError>;

    /// Fetch one record; `None` when the endpoint has no such id.
    async fn read(&self, id: &AssessmentId) -> Result<Option<Assessment>, ApiError>;

    /// Persist a new record.
    async fn create(&self, record: &Assessment) -> Result<Acknowledgement, ApiError>;

    /// Persist changes to an existing record.
    async fn update(&self, record: &Assessment) -> Result<Acknowledgement, ApiError>;

    /// Remove a record.
    async fn delete(&self, id: &AssessmentId) -> Result<Acknowledgement, ApiError>;
}

macro_rules! forward_store {
    ($ptr:ident) => {
        #[async_trait]
        impl<T: AssessmentStore + ?Sized> AssessmentStore for $ptr<T> {
            fn name(&self) -> &str {
                (**self).name()
            }

            async fn list(&self) -> Result<Vec<Assessment>, ApiError> {
                (**self).list().await
            }

            async fn read(&self, id: &AssessmentId) -> Result<Option<Assessment>, ApiError> {
                (**self).read(id).await
            }

            async fn create(&self, record: &Assessment) -> Result<Acknowledgement, ApiError> {
                (**self).create(record).await
            }

            async fn update(&self, record: &Assessment) -> Result<Acknowledgement, ApiError> {
                (**self).update(record).await
            }

            async fn delete(&self, id: &AssessmentId) -> Result<Acknowledgement, ApiError> {
                (**self).delete(id).await
            }
        }
    };
}

forward_store!(Box);
forward_store!(Arc);

/// Reply to a mutating operation, passed through from the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "SkillAssessmentId", default)]
    pub id: Option<AssessmentId>,
}

impl Acknowledgement {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            id: None,
        }
    }
}

// ---------------------------------------------------------------------------
// View collaborators
// ---------------------------------------------------------------------------

/// Blocking yes/no prompt shown before destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Always answers the same way. Used for `--yes` and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// A tabular widget that mirrors the assessment list.
///
/// The binder pushes the full list after every grid sync; implementations
/// replace their rows wholesale.
pub trait GridSink: Send + Sync {
    fn set_rows(&self, rows: &[Assessment]);
}

/// Broadcast after each grid sync with the rows that were pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillsDataLoaded {
    pub rows: Vec<Assessment>,
}
