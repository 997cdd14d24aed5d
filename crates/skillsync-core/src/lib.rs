//! skillsync-core — Data model, store traits, and view binding.
//!
//! This crate defines the assessment record, the `AssessmentStore` contract
//! that every backend implements, and the view binder that turns user
//! actions into store calls and list re-renders.

pub mod binder;
pub mod error;
pub mod model;
pub mod traits;
pub mod view;

pub use binder::{DeleteOutcome, ViewBinder};
pub use error::{ActionError, ApiError, ValidationError};
pub use model::{Assessment, AssessmentDraft, AssessmentId, SkillLevel};
pub use traits::{Acknowledgement, AssessmentStore, Confirm, FixedAnswer, GridSink};
pub use view::{Banner, BannerKind, ViewState};
