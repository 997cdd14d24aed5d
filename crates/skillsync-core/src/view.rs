//! View state shown by the assessment list and its notification banner.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::model::Assessment;

/// How long a banner stays up before it disappears on its own.
pub const BANNER_LIFETIME: Duration = Duration::from_secs(3);

/// What the list container currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// A list request is in flight.
    #[default]
    Loading,
    /// The last list request returned no records.
    Empty,
    /// The last list request returned these records.
    Loaded(Vec<Assessment>),
    /// The last list request failed.
    Failed(String),
}

impl ViewState {
    pub fn from_records(records: Vec<Assessment>) -> Self {
        if records.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Loaded(records)
        }
    }

    /// Records currently on screen.
    pub fn records(&self) -> &[Assessment] {
        match self {
            ViewState::Loaded(records) => records,
            _ => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ViewState::Failed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// A transient, dismissible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(BannerKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(BannerKind::Error, message)
    }

    fn new(kind: BannerKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Utc::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }

    /// Whether the banner is still on screen at `now`.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        let lifetime = chrono::Duration::milliseconds(BANNER_LIFETIME.as_millis() as i64);
        now >= self.shown_at && now - self.shown_at < lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_becomes_empty_state() {
        assert_eq!(ViewState::from_records(vec![]), ViewState::Empty);
        assert!(ViewState::Empty.records().is_empty());
    }

    #[test]
    fn banner_expires_after_lifetime() {
        let banner = Banner::success("saved");
        let shown = banner.shown_at;
        assert!(banner.is_visible_at(shown));
        assert!(banner.is_visible_at(shown + chrono::Duration::milliseconds(2_999)));
        assert!(!banner.is_visible_at(shown + chrono::Duration::seconds(3)));
    }
}
