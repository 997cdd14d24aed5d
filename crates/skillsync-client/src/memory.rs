//! In-memory store for tests and offline use.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use skillsync_core::error::ApiError;
use skillsync_core::model::{Assessment, AssessmentId};
use skillsync_core::traits::{Acknowledgement, AssessmentStore};

use crate::protocol::{Operation, Request};

/// A store that keeps records in memory and applies operations the way the
/// endpoint does.
///
/// Every request body it receives is recorded in wire form, so callers can
/// assert on exactly what would have been sent.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Assessment>>,
    /// Request bodies received, in order.
    requests: Mutex<Vec<Value>>,
    /// When non-zero, every call fails with this HTTP status.
    failing_status: AtomicU32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`.
    pub fn with_records(records: Vec<Assessment>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail with `status`; `None` heals the store.
    pub fn set_failing(&self, status: Option<u16>) {
        self.failing_status
            .store(status.map(u32::from).unwrap_or(0), Ordering::SeqCst);
    }

    /// Request bodies received so far.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received for `operation`.
    pub fn count(&self, operation: Operation) -> usize {
        let op = operation.to_string();
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|body| body["operation"] == op.as_str())
            .count()
    }

    pub fn records(&self) -> Vec<Assessment> {
        self.records.lock().unwrap().clone()
    }

    fn receive(&self, request: Request<'_>) -> Result<(), ApiError> {
        let body = serde_json::to_value(request.envelope())
            .map_err(|e| ApiError::Backend(e.to_string()))?;
        self.requests.lock().unwrap().push(body);

        match self.failing_status.load(Ordering::SeqCst) {
            0 => Ok(()),
            status => Err(ApiError::Status {
                status: status as u16,
                body: "{\"error\": \"injected failure\"}".into(),
            }),
        }
    }
}

#[async_trait]
impl AssessmentStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn list(&self) -> Result<Vec<Assessment>, ApiError> {
        self.receive(Request::List)?;
        Ok(self.records())
    }

    async fn read(&self, id: &AssessmentId) -> Result<Option<Assessment>, ApiError> {
        self.receive(Request::Read(id))?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| &r.id == id)
            .cloned())
    }

    async fn create(&self, record: &Assessment) -> Result<Acknowledgement, ApiError> {
        self.receive(Request::Create(record))?;
        self.upsert(record);
        Ok(Acknowledgement {
            message: Some("Created".into()),
            id: Some(record.id.clone()),
        })
    }

    async fn update(&self, record: &Assessment) -> Result<Acknowledgement, ApiError> {
        self.receive(Request::Update(record))?;
        self.upsert(record);
        Ok(Acknowledgement::with_message("Updated"))
    }

    async fn delete(&self, id: &AssessmentId) -> Result<Acknowledgement, ApiError> {
        self.receive(Request::Delete(id))?;
        self.records.lock().unwrap().retain(|r| &r.id != id);
        Ok(Acknowledgement::with_message("Deleted"))
    }
}

impl MemoryStore {
    /// Put semantics: replace a record with the same id, else append.
    fn upsert(&self, record: &Assessment) {
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillsync_core::model::SkillLevel;

    fn record(id: &str, employee: &str) -> Assessment {
        Assessment {
            id: id.into(),
            employee: employee.into(),
            skill: "Rust".into(),
            current: SkillLevel::Intermediate,
            target: SkillLevel::Expert,
        }
    }

    #[tokio::test]
    async fn applies_operations_like_the_endpoint() {
        let store = MemoryStore::new();
        store.create(&record("a", "Ann")).await.unwrap();
        store.create(&record("b", "Bo")).await.unwrap();

        let mut changed = record("a", "Ann");
        changed.current = SkillLevel::Advanced;
        store.update(&changed).await.unwrap();
        store.delete(&AssessmentId::new("b")).await.unwrap();

        let records = store.list().await.unwrap();
        assert_eq!(records, vec![changed]);
        assert_eq!(store.read(&AssessmentId::new("b")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn records_wire_bodies() {
        let store = MemoryStore::new();
        store.create(&record("a", "Ann")).await.unwrap();
        store.list().await.unwrap();

        let requests = store.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0]["operation"], "create");
        assert_eq!(requests[0]["Employee"], "Ann");
        assert_eq!(store.count(Operation::List), 1);
    }

    #[tokio::test]
    async fn injected_failures_still_record_the_request() {
        let store = MemoryStore::with_records(vec![record("a", "Ann")]);
        store.set_failing(Some(503));

        let err = store.list().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 503, .. }));
        assert_eq!(store.count(Operation::List), 1);

        store.set_failing(None);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
