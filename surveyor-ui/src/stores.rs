//! In-process mutable stores behind the dashboard API.
//!
//! Each store wraps a seeded `Vec` in an `Arc<RwLock<..>>`. Entries live for
//! the process lifetime; there is no persistence. Removal by id is a linear
//! scan and silently does nothing when the id is absent.

use mock_data::{fixtures, DocumentAssessmentReport, Policy};
use std::sync::{Arc, RwLock};

/// Store for ad-hoc policy records.
#[derive(Clone)]
pub struct PolicyStore {
    inner: Arc<RwLock<Vec<Policy>>>,
}

impl PolicyStore {
    /// Create a store seeded with the policy fixtures.
    pub fn seeded() -> Self {
        Self {
            inner: Arc::new(RwLock::new(fixtures::policies())),
        }
    }

    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn list(&self) -> Vec<Policy> {
        self.inner.read().expect("policy store lock poisoned").clone()
    }

    pub fn add(&self, policy: Policy) {
        self.inner
            .write()
            .expect("policy store lock poisoned")
            .push(policy);
    }

    /// Remove a policy by id. Returns whether anything was removed.
    pub fn remove(&self, id: &str) -> bool {
        let mut policies = self.inner.write().expect("policy store lock poisoned");
        match policies.iter().position(|p| p.id == id) {
            Some(idx) => {
                policies.remove(idx);
                true
            }
            None => false,
        }
    }
}

/// Store for AI document-assessment reports.
#[derive(Clone)]
pub struct ReportStore {
    inner: Arc<RwLock<Vec<DocumentAssessmentReport>>>,
}

impl ReportStore {
    pub fn seeded() -> Self {
        Self {
            inner: Arc::new(RwLock::new(fixtures::reports())),
        }
    }

    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn list(&self) -> Vec<DocumentAssessmentReport> {
        self.inner.read().expect("report store lock poisoned").clone()
    }

    pub fn add(&self, report: DocumentAssessmentReport) {
        self.inner
            .write()
            .expect("report store lock poisoned")
            .push(report);
    }

    pub fn remove(&self, id: &str) -> bool {
        let mut reports = self.inner.write().expect("report store lock poisoned");
        match reports.iter().position(|r| r.id == id) {
            Some(idx) => {
                reports.remove(idx);
                true
            }
            None => false,
        }
    }
}

/// Currently selected accreditation, shared across requests.
///
/// The manage page redirects based on this; until a selection exists it
/// renders the pending page.
#[derive(Clone, Default)]
pub struct SelectionContext {
    inner: Arc<RwLock<Option<String>>>,
}

impl SelectionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<String> {
        self.inner.read().expect("selection lock poisoned").clone()
    }

    pub fn select(&self, accreditation_id: &str) {
        *self.inner.write().expect("selection lock poisoned") =
            Some(accreditation_id.to_string());
    }
}
