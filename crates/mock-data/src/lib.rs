// Entity types and static fixtures for the AI Surveyor dashboard.
//
// Everything in this crate is read-only mock data: flat records keyed by
// string ids, related only by matching id fields. Lookups are linear scans
// over fixed arrays.

pub mod fixtures;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level certification program containing chapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accreditation {
    pub id: String,
    pub name: String,
    pub authority: String,
    pub description: String,
    pub status: AccreditationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccreditationStatus {
    Active,
    Draft,
    Retired,
}

impl std::fmt::Display for AccreditationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccreditationStatus::Active => write!(f, "Active"),
            AccreditationStatus::Draft => write!(f, "Draft"),
            AccreditationStatus::Retired => write!(f, "Retired"),
        }
    }
}

/// Chapter within an accreditation program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    #[serde(rename = "accreditationId")]
    pub accreditation_id: String,
    pub code: String,
    pub title: String,
}

/// Standard within a chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standard {
    pub id: String,
    #[serde(rename = "chapterId")]
    pub chapter_id: String,
    pub code: String,
    pub title: String,
    pub description: String,
}

/// Sub-standard (measurable element) within a standard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubStandard {
    pub id: String,
    #[serde(rename = "standardId")]
    pub standard_id: String,
    pub code: String,
    pub title: String,
}

/// Compliance activity attached to a sub-standard, scoped to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "subStandardId")]
    pub sub_standard_id: String,
    #[serde(rename = "projectId")]
    pub project_id: String,
    pub title: String,
    pub status: ActivityStatus,
    #[serde(rename = "dueDate")]
    pub due_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    Pending,
    InProgress,
    Complete,
}

impl std::fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityStatus::Pending => write!(f, "Pending"),
            ActivityStatus::InProgress => write!(f, "In Progress"),
            ActivityStatus::Complete => write!(f, "Complete"),
        }
    }
}

/// Healthcare facility undergoing self-assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(rename = "facilityType")]
    pub facility_type: String,
    #[serde(rename = "bedCount")]
    pub bed_count: u32,
}

/// Dashboard notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: NotificationSeverity,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationSeverity {
    Info,
    Warning,
    Critical,
}

/// Audit-trail entry shown on the activity-log page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: String,
    pub actor: String,
    pub action: String,
    pub target: String,
    pub ts: DateTime<Utc>,
}

/// Facility policy document tracked by the policy store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// AI document-assessment result tracked by the report store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAssessmentReport {
    pub id: String,
    #[serde(rename = "documentName")]
    pub document_name: String,
    #[serde(rename = "policyId", skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    pub score: u32,
    pub findings: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
