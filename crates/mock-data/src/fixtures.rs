// Static fixture arrays and the linear-scan lookups over them.
//
// Fixtures are created once per process and never mutated. Parent/child
// relations exist only as matching id strings; nothing enforces them.

use crate::{
    Accreditation, AccreditationStatus, Activity, ActivityLogEntry, ActivityStatus, Chapter,
    DocumentAssessmentReport, Facility, Notification, NotificationSeverity, Policy, Standard,
    SubStandard,
};
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

static ACCREDITATIONS: Lazy<Vec<Accreditation>> = Lazy::new(|| {
    vec![
        Accreditation {
            id: "jci-hospital-8".to_string(),
            name: "JCI Hospital Standards, 8th Edition".to_string(),
            authority: "Joint Commission International".to_string(),
            description: "International accreditation standards for hospitals, covering \
                          patient safety goals and organizational management."
                .to_string(),
            status: AccreditationStatus::Active,
        },
        Accreditation {
            id: "cbahi-hosp-3".to_string(),
            name: "CBAHI Hospital Standards, 3rd Edition".to_string(),
            authority: "Saudi Central Board for Accreditation of Healthcare Institutions"
                .to_string(),
            description: "National hospital accreditation standards for the Kingdom of \
                          Saudi Arabia."
                .to_string(),
            status: AccreditationStatus::Active,
        },
        Accreditation {
            id: "dnv-niaho-draft".to_string(),
            name: "DNV NIAHO (draft import)".to_string(),
            authority: "DNV Healthcare".to_string(),
            description: "Imported program shell; chapters not yet loaded.".to_string(),
            status: AccreditationStatus::Draft,
        },
    ]
});

static CHAPTERS: Lazy<Vec<Chapter>> = Lazy::new(|| {
    vec![
        Chapter {
            id: "jci-ipsg".to_string(),
            accreditation_id: "jci-hospital-8".to_string(),
            code: "IPSG".to_string(),
            title: "International Patient Safety Goals".to_string(),
        },
        Chapter {
            id: "jci-qps".to_string(),
            accreditation_id: "jci-hospital-8".to_string(),
            code: "QPS".to_string(),
            title: "Quality Improvement and Patient Safety".to_string(),
        },
        Chapter {
            id: "cbahi-mm".to_string(),
            accreditation_id: "cbahi-hosp-3".to_string(),
            code: "MM".to_string(),
            title: "Medication Management".to_string(),
        },
    ]
});

static STANDARDS: Lazy<Vec<Standard>> = Lazy::new(|| {
    vec![
        Standard {
            id: "ipsg-1".to_string(),
            chapter_id: "jci-ipsg".to_string(),
            code: "IPSG.1".to_string(),
            title: "Identify Patients Correctly".to_string(),
            description: "The hospital develops and implements a process to improve \
                          accuracy of patient identification."
                .to_string(),
        },
        Standard {
            id: "ipsg-2".to_string(),
            chapter_id: "jci-ipsg".to_string(),
            code: "IPSG.2".to_string(),
            title: "Improve Effective Communication".to_string(),
            description: "The hospital develops and implements a process to improve the \
                          effectiveness of verbal and telephone communication."
                .to_string(),
        },
        Standard {
            id: "qps-4".to_string(),
            chapter_id: "jci-qps".to_string(),
            code: "QPS.4".to_string(),
            title: "Data Aggregation and Analysis".to_string(),
            description: "The quality program aggregates and analyzes measurement data."
                .to_string(),
        },
        Standard {
            id: "mm-5".to_string(),
            chapter_id: "cbahi-mm".to_string(),
            code: "MM.5".to_string(),
            title: "Safe Medication Storage".to_string(),
            description: "Medications are stored under conditions suitable for product \
                          stability and security."
                .to_string(),
        },
    ]
});

static SUB_STANDARDS: Lazy<Vec<SubStandard>> = Lazy::new(|| {
    vec![
        SubStandard {
            id: "ipsg-1-me1".to_string(),
            standard_id: "ipsg-1".to_string(),
            code: "IPSG.1 ME1".to_string(),
            title: "Patients are identified using two identifiers".to_string(),
        },
        SubStandard {
            id: "ipsg-1-me2".to_string(),
            standard_id: "ipsg-1".to_string(),
            code: "IPSG.1 ME2".to_string(),
            title: "Identification occurs before treatments and procedures".to_string(),
        },
        SubStandard {
            id: "mm-5-me1".to_string(),
            standard_id: "mm-5".to_string(),
            code: "MM.5 ME1".to_string(),
            title: "High-alert medications are stored separately".to_string(),
        },
    ]
});

static ACTIVITIES: Lazy<Vec<Activity>> = Lazy::new(|| {
    vec![
        Activity {
            id: "act-1001".to_string(),
            sub_standard_id: "ipsg-1-me1".to_string(),
            project_id: "proj-riyadh-2026".to_string(),
            title: "Audit wristband compliance on inpatient wards".to_string(),
            status: ActivityStatus::InProgress,
            due_date: ts(2026, 9, 15, 0, 0),
        },
        Activity {
            id: "act-1002".to_string(),
            sub_standard_id: "ipsg-1-me1".to_string(),
            project_id: "proj-jeddah-2026".to_string(),
            title: "Review patient identification policy".to_string(),
            status: ActivityStatus::Pending,
            due_date: ts(2026, 10, 1, 0, 0),
        },
        Activity {
            id: "act-1003".to_string(),
            sub_standard_id: "ipsg-1-me1".to_string(),
            project_id: "proj-riyadh-2026".to_string(),
            title: "Staff training on two-identifier verification".to_string(),
            status: ActivityStatus::Complete,
            due_date: ts(2026, 8, 1, 0, 0),
        },
        Activity {
            id: "act-2001".to_string(),
            sub_standard_id: "mm-5-me1".to_string(),
            project_id: "proj-riyadh-2026".to_string(),
            title: "Relabel high-alert medication storage".to_string(),
            status: ActivityStatus::Pending,
            due_date: ts(2026, 9, 30, 0, 0),
        },
    ]
});

static FACILITIES: Lazy<Vec<Facility>> = Lazy::new(|| {
    vec![
        Facility {
            id: "fac-kfmc".to_string(),
            name: "King Fahad Medical City".to_string(),
            city: "Riyadh".to_string(),
            facility_type: "Tertiary Hospital".to_string(),
            bed_count: 1200,
        },
        Facility {
            id: "fac-ngh-jed".to_string(),
            name: "National Guard Hospital Jeddah".to_string(),
            city: "Jeddah".to_string(),
            facility_type: "General Hospital".to_string(),
            bed_count: 550,
        },
    ]
});

static NOTIFICATIONS: Lazy<Vec<Notification>> = Lazy::new(|| {
    vec![
        Notification {
            id: "ntf-1".to_string(),
            title: "Survey window announced".to_string(),
            message: "The JCI mock survey is scheduled for the week of October 12."
                .to_string(),
            severity: NotificationSeverity::Info,
            created_at: ts(2026, 8, 18, 9, 30),
            read: false,
        },
        Notification {
            id: "ntf-2".to_string(),
            title: "3 activities overdue".to_string(),
            message: "Three IPSG activities for project Riyadh 2026 are past due."
                .to_string(),
            severity: NotificationSeverity::Warning,
            created_at: ts(2026, 8, 20, 14, 5),
            read: false,
        },
    ]
});

static ACTIVITY_LOG: Lazy<Vec<ActivityLogEntry>> = Lazy::new(|| {
    vec![
        ActivityLogEntry {
            id: "log-1".to_string(),
            actor: "amal.q".to_string(),
            action: "completed".to_string(),
            target: "act-1003".to_string(),
            ts: ts(2026, 8, 19, 11, 42),
        },
        ActivityLogEntry {
            id: "log-2".to_string(),
            actor: "surveyor-ai".to_string(),
            action: "assessed".to_string(),
            target: "Patient Identification Policy v4".to_string(),
            ts: ts(2026, 8, 21, 8, 17),
        },
    ]
});

static POLICIES: Lazy<Vec<Policy>> = Lazy::new(|| {
    vec![
        Policy {
            id: "pol-pid-v4".to_string(),
            title: "Patient Identification Policy v4".to_string(),
            category: "Patient Safety".to_string(),
            created_at: ts(2026, 6, 2, 0, 0),
        },
        Policy {
            id: "pol-ham-v2".to_string(),
            title: "High-Alert Medication Handling v2".to_string(),
            category: "Medication Management".to_string(),
            created_at: ts(2026, 7, 11, 0, 0),
        },
    ]
});

static REPORTS: Lazy<Vec<DocumentAssessmentReport>> = Lazy::new(|| {
    vec![DocumentAssessmentReport {
        id: "rpt-0001".to_string(),
        document_name: "Patient Identification Policy v4".to_string(),
        policy_id: Some("pol-pid-v4".to_string()),
        score: 82,
        findings: vec![
            "Policy lacks a defined review cycle".to_string(),
            "Two-identifier rule not referenced for outpatient phlebotomy".to_string(),
        ],
        created_at: ts(2026, 8, 21, 8, 17),
    }]
});

pub fn accreditations() -> &'static [Accreditation] {
    &ACCREDITATIONS
}

/// Find one accreditation by id.
pub fn accreditation(id: &str) -> Option<&'static Accreditation> {
    ACCREDITATIONS.iter().find(|a| a.id == id)
}

pub fn chapters_for(accreditation_id: &str) -> Vec<&'static Chapter> {
    CHAPTERS
        .iter()
        .filter(|c| c.accreditation_id == accreditation_id)
        .collect()
}

pub fn standards_for(chapter_id: &str) -> Vec<&'static Standard> {
    STANDARDS
        .iter()
        .filter(|s| s.chapter_id == chapter_id)
        .collect()
}

pub fn sub_standards_for(standard_id: &str) -> Vec<&'static SubStandard> {
    SUB_STANDARDS
        .iter()
        .filter(|s| s.standard_id == standard_id)
        .collect()
}

pub fn sub_standard(id: &str) -> Option<&'static SubStandard> {
    SUB_STANDARDS.iter().find(|s| s.id == id)
}

/// Activities attached to a sub-standard, optionally narrowed to one project.
pub fn activities_for(sub_standard_id: &str, project_id: Option<&str>) -> Vec<&'static Activity> {
    ACTIVITIES
        .iter()
        .filter(|a| a.sub_standard_id == sub_standard_id)
        .filter(|a| project_id.map_or(true, |p| a.project_id == p))
        .collect()
}

pub fn facilities() -> &'static [Facility] {
    &FACILITIES
}

pub fn notifications() -> &'static [Notification] {
    &NOTIFICATIONS
}

pub fn activity_log() -> &'static [ActivityLogEntry] {
    &ACTIVITY_LOG
}

/// Seed records for the policy store.
pub fn policies() -> Vec<Policy> {
    POLICIES.clone()
}

/// Seed records for the document-assessment report store.
pub fn reports() -> Vec<DocumentAssessmentReport> {
    REPORTS.clone()
}
