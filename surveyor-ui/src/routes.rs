use crate::templates::{AccreditationVm, ChapterVm};
use crate::token_usage::{log_token_usage, TokenUsage};
use crate::{AppResult, AppState};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use mock_data::{fixtures, DocumentAssessmentReport, Policy};
use serde::Deserialize;
use tracing::{debug, error, info};

// Query parameters for the activities endpoint
#[derive(Deserialize, Debug, Clone)]
pub struct ActivitiesQuery {
    #[serde(rename = "projectId")]
    pub project_id: Option<String>,
}

fn render(state: &AppState, template: &str, context: &tera::Context) -> AppResult<Html<String>> {
    let html = state.tera.render(template, context).map_err(|e| {
        error!("Template rendering failed for {}: {}", template, e);
        e
    })?;
    Ok(Html(html))
}

// ---------------- HTML pages ----------------

/// List accreditations - HTML response
#[axum::debug_handler]
pub async fn list_accreditations_html(State(state): State<AppState>) -> AppResult<Html<String>> {
    debug!("Handling HTML list accreditations");

    let accreditations: Vec<AccreditationVm> = fixtures::accreditations()
        .iter()
        .map(AccreditationVm::from_fixture)
        .collect();

    let mut context = tera::Context::new();
    context.insert("accreditations", &accreditations);
    context.insert("current_page", &"accreditations");
    context.insert("selected_id", &state.selection.selected());

    render(&state, "accreditations_list.html", &context)
}

/// Manage page: redirect to the selected accreditation's detail page, or
/// render the pending page until a selection exists.
#[axum::debug_handler]
pub async fn manage_accreditation(State(state): State<AppState>) -> AppResult<Response> {
    match state.selection.selected() {
        Some(id) => {
            info!("Manage page redirecting to selected accreditation: {}", id);
            Ok(Redirect::to(&format!("/accreditations/{}", id)).into_response())
        }
        None => {
            debug!("No accreditation selected; rendering pending page");
            let mut context = tera::Context::new();
            context.insert("current_page", &"accreditations");
            Ok(render(&state, "manage_pending.html", &context)?.into_response())
        }
    }
}

/// Accreditation detail - HTML response
#[axum::debug_handler]
pub async fn get_accreditation_html(
    State(state): State<AppState>,
    Path(accreditation_id): Path<String>,
) -> AppResult<Html<String>> {
    debug!(
        "Handling HTML request for accreditation detail: {}",
        accreditation_id
    );

    let accreditation = fixtures::accreditation(&accreditation_id);
    let chapters: Vec<ChapterVm> = fixtures::chapters_for(&accreditation_id)
        .into_iter()
        .map(ChapterVm::from_fixture)
        .collect();
    let error = if accreditation.is_none() {
        info!("Accreditation not found: {}", accreditation_id);
        Some(format!("Accreditation '{}' not found", accreditation_id))
    } else {
        None
    };

    let mut context = tera::Context::new();
    context.insert("accreditation", &accreditation);
    context.insert("chapters", &chapters);
    context.insert("error", &error);
    context.insert("current_page", &"accreditations");

    render(&state, "accreditation_detail.html", &context)
}

// ---------------- Accreditation hierarchy API ----------------

/// List accreditations - JSON API response
#[axum::debug_handler]
pub async fn list_accreditations_api() -> Response {
    let accreditations = fixtures::accreditations();
    info!(
        "Successfully retrieved {} accreditations for API",
        accreditations.len()
    );
    Json(accreditations).into_response()
}

/// Get accreditation detail - JSON API response
#[axum::debug_handler]
pub async fn get_accreditation_api(Path(accreditation_id): Path<String>) -> Response {
    debug!(
        "Handling JSON API request for accreditation: {}",
        accreditation_id
    );

    match fixtures::accreditation(&accreditation_id) {
        Some(accreditation) => Json(accreditation).into_response(),
        None => {
            info!("Accreditation not found: {}", accreditation_id);
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "Not found" })),
            )
                .into_response()
        }
    }
}

/// List chapters under an accreditation - JSON API response
#[axum::debug_handler]
pub async fn list_chapters_api(Path(accreditation_id): Path<String>) -> Response {
    let chapters = fixtures::chapters_for(&accreditation_id);
    debug!(
        "Retrieved {} chapters for accreditation {}",
        chapters.len(),
        accreditation_id
    );
    Json(chapters).into_response()
}

/// List standards under a chapter - JSON API response
#[axum::debug_handler]
pub async fn list_standards_api(Path(chapter_id): Path<String>) -> Response {
    let standards = fixtures::standards_for(&chapter_id);
    debug!(
        "Retrieved {} standards for chapter {}",
        standards.len(),
        chapter_id
    );
    Json(standards).into_response()
}

/// List sub-standards under a standard - JSON API response
#[axum::debug_handler]
pub async fn list_sub_standards_api(Path(standard_id): Path<String>) -> Response {
    let sub_standards = fixtures::sub_standards_for(&standard_id);
    debug!(
        "Retrieved {} sub-standards for standard {}",
        sub_standards.len(),
        standard_id
    );
    Json(sub_standards).into_response()
}

/// List activities under a sub-standard, optionally filtered by project
#[axum::debug_handler]
pub async fn list_activities_api(
    Path(sub_standard_id): Path<String>,
    Query(query): Query<ActivitiesQuery>,
) -> Response {
    debug!(
        "Handling activities request for sub-standard {}: {:?}",
        sub_standard_id, query
    );

    if fixtures::sub_standard(&sub_standard_id).is_none() {
        info!("Sub-standard not found: {}", sub_standard_id);
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Sub-standard not found" })),
        )
            .into_response();
    }

    let activities = fixtures::activities_for(&sub_standard_id, query.project_id.as_deref());
    info!(
        "Retrieved {} activities for sub-standard {}",
        activities.len(),
        sub_standard_id
    );
    Json(serde_json::json!({
        "subStandardId": sub_standard_id,
        "activities": activities,
    }))
    .into_response()
}

// ---------------- Flat fixture lists ----------------

#[axum::debug_handler]
pub async fn list_facilities_api() -> Response {
    Json(fixtures::facilities()).into_response()
}

#[axum::debug_handler]
pub async fn list_notifications_api() -> Response {
    Json(fixtures::notifications()).into_response()
}

/// Acknowledge notifications. The mock fixtures are immutable, so this
/// accepts any body, mutates nothing, and reports success.
#[axum::debug_handler]
pub async fn mark_notifications_api() -> Response {
    debug!("Notification acknowledgement received (not persisted)");
    Json(serde_json::json!({ "success": true })).into_response()
}

#[axum::debug_handler]
pub async fn list_activity_log_api() -> Response {
    Json(fixtures::activity_log()).into_response()
}

// ---------------- Selection context ----------------

#[derive(Debug, Deserialize)]
pub struct SelectAccreditationBody {
    pub id: String,
}

/// Set the currently selected accreditation
#[axum::debug_handler]
pub async fn select_accreditation_api(
    State(state): State<AppState>,
    Json(body): Json<SelectAccreditationBody>,
) -> Response {
    if fixtures::accreditation(&body.id).is_none() {
        info!("Cannot select unknown accreditation: {}", body.id);
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Not found" })),
        )
            .into_response();
    }

    state.selection.select(&body.id);
    info!("Selected accreditation: {}", body.id);
    Json(serde_json::json!({ "success": true })).into_response()
}

// ---------------- Policy store ----------------

#[derive(Debug, Deserialize)]
pub struct CreatePolicyBody {
    pub title: String,
    pub category: String,
}

#[axum::debug_handler]
pub async fn list_policies_api(State(state): State<AppState>) -> Response {
    Json(state.policies.list()).into_response()
}

/// Create a policy record in the in-memory store
#[axum::debug_handler]
pub async fn create_policy_api(
    State(state): State<AppState>,
    Json(body): Json<CreatePolicyBody>,
) -> Response {
    let policy = Policy {
        id: format!("pol-{}", uuid::Uuid::new_v4()),
        title: body.title,
        category: body.category,
        created_at: chrono::Utc::now(),
    };
    info!("Created policy {}", policy.id);
    state.policies.add(policy.clone());
    (StatusCode::CREATED, Json(policy)).into_response()
}

/// Delete a policy by id. Always reports success; a miss is a no-op.
#[axum::debug_handler]
pub async fn delete_policy_api(
    State(state): State<AppState>,
    Path(policy_id): Path<String>,
) -> Response {
    if state.policies.remove(&policy_id) {
        info!("Deleted policy {}", policy_id);
    } else {
        debug!("Delete for unknown policy {} was a no-op", policy_id);
    }
    Json(serde_json::json!({ "success": true })).into_response()
}

// ---------------- Document-assessment report store ----------------

#[derive(Debug, Deserialize)]
pub struct CreateReportBody {
    #[serde(rename = "documentName")]
    pub document_name: String,
    #[serde(rename = "policyId", default)]
    pub policy_id: Option<String>,
    pub score: u32,
    #[serde(default)]
    pub findings: Vec<String>,
    #[serde(rename = "tokenUsage", default)]
    pub token_usage: Option<TokenUsage>,
}

#[axum::debug_handler]
pub async fn list_reports_api(State(state): State<AppState>) -> Response {
    Json(state.reports.list()).into_response()
}

/// Record a document-assessment report; logs token usage when reported
#[axum::debug_handler]
pub async fn create_report_api(
    State(state): State<AppState>,
    Json(body): Json<CreateReportBody>,
) -> Response {
    if let Some(usage) = &body.token_usage {
        log_token_usage(usage);
    }

    let report = DocumentAssessmentReport {
        id: format!("rpt-{}", uuid::Uuid::new_v4()),
        document_name: body.document_name,
        policy_id: body.policy_id,
        score: body.score,
        findings: body.findings,
        created_at: chrono::Utc::now(),
    };
    info!(
        "Recorded document-assessment report {} for '{}'",
        report.id, report.document_name
    );
    state.reports.add(report.clone());
    (StatusCode::CREATED, Json(report)).into_response()
}

/// Delete a report by id. Same contract as policy deletion: a miss is a no-op.
#[axum::debug_handler]
pub async fn delete_report_api(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
) -> Response {
    if state.reports.remove(&report_id) {
        info!("Deleted document-assessment report {}", report_id);
    } else {
        debug!("Delete for unknown report {} was a no-op", report_id);
    }
    Json(serde_json::json!({ "success": true })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activities_query_project_id_is_optional() {
        let query: ActivitiesQuery = serde_json::from_str("{}").unwrap();
        assert!(query.project_id.is_none());

        let query: ActivitiesQuery =
            serde_json::from_str(r#"{"projectId":"proj-riyadh-2026"}"#).unwrap();
        assert_eq!(query.project_id.as_deref(), Some("proj-riyadh-2026"));
    }

    #[test]
    fn create_report_body_defaults_optional_fields() {
        let body: CreateReportBody =
            serde_json::from_str(r#"{"documentName":"Consent Form v2","score":55}"#).unwrap();
        assert!(body.policy_id.is_none());
        assert!(body.findings.is_empty());
        assert!(body.token_usage.is_none());
    }
}
