// Library interface for surveyor-ui

pub mod routes;
pub mod stores;
pub mod templates;
pub mod token_usage;

use axum::{
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use tera::Tera;
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    pub policies: stores::PolicyStore,
    pub reports: stores::ReportStore,
    pub selection: stores::SelectionContext,
    pub tera: Tera,
}

impl AppState {
    pub fn new() -> Self {
        // Load templates using crate-absolute path for deterministic resolution
        let tpl_glob = format!("{}/templates/**/*.html", env!("CARGO_MANIFEST_DIR"));
        let mut tera = match Tera::new(&tpl_glob) {
            Ok(t) => t,
            Err(e) => {
                error!("Parsing error for Tera templates ({}): {}", tpl_glob, e);
                std::process::exit(1);
            }
        };
        templates::register_filters(&mut tera);

        Self {
            policies: stores::PolicyStore::seeded(),
            reports: stores::ReportStore::seeded(),
            selection: stores::SelectionContext::new(),
            tera,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// Custom error type for better error handling
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_msg = format!("Internal server error: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, error_msg).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;

// Health check endpoint
async fn health() -> impl IntoResponse {
    "OK"
}

// Fallback handler for 404s
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(
            r#"
<!DOCTYPE html>
<html>
<head>
    <title>404 - Not Found</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; }
        .error { color: #d32f2f; }
    </style>
</head>
<body>
    <h1 class="error">404 - Page Not Found</h1>
    <p><a href="/accreditations">&larr; Back to Accreditations</a></p>
</body>
</html>
    "#,
        ),
    )
}

async fn handle_static_file_error() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Static file not found").into_response()
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // HTML pages
        .route("/accreditations", get(routes::list_accreditations_html))
        .route("/accreditations/manage", get(routes::manage_accreditation))
        .route(
            "/accreditations/:accreditation_id",
            get(routes::get_accreditation_html),
        )
        // Accreditation hierarchy API
        .route("/api/accreditations", get(routes::list_accreditations_api))
        .route(
            "/api/accreditations/:accreditation_id",
            get(routes::get_accreditation_api),
        )
        .route(
            "/api/accreditations/:accreditation_id/chapters",
            get(routes::list_chapters_api),
        )
        .route(
            "/api/chapters/:chapter_id/standards",
            get(routes::list_standards_api),
        )
        .route(
            "/api/standards/:standard_id/sub-standards",
            get(routes::list_sub_standards_api),
        )
        .route(
            "/api/sub-standards/:sub_standard_id/activities",
            get(routes::list_activities_api),
        )
        // Flat fixture lists
        .route("/api/facilities", get(routes::list_facilities_api))
        .route(
            "/api/notifications",
            get(routes::list_notifications_api).patch(routes::mark_notifications_api),
        )
        .route("/api/activity-log", get(routes::list_activity_log_api))
        // Selection context
        .route(
            "/api/context/accreditation",
            post(routes::select_accreditation_api),
        )
        // Policy store
        .route(
            "/api/policies",
            get(routes::list_policies_api).post(routes::create_policy_api),
        )
        .route(
            "/api/policies/:policy_id",
            delete(routes::delete_policy_api),
        )
        // Document-assessment report store
        .route(
            "/api/document-assessment/reports",
            get(routes::list_reports_api).post(routes::create_report_api),
        )
        .route(
            "/api/document-assessment/reports/:report_id",
            delete(routes::delete_report_api),
        )
        // Anchor assets to the crate dir so they resolve from any cwd
        .nest_service(
            "/static",
            ServeDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
                .not_found_service(handle_static_file_error.into_service()),
        )
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_converts_to_internal_server_error() {
        let err = AppError::from(anyhow::anyhow!("template blew up"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn app_error_wraps_any_error_type() {
        fn render() -> AppResult<String> {
            Err(tera::Error::msg("missing template"))?;
            Ok(String::new())
        }
        assert!(render().is_err());
    }
}
