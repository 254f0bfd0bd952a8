use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::util::ServiceExt; // for oneshot

fn app() -> Router {
    surveyor_ui::create_app(surveyor_ui::AppState::new())
}

#[tokio::test]
async fn given_no_selection_when_visiting_manage_then_renders_pending_page() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/accreditations/manage")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("spinner"));
    assert!(html.contains("Resolving selected accreditation"));
}

#[tokio::test]
async fn given_selection_when_visiting_manage_then_redirects_to_detail_page() {
    let app = app();

    let select = Request::builder()
        .method(Method::POST)
        .uri("/api/context/accreditation")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"id":"jci-hospital-8"}"#))
        .unwrap();
    let response = app.clone().oneshot(select).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/accreditations/manage")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/accreditations/jci-hospital-8"
    );
}

#[tokio::test]
async fn given_unknown_accreditation_when_selecting_then_returns_404() {
    let select = Request::builder()
        .method(Method::POST)
        .uri("/api/context/accreditation")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"id":"no-such-program"}"#))
        .unwrap();
    let response = app().oneshot(select).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_known_accreditation_when_visiting_detail_page_then_chapters_are_rendered() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/accreditations/jci-hospital-8")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("JCI Hospital Standards"));
    assert!(html.contains("International Patient Safety Goals"));
}

#[tokio::test]
async fn given_stylesheet_on_disk_when_requested_then_it_is_served() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/static/styles.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let css = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(css.contains(".spinner"));
}

#[tokio::test]
async fn given_missing_static_file_when_requested_then_returns_404() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/static/no-such-asset.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_404_fallback_renders_html() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("404 - Page Not Found"));
}
