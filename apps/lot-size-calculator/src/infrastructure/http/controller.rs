//! HTTP Controller (Driver Adapter)
//!
//! Axum router that delegates to the calculate-lot-size use case.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::Utc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::application::dto::{CalculateLotSizeRequestDto, CalculationResultDto};
use crate::application::use_cases::CalculateLotSizeUseCase;
use crate::domain::lot_sizing::PipConvention;
use crate::error::ServiceError;
use crate::infrastructure::metrics::{Outcome, get_metrics_handle, record_calculation};

use super::request::LotSizeSubmission;
use super::response::{ApiError, HealthResponse};
use super::view::CalculatorPage;

/// Path of the HTML calculator.
pub const CALCULATOR_PATH: &str = "/calculateLotSize";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Use case for lot size calculations.
    pub calculate: Arc<CalculateLotSizeUseCase>,
    /// Application version.
    pub version: String,
    /// Server start time.
    pub started_at: Instant,
}

impl AppState {
    /// Create state with a fresh use case.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            calculate: Arc::new(CalculateLotSizeUseCase::new()),
            version: version.into(),
            started_at: Instant::now(),
        }
    }

    fn run(
        &self,
        request: &CalculateLotSizeRequestDto,
    ) -> Result<CalculationResultDto, ServiceError> {
        let convention = PipConvention::from_gold_or_jpy(request.is_gold_or_jpy());
        let started = Instant::now();
        let result = self.calculate.execute(request);

        let outcome = if result.is_ok() {
            Outcome::Success
        } else {
            Outcome::Rejected
        };
        record_calculation(convention.as_str(), outcome, started.elapsed());

        result.map_err(ServiceError::from)
    }
}

/// Create the HTTP router with all endpoints.
///
/// Requests matching no route are served from `static_dir`.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index))
        .route(CALCULATOR_PATH, get(show_calculator).post(submit_calculator))
        .route("/api/v1/calculate-lot-size", post(calculate_lot_size))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Redirect {
    Redirect::to(CALCULATOR_PATH)
}

async fn show_calculator() -> Html<String> {
    Html(CalculatorPage::empty().render())
}

async fn submit_calculator(
    State(state): State<AppState>,
    LotSizeSubmission(request): LotSizeSubmission,
) -> Response {
    match state.run(&request) {
        Ok(result) => Html(CalculatorPage::with_result(request, result).render()).into_response(),
        Err(e) => (
            e.code().http_status(),
            Html(CalculatorPage::with_error(request, e.message()).render()),
        )
            .into_response(),
    }
}

async fn calculate_lot_size(
    State(state): State<AppState>,
    body: Result<Json<CalculateLotSizeRequestDto>, JsonRejection>,
) -> Result<Json<CalculationResultDto>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let result = state.run(&request)?;
    Ok(Json(result))
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_secs: state.started_at.elapsed().as_secs(),
        current_time: Utc::now(),
    })
}

async fn metrics_handler() -> impl IntoResponse {
    get_metrics_handle().map_or_else(
        || {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                [("content-type", "text/plain")],
                "Metrics not initialized".to_string(),
            )
        },
        |handle| {
            (
                StatusCode::OK,
                [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
                handle.render(),
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new("1.0.0-test"), "does-not-exist")
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn root_redirects_to_calculator() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            CALCULATOR_PATH
        );
    }

    #[tokio::test]
    async fn health_check_returns_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, "1.0.0-test");
    }

    #[tokio::test]
    async fn form_post_renders_result() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(CALCULATOR_PATH)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(
                        "entryPrice=1.1050&stopLossPrice=1.1000&accountBalance=10000&riskPercentageUWantToRisk=1",
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(r#"<strong id="recommendedLotSize">0.20</strong>"#));
        assert!(html.contains(r#"<strong id="pipsIfLoose">50.00</strong>"#));
    }

    #[tokio::test]
    async fn form_post_with_bad_number_is_422() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(CALCULATOR_PATH)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(
                        "entryPrice=abc&stopLossPrice=1.1000&accountBalance=10000&riskPercentageUWantToRisk=1",
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let html = body_string(response).await;
        assert!(html.contains("Invalid number for &#39;entryPrice&#39;"));
        assert!(html.contains(r#"name="entryPrice" value="abc""#));
    }

    #[tokio::test]
    async fn form_route_with_malformed_json_renders_page() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(CALCULATOR_PATH)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        let html = body_string(response).await;
        assert!(html.contains(r#"<p class="error" role="alert">"#));
        assert!(html.contains(r#"<form"#));
    }

    #[tokio::test]
    async fn api_rejects_malformed_json() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/calculate-lot-size")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_path_without_static_file_is_404() {
        let response = app()
            .oneshot(Request::builder().uri("/nope.css").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
