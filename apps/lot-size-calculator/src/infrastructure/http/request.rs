//! HTTP request types.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::application::dto::{CalculateLotSizeRequestDto, FieldValue};
use crate::error::ServiceError;

use super::view::CalculatorPage;

/// Calculator fields as posted by the HTML form.
///
/// An unchecked checkbox is simply absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateLotSizeForm {
    /// Entry price.
    pub entry_price: Option<String>,
    /// Stop-loss price.
    pub stop_loss_price: Option<String>,
    /// Account balance.
    pub account_balance: Option<String>,
    /// Risk percentage.
    #[serde(rename = "riskPercentageUWantToRisk")]
    pub risk_percentage: Option<String>,
    /// Gold/JPY checkbox, `"on"` when ticked.
    #[serde(rename = "goldOrJPYPair")]
    pub gold_or_jpy_pair: Option<String>,
}

impl From<CalculateLotSizeForm> for CalculateLotSizeRequestDto {
    fn from(form: CalculateLotSizeForm) -> Self {
        Self {
            entry_price: form.entry_price.map(FieldValue::from),
            stop_loss_price: form.stop_loss_price.map(FieldValue::from),
            account_balance: form.account_balance.map(FieldValue::from),
            risk_percentage: form.risk_percentage.map(FieldValue::from),
            gold_or_jpy_pair: form.gold_or_jpy_pair.map(FieldValue::from),
        }
    }
}

/// Calculator submission decoded from either a JSON or a url-encoded body,
/// chosen by `Content-Type`.
#[derive(Debug, Clone)]
pub struct LotSizeSubmission(pub CalculateLotSizeRequestDto);

impl<S> FromRequest<S> for LotSizeSubmission
where
    S: Send + Sync,
{
    type Rejection = SubmissionRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(dto) = Json::<CalculateLotSizeRequestDto>::from_request(req, state)
                .await
                .map_err(|e| SubmissionRejection::new(e.body_text()))?;
            return Ok(Self(dto));
        }

        let Form(form) = Form::<CalculateLotSizeForm>::from_request(req, state)
            .await
            .map_err(|e| SubmissionRejection::new(e.body_text()))?;
        Ok(Self(form.into()))
    }
}

/// Undecodable calculator submission, answered with the calculator page
/// showing the decode error.
#[derive(Debug)]
pub struct SubmissionRejection(ServiceError);

impl SubmissionRejection {
    fn new(message: impl Into<String>) -> Self {
        Self(ServiceError::invalid_request(message))
    }

    /// The underlying error.
    #[must_use]
    pub const fn error(&self) -> &ServiceError {
        &self.0
    }
}

impl IntoResponse for SubmissionRejection {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "calculator submission rejected");
        let page =
            CalculatorPage::with_error(CalculateLotSizeRequestDto::default(), self.0.message());
        (self.0.code().http_status(), Html(page.render())).into_response()
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use axum::body::Body;
    use axum::http::StatusCode;

    fn request(content_type: &str, body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/calculateLotSize")
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn decodes_url_encoded_form() {
        let req = request(
            "application/x-www-form-urlencoded",
            "entryPrice=1.1050&stopLossPrice=1.1000&accountBalance=10000&riskPercentageUWantToRisk=1&goldOrJPYPair=on",
        );
        let LotSizeSubmission(dto) = LotSizeSubmission::from_request(req, &()).await.unwrap();

        assert_eq!(dto.entry_price, Some(FieldValue::Text("1.1050".to_string())));
        assert!(dto.is_gold_or_jpy());
    }

    #[tokio::test]
    async fn unchecked_checkbox_is_absent() {
        let req = request(
            "application/x-www-form-urlencoded",
            "entryPrice=1.1050&stopLossPrice=1.1000&accountBalance=10000&riskPercentageUWantToRisk=1",
        );
        let LotSizeSubmission(dto) = LotSizeSubmission::from_request(req, &()).await.unwrap();

        assert!(dto.gold_or_jpy_pair.is_none());
        assert!(!dto.is_gold_or_jpy());
    }

    #[tokio::test]
    async fn decodes_json_with_charset() {
        let req = request(
            "application/json; charset=utf-8",
            r#"{"entryPrice":2000,"stopLossPrice":"1999.5","goldOrJPYPair":true}"#,
        );
        let LotSizeSubmission(dto) = LotSizeSubmission::from_request(req, &()).await.unwrap();

        assert_eq!(dto.field_text("entryPrice"), "2000");
        assert!(dto.is_gold_or_jpy());
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let req = request("application/json", "{not json");
        let rejection = LotSizeSubmission::from_request(req, &()).await.unwrap_err();
        assert_eq!(rejection.error().code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn rejection_renders_calculator_page() {
        let req = request("application/json", "{not json");
        let rejection = LotSizeSubmission::from_request(req, &()).await.unwrap_err();
        let response = rejection.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(
            response.headers()[CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
    }
}
