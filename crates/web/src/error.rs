use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use insights::InsightError;
use serde_json::json;
use std::fmt;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Insight(InsightError),
    #[allow(dead_code)]
    BadRequest(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insight(e) => write!(f, "{}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Insight(InsightError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
            Self::Insight(InsightError::QuotaExhausted) => StatusCode::PAYMENT_REQUIRED,
            Self::Insight(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = match &self {
            Self::Insight(InsightError::RateLimited) => {
                json!({
                    "error": "Rate limit exceeded. Please try again later."
                })
            }
            Self::Insight(InsightError::QuotaExhausted) => {
                json!({
                    "error": "Payment required. Please add credits to your AI gateway workspace."
                })
            }
            Self::Insight(e) => {
                tracing::error!("Insight error: {:?}", e);
                json!({
                    "error": e.to_string()
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<InsightError> for WebError {
    fn from(error: InsightError) -> Self {
        Self::Insight(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: WebError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn test_rate_limit_maps_to_429() {
        let status = status_of(WebError::Insight(InsightError::RateLimited));
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_quota_maps_to_402() {
        let status = status_of(WebError::Insight(InsightError::QuotaExhausted));
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    }

    #[test]
    fn test_other_insight_errors_map_to_500() {
        for error in [
            InsightError::MissingCredential,
            InsightError::MalformedResponse("no tool call".to_string()),
            InsightError::UpstreamStatus(503),
        ] {
            assert_eq!(
                status_of(WebError::Insight(error)),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let status = status_of(WebError::BadRequest("missing body".to_string()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
