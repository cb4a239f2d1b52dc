use axum::extract::rejection::JsonRejection;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

/// Per-request error taxonomy. Every failure is terminal for its own request
/// only; store state and other in-flight requests are unaffected.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("need content-type 'application/json', but got '{0}'")]
    UnsupportedMediaType(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Translate an axum JSON body rejection into the taxonomy. `headers`
    /// supplies the offending content-type for the 415 message.
    pub fn from_json_rejection(rejection: JsonRejection, headers: &HeaderMap) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                let got = headers
                    .get(header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("");
                ApiError::UnsupportedMediaType(got.to_string())
            }
            JsonRejection::JsonSyntaxError(e) => ApiError::BadRequest(e.to_string()),
            JsonRejection::JsonDataError(e) => ApiError::BadRequest(e.to_string()),
            JsonRejection::BytesRejection(e) => ApiError::Internal(e.to_string()),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            // Not-found is a signal, not a message.
            ApiError::NotFound => status.into_response(),
            other => {
                warn!(%status, error = %other, "request rejected");
                (status, other.to_string()).into_response()
            }
        }
    }
}
