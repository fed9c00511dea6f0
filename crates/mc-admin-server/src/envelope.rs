//! Uniform response envelope
//!
//! Every endpoint answers with `{code, message, data, error}` and an HTTP
//! status equal to `code`. Registry misses map to 404; every other failure,
//! gateway errors included, maps to 500.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mc_admin_core::{AdminError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `{code, message, data, error}` wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: u16,
    pub message: String,
    pub data: Option<Value>,
    pub error: Option<String>,
}

impl ApiResponse {
    /// 200 with `data`
    pub fn success(data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => Self {
                code: StatusCode::OK.as_u16(),
                message: "success".to_string(),
                data: Some(data),
                error: None,
            },
            Err(e) => Self::from(AdminError::from(e)),
        }
    }

    /// Failure with the given status and description
    pub fn failure(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: "error".to_string(),
            data: None,
            error: Some(error.into()),
        }
    }

    /// Map an operation outcome into the envelope
    pub fn from_result<T: Serialize>(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => Self::from(e),
        }
    }
}

impl From<AdminError> for ApiResponse {
    fn from(err: AdminError) -> Self {
        let status = if err.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self::failure(status, err.to_string())
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// JSON body extractor whose rejections are reported inside the envelope
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiResponse;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Payload(value)),
            Err(rejection) => Err(rejection_response(rejection)),
        }
    }
}

fn rejection_response(rejection: JsonRejection) -> ApiResponse {
    ApiResponse::failure(rejection.status(), rejection.body_text())
}
