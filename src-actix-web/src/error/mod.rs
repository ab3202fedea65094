//! 错误处理模块
//!
//! HTTP 层面的错误以 Kubernetes `Status` 对象返回；求解失败不走这里，
//! 而是写在 `ChallengePayload.response` 中。

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Status;

/// API 错误类型
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API group {0} is not served by this webhook")]
    GroupNotFound(String),

    #[error("solver {0} is not registered")]
    SolverNotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    fn reason(&self) -> &'static str {
        match self {
            Self::GroupNotFound(_) | Self::SolverNotFound(_) => "NotFound",
            Self::BadRequest(_) => "BadRequest",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::GroupNotFound(_) | Self::SolverNotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = Status {
            code: Some(i32::from(status.as_u16())),
            message: Some(self.to_string()),
            reason: Some(self.reason().to_string()),
            status: Some("Failure".to_string()),
            ..Default::default()
        };

        HttpResponse::build(status).json(body)
    }
}
