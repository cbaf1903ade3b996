use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub const TALKER_NOT_FOUND: &str = "Pessoa palestrante não encontrada";

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{}", TALKER_NOT_FOUND)]
    TalkerNotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            DomainError::TalkerNotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            DomainError::Internal(detail) => {
                error!(%detail, "request failed");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: message.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: DomainError) -> serde_json::Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn status_codes_follow_the_error_kind() {
        assert_eq!(
            DomainError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DomainError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            DomainError::TalkerNotFound("9".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            DomainError::Internal("disk".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn body_carries_the_message() {
        let body = body_of(DomainError::TalkerNotFound("9".into())).await;
        assert_eq!(body, serde_json::json!({ "message": TALKER_NOT_FOUND }));
    }

    #[actix_web::test]
    async fn internal_detail_is_not_exposed() {
        let body = body_of(DomainError::Internal("/var/data: denied".into())).await;
        assert_eq!(body["message"], "internal server error");
    }
}
