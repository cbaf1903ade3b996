use actix_web::{HttpRequest, HttpResponse, post, web};
use tracing::info;

use crate::application::auth_service::AuthService;
use crate::domain::error::DomainError;
use crate::presentation::dto::{LoginRequest, TokenResponse};
use crate::presentation::utils::request_id;

#[post("/login")]
pub async fn login(
    req: HttpRequest,
    service: web::Data<AuthService>,
    payload: Option<web::Json<LoginRequest>>,
) -> Result<HttpResponse, DomainError> {
    // an absent or unreadable body counts as `{}`
    let payload = payload.map(web::Json::into_inner).unwrap_or_default();
    let token = service.login(payload.email.as_deref(), payload.password.as_deref())?;

    info!(request_id = %request_id(&req), "user logged in");

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}
