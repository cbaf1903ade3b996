use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;

use crate::application::talker_service::TalkerService;
use crate::domain::error::DomainError;
use crate::presentation::dto::HealthResponse;

/// Root ping. Also resets the data file from the seed when one is configured.
#[get("/")]
pub async fn index(talkers: web::Data<TalkerService>) -> Result<HttpResponse, DomainError> {
    talkers.restore_seed().await?;
    Ok(HttpResponse::Ok().finish())
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}
