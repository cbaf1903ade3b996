use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::application::talker_service::TalkerService;
use crate::domain::error::DomainError;
use crate::domain::talker::TalkerDraft;
use crate::presentation::dto::SearchQuery;
use crate::presentation::utils::{BearerToken, parse_id, request_id};

#[get("/talker")]
pub async fn list_talkers(
    talkers: web::Data<TalkerService>,
) -> Result<HttpResponse, DomainError> {
    Ok(HttpResponse::Ok().json(talkers.list().await?))
}

// Registered ahead of `/talker/{id}` so "search" is not taken for an id.
#[get("/talker/search")]
pub async fn search_talkers(
    _token: BearerToken,
    talkers: web::Data<TalkerService>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, DomainError> {
    let found = talkers.search(query.q.as_deref()).await?;
    Ok(HttpResponse::Ok().json(found))
}

#[get("/talker/{id}")]
pub async fn get_talker(
    talkers: web::Data<TalkerService>,
    path: web::Path<String>,
) -> Result<HttpResponse, DomainError> {
    let raw = path.into_inner();
    let id = parse_id(&raw).ok_or(DomainError::TalkerNotFound(raw))?;
    let talker = talkers.get(id).await?;
    Ok(HttpResponse::Ok().json(talker))
}

#[post("/talker")]
pub async fn create_talker(
    req: HttpRequest,
    _token: BearerToken,
    talkers: web::Data<TalkerService>,
    payload: web::Json<TalkerDraft>,
) -> Result<HttpResponse, DomainError> {
    let fields = payload.into_inner().validate()?;
    let talker = talkers.create(fields).await?;

    info!(request_id = %request_id(&req), talker_id = talker.id, "talker created");

    Ok(HttpResponse::Created().json(talker))
}

#[put("/talker/{id}")]
pub async fn update_talker(
    req: HttpRequest,
    _token: BearerToken,
    talkers: web::Data<TalkerService>,
    path: web::Path<String>,
    payload: web::Json<TalkerDraft>,
) -> Result<HttpResponse, DomainError> {
    let fields = payload.into_inner().validate()?;
    let raw = path.into_inner();
    let updated = match parse_id(&raw) {
        Some(id) => talkers.update(id, fields).await?,
        None => None,
    };
    let talker = updated.ok_or(DomainError::TalkerNotFound(raw))?;

    info!(request_id = %request_id(&req), talker_id = talker.id, "talker updated");

    Ok(HttpResponse::Ok().json(talker))
}

#[delete("/talker/{id}")]
pub async fn delete_talker(
    req: HttpRequest,
    _token: BearerToken,
    talkers: web::Data<TalkerService>,
    path: web::Path<String>,
) -> Result<HttpResponse, DomainError> {
    let raw = path.into_inner();
    let removed = match parse_id(&raw) {
        Some(id) => talkers.delete(id).await?,
        None => 0,
    };

    info!(request_id = %request_id(&req), talker_id = %raw, removed, "talker deleted");

    Ok(HttpResponse::NoContent().finish())
}
