use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{Ready, ready};

use crate::domain::error::DomainError;
use crate::domain::validation::validate_token;
use crate::presentation::middleware::RequestId;

/// Raw `authorization` header value that passed the token length check.
///
/// Put it first in a handler's arguments so a bad token is reported before
/// the body is looked at.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl FromRequest for BearerToken {
    type Error = DomainError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        ready(validate_token(token).map(|()| BearerToken(token.unwrap_or_default().to_owned())))
    }
}

/// Path ids that are not non-negative integers match no talker.
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

pub fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|rid| rid.0.clone())
        .unwrap_or_else(|| "unknown".into())
}
