//! Field checks for credentials, tokens and talker payloads.
//!
//! Each check returns `Ok(())` when the value is acceptable, or the
//! [`DomainError`] whose message is sent back to the client. Callers chain
//! them with `?` so the first failing check decides the response.

use crate::domain::error::DomainError;
use crate::domain::talker::TalkDraft;

pub const TOKEN_MIN_LEN: usize = 16;
const PASSWORD_MIN_LEN: usize = 6;
const NAME_MIN_LEN: usize = 3;
const ADULT_AGE: i64 = 18;

pub const EMAIL_REQUIRED: &str = r#"O campo "email" é obrigatório"#;
pub const EMAIL_FORMAT: &str = r#"O "email" deve ter o formato "email@email.com""#;
pub const PASSWORD_REQUIRED: &str = r#"O campo "password" é obrigatório"#;
pub const PASSWORD_LENGTH: &str = r#"O "password" deve ter pelo menos 6 caracteres"#;
pub const TOKEN_MISSING: &str = "Token não encontrado";
pub const TOKEN_INVALID: &str = "Token inválido";
pub const NAME_REQUIRED: &str = r#"O campo "name" é obrigatório"#;
pub const NAME_LENGTH: &str = r#"O "name" deve ter pelo menos 3 caracteres"#;
pub const AGE_REQUIRED: &str = r#"O campo "age" é obrigatório"#;
pub const AGE_MINIMUM: &str = "A pessoa palestrante deve ser maior de idade";
pub const TALK_REQUIRED: &str = r#"O campo "talk" é obrigatório"#;
pub const WATCHED_AT_REQUIRED: &str = r#"O campo "watchedAt" é obrigatório"#;
pub const WATCHED_AT_FORMAT: &str = r#"O campo "watchedAt" deve ter o formato "dd/mm/aaaa""#;
pub const RATE_REQUIRED: &str = r#"O campo "rate" é obrigatório"#;
pub const RATE_RANGE: &str = r#"O campo "rate" deve ser um inteiro de 1 à 5"#;

fn bad_request(message: &str) -> Result<(), DomainError> {
    Err(DomainError::Validation(message.to_string()))
}

fn unauthorized(message: &str) -> Result<(), DomainError> {
    Err(DomainError::Unauthorized(message.to_string()))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Accepts anything containing `@` and `.com`; not an address parser.
pub fn is_email_valid(email: &str) -> bool {
    email.contains('@') && email.contains(".com")
}

pub fn is_password_valid(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LEN
}

pub fn validate_email(email: Option<&str>) -> Result<(), DomainError> {
    match present(email) {
        None => bad_request(EMAIL_REQUIRED),
        Some(email) if !is_email_valid(email) => bad_request(EMAIL_FORMAT),
        Some(_) => Ok(()),
    }
}

pub fn validate_password(password: Option<&str>) -> Result<(), DomainError> {
    match present(password) {
        None => bad_request(PASSWORD_REQUIRED),
        Some(password) if !is_password_valid(password) => bad_request(PASSWORD_LENGTH),
        Some(_) => Ok(()),
    }
}

/// Length is the only property checked; tokens are never looked up.
pub fn validate_token(token: Option<&str>) -> Result<(), DomainError> {
    match present(token) {
        None => unauthorized(TOKEN_MISSING),
        Some(token) if token.chars().count() < TOKEN_MIN_LEN => unauthorized(TOKEN_INVALID),
        Some(_) => Ok(()),
    }
}

pub fn validate_name(name: Option<&str>) -> Result<(), DomainError> {
    match present(name) {
        None => bad_request(NAME_REQUIRED),
        Some(name) if name.chars().count() < NAME_MIN_LEN => bad_request(NAME_LENGTH),
        Some(_) => Ok(()),
    }
}

/// Zero counts as missing.
pub fn validate_age(age: Option<i64>) -> Result<(), DomainError> {
    match age {
        None | Some(0) => bad_request(AGE_REQUIRED),
        Some(age) if age < ADULT_AGE => bad_request(AGE_MINIMUM),
        Some(_) => Ok(()),
    }
}

fn date_part(part: &str, max_digits: usize) -> Option<u32> {
    if part.is_empty() || part.len() > max_digits || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// `dd/mm/yyyy` shape check. Day and month take one or two digits and are
/// range checked independently, so `31/02/2020` passes.
pub fn is_date_valid(watched_at: &str) -> bool {
    let mut parts = watched_at.split('/');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let day_ok = date_part(day, 2).is_some_and(|d| (1..=31).contains(&d));
    let month_ok = date_part(month, 2).is_some_and(|m| (1..=12).contains(&m));
    let year_ok = year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit());

    day_ok && month_ok && year_ok
}

pub fn validate_watched_at(watched_at: Option<&str>) -> Result<(), DomainError> {
    match present(watched_at) {
        None => bad_request(WATCHED_AT_REQUIRED),
        Some(date) if !is_date_valid(date) => bad_request(WATCHED_AT_FORMAT),
        Some(_) => Ok(()),
    }
}

pub fn validate_rate(rate: Option<i64>) -> Result<(), DomainError> {
    match rate {
        None => bad_request(RATE_REQUIRED),
        Some(rate) if !(1..=5).contains(&rate) => bad_request(RATE_RANGE),
        Some(_) => Ok(()),
    }
}

pub fn validate_talk(talk: Option<&TalkDraft>) -> Result<(), DomainError> {
    let Some(talk) = talk else {
        return bad_request(TALK_REQUIRED);
    };
    validate_watched_at(talk.watched_at.as_deref())?;
    validate_rate(talk.rate)
}
