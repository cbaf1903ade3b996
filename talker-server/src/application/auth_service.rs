use tracing::{info, instrument};

use crate::domain::error::DomainError;
use crate::domain::validation::{validate_email, validate_password};
use crate::infrastructure::security::generate_token;

/// Issues tokens for well-formed credentials. There is no user table: any
/// email/password pair of the right shape gets a fresh token.
#[derive(Clone, Debug, Default)]
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self, password))]
    pub fn login(&self, email: Option<&str>, password: Option<&str>) -> Result<String, DomainError> {
        validate_email(email)?;
        validate_password(password)?;

        let token = generate_token();
        info!("token issued");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{EMAIL_FORMAT, PASSWORD_REQUIRED, validate_token};

    #[test]
    fn login_issues_a_token_that_passes_the_gate() {
        let auth = AuthService::new();

        let token = auth.login(Some("a@b.com"), Some("123456")).unwrap();

        assert!(validate_token(Some(&token)).is_ok());
    }

    #[test]
    fn login_checks_email_before_password() {
        let auth = AuthService::new();

        let err = auth.login(Some("a@b"), None).unwrap_err();
        assert_eq!(err.to_string(), EMAIL_FORMAT);

        let err = auth.login(Some("a@b.com"), None).unwrap_err();
        assert_eq!(err.to_string(), PASSWORD_REQUIRED);
    }

    #[test]
    fn every_login_gets_a_new_token() {
        let auth = AuthService::new();

        let first = auth.login(Some("a@b.com"), Some("123456")).unwrap();
        let second = auth.login(Some("a@b.com"), Some("123456")).unwrap();

        assert_ne!(first, second);
    }
}
