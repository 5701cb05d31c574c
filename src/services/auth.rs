use rand::RngExt;
use rand::distr::Alphanumeric;
use validator::Validate;

use crate::forms::auth::LoginForm;
use crate::services::{ServiceError, ServiceResult};

/// Length of the opaque token stored in the session.
const TOKEN_LENGTH: usize = 32;

/// Validates the login form and issues an opaque access token.
///
/// The token is only ever checked for presence afterwards, so its content
/// carries no meaning beyond being random.
pub fn issue_access_token(form: &LoginForm) -> ServiceResult<String> {
    if let Err(err) = form.validate() {
        log::error!("Failed to validate login form: {err}");
        return Err(ServiceError::Form(
            "Vui lòng điền đầy đủ thông tin đăng nhập.".to_string(),
        ));
    }

    let token: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect();

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_an_alphanumeric_token_for_a_valid_form() {
        let form = LoginForm {
            username: "admin".to_string(),
            password: "secret".to_string(),
        };

        let token = issue_access_token(&form).unwrap();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn rejects_an_empty_username() {
        let form = LoginForm {
            username: String::new(),
            password: "secret".to_string(),
        };

        assert!(matches!(
            issue_access_token(&form),
            Err(ServiceError::Form(_))
        ));
    }
}
