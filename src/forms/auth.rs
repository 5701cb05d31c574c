use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
/// Credentials submitted by the login page.
///
/// Nothing is checked against a user store; a non-empty pair is all the
/// session bootstrap needs.
pub struct LoginForm {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}
