use crate::error::LoginError;
use crate::models::{Credential, LoginRequest};

/// The only account this server knows about.
pub const ADMIN: Credential = Credential {
    username: "admin",
    password: "1234",
};

pub fn authenticate(request: &LoginRequest) -> Result<(), LoginError> {
    match (request.username.as_deref(), request.password.as_deref()) {
        (Some(username), Some(password)) if ADMIN.matches(username, password) => Ok(()),
        _ => Err(LoginError::InvalidCredentials),
    }
}
