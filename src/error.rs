use crate::models::LoginResponse;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

pub const LOGIN_FAILED: &str = "Invalid credentials ❌";

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("username or password does not match")]
    InvalidCredentials,
    #[error("login body could not be read: {0}")]
    MalformedBody(String),
}

// Clients only ever see one failure shape, always with status 200.
impl ResponseError for LoginError {
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(LoginResponse::new(LOGIN_FAILED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn every_variant_renders_the_same_body() {
        for err in [
            LoginError::InvalidCredentials,
            LoginError::MalformedBody("EOF while parsing".into()),
        ] {
            let response = err.error_response();
            assert_eq!(response.status(), StatusCode::OK);

            let body = to_bytes(response.into_body()).await.unwrap();
            let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(body, serde_json::json!({ "message": LOGIN_FAILED }));
        }
    }
}
