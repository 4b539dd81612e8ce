use crate::auth::authenticate;
use crate::error::LoginError;
use crate::models::{LoginRequest, LoginResponse};
use actix_cors::Cors;
use actix_web::{post, web, HttpResponse};

pub const LOGIN_SUCCEEDED: &str = "Login successful ✅";

#[post("/login")]
pub async fn login(data: web::Json<LoginRequest>) -> Result<HttpResponse, LoginError> {
    authenticate(&data)?;
    Ok(HttpResponse::Ok().json(LoginResponse::new(LOGIN_SUCCEEDED)))
}

/// Registers the login route behind permissive CORS. Bodies that fail JSON
/// extraction are answered like a credential mismatch.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| LoginError::MalformedBody(err.to_string()).into()),
    )
    .service(web::scope("").wrap(Cors::permissive()).service(login));
}
