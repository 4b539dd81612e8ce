use serde::{Deserialize, Serialize};

/// A username/password pair the server will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credential {
    pub username: &'static str,
    pub password: &'static str,
}

impl Credential {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Body of `POST /login`. Absent fields are kept as `None` so they fail the
/// credential check instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct LoginResponse {
    pub message: String,
}

impl LoginResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}
