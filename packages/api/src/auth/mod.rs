//! # Auth gateway — `/auth/register` and `/auth/login`
//!
//! Thin transport for the two account endpoints. Responses are decoded but not
//! judged: whether a login result is complete enough to sign in with is decided
//! by the caller via [`LoginResponse::into_credentials`] and, again, by
//! [`store::SessionStore::login`] at the point the session is mutated.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use store::{Role, UserPayload};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Default for RegisterRequest {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::User,
        }
    }
}

/// Body of `POST /auth/login`. `email` also accepts a username.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Success body of `POST /auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<UserPayload>,
}

impl LoginResponse {
    /// Token and user, if the response has a non-empty token and a user with a role.
    pub fn into_credentials(self) -> Option<(String, UserPayload)> {
        let token = self.access_token.filter(|t| !t.is_empty())?;
        let user = self.user.filter(UserPayload::has_role)?;
        Some((token, user))
    }
}

/// Account operations against the remote API.
pub trait AuthGateway {
    /// Create an account. Success carries no data.
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;

    /// Exchange credentials for a token and user.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
}

impl AuthGateway for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, "/auth/register").json(request);
        self.send_empty(builder).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let builder = self.request(Method::POST, "/auth/login").json(request);
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_parses_backend_shape() {
        let body = r#"{
            "access_token": "jwt.token.here",
            "user": {"id": 4, "username": "budi", "email": "budi@example.com", "role": "admin"}
        }"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        let (token, user) = response.into_credentials().unwrap();
        assert_eq!(token, "jwt.token.here");
        assert_eq!(user.into_profile().unwrap().role, Role::Admin);
    }

    #[test]
    fn test_incomplete_login_response() {
        let no_role: LoginResponse =
            serde_json::from_str(r#"{"access_token": "t", "user": {"id": 1, "username": "u"}}"#)
                .unwrap();
        assert!(no_role.into_credentials().is_none());

        let no_token: LoginResponse = serde_json::from_str(
            r#"{"user": {"id": 1, "username": "u", "email": "e", "role": "user"}}"#,
        )
        .unwrap();
        assert!(no_token.into_credentials().is_none());

        let empty_token: LoginResponse = serde_json::from_str(
            r#"{"access_token": "", "user": {"id": 1, "username": "u", "role": "user"}}"#,
        )
        .unwrap();
        assert!(empty_token.into_credentials().is_none());

        let nothing: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(nothing.into_credentials().is_none());
    }

    #[test]
    fn test_register_body() {
        let request = RegisterRequest {
            username: "budi".to_string(),
            email: "budi@example.com".to_string(),
            password: "rahasia123".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "username": "budi",
                "email": "budi@example.com",
                "password": "rahasia123",
                "role": "user"
            })
        );
    }
}
