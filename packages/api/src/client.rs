//! HTTP client shared by the auth gateway and the resource clients.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::PortalConfig;

use crate::error::{extract_message, ApiError};

/// Handle to the remote REST API.
///
/// Cheap to clone (the inner `reqwest::Client` is reference counted). When a
/// token is set, every request carries `Authorization: Bearer <token>`.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    /// Return a copy that authenticates as `token` (or anonymously for `None`).
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.filter(|t| !t.is_empty()).map(str::to_string);
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/mahasiswa/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and decode a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(builder).await?;
        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to decode response: {e}");
            ApiError::from(e)
        })
    }

    /// Send and ignore any body.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send(builder).await.map(|_| ())
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("Request failed: {e}");
            ApiError::from(e)
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body);
        tracing::error!("{url} returned {status}");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/auth/login"), "http://localhost:5000/auth/login");
        assert_eq!(client.url("api/mahasiswa/"), "http://localhost:5000/api/mahasiswa/");
    }

    #[test]
    fn test_from_config() {
        let config = PortalConfig::default().with_base_url("https://api.example.org/v1");
        let client = ApiClient::from_config(&config);
        assert_eq!(client.url("/api/notes/3"), "https://api.example.org/v1/api/notes/3");
    }

    #[test]
    fn test_with_token() {
        let client = ApiClient::new("http://localhost:5000");
        assert!(client.token().is_none());

        let authed = client.clone().with_token(Some("abc"));
        assert_eq!(authed.token(), Some("abc"));

        let cleared = authed.with_token(None);
        assert!(cleared.token().is_none());

        assert!(client.with_token(Some("")).token().is_none());
    }

    #[test]
    fn test_bearer_header_attached() {
        let client = ApiClient::new("http://localhost:5000").with_token(Some("abc"));
        let request = client
            .request(Method::GET, "/api/notes/")
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer abc"
        );
        assert_eq!(request.url().as_str(), "http://localhost:5000/api/notes/");
    }

    #[test]
    fn test_no_header_without_token() {
        let client = ApiClient::new("http://localhost:5000");
        let request = client
            .request(Method::DELETE, "/api/notes/1")
            .build()
            .unwrap();
        assert!(request.headers().get("authorization").is_none());
        assert_eq!(request.method(), &Method::DELETE);
    }
}
