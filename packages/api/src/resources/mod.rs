//! # Resource service clients
//!
//! One [`Resource`] marker type per record kind, all served by the same
//! generic [`ResourceClient`]. Each operation is a single HTTP call with no
//! retry, caching or pagination; failures go straight back to the caller.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`ResourceClient::list`] | `GET {PATH}/` |
//! | [`ResourceClient::get`] | `GET {PATH}/{id}` |
//! | [`ResourceClient::create`] | `POST {PATH}/` with the fields (no `id`) |
//! | [`ResourceClient::update`] | `PUT {PATH}/{id}` with a full or partial body |
//! | [`ResourceClient::delete`] | `DELETE {PATH}/{id}` |

use std::fmt;
use std::marker::PhantomData;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;

pub mod notes;
pub mod postings;
pub mod recipes;
pub mod students;

/// Identifier assigned by the backend. Either a number or a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Text(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// A record as returned by the API: its id plus the kind-specific fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record<F> {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: F,
}

/// A record kind served under a fixed base path.
pub trait Resource {
    /// Base path without trailing slash, e.g. `/api/mahasiswa`.
    const PATH: &'static str;
    /// Full field set, sent on create and full update.
    type Fields: Serialize + DeserializeOwned;
    /// Partial field set for `PUT` with only some fields.
    type Patch: Serialize;
}

/// CRUD calls for one [`Resource`].
pub struct ResourceClient<'a, R> {
    client: &'a ApiClient,
    _resource: PhantomData<R>,
}

impl ApiClient {
    /// CRUD client for resource `R`.
    pub fn resource<R: Resource>(&self) -> ResourceClient<'_, R> {
        ResourceClient {
            client: self,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<'_, R> {
    pub fn collection_path() -> String {
        format!("{}/", R::PATH)
    }

    pub fn item_path(id: &RecordId) -> String {
        format!("{}/{}", R::PATH, id)
    }

    pub async fn list(&self) -> Result<Vec<Record<R::Fields>>, ApiError> {
        let builder = self.client.request(Method::GET, &Self::collection_path());
        self.client.send_json(builder).await
    }

    pub async fn get(&self, id: &RecordId) -> Result<Record<R::Fields>, ApiError> {
        let builder = self.client.request(Method::GET, &Self::item_path(id));
        self.client.send_json(builder).await
    }

    pub async fn create(&self, fields: &R::Fields) -> Result<Record<R::Fields>, ApiError> {
        let builder = self
            .client
            .request(Method::POST, &Self::collection_path())
            .json(fields);
        self.client.send_json(builder).await
    }

    /// Replace all fields of a record.
    pub async fn update(
        &self,
        id: &RecordId,
        fields: &R::Fields,
    ) -> Result<Record<R::Fields>, ApiError> {
        let builder = self
            .client
            .request(Method::PUT, &Self::item_path(id))
            .json(fields);
        self.client.send_json(builder).await
    }

    /// Update only the fields set in `patch`.
    pub async fn patch(
        &self,
        id: &RecordId,
        patch: &R::Patch,
    ) -> Result<Record<R::Fields>, ApiError> {
        let builder = self.patch_request(id, patch);
        self.client.send_json(builder).await
    }

    fn patch_request(&self, id: &RecordId, patch: &R::Patch) -> RequestBuilder {
        self.client
            .request(Method::PUT, &Self::item_path(id))
            .json(patch)
    }

    pub async fn delete(&self, id: &RecordId) -> Result<(), ApiError> {
        let builder = self.client.request(Method::DELETE, &Self::item_path(id));
        self.client.send_empty(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::students::{StudentFields, StudentPatch, Students};
    use super::*;

    #[test]
    fn test_record_id_untagged() {
        let numeric: RecordId = serde_json::from_str("12").unwrap();
        assert_eq!(numeric, RecordId::Number(12));
        assert_eq!(numeric.to_string(), "12");

        let text: RecordId = serde_json::from_str(r#""6650f1c2""#).unwrap();
        assert_eq!(text, RecordId::Text("6650f1c2".to_string()));
        assert_eq!(text.to_string(), "6650f1c2");
    }

    #[test]
    fn test_paths() {
        assert_eq!(ResourceClient::<Students>::collection_path(), "/api/mahasiswa/");
        assert_eq!(
            ResourceClient::<Students>::item_path(&RecordId::Number(5)),
            "/api/mahasiswa/5"
        );
    }

    #[test]
    fn test_record_flattens_fields() {
        let record: Record<StudentFields> = serde_json::from_str(
            r#"{"id": 1, "nim": "11223344", "nama": "Budi Sanjaya", "jurusan": "Informatika"}"#,
        )
        .unwrap();
        assert_eq!(record.id, RecordId::Number(1));
        assert_eq!(record.fields.student_number, "11223344");
        assert_eq!(record.fields.name, "Budi Sanjaya");
    }

    #[test]
    fn test_requests_target_item_urls() {
        let client = ApiClient::new("http://localhost:5000").with_token(Some("abc"));
        let id = RecordId::from("42");
        let request = client
            .request(Method::PUT, &ResourceClient::<Students>::item_path(&id))
            .json(&StudentFields::default())
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:5000/api/mahasiswa/42");
        assert_eq!(request.headers().get("authorization").unwrap(), "Bearer abc");
    }

    #[test]
    fn test_patch_request_sends_only_set_fields() {
        let client = ApiClient::new("http://localhost:5000").with_token(Some("abc"));
        let id = RecordId::Number(7);
        let patch = StudentPatch {
            major: Some("Sistem Informasi".to_string()),
            ..Default::default()
        };
        let request = client
            .resource::<Students>()
            .patch_request(&id, &patch)
            .build()
            .unwrap();

        assert_eq!(request.method(), &Method::PUT);
        assert_eq!(request.url().as_str(), "http://localhost:5000/api/mahasiswa/7");
        assert_eq!(request.headers().get("authorization").unwrap(), "Bearer abc");
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(json, serde_json::json!({ "jurusan": "Sistem Informasi" }));
    }
}
