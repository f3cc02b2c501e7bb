//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoApi` holds only the collection url. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. `Store` wires the two together through a
//! `Transport`; nothing in here does I/O.

use serde::Serialize;

use crate::config::StoreConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Item, ItemId};

/// Status the backend answers a successful list, create or update with.
pub const STATUS_OK: u16 = 200;
/// Status the backend answers a successful delete with.
pub const STATUS_NO_CONTENT: u16 = 204;

#[derive(Debug, Clone)]
pub struct TodoApi {
    collection_url: String,
}

impl TodoApi {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            collection_url: config.collection_url(),
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn item_url(&self, id: &ItemId) -> String {
        format!("{}/{id}", self.collection_url)
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// `PATCH {collection}/{id}` when `id` is given, `POST {collection}`
    /// otherwise.
    pub fn build_save<P: Serialize + ?Sized>(
        &self,
        payload: &P,
        id: Option<&ItemId>,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(payload).map_err(ApiError::Serialization)?;
        let (method, path) = match id {
            Some(id) => (HttpMethod::Patch, self.item_url(id)),
            None => (HttpMethod::Post, self.collection_url.clone()),
        };
        Ok(HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_remove(&self, id: &ItemId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_drop(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.collection_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response, STATUS_OK)?;
        serde_json::from_str(&response.body).map_err(ApiError::Deserialization)
    }

    /// The saved item in the body is not needed; callers re-read the list.
    pub fn parse_save(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, STATUS_OK)
    }

    pub fn parse_remove(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, STATUS_NO_CONTENT)
    }

    pub fn parse_drop(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, STATUS_NO_CONTENT)
    }
}

/// Anything but the exact success status is a failure.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ApiError::UnexpectedStatus {
        expected,
        status: response.status,
        body: response.body.clone(),
    })
}
