//! REST backend client.
//!
//! Every call resolves to either the decoded body or an [`ApiError`] whose
//! [`describe`](ApiError::describe) text is what the page shows.

mod error;

pub use error::{ApiError, SERVER_ERROR_MESSAGE};
use lg_types::{
    Session, auth::{LoginRequest, RegisterRequest, ResetPasswordRequest}, blog::{BlogList, BlogPost, NewBlogPost}, contact::ContactMessage, timetable::{NewTimetableEntry, TimetableEntry, TimetableList}
};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;

/// Body field carrying the failure message, per endpoint family.
mod message_field {
    pub const AUTH: &str = "message";
    pub const RESOURCE: &str = "msg";
    pub const CONTACT: &str = "error";
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidEndpoint(format!("{}: {}", path, e)))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self.http.request(method, self.endpoint(path)?))
    }

    async fn send(&self, request: RequestBuilder, field: &str) -> Result<Value, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "backend request failed");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        debug!(status, "backend response");
        interpret(status, &body, field)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let body = self
            .send(self.request(Method::POST, "api/auth/login")?.json(request), message_field::AUTH)
            .await?;
        Session::from_login_payload(body).ok_or_else(|| ApiError::Decode("login response is not an object".to_string()))
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, "api/auth/register")?.json(request), message_field::AUTH)
            .await
            .map(drop)
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, "api/auth/reset-password")?.json(request), message_field::AUTH)
            .await
            .map(drop)
    }

    pub async fn list_blogs(&self) -> Result<Vec<BlogPost>, ApiError> {
        let body = self
            .send(self.request(Method::GET, "api/blogs")?, message_field::RESOURCE)
            .await?;
        decode::<BlogList>(body).map(|list| list.blogs)
    }

    /// Create a post; `token` is attached as a bearer credential.
    pub async fn create_blog(&self, post: &NewBlogPost, token: Option<&str>) -> Result<(), ApiError> {
        let mut request = self.request(Method::POST, "api/blogs")?.json(post);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.send(request, message_field::RESOURCE).await.map(drop)
    }

    pub async fn submit_contact(&self, message: &ContactMessage) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, "api/forms/form")?.json(message), message_field::CONTACT)
            .await
            .map(drop)
    }

    pub async fn list_timetable(&self) -> Result<Vec<TimetableEntry>, ApiError> {
        let body = self
            .send(self.request(Method::GET, "api/tables/get-table")?, message_field::RESOURCE)
            .await?;
        decode::<TimetableList>(body).map(|list| list.data)
    }

    pub async fn create_timetable_entry(&self, entry: &NewTimetableEntry) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, "api/tables/create-table")?.json(entry), message_field::RESOURCE)
            .await
            .map(drop)
    }

    pub async fn delete_timetable_entry(&self, id: &str) -> Result<(), ApiError> {
        let mut url = self.endpoint("api/tables/table")?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidEndpoint(self.base_url.to_string()))?
            .push(id);
        self.send(self.http.delete(url), message_field::RESOURCE).await.map(drop)
    }
}

/// Classify a backend response.
///
/// The body must be JSON whatever the status. A non-2xx status becomes
/// [`ApiError::Rejected`], carrying `field` from the body when it is a
/// non-empty string.
pub fn interpret(status: u16, body: &str, field: &str) -> Result<Value, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    if (200..300).contains(&status) {
        return Ok(value);
    }

    let message = value
        .get(field)
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string);
    Err(ApiError::Rejected { status, message })
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
