//! REST client for the salon backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending the
//! session cookie. Server-side (SSR) and native builds: every call resolves to
//! [`ApiError::Unavailable`] since the backend is only reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response becomes an [`ApiError`] carrying the backend's
//! `message` field when it sent one. A 401 is its own variant so the session
//! guard can expire the local session; this module never navigates.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{Credentials, Member, MemberQuery, NewMember, NewVisitRecord, Registration, User, VisitRecord};

/// Backend base URL used when `ROSEHAIR_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered 401: no valid session.
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },
    /// Any other non-2xx answer.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A request or response body could not be (de)serialized.
    #[error("malformed body: {0}")]
    Body(String),
    /// No browser transport in this build.
    #[error("backend not reachable from this context")]
    Unavailable,
}

impl ApiError {
    /// Classify an error response by status code and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = backend_message(body);
        if status == 401 {
            Self::Unauthorized { message }
        } else {
            Self::Status { status, message }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// The backend's own explanation, if the response carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Status { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Body(_) | Self::Unavailable => None,
        }
    }

    /// Text to show the user: the backend message, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

/// Extract `message` from a JSON error body. Validation errors may carry a
/// list of messages; those are joined.
pub(crate) fn backend_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = match value.get("message")? {
        serde_json::Value::String(text) => text.trim().to_owned(),
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(serde_json::Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    (!message.is_empty()).then_some(message)
}

/// Every backend call the front-end makes.
///
/// The session guard and the pages depend on this seam rather than on the
/// HTTP client, so tests can substitute a scripted backend.
#[async_trait::async_trait(?Send)]
pub trait SalonApi {
    /// `POST /auth/login`. The session cookie is set as a side effect.
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;

    /// `POST /auth/logout`.
    async fn logout(&self) -> Result<(), ApiError>;

    /// `POST /auth/register`.
    async fn register(&self, registration: &Registration) -> Result<(), ApiError>;

    /// `GET /auth/profile`: confirms the session and returns the account.
    async fn profile(&self) -> Result<User, ApiError>;

    /// `POST /members/add`.
    async fn add_member(&self, member: &NewMember) -> Result<(), ApiError>;

    /// `GET /members/All?name=&phone=`.
    async fn search_members(&self, query: &MemberQuery) -> Result<Vec<Member>, ApiError>;

    /// `POST /visit-records/members/{id}/visit-records`.
    async fn create_visit_record(&self, record: &NewVisitRecord) -> Result<(), ApiError>;

    /// `GET /visit-records/members/{id}`.
    async fn visit_records_for_member(&self, member_id: i64) -> Result<Vec<VisitRecord>, ApiError>;

    /// `GET /visit-records/Date?date=YYYY-MM-DD`.
    async fn visit_records_on(&self, date: &str) -> Result<Vec<VisitRecord>, ApiError>;
}

pub(crate) fn create_visit_record_path(member_id: i64) -> String {
    format!("/visit-records/members/{member_id}/visit-records")
}

pub(crate) fn member_visit_records_path(member_id: i64) -> String {
    format!("/visit-records/members/{member_id}")
}

/// Browser HTTP transport for [`SalonApi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Transport pointed at `ROSEHAIR_API_URL` as captured at compile time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("ROSEHAIR_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Absolute URL with `query` form-encoded; no `?` when `query` is empty.
    #[cfg(any(test, feature = "hydrate"))]
    fn url_with_query(&self, path: &str, query: &[(&str, &str)]) -> Result<String, ApiError> {
        let url = self.url(path);
        if query.is_empty() {
            return Ok(url);
        }
        let encoded = serde_urlencoded::to_string(query).map_err(|e| ApiError::Body(e.to_string()))?;
        Ok(format!("{url}?{encoded}"))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url_with_query(path, query)?)
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = check_status(resp).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Body(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, query);
            Err(ApiError::Unavailable)
        }
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(path))
                .credentials(web_sys::RequestCredentials::Include)
                .json(body)
                .map_err(|e| ApiError::Body(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(path))
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            check_status(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

#[async_trait::async_trait(?Send)]
impl SalonApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.post_json("/auth/login", credentials).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty("/auth/logout").await
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.post_json("/auth/register", registration).await
    }

    async fn profile(&self) -> Result<User, ApiError> {
        self.get_json("/auth/profile", &[]).await
    }

    async fn add_member(&self, member: &NewMember) -> Result<(), ApiError> {
        self.post_json("/members/add", member).await
    }

    async fn search_members(&self, query: &MemberQuery) -> Result<Vec<Member>, ApiError> {
        self.get_json("/members/All", &query.params()).await
    }

    async fn create_visit_record(&self, record: &NewVisitRecord) -> Result<(), ApiError> {
        self.post_json(&create_visit_record_path(record.member_id), record)
            .await
    }

    async fn visit_records_for_member(&self, member_id: i64) -> Result<Vec<VisitRecord>, ApiError> {
        self.get_json(&member_visit_records_path(member_id), &[])
            .await
    }

    async fn visit_records_on(&self, date: &str) -> Result<Vec<VisitRecord>, ApiError> {
        self.get_json("/visit-records/Date", &[("date", date)])
            .await
    }
}
