//! Shared wire DTOs for the salon backend REST API.
//!
//! DESIGN
//! ======
//! Response types mirror the backend's camelCase JSON. Request bodies keep
//! the field names the backend expects (`member_id`, `visited_at`) and drop
//! absent optional fields instead of sending `null`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in staff account as returned by `GET /auth/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend account identifier.
    pub id: i64,
    /// Login identifier.
    pub username: String,
    /// Name shown in greetings.
    #[serde(rename = "name")]
    pub display_name: String,
}

/// Login form payload for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

/// Sign-up payload for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub username: String,
    pub password: String,
}

/// A salon customer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    /// Number of recorded visits, maintained by the backend.
    pub total_visits: Option<i64>,
    /// Registration timestamp (ISO-8601).
    pub create_at: Option<String>,
}

/// Payload for `POST /members/add`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewMember {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Search filters for `GET /members/All`. Blank filters are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberQuery {
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl MemberQuery {
    /// Build a query from raw form input, trimming and dropping blank fields.
    pub fn from_input(name: &str, phone: &str) -> Self {
        Self { name: non_blank(name), phone: non_blank(phone) }
    }

    /// Whether neither filter is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none()
    }

    /// Query-string pairs in the order the backend documents them.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        let mut params = Vec::new();
        if let Some(name) = &self.name {
            params.push(("name", name.as_str()));
        }
        if let Some(phone) = &self.phone {
            params.push(("phone", phone.as_str()));
        }
        params
    }
}

/// One visit of a member: treatment, price, and notes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRecord {
    pub id: i64,
    pub member_id: Option<i64>,
    pub treatment: Option<String>,
    /// Price in won.
    pub price: Option<i64>,
    /// Visit timestamp (ISO-8601, local time).
    pub visited_at: Option<String>,
    pub memo: Option<String>,
}

/// Payload for `POST /visit-records/members/{id}/visit-records`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewVisitRecord {
    pub member_id: i64,
    pub treatment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visited_at: Option<String>,
}

pub(crate) fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
