use serde::{Deserialize, Serialize};

// API client types and trait
pub mod api;
pub use api::{endpoints, ApiClientConfig, ApiError, StudioApi};

/// Identity record returned by `GET /me` for an authenticated session.
///
/// Only `id` is required; the backend is free to attach additional
/// profile fields, which are tolerated but not depended upon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Response from `GET /dashboard`.
///
/// A body with no `designs` key decodes to an empty listing; absence of
/// data is not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    #[serde(default)]
    pub designs: Vec<String>,
}

/// Request body for `POST /email-pdf`.
///
/// `products` is always sent and always empty in this flow; product
/// enrichment happens elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailPdfRequest {
    pub image: String,
    pub products: Vec<serde_json::Value>,
    pub email: String,
}

/// Response from `POST /email-pdf`.
///
/// The `status` field, when present, carries the human-readable message
/// to surface to the user. Both success and failure responses may carry
/// one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailPdfResponse {
    #[serde(default)]
    pub status: Option<String>,
}
