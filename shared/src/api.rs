//! API client types and trait definitions
//!
//! This module defines the API contract that can be implemented
//! by both native (reqwest) and WASM (gloo-net) HTTP clients.

use serde::{Deserialize, Serialize};

use crate::{DashboardResponse, EmailPdfRequest, EmailPdfResponse, UserInfo};

/// API error types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ApiError {
    /// Network or connection error
    Network(String),
    /// Server returned an error status
    Server { status: u16, message: String },
    /// Failed to parse response
    Parse(String),
    /// Authentication required or failed
    Auth(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Auth(msg) => write!(f, "Auth error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// API endpoint definitions
pub mod endpoints {
    pub const ME: &str = "/me";
    pub const DASHBOARD: &str = "/dashboard";
    pub const LOGOUT: &str = "/logout";
    pub const EMAIL_PDF: &str = "/email-pdf";

    /// Path of a stored rendered design image.
    pub fn result(design: &str) -> String {
        format!("/results/{}", design)
    }
}

/// Trait defining the design-studio API
///
/// This trait can be implemented by both native and WASM HTTP clients.
/// All methods are async and return Result<T, ApiError>.
#[allow(async_fn_in_trait)]
pub trait StudioApi {
    /// Get the current authenticated user. Session credentials ride
    /// along with the request; a rejected session is an error.
    async fn me(&self) -> Result<UserInfo, ApiError>;

    /// Fetch the saved-design listing for the current session.
    async fn dashboard(&self) -> Result<DashboardResponse, ApiError>;

    /// End the current session server-side. The response body is ignored.
    async fn logout(&self) -> Result<(), ApiError>;

    /// Ask the backend to render a design as a PDF and email it.
    ///
    /// The response body is read as JSON on both success and failure
    /// HTTP outcomes; the payload's `status` field is authoritative for
    /// the user-visible message either way.
    async fn email_pdf(&self, request: &EmailPdfRequest) -> Result<EmailPdfResponse, ApiError>;
}

/// Configuration for creating an API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the server (e.g., "http://localhost:3000")
    pub base_url: String,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}
