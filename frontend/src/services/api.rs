//! WASM HTTP client implementation using gloo-net

use gloo_net::http::{Request, Response};
use shared::{
    endpoints, ApiClientConfig, ApiError, DashboardResponse, EmailPdfRequest, EmailPdfResponse,
    StudioApi, UserInfo,
};
use web_sys::RequestCredentials;

/// WASM API client using gloo-net.
///
/// Session routes send the browser's session cookie along
/// (`credentials: include`); the base URL comes from the config given
/// at construction and is never read again.
pub struct GlooApiClient {
    config: ApiClientConfig,
}

impl GlooApiClient {
    pub fn new(config: ApiClientConfig) -> Self {
        Self { config }
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, ApiError> {
        if response.status() == 401 {
            return Err(ApiError::Auth("unauthorized".to_string()));
        }

        if !response.ok() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: response.status(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl StudioApi for GlooApiClient {
    async fn me(&self) -> Result<UserInfo, ApiError> {
        let response = Request::get(&self.config.url(endpoints::ME))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    async fn dashboard(&self) -> Result<DashboardResponse, ApiError> {
        let response = Request::get(&self.config.url(endpoints::DASHBOARD))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let response = Request::post(&self.config.url(endpoints::LOGOUT))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // Response body ignored either way.
        if !response.ok() {
            return Err(ApiError::Server {
                status: response.status(),
                message: response.status_text(),
            });
        }
        Ok(())
    }

    async fn email_pdf(&self, request: &EmailPdfRequest) -> Result<EmailPdfResponse, ApiError> {
        let response = Request::post(&self.config.url(endpoints::EMAIL_PDF))
            .json(request)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // The status payload rides on failure responses too, and it is
        // authoritative for the user-visible message, so read the body
        // without looking at the HTTP status.
        response
            .json::<EmailPdfResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}
