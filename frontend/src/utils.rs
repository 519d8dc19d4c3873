use web_sys::window;

/// Compile-time API base URL override (e.g. "https://api.icl.example").
/// When unset, the API is assumed to live on the page's own origin.
const API_URL_OVERRIDE: Option<&str> = option_env!("STUDIO_API_URL");

/// Get the base HTTP URL (e.g., "http://localhost:3000" or "https://myapp.com")
pub fn get_base_url() -> String {
    if let Some(url) = API_URL_OVERRIDE {
        return url.trim_end_matches('/').to_string();
    }

    let window = window().expect("no global window");
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:3000".to_string());

    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a path (e.g., "/dashboard" -> "http://localhost:3000/dashboard")
pub fn api_url(path: &str) -> String {
    format!("{}{}", get_base_url(), path)
}

/// Full URL of a stored rendered design image.
pub fn asset_url(design: &str) -> String {
    api_url(&shared::endpoints::result(design))
}
