//! Browser implementation of the controller's host environment

use controller::HostEnvironment;
use web_sys::window;

/// Host environment backed by the real browser window: `window.prompt`,
/// `window.alert`, and `location.href`.
#[derive(Clone, Copy, Default)]
pub struct BrowserHost;

impl HostEnvironment for BrowserHost {
    async fn prompt(&self, message: &str) -> Option<String> {
        let window = window()?;
        window.prompt_with_message(message).ok().flatten()
    }

    fn show_message(&self, message: &str) {
        if let Some(window) = window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn navigate(&self, path: &str) {
        if let Some(window) = window() {
            let _ = window.location().set_href(path);
        }
    }
}
