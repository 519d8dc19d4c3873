/// Host-environment collaborators consumed by the controller.
///
/// The browser supplies the real implementation (`window.prompt`,
/// `window.alert`, `location.href`); tests supply scripted ones. Each
/// capability is narrow: `navigate` is invoked from exactly two places
/// (session-check failure and logout completion).
#[allow(async_fn_in_trait)]
pub trait HostEnvironment {
    /// Ask the user for a string. `None` means the prompt was cancelled.
    async fn prompt(&self, message: &str) -> Option<String>;

    /// Show a message to the user.
    fn show_message(&self, message: &str);

    /// Navigate the page to `path`.
    fn navigate(&self, path: &str);
}
