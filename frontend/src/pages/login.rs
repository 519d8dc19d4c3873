use crate::VERSION;
use yew::prelude::*;

/// Login entry point. The credential flow itself lives with the
/// backend; the dashboard controller only ever navigates here when no
/// valid session exists.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    html! {
        <div class="login-container">
            <div class="login-content">
                <img class="brand-logo" src="/logo.png" alt="Logo" />
                <h1>{ "Imagine Creative Living" }</h1>
                <p class="tagline">{ "Where AI meets interior inspiration" }</p>
                <p class="login-note">
                    { "Sign in to view your saved designs and email them as PDFs." }
                </p>
                <div class="login-footer">
                    <span class="version">{ format!("v{}", VERSION) }</span>
                </div>
            </div>
        </div>
    }
}
