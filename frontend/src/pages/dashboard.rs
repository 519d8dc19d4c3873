//! Dashboard page - session-gated view of the user's saved designs

use crate::components::DesignCard;
use crate::host::BrowserHost;
use crate::services::GlooApiClient;
use crate::{utils, VERSION};
use controller::{DashboardController, ListingPhase, Projection};
use shared::ApiClientConfig;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

type Controller = DashboardController<GlooApiClient, BrowserHost>;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let projection = use_state(Projection::default);

    // One controller per page lifetime; it pushes a fresh snapshot into
    // the state handle after every transition.
    let controller: Rc<Controller> = {
        let setter = projection.setter();
        use_memo((), move |_| {
            let api = GlooApiClient::new(ApiClientConfig::new(utils::get_base_url()));
            DashboardController::new(api, BrowserHost, move |snapshot| setter.set(snapshot))
        })
    };

    // Session gate on mount; the listing load follows automatically on
    // success, and failure navigates to the login entry point.
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            spawn_local(async move { controller.start().await });
            || ()
        });
    }

    let on_logout = {
        let controller = controller.clone();
        Callback::from(move |_| {
            let controller = controller.clone();
            spawn_local(async move { controller.logout().await });
        })
    };

    let on_refresh = {
        let controller = controller.clone();
        Callback::from(move |_| {
            let controller = controller.clone();
            spawn_local(async move { controller.refresh_listing().await });
        })
    };

    let on_email = {
        let controller = controller.clone();
        Callback::from(move |design: String| {
            let controller = controller.clone();
            spawn_local(async move { controller.email_render(&design).await });
        })
    };

    let checking_session = projection.user.is_none();
    let listing_loading = projection.listing == ListingPhase::Loading;

    html! {
        <div class="dashboard-container">
            <header class="dashboard-header">
                <div class="brand">
                    <img class="brand-logo" src="/logo.png" alt="Logo" />
                    <div>
                        <h1>{ "Imagine Creative Living" }</h1>
                        <p class="tagline">{ "Where AI meets interior inspiration" }</p>
                    </div>
                </div>
                <div class="header-actions">
                    <button
                        class="header-button"
                        onclick={on_refresh}
                        disabled={checking_session || listing_loading}
                    >
                        { "Refresh" }
                    </button>
                    <button
                        class="header-button logout"
                        onclick={on_logout}
                        disabled={projection.logout_pending}
                    >
                        { "Logout" }
                    </button>
                </div>
            </header>

            <section class="hero">
                <img
                    class="hero-image"
                    src="/static/william-morris-room.jpg"
                    alt="Maximalist interior design"
                />
                <div class="hero-copy">
                    <h2>{ "Design Your Dream Space with AI" }</h2>
                    <p>
                        { "Upload a photo of your room, describe your ideal vibe, and our AI \
                           renders it as a brand-new interior. Save your designs, email them \
                           as a PDF, or revisit past projects from this dashboard." }
                    </p>
                </div>
            </section>

            <h2 class="listing-title">{ "Your Past Designs" }</h2>

            {
                if checking_session {
                    html! {
                        <div class="loading">
                            <div class="spinner"></div>
                            <p>{ "Checking your session..." }</p>
                        </div>
                    }
                } else if listing_loading && projection.designs.is_empty() {
                    html! {
                        <div class="loading">
                            <div class="spinner"></div>
                            <p>{ "Loading your designs..." }</p>
                        </div>
                    }
                } else if projection.designs.is_empty() {
                    html! {
                        <div class="listing-empty">
                            if projection.listing == ListingPhase::Failed {
                                <p class="listing-error">
                                    { "We couldn't load your designs just now." }
                                </p>
                            }
                            <p>{ "No designs saved yet." }</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="design-grid">
                            {
                                projection.designs.iter().map(|design| {
                                    html! {
                                        <DesignCard
                                            key={design.clone()}
                                            design={design.clone()}
                                            email_pending={projection.email_pending}
                                            on_email={on_email.clone()}
                                        />
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    }
                }
            }

            <footer class="dashboard-footer">
                <span class="version">{ format!("v{}", VERSION) }</span>
            </footer>
        </div>
    }
}
