mod components;
mod host;
mod pages;
mod services;
pub mod utils;

use pages::{dashboard::DashboardPage, login::LoginPage};
use yew::prelude::*;
use yew_router::prelude::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <DashboardPage /> },
        Route::Login => html! { <LoginPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
