use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod styles;
mod models {
    pub mod robot_config;
    pub mod preview;
    pub mod pricing_tier;
    pub mod lead_form;
}
mod animation {
    pub mod counter;
    pub mod raf;
    pub mod use_counter;
    pub mod visibility;
}
mod utils {
    pub mod format;
    pub mod scroll;
}
mod components {
    pub mod background_grid;
    pub mod icons;
    pub mod robot_illustration;
    pub mod robot_preview;
    pub mod stat_card;
    pub mod toggle;
}
mod sections {
    pub mod builder;
    pub mod cta;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod pricing;
    pub mod process;
    pub mod showcase;
    pub mod stats;
    pub mod trust_bar;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{landing::Landing, not_found::NotFound};
use styles::GlobalStyles;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyles />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
