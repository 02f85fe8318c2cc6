use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="container section not-found">
            <h1>{"Page not found"}</h1>
            <p class="muted">{"The page you are looking for has moved or never existed."}</p>
            <Link<Route> to={Route::Home} classes="primary-button">
                {"Back to Axiom Robotics"}
            </Link<Route>>
        </section>
    }
}
