use yew::prelude::*;

const LOGOS: [&str; 5] = ["Aurora", "Helios", "MacroFab", "Vectorix", "NovaLab"];

#[function_component(TrustBar)]
pub fn trust_bar() -> Html {
    html! {
        <div class="trust-bar">
            <div class="container">
                <div class="eyebrow">{"Trusted by innovators"}</div>
                <div class="trust-bar__logos">
                    { for LOGOS.iter().map(|name| html! { <div key={*name} class="trust-bar__logo">{ *name }</div> }) }
                </div>
            </div>
        </div>
    }
}
