use yew::prelude::*;

use crate::components::icons::CheckIcon;
use crate::models::pricing_tier::PricingTier;
use crate::utils::format::usd;
use crate::utils::scroll::Section;

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub active: PricingTier,
    pub on_change: Callback<PricingTier>,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let select = |tier: PricingTier| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_change.emit(tier);
        })
    };

    html! {
        <section id={Section::Pricing.id()} class="container section">
            <div class="pricing__head">
                <div>
                    <h2>{"Transparent pricing"}</h2>
                    <p class="muted">{"Choose a starting track. Everything is customizable."}</p>
                </div>
                <div class="tier-switch">
                    { for PricingTier::ALL.iter().map(|tier| html! {
                        <button
                            key={tier.id()}
                            class={classes!("tier-switch__option", (props.active == *tier).then(|| "tier-switch__option--active"))}
                            onclick={select(*tier)}
                        >
                            { tier.name() }
                        </button>
                    }) }
                </div>
            </div>
            <div class="three-grid">
                { for PricingTier::ALL.iter().map(|tier| {
                    let (from, to) = tier.accent();
                    let wash = format!("background: linear-gradient(135deg, {}, {});", from, to);
                    html! {
                        <div key={tier.id()} class={classes!("card", "tier-card", (props.active == *tier).then(|| "tier-card--active"))}>
                            <div class="card__wash tier-card__wash" style={wash}></div>
                            <div class="card__body">
                                <div class="muted small">{ tier.name() }</div>
                                <div class="tier-card__price">{ usd(tier.price()) }</div>
                                <ul class="check-list">
                                    { for tier.features().iter().map(|f| html! { <li key={*f}><CheckIcon />{ *f }</li> }) }
                                </ul>
                                <button class="soft-button wide" onclick={select(*tier)}>{"Select"}</button>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
