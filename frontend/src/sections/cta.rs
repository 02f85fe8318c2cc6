use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::background_grid::BackgroundGrid;
use crate::models::lead_form::{LeadForm, THANK_YOU_MESSAGE};
use crate::utils::scroll::Section;

#[function_component(Cta)]
pub fn cta() -> Html {
    let form = use_state(LeadForm::default);

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.edit(input.value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.submit() {
                Ok(()) => log::info!("lead form submitted"),
                Err(err) => log::debug!("lead form rejected: {}", err),
            }
            form.set(next);
        })
    };

    let error = form.error().map(|err| err.to_string());

    html! {
        <section id={Section::Cta.id()} class="cta">
            <div class="cta__grid">
                <BackgroundGrid />
            </div>
            <div class="container narrow cta__inner">
                <h2>{"Start building your robot today"}</h2>
                <p class="muted">{"Get a design sprint and a tailored build plan in your inbox."}</p>
                <form class="cta__form" {onsubmit}>
                    <input
                        type="email"
                        placeholder="Work email"
                        value={form.email.clone()}
                        class={classes!("text-input", error.is_some().then(|| "text-input--error"))}
                        {oninput}
                    />
                    <button type="submit" class="primary-button">{"Request plan"}</button>
                </form>
                {
                    if let Some(message) = error {
                        html! { <div class="form-error">{ message }</div> }
                    } else {
                        html! {}
                    }
                }
                {
                    if form.is_submitted() {
                        html! { <div class="form-success">{ THANK_YOU_MESSAGE }</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </section>
    }
}
