use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::background_grid::BackgroundGrid;
use crate::components::icons::{CheckIcon, SparklesIcon};
use crate::components::robot_preview::RobotPreview;
use crate::components::toggle::Toggle;
use crate::models::preview::{summary_lines, PreviewSpec};
use crate::models::robot_config::{Payload, RobotBase, RobotConfig};
use crate::utils::format::usd;
use crate::utils::scroll::Section;

#[function_component(Builder)]
pub fn builder() -> Html {
    let config = use_state_eq(RobotConfig::default);

    {
        use_effect_with_deps(
            |config: &RobotConfig| {
                match serde_json::to_string(config) {
                    Ok(json) => log::debug!("builder config {} priced at {}", json, config.price()),
                    Err(e) => log::warn!("could not serialize builder config: {}", e),
                }
                || ()
            },
            *config,
        );
    }

    let select_base = |base: RobotBase| {
        let config = config.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            config.set(config.with_base(base));
        })
    };

    let on_arm = {
        let config = config.clone();
        Callback::from(move |enabled: bool| config.set(config.with_arm(enabled)))
    };

    let on_vision = {
        let config = config.clone();
        Callback::from(move |enabled: bool| config.set(config.with_vision(enabled)))
    };

    let on_payload = {
        let config = config.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let payload = Payload::parse_or(&input.value(), config.payload);
            config.set(config.with_payload(payload));
        })
    };

    html! {
        <section id={Section::Builder.id()} class="container section">
            <div class="two-grid">
                <div class="card card__body">
                    <h3 class="builder__title">{"Rapid robot builder"}</h3>
                    <p class="muted small">{"Assemble a concept and estimate in minutes."}</p>

                    <div class="builder__controls">
                        <div>
                            <label class="field-label">{"Base"}</label>
                            <div class="segmented">
                                { for RobotBase::ALL.iter().map(|base| html! {
                                    <button
                                        key={base.id()}
                                        class={classes!("segment", (config.base == *base).then(|| "segment--active"))}
                                        onclick={select_base(*base)}
                                    >
                                        { base.label() }
                                    </button>
                                }) }
                            </div>
                        </div>

                        <div class="toggle-row">
                            <Toggle label="Robot arm" value={config.arm_enabled} on_change={on_arm} />
                            <Toggle label="Vision system" value={config.vision_enabled} on_change={on_vision} />
                        </div>

                        <div>
                            <label class="field-label">
                                {"Payload: "}
                                <span class="strong">{ format!("{} kg", config.payload.kg()) }</span>
                            </label>
                            <input
                                id="payload"
                                type="range"
                                min={Payload::MIN.to_string()}
                                max={Payload::MAX.to_string()}
                                step={Payload::STEP.to_string()}
                                value={config.payload.kg().to_string()}
                                oninput={on_payload}
                                class="range"
                            />
                        </div>
                    </div>

                    <div class="estimate">
                        <div class="muted small">{"Estimated budget"}</div>
                        <div class="estimate__price">{ usd(config.price()) }</div>
                        <div class="muted tiny">{"Includes hardware, integration, and on-site commissioning."}</div>
                    </div>
                </div>

                <BuilderPreview config={*config} />
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct BuilderPreviewProps {
    config: RobotConfig,
}

#[function_component(BuilderPreview)]
fn builder_preview(props: &BuilderPreviewProps) -> Html {
    let spec = PreviewSpec::from_config(&props.config);

    html! {
        <div class="card card__body preview">
            <div class="preview__head">
                <div>
                    <div class="muted small">{"Preview"}</div>
                    <div class="preview__title">{ spec.title }</div>
                </div>
                <div class="icon-tile icon-tile--small"><SparklesIcon /></div>
            </div>
            <div class="preview__stage">
                <div class="preview__grid">
                    <BackgroundGrid compact={true} />
                </div>
                <div class="preview__art">
                    <RobotPreview spec={spec.clone()} />
                </div>
            </div>
            <ul class="preview__summary">
                { for summary_lines(&props.config).into_iter().map(|line| html! {
                    <li key={line.clone()}><CheckIcon />{ line }</li>
                }) }
            </ul>
        </div>
    }
}
