use yew::prelude::*;

use crate::components::background_grid::BackgroundGrid;
use crate::components::icons::{ShieldIcon, SparklesIcon};
use crate::components::robot_illustration::RobotIllustration;
use crate::utils::scroll::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_nav: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let launch_builder = {
        let on_nav = props.on_nav.clone();
        Callback::from(move |_: MouseEvent| on_nav.emit(Section::Builder))
    };
    let see_robots = {
        let on_nav = props.on_nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_nav.emit(Section::Showcase);
        })
    };

    html! {
        <section id={Section::Top.id()} class="hero">
            <BackgroundGrid />
            <div class="container hero__inner">
                <div class="hero__copy">
                    <h1>{"We build robots that build your business"}</h1>
                    <p class="lead">
                        {"Custom autonomous systems for manufacturing, logistics, and research. From vision to deployment, our platform designs, simulates, and assembles production-ready robots."}
                    </p>
                    <div class="hero__actions">
                        <button class="primary-button" onclick={launch_builder}>{"Launch Builder"}</button>
                        <a href={format!("#{}", Section::Showcase.id())} class="ghost-button" onclick={see_robots}>
                            {"See robots"}
                        </a>
                    </div>
                    <div class="hero__badges">
                        <div class="badge"><ShieldIcon />{" ISO 10218 safety ready"}</div>
                        <div class="badge"><SparklesIcon />{" Rapid prototyping"}</div>
                    </div>
                </div>
                <RobotIllustration />
            </div>
        </section>
    }
}
