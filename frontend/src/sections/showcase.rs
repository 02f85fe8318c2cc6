use yew::prelude::*;

use crate::components::icons::{CheckIcon, MiniRobotIcon};
use crate::utils::scroll::Section;

#[derive(Clone, Copy, PartialEq)]
pub struct RobotCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub accent: (&'static str, &'static str),
    pub features: [&'static str; 3],
}

pub const FEATURED_ROBOTS: [RobotCard; 3] = [
    RobotCard {
        title: "Atlas MK-IV",
        subtitle: "Mobile manipulator",
        accent: ("rgba(6, 182, 212, 0.3)", "rgba(59, 130, 246, 0.3)"),
        features: ["7-DOF arm", "360° LiDAR", "Vision grasping"],
    },
    RobotCard {
        title: "Helix S",
        subtitle: "Swarm drone",
        accent: ("rgba(16, 185, 129, 0.3)", "rgba(132, 204, 22, 0.3)"),
        features: ["SLAM", "Mesh comms", "Auto-dock"],
    },
    RobotCard {
        title: "Forge X",
        subtitle: "Factory cobot",
        accent: ("rgba(217, 70, 239, 0.3)", "rgba(139, 92, 246, 0.3)"),
        features: ["Safe torque", "Quick teach", "40kg payload"],
    },
];

#[derive(Properties, PartialEq)]
struct ShowcaseCardProps {
    card: RobotCard,
    on_configure: Callback<MouseEvent>,
}

#[function_component(ShowcaseCard)]
fn showcase_card(props: &ShowcaseCardProps) -> Html {
    let card = props.card;
    let wash = format!("background: linear-gradient(135deg, {}, {});", card.accent.0, card.accent.1);

    html! {
        <div class="card showcase-card">
            <div class="card__wash showcase-card__wash" style={wash}></div>
            <div class="card__body">
                <div class="showcase-card__head">
                    <div>
                        <h3>{ card.title }</h3>
                        <p class="muted">{ card.subtitle }</p>
                    </div>
                    <div class="icon-tile"><MiniRobotIcon /></div>
                </div>
                <ul class="check-list">
                    { for card.features.iter().map(|f| html! { <li key={*f}><CheckIcon />{ *f }</li> }) }
                </ul>
                <div class="showcase-card__actions">
                    <button class="link-button">{"Specs"}</button>
                    <button class="soft-button" onclick={props.on_configure.clone()}>{"Configure"}</button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub on_nav: Callback<Section>,
}

#[function_component(Showcase)]
pub fn showcase(props: &ShowcaseProps) -> Html {
    let on_configure = {
        let on_nav = props.on_nav.clone();
        Callback::from(move |_: MouseEvent| on_nav.emit(Section::Builder))
    };

    html! {
        <section id={Section::Showcase.id()} class="container section">
            <h2>{"Featured robots"}</h2>
            <p class="muted">{"Modular platforms tailored to your workflow."}</p>
            <div class="three-grid">
                { for FEATURED_ROBOTS.iter().map(|card| html! {
                    <ShowcaseCard key={card.title} card={*card} on_configure={on_configure.clone()} />
                }) }
            </div>
        </section>
    }
}
