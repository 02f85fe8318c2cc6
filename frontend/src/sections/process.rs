use yew::prelude::*;

use crate::components::icons::{CompassIcon, PencilIcon, RocketIcon, WrenchIcon};
use crate::utils::scroll::Section;

#[function_component(Process)]
pub fn process() -> Html {
    let steps: [(&str, &str, Html); 4] = [
        ("Discover", "Define use-case, safety, and ROI targets.", html! { <CompassIcon /> }),
        ("Design", "CAD, kinematics, and simulation.", html! { <PencilIcon /> }),
        ("Build", "Manufacture, wire, and assemble.", html! { <WrenchIcon /> }),
        ("Deploy", "On-site commissioning and training.", html! { <RocketIcon /> }),
    ];

    html! {
        <section id={Section::Process.id()} class="container section">
            <h2>{"From idea to automation"}</h2>
            <div class="four-grid">
                { for steps.into_iter().map(|(title, detail, icon)| html! {
                    <div key={title} class="card card__body">
                        <div class="icon-tile process__icon">{ icon }</div>
                        <div class="strong">{ title }</div>
                        <div class="muted small">{ detail }</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
