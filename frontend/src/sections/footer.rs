use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::icons::Logo;
use crate::utils::scroll::Section;

const EXPLORE_LINKS: [(Section, &str); 3] = [
    (Section::Showcase, "Robots"),
    (Section::Builder, "Builder"),
    (Section::Process, "Process"),
];

const CONTACT_LINES: [&str; 3] = ["hello@axiomrobots.com", "+1 (555) 010-2048", "San Jose, CA"];

const LEGAL_LINES: [&str; 3] = ["Privacy", "Terms", "Security"];

pub fn copyright_line(year: i32) -> String {
    format!("© {} Axiom Robotics. All rights reserved.", year)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_nav: Callback<Section>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="four-grid small">
                    <div>
                        <div class="brand"><Logo size={24} /><span class="brand__name">{"Axiom Robotics"}</span></div>
                        <p class="muted">{"Design, build, and deploy autonomous systems."}</p>
                    </div>
                    <div>
                        <div class="strong footer__heading">{"Explore"}</div>
                        <ul class="plain-list">
                            { for EXPLORE_LINKS.iter().map(|(section, label)| {
                                let on_nav = props.on_nav.clone();
                                let section = *section;
                                html! {
                                    <li key={section.id()}>
                                        <button class="nav-link" onclick={Callback::from(move |_: MouseEvent| on_nav.emit(section))}>
                                            { *label }
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>
                    <div>
                        <div class="strong footer__heading">{"Contact"}</div>
                        <ul class="plain-list">
                            { for CONTACT_LINES.iter().map(|line| html! { <li key={*line}>{ *line }</li> }) }
                        </ul>
                    </div>
                    <div>
                        <div class="strong footer__heading">{"Legal"}</div>
                        <ul class="plain-list">
                            { for LEGAL_LINES.iter().map(|line| html! { <li key={*line}>{ *line }</li> }) }
                        </ul>
                    </div>
                </div>
                <div class="footer__copyright">{ copyright_line(year) }</div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::copyright_line;

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(copyright_line(2026), "© 2026 Axiom Robotics. All rights reserved.");
    }
}
