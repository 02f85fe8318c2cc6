use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::icons::Logo;
use crate::utils::scroll::Section;

const NAV_LINKS: [(Section, &str); 4] = [
    (Section::Showcase, "Robots"),
    (Section::Builder, "Builder"),
    (Section::Process, "Process"),
    (Section::Pricing, "Pricing"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_nav: Callback<Section>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.clone().map(|window| {
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 16.0);
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(callback)) = (&window, &scroll_callback) {
                let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let nav_to = |section: Section| {
        let on_nav = props.on_nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_nav.emit(section);
        })
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="container site-header__inner">
                <div class="brand" onclick={nav_to(Section::Top)}>
                    <Logo />
                    <span class="brand__name">{"Axiom Robotics"}</span>
                </div>
                <nav class="site-nav">
                    { for NAV_LINKS.iter().map(|(section, label)| html! {
                        <button key={section.id()} class="nav-link" onclick={nav_to(*section)}>{ *label }</button>
                    }) }
                </nav>
                <button class="pill-button" onclick={nav_to(Section::Cta)}>{"Get started"}</button>
            </div>
        </header>
    }
}
