use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToggleProps {
    pub label: AttrValue,
    pub value: bool,
    pub on_change: Callback<bool>,
}

#[function_component(Toggle)]
pub fn toggle(props: &ToggleProps) -> Html {
    let onclick = {
        let on_change = props.on_change.clone();
        let value = props.value;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_change.emit(!value);
        })
    };

    html! {
        <button
            class={classes!("toggle", props.value.then(|| "toggle--on"))}
            role="switch"
            aria-checked={props.value.to_string()}
            {onclick}
        >
            <span class="toggle__label">{ props.label.clone() }</span>
            <span class="toggle__track">
                <span class="toggle__thumb"></span>
            </span>
        </button>
    }
}
