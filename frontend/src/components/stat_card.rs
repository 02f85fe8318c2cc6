use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: String,
    /// Gradient stops for the card wash.
    pub accent: (&'static str, &'static str),
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let (from, to) = props.accent;
    let wash = format!("background: linear-gradient(135deg, {}, {});", from, to);

    html! {
        <div class="card stat-card">
            <div class="card__wash" style={wash}></div>
            <div class="stat-card__body">
                <div class="stat-card__value">{ &props.value }</div>
                <div class="stat-card__label">{ props.label.clone() }</div>
            </div>
        </div>
    }
}
