use yew::prelude::*;

use crate::models::preview::PreviewSpec;
use crate::models::robot_config::RobotBase;

#[derive(Properties, PartialEq)]
pub struct RobotPreviewProps {
    pub spec: PreviewSpec,
}

#[function_component(RobotPreview)]
pub fn robot_preview(props: &RobotPreviewProps) -> Html {
    let color = props.spec.accent;

    let base = match props.spec.base {
        RobotBase::Mobile => html! {
            <>
                <rect x="60" y="110" width="180" height="30" rx="10" fill="#0f172a" stroke="#334155" />
                <circle cx="90" cy="150" r="10" fill={color} />
                <circle cx="210" cy="150" r="10" fill={color} />
            </>
        },
        RobotBase::Cobot => html! {
            <rect x="130" y="120" width="40" height="30" rx="6" fill="#0f172a" stroke="#334155" />
        },
        RobotBase::Fixed => html! {
            <rect x="70" y="125" width="160" height="20" rx="6" fill="#0f172a" stroke="#334155" />
        },
    };

    let arm = if props.spec.show_arm {
        html! {
            <g class="preview-arm">
                <path d="M150 95 L200 60" stroke={color} stroke-width="8" stroke-linecap="round" />
                <path d="M200 60 L230 70" stroke={color} stroke-width="8" stroke-linecap="round" />
                <circle cx="200" cy="60" r="6" fill={color} />
            </g>
        }
    } else {
        html! {}
    };

    let vision = if props.spec.show_vision {
        html! {
            <g class="preview-vision">
                <rect x="140" y="80" width="20" height="12" rx="3" fill={color} />
                <circle cx="150" cy="86" r="3" fill="#0f172a" />
            </g>
        }
    } else {
        html! {}
    };

    html! {
        <svg viewBox="0 0 300 180" class="robot-preview">
            <g>
                { base }
                { arm }
                { vision }
                <rect x="120" y="95" width="60" height="30" rx="8" fill="#0f172a" stroke="#334155" />
            </g>
        </svg>
    }
}
