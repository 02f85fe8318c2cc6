use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or(28)]
    pub size: u32,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <svg width={props.size.to_string()} height={props.size.to_string()} viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <defs>
                <linearGradient id="logo-gradient" x1="0" x2="1" y1="0" y2="1">
                    <stop offset="0%" stop-color="#22d3ee" />
                    <stop offset="100%" stop-color="#6366f1" />
                </linearGradient>
            </defs>
            <rect x="3" y="3" width="18" height="18" rx="4" fill="url(#logo-gradient)" opacity="0.2" />
            <path d="M7 16l5-8 5 8" stroke="url(#logo-gradient)" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
            <circle cx="12" cy="12" r="2" fill="#22d3ee" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
struct OutlineIconProps {
    color: &'static str,
    #[prop_or(16)]
    size: u32,
    #[prop_or(1.5)]
    stroke_width: f64,
    children: Children,
}

#[function_component(OutlineIcon)]
fn outline_icon(props: &OutlineIconProps) -> Html {
    html! {
        <svg
            viewBox="0 0 24 24"
            width={props.size.to_string()}
            height={props.size.to_string()}
            fill="none"
            stroke={props.color}
            stroke-width={props.stroke_width.to_string()}
            class="icon"
        >
            { for props.children.iter() }
        </svg>
    }
}

#[function_component(ShieldIcon)]
pub fn shield_icon() -> Html {
    html! {
        <OutlineIcon color="#22d3ee">
            <path d="M12 3l7 4v5c0 5-3.5 7.5-7 9-3.5-1.5-7-4-7-9V7l7-4z" />
        </OutlineIcon>
    }
}

#[function_component(SparklesIcon)]
pub fn sparkles_icon() -> Html {
    html! {
        <OutlineIcon color="#67e8f9">
            <path d="M12 3l2 4 4 2-4 2-2 4-2-4-4-2 4-2 2-4z" />
            <path d="M19 14l1 2 2 1-2 1-1 2-1-2-2-1 2-1 1-2z" />
        </OutlineIcon>
    }
}

#[function_component(CheckIcon)]
pub fn check_icon() -> Html {
    html! {
        <OutlineIcon color="#34d399" stroke_width={2.0}>
            <path d="M5 13l4 4L19 7" stroke-linecap="round" stroke-linejoin="round" />
        </OutlineIcon>
    }
}

#[function_component(CompassIcon)]
pub fn compass_icon() -> Html {
    html! {
        <OutlineIcon color="#22d3ee" size={20} stroke_width={1.6}>
            <circle cx="12" cy="12" r="10" />
            <path d="M15 9l-3 6-3-3 6-3z" />
        </OutlineIcon>
    }
}

#[function_component(PencilIcon)]
pub fn pencil_icon() -> Html {
    html! {
        <OutlineIcon color="#e879f9" size={20} stroke_width={1.6}>
            <path d="M4 20l4-1 9-9-3-3-9 9-1 4z" />
            <path d="M14 4l3 3" />
        </OutlineIcon>
    }
}

#[function_component(WrenchIcon)]
pub fn wrench_icon() -> Html {
    html! {
        <OutlineIcon color="#34d399" size={20} stroke_width={1.6}>
            <path d="M14 7a4 4 0 10-6 4l-5 5 3 3 5-5a4 4 0 003-7z" />
        </OutlineIcon>
    }
}

#[function_component(RocketIcon)]
pub fn rocket_icon() -> Html {
    html! {
        <OutlineIcon color="#a78bfa" size={20} stroke_width={1.6}>
            <path d="M5 13l-2 6 6-2 8-8-4-4-8 8z" />
            <path d="M12 6l6 6" />
        </OutlineIcon>
    }
}

#[function_component(MiniRobotIcon)]
pub fn mini_robot_icon() -> Html {
    html! {
        <svg viewBox="0 0 24 24" width="28" height="28" fill="none">
            <rect x="6" y="4" width="12" height="8" rx="2" fill="#22d3ee" />
            <rect x="5" y="12" width="14" height="6" rx="2" fill="#64748b" />
            <circle cx="9" cy="7.5" r="1" fill="#0f172a" />
            <circle cx="15" cy="7.5" r="1" fill="#0f172a" />
        </svg>
    }
}
