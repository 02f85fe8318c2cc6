use yew::prelude::*;

#[function_component(RobotIllustration)]
pub fn robot_illustration() -> Html {
    html! {
        <div class="robot-illustration">
            <div class="robot-illustration__frame"></div>
            <div class="robot-illustration__glow"></div>
            <div class="robot-illustration__art">
                <svg viewBox="0 0 300 300">
                    <defs>
                        <linearGradient id="hero-arm" x1="0" x2="1">
                            <stop offset="0%" stop-color="#22d3ee" />
                            <stop offset="100%" stop-color="#818cf8" />
                        </linearGradient>
                    </defs>
                    <g transform="translate(20,20)">
                        <rect x="40" y="190" width="220" height="60" rx="14" fill="#0f172a" stroke="#334155" />
                        <circle cx="70" cy="245" r="12" fill="#22d3ee" />
                        <circle cx="230" cy="245" r="12" fill="#22d3ee" />
                        <rect x="90" y="80" width="120" height="40" rx="8" fill="#0f172a" stroke="#334155" />
                        <rect x="110" y="40" width="80" height="40" rx="8" fill="#0f172a" stroke="#334155" />
                        <rect x="130" y="20" width="40" height="20" rx="6" fill="#22d3ee" />
                        <path d="M150 120 L210 160" stroke="url(#hero-arm)" stroke-width="10" stroke-linecap="round" />
                        <path d="M210 160 L240 150" stroke="url(#hero-arm)" stroke-width="10" stroke-linecap="round" />
                        <circle cx="210" cy="160" r="8" fill="#22d3ee" />
                        <rect x="138" y="120" width="24" height="24" rx="4" fill="#22d3ee" />
                        <rect x="60" y="140" width="60" height="70" rx="10" fill="#0f172a" stroke="#334155" />
                        <circle cx="90" cy="175" r="16" fill="#22d3ee" />
                    </g>
                </svg>
            </div>
        </div>
    }
}
