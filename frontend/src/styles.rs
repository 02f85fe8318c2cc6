use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Page-wide theme. Section-specific rules live next to the section.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                color-scheme: dark;
            }
            * {
                box-sizing: border-box;
            }
            html {
                scroll-behavior: smooth;
            }
            body {
                margin: 0;
                background: #020617;
                color: #f1f5f9;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                -webkit-font-smoothing: antialiased;
            }
            h1, h2, h3 {
                margin: 0;
                letter-spacing: -0.02em;
            }
            h1 {
                font-size: clamp(2.25rem, 5vw, 3.75rem);
                font-weight: 900;
                line-height: 1.1;
            }
            h2 {
                font-size: clamp(1.875rem, 3.5vw, 2.25rem);
                font-weight: 800;
            }
            button {
                font: inherit;
                color: inherit;
                cursor: pointer;
                background: none;
                border: none;
            }
            .container {
                max-width: 80rem;
                margin: 0 auto;
                padding: 0 1.5rem;
                position: relative;
            }
            .container.narrow {
                max-width: 48rem;
                text-align: center;
            }
            .section {
                padding-top: 4rem;
                padding-bottom: 4rem;
            }
            .muted {
                color: #94a3b8;
            }
            .small {
                font-size: 0.875rem;
            }
            .tiny {
                font-size: 0.75rem;
            }
            .strong {
                font-weight: 600;
                color: #fff;
            }
            .eyebrow {
                text-align: center;
                font-size: 0.75rem;
                letter-spacing: 0.2em;
                text-transform: uppercase;
                color: #94a3b8;
            }
            .icon {
                flex-shrink: 0;
            }
            .card {
                position: relative;
                overflow: hidden;
                border-radius: 1rem;
                border: 1px solid rgba(255, 255, 255, 0.1);
                background: rgba(15, 23, 42, 0.4);
            }
            .card__body {
                position: relative;
                padding: 1.5rem;
            }
            .card__wash {
                position: absolute;
                inset: 0;
                opacity: 0.2;
                pointer-events: none;
            }
            .icon-tile {
                height: 3.5rem;
                width: 3.5rem;
                border-radius: 0.75rem;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(30, 41, 59, 0.6);
                border: 1px solid rgba(255, 255, 255, 0.1);
            }
            .icon-tile--small {
                height: 2.5rem;
                width: 2.5rem;
            }
            .two-grid, .three-grid, .four-grid {
                display: grid;
                gap: 1.5rem;
                margin-top: 2rem;
            }
            @media (min-width: 768px) {
                .three-grid {
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                }
                .four-grid {
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                }
            }
            @media (min-width: 1024px) {
                .two-grid {
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 2.5rem;
                }
                .four-grid {
                    grid-template-columns: repeat(4, minmax(0, 1fr));
                }
            }
            .primary-button {
                padding: 0.75rem 1.5rem;
                border-radius: 0.75rem;
                background: #06b6d4;
                color: #0f172a;
                font-weight: 600;
                text-decoration: none;
                box-shadow: 0 10px 25px rgba(6, 182, 212, 0.25);
            }
            .primary-button:hover {
                background: #22d3ee;
            }
            .ghost-button {
                padding: 0.75rem 1.5rem;
                border-radius: 0.75rem;
                border: 1px solid rgba(255, 255, 255, 0.15);
                color: #e2e8f0;
                text-decoration: none;
            }
            .pill-button {
                border-radius: 9999px;
                background: rgba(6, 182, 212, 0.9);
                color: #0f172a;
                font-weight: 600;
                padding: 0.5rem 1rem;
                font-size: 0.875rem;
            }
            .soft-button {
                padding: 0.375rem 0.75rem;
                border-radius: 0.5rem;
                background: rgba(255, 255, 255, 0.1);
                font-size: 0.875rem;
            }
            .soft-button.wide {
                width: 100%;
                margin-top: 1.5rem;
                padding: 0.5rem;
                border-radius: 0.75rem;
            }
            .link-button {
                color: #22d3ee;
                font-size: 0.875rem;
            }
            .nav-link {
                color: #cbd5e1;
                font-size: 0.875rem;
                padding: 0;
            }
            .nav-link:hover {
                color: #fff;
            }
            .check-list, .plain-list, .preview__summary {
                list-style: none;
                padding: 0;
                margin: 1.5rem 0 0;
                display: grid;
                gap: 0.5rem;
                font-size: 0.875rem;
                color: #cbd5e1;
            }
            .check-list li, .preview__summary li {
                display: flex;
                align-items: center;
                gap: 0.5rem;
            }
            .background-grid {
                pointer-events: none;
                user-select: none;
                position: absolute;
                inset: 0;
                overflow: hidden;
            }
            .background-grid__cells {
                display: grid;
            }
            .background-grid__cell {
                aspect-ratio: 1 / 1;
                border: 1px solid rgba(255, 255, 255, 0.05);
            }
        "#)} />
    }
}
