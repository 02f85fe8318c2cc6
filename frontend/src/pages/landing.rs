use yew::prelude::*;

use crate::models::pricing_tier::PricingTier;
use crate::sections::{
    builder::Builder, cta::Cta, footer::Footer, header::Header, hero::Hero, pricing::Pricing,
    process::Process, showcase::Showcase, stats::Stats, trust_bar::TrustBar,
};
use crate::utils::scroll::{scroll_to, Section};

/// Section rules. Rendered in the body, so they win over the head-mounted
/// global sheet for any selector both define.
const SECTION_STYLES: &str = r#"
    .site-header {
        position: sticky;
        top: 0;
        z-index: 40;
        backdrop-filter: blur(8px);
        background: rgba(2, 6, 23, 0.7);
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
        transition: background 0.3s ease;
    }
    .site-header.scrolled {
        background: rgba(2, 6, 23, 0.92);
    }
    .site-header__inner {
        display: flex;
        align-items: center;
        justify-content: space-between;
        height: 4rem;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        cursor: pointer;
    }
    .brand__name {
        font-weight: 600;
    }
    .site-nav {
        display: none;
        gap: 1.5rem;
    }
    @media (min-width: 768px) {
        .site-nav {
            display: flex;
        }
    }
    .hero {
        position: relative;
        overflow: hidden;
    }
    .hero__inner {
        display: grid;
        gap: 3rem;
        align-items: center;
        padding-top: 5rem;
        padding-bottom: 6rem;
    }
    @media (min-width: 1024px) {
        .hero__inner {
            grid-template-columns: repeat(2, minmax(0, 1fr));
        }
    }
    .lead {
        margin-top: 1.5rem;
        font-size: 1.125rem;
        color: #cbd5e1;
    }
    .hero__actions {
        margin-top: 2rem;
        display: flex;
        flex-wrap: wrap;
        gap: 0.75rem;
    }
    .hero__badges {
        margin-top: 2rem;
        display: flex;
        gap: 1.5rem;
        font-size: 0.75rem;
        color: #94a3b8;
    }
    .badge {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .robot-illustration {
        position: relative;
        height: 460px;
    }
    .robot-illustration__frame {
        position: absolute;
        inset: 0;
        border-radius: 1.5rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: linear-gradient(135deg, rgba(6, 182, 212, 0.1), rgba(139, 92, 246, 0.1));
    }
    .robot-illustration__glow {
        position: absolute;
        inset: -2.5rem;
        border-radius: 9999px;
        filter: blur(64px);
        background: rgba(6, 182, 212, 0.2);
        pointer-events: none;
    }
    .robot-illustration__art {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .robot-illustration__art svg {
        width: 100%;
        height: 100%;
        max-width: 520px;
    }
    .trust-bar {
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(15, 23, 42, 0.4);
        padding: 1.5rem 0;
    }
    .trust-bar__logos {
        margin-top: 1rem;
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(8rem, 1fr));
        gap: 1.5rem;
        text-align: center;
    }
    .trust-bar__logo {
        color: rgba(148, 163, 184, 0.8);
        font-weight: 600;
        font-size: 0.875rem;
        transition: color 0.2s ease;
    }
    .trust-bar__logo:hover {
        color: #e2e8f0;
    }
    .stats__grid {
        display: grid;
        gap: 1.5rem;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
    }
    .stat-card {
        padding: 1.5rem;
    }
    .stat-card__body {
        position: relative;
    }
    .stat-card__value {
        font-size: 2.25rem;
        font-weight: 900;
    }
    .stat-card__label {
        margin-top: 0.25rem;
        color: #94a3b8;
    }
    .showcase-card {
        transition: box-shadow 0.3s ease;
    }
    .showcase-card:hover {
        box-shadow: 0 25px 50px rgba(6, 182, 212, 0.1);
    }
    .showcase-card__wash {
        opacity: 0;
        transition: opacity 0.3s ease;
    }
    .showcase-card:hover .showcase-card__wash {
        opacity: 1;
    }
    .showcase-card__head, .preview__head, .showcase-card__actions {
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .showcase-card__actions {
        margin-top: 1.5rem;
    }
    .builder__title {
        font-size: 1.5rem;
        font-weight: 700;
    }
    .builder__controls {
        margin-top: 1.5rem;
        display: grid;
        gap: 1.5rem;
    }
    .field-label {
        font-size: 0.875rem;
        color: #cbd5e1;
    }
    .segmented {
        margin-top: 0.5rem;
        display: grid;
        grid-template-columns: repeat(3, minmax(0, 1fr));
        gap: 0.5rem;
    }
    .segment {
        padding: 0.5rem 0.75rem;
        border-radius: 0.5rem;
        border: 1px solid rgba(255, 255, 255, 0.15);
        background: rgba(255, 255, 255, 0.05);
    }
    .segment--active {
        background: #06b6d4;
        color: #0f172a;
        border-color: transparent;
    }
    .toggle-row {
        display: grid;
        grid-template-columns: repeat(2, minmax(0, 1fr));
        gap: 0.75rem;
    }
    .toggle {
        display: flex;
        align-items: center;
        justify-content: space-between;
        width: 100%;
        padding: 0.5rem 0.75rem;
        border-radius: 0.5rem;
        border: 1px solid rgba(255, 255, 255, 0.15);
        background: rgba(255, 255, 255, 0.05);
    }
    .toggle--on {
        background: rgba(16, 185, 129, 0.2);
        border-color: rgba(16, 185, 129, 0.4);
    }
    .toggle__label {
        font-size: 0.875rem;
    }
    .toggle__track {
        height: 1.5rem;
        width: 2.75rem;
        border-radius: 9999px;
        padding: 0.125rem;
        background: #475569;
        transition: background 0.2s ease;
    }
    .toggle--on .toggle__track {
        background: rgba(16, 185, 129, 0.8);
    }
    .toggle__thumb {
        display: block;
        height: 1.25rem;
        width: 1.25rem;
        border-radius: 9999px;
        background: #fff;
        transition: transform 0.2s ease;
    }
    .toggle--on .toggle__thumb {
        transform: translateX(1.25rem);
    }
    .range {
        width: 100%;
        accent-color: #06b6d4;
    }
    .estimate {
        margin-top: 2rem;
        padding: 1rem;
        border-radius: 0.75rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: linear-gradient(90deg, rgba(6, 182, 212, 0.1), rgba(59, 130, 246, 0.1));
    }
    .estimate__price {
        font-size: 1.875rem;
        font-weight: 900;
    }
    .preview__title {
        font-size: 1.25rem;
        font-weight: 700;
    }
    .preview__stage {
        position: relative;
        margin-top: 1.5rem;
        aspect-ratio: 16 / 9;
        overflow: hidden;
        border-radius: 0.75rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: linear-gradient(135deg, #1e293b, #0f172a);
    }
    .preview__grid {
        position: absolute;
        inset: 0;
        opacity: 0.3;
    }
    .preview__art {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .robot-preview {
        width: 100%;
        height: 100%;
    }
    .process__icon {
        height: 3rem;
        width: 3rem;
        margin-bottom: 1rem;
    }
    .pricing__head {
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
    }
    .tier-switch {
        display: flex;
        gap: 0.5rem;
        padding: 0.25rem;
        border-radius: 9999px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
    }
    .tier-switch__option {
        font-size: 0.875rem;
        padding: 0.375rem 0.75rem;
        border-radius: 9999px;
    }
    .tier-switch__option--active {
        background: #06b6d4;
        color: #0f172a;
    }
    .tier-card__wash {
        opacity: 0.1;
    }
    .tier-card--active {
        border-color: rgba(34, 211, 238, 0.4);
    }
    .tier-card__price {
        margin-top: 0.25rem;
        font-size: 2.25rem;
        font-weight: 900;
    }
    .cta {
        position: relative;
        overflow: hidden;
    }
    .cta__grid {
        position: absolute;
        inset: 0;
        opacity: 0.3;
    }
    .cta__inner {
        padding-top: 4rem;
        padding-bottom: 4rem;
    }
    .cta__form {
        margin: 1.5rem auto 0;
        max-width: 36rem;
        display: flex;
        flex-wrap: wrap;
        gap: 0.75rem;
    }
    .text-input {
        flex: 1;
        min-width: 14rem;
        padding: 0.75rem 1rem;
        border-radius: 0.75rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
        color: inherit;
        outline: none;
    }
    .text-input:focus {
        border-color: #22d3ee;
    }
    .text-input--error {
        border-color: rgba(244, 63, 94, 0.6);
    }
    .form-error {
        margin-top: 0.5rem;
        font-size: 0.875rem;
        color: #fb7185;
    }
    .form-success {
        margin-top: 1rem;
        font-size: 0.875rem;
        color: #34d399;
    }
    .site-footer {
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        background: #020617;
        padding: 2.5rem 0;
    }
    .footer__heading {
        margin-bottom: 0.5rem;
    }
    .site-footer .plain-list {
        margin-top: 0;
    }
    .footer__copyright {
        margin-top: 2rem;
        font-size: 0.75rem;
        color: #64748b;
    }
"#;

#[function_component(Landing)]
pub fn landing() -> Html {
    let active_tier = use_state_eq(PricingTier::default);

    let on_nav = Callback::from(|section: Section| {
        log::debug!("scrolling to #{}", section.id());
        scroll_to(section);
    });

    let on_tier_change = {
        let active_tier = active_tier.clone();
        Callback::from(move |tier: PricingTier| active_tier.set(tier))
    };

    html! {
        <div class="landing">
            <style>{ SECTION_STYLES }</style>
            <Header on_nav={on_nav.clone()} />
            <main>
                <Hero on_nav={on_nav.clone()} />
                <TrustBar />
                <Stats />
                <Showcase on_nav={on_nav.clone()} />
                <Builder />
                <Process />
                <Pricing active={*active_tier} on_change={on_tier_change} />
                <Cta />
            </main>
            <Footer {on_nav} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::SECTION_STYLES;

    #[test]
    fn header_nav_shows_on_wide_screens() {
        let hidden = SECTION_STYLES
            .find(".site-nav {\n        display: none;")
            .expect("base nav rule");
        let media = SECTION_STYLES
            .find("@media (min-width: 768px) {\n        .site-nav {\n            display: flex;")
            .expect("wide-screen nav rule");
        assert!(media > hidden);
    }
}
