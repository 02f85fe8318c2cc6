use yew::prelude::*;

use crate::animation::use_counter::use_counter;
use crate::animation::visibility::use_seen_once;
use crate::components::stat_card::StatCard;
use crate::config;

/// Targets the three counters run up to.
pub const ROBOTS_DEPLOYED: u32 = 120;
pub const INDUSTRIES_SERVED: u32 = 48;
pub const UPTIME_WHOLE_PERCENT: u32 = 99;

pub fn robots_label(count: u32) -> String {
    format!("{}+", count)
}

pub fn uptime_label(count: u32) -> String {
    format!("{}.9%", count)
}

#[function_component(Stats)]
pub fn stats() -> Html {
    let section_ref = use_node_ref();
    let start = use_seen_once(section_ref.clone(), config::STATS_VISIBILITY_THRESHOLD);

    let robots = use_counter(ROBOTS_DEPLOYED, start);
    let industries = use_counter(INDUSTRIES_SERVED, start);
    let uptime = use_counter(UPTIME_WHOLE_PERCENT, start);

    html! {
        <section ref={section_ref} class="container section stats">
            <div class="stats__grid">
                <StatCard label="Robots deployed" value={robots_label(robots)} accent={("#06b6d4", "#3b82f6")} />
                <StatCard label="Industries served" value={industries.to_string()} accent={("#d946ef", "#8b5cf6")} />
                <StatCard label="Uptime SLA" value={uptime_label(uptime)} accent={("#10b981", "#84cc16")} />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_final_values() {
        assert_eq!(robots_label(ROBOTS_DEPLOYED), "120+");
        assert_eq!(INDUSTRIES_SERVED.to_string(), "48");
        assert_eq!(uptime_label(UPTIME_WHOLE_PERCENT), "99.9%");
    }

    #[test]
    fn labels_before_start() {
        assert_eq!(robots_label(0), "0+");
        assert_eq!(uptime_label(0), "0.9%");
    }
}
