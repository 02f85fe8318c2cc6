use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Anchors on the page, in the order they appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Top,
    Showcase,
    Builder,
    Process,
    Pricing,
    Cta,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::Top => "top",
            Section::Showcase => "showcase",
            Section::Builder => "builder",
            Section::Process => "process",
            Section::Pricing => "pricing",
            Section::Cta => "cta",
        }
    }
}

/// Smooth-scrolls the section into view. Missing anchors are logged and ignored.
pub fn scroll_to(section: Section) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()))
    else {
        log::warn!("no element with id '{}' to scroll to", section.id());
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_page_anchors() {
        let ids: Vec<&str> = [
            Section::Top,
            Section::Showcase,
            Section::Builder,
            Section::Process,
            Section::Pricing,
            Section::Cta,
        ]
        .iter()
        .map(|s| s.id())
        .collect();
        assert_eq!(ids, vec!["top", "showcase", "builder", "process", "pricing", "cta"]);
    }
}
