use log::{debug, warn};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};

pub const SECTIONS: [(&str, &str); 5] = [
    ("services", "Services"),
    ("approach", "Approach"),
    ("benefits", "Benefits"),
    ("team", "Team"),
    ("contact", "Contact Us"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    Scrolled,
    Missing,
}

pub trait Scrollable {
    fn scroll_smoothly(&self);
}

/// Finds page regions by element id.
pub trait SectionLookup {
    type Section: Scrollable;

    fn find_section(&self, id: &str) -> Option<Self::Section>;
}

impl Scrollable for Element {
    fn scroll_smoothly(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl SectionLookup for Document {
    type Section = Element;

    fn find_section(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }
}

/// Issues one smooth scroll towards the section, or nothing if it is absent.
pub fn scroll_to_section<L: SectionLookup>(lookup: &L, id: &str) -> ScrollOutcome {
    match lookup.find_section(id) {
        Some(section) => {
            debug!("scrolling to section {:?}", id);
            section.scroll_smoothly();
            ScrollOutcome::Scrolled
        }
        None => {
            warn!("no section with id {:?} to scroll to", id);
            ScrollOutcome::Missing
        }
    }
}

pub fn scroll_in_document(id: &str) -> ScrollOutcome {
    match web_sys::window().and_then(|window| window.document()) {
        Some(document) => scroll_to_section(&document, id),
        None => {
            warn!("no document available, cannot scroll to {:?}", id);
            ScrollOutcome::Missing
        }
    }
}
