//! In-page navigation: section anchors and the smooth-scroll navigator.

use std::fmt;
use std::str::FromStr;

use crate::state::MenuVisibility;

/// Sections that can be scrolled to. The anchor is the element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Services,
    WhyUs,
    About,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Services,
        Section::WhyUs,
        Section::About,
        Section::Testimonials,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Services => "services",
            Section::WhyUs => "why-us",
            Section::About => "about",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for Section {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.anchor() == s)
            .ok_or(())
    }
}

/// A header navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: Section,
}

/// Entries shown in both the desktop nav and the mobile menu.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Services", target: Section::Services },
    NavItem { label: "Why Us", target: Section::WhyUs },
    NavItem { label: "About", target: Section::About },
    NavItem { label: "Reviews", target: Section::Testimonials },
];

/// Something that can bring an element into view by id.
pub trait ScrollTarget {
    /// Returns false when no element carries `anchor`.
    fn scroll_into_view(&self, anchor: &str) -> bool;

    fn scroll_to_top(&self);
}

/// Scrolls the live document with `behavior: smooth`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomScroller;

impl ScrollTarget for DomScroller {
    fn scroll_into_view(&self, anchor: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(anchor))
        else {
            return false;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Scroll to the section named `id` and close the mobile menu.
///
/// Unknown ids and missing anchors do nothing, menu included. Returns
/// whether a scroll happened.
pub fn navigate_to(id: &str, scroller: &impl ScrollTarget, menu: &mut MenuVisibility) -> bool {
    let Ok(section) = id.parse::<Section>() else {
        tracing::debug!(id, "ignoring navigation to unknown section");
        return false;
    };
    navigate(section, scroller, menu)
}

/// Typed form of [`navigate_to`].
pub fn navigate(section: Section, scroller: &impl ScrollTarget, menu: &mut MenuVisibility) -> bool {
    if !scroller.scroll_into_view(section.anchor()) {
        tracing::debug!(%section, "section anchor not in document");
        return false;
    }
    tracing::info!(%section, "navigated");
    menu.close();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Records scroll requests; only knows the anchors it was built with.
    struct RecordingScroller {
        anchors: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl RecordingScroller {
        fn with_all_sections() -> Self {
            Self {
                anchors: Section::ALL.iter().map(|s| s.anchor()).collect(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollTarget for RecordingScroller {
        fn scroll_into_view(&self, anchor: &str) -> bool {
            if !self.anchors.iter().any(|known| *known == anchor) {
                return false;
            }
            self.scrolled.borrow_mut().push(anchor.to_string());
            true
        }

        fn scroll_to_top(&self) {
            self.scrolled.borrow_mut().push("top".to_string());
        }
    }

    fn open_menu() -> MenuVisibility {
        let mut menu = MenuVisibility::default();
        menu.toggle();
        menu
    }

    #[test]
    fn every_nav_item_scrolls_and_closes_menu() {
        for item in NAV_ITEMS {
            let scroller = RecordingScroller::with_all_sections();
            let mut menu = open_menu();

            assert!(navigate(item.target, &scroller, &mut menu));
            assert!(!menu.is_open(), "{} left the menu open", item.label);
            assert_eq!(*scroller.scrolled.borrow(), vec![item.target.anchor().to_string()]);
        }
    }

    #[test]
    fn reviews_label_targets_testimonials() {
        let reviews = NAV_ITEMS.iter().find(|i| i.label == "Reviews").unwrap();
        assert_eq!(reviews.target.anchor(), "testimonials");
    }

    #[test]
    fn navigating_with_closed_menu_keeps_it_closed() {
        let scroller = RecordingScroller::with_all_sections();
        let mut menu = MenuVisibility::default();
        assert!(navigate_to("contact", &scroller, &mut menu));
        assert!(!menu.is_open());
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let scroller = RecordingScroller::with_all_sections();
        let mut menu = open_menu();

        assert!(!navigate_to("pricing", &scroller, &mut menu));
        assert!(menu.is_open());
        assert!(scroller.scrolled.borrow().is_empty());
    }

    #[test]
    fn missing_anchor_is_a_no_op() {
        let scroller = RecordingScroller {
            anchors: vec!["services"],
            scrolled: RefCell::new(Vec::new()),
        };
        let mut menu = open_menu();

        assert!(!navigate(Section::About, &scroller, &mut menu));
        assert!(menu.is_open());
    }

    #[test]
    fn anchors_parse_back() {
        for section in Section::ALL {
            assert_eq!(section.anchor().parse::<Section>(), Ok(section));
        }
        assert_eq!(Section::WhyUs.to_string(), "why-us");
    }
}
