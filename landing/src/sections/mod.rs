// Landing page sections

pub mod icons;

mod about;
mod emergency;
mod footer;
mod header;
mod hero;
mod lead_form;
mod services;
mod testimonials;
mod why_us;

pub use about::About;
pub use emergency::EmergencyCta;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use lead_form::LeadCaptureForm;
pub use services::Services;
pub use testimonials::Testimonials;
pub use why_us::WhyUs;

use leptos::prelude::*;

use crate::navigation::{self, DomScroller, ScrollTarget, Section};
use crate::state::MenuVisibility;

/// Page-wide handle for smooth-scrolling to a section. Owns the mobile menu
/// flag so any navigation can close it.
#[derive(Clone, Copy)]
pub struct Navigator {
    menu: RwSignal<MenuVisibility>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            menu: RwSignal::new(MenuVisibility::default()),
        }
    }

    pub fn go(&self, section: Section) {
        self.menu.update(|menu| {
            navigation::navigate(section, &DomScroller, menu);
        });
    }

    pub fn toggle_menu(&self) {
        self.menu.update(MenuVisibility::toggle);
    }

    pub fn menu_open(&self) -> bool {
        self.menu.get().is_open()
    }

    pub fn scroll_to_top(&self) {
        DomScroller.scroll_to_top();
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigator from context, provided by `App`.
pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_flag_changes_only_through_navigator_methods() {
        Owner::new().with(|| {
            let nav = Navigator::new();
            assert!(!nav.menu_open());
            nav.toggle_menu();
            assert!(nav.menu_open());
            nav.toggle_menu();
            assert!(!nav.menu_open());
        });
    }
}
