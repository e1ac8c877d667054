//! Fixed copy for the page sections. Nothing here changes at runtime.

use crate::sections::icons::*;

/// Card in the services grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceCard {
    pub icon: &'static str,
    /// Tailwind size and colour for the icon
    pub icon_class: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [ServiceCard; 6] = [
    ServiceCard {
        icon: ICON_CLOCK,
        icon_class: "w-8 h-8 text-red-500",
        title: "Emergency Repairs",
        description: "24/7 rapid response for burst pipes, severe leaks, and urgent plumbing disasters.",
    },
    ServiceCard {
        icon: ICON_DROPLETS,
        icon_class: "w-8 h-8 text-blue-500",
        title: "Drain Cleaning",
        description: "Professional unclogging and cleaning for slow drains, backups, and sewer lines.",
    },
    ServiceCard {
        icon: ICON_FLAME,
        icon_class: "w-8 h-8 text-orange-500",
        title: "Water Heater Services",
        description: "Repair, maintenance, and installation of tank and tankless water heater systems.",
    },
    ServiceCard {
        icon: ICON_SEARCH,
        icon_class: "w-8 h-8 text-teal-500",
        title: "Leak Detection",
        description: "Advanced technology to locate and fix hidden leaks behind walls or underground.",
    },
    ServiceCard {
        icon: ICON_WRENCH,
        icon_class: "w-8 h-8 text-slate-500",
        title: "Pipe Repair",
        description: "Fixing corroded, damaged, or noisy pipes to prevent water damage and restore flow.",
    },
    ServiceCard {
        icon: ICON_BUILDING,
        icon_class: "w-8 h-8 text-indigo-500",
        title: "Residential & Commercial",
        description: "Comprehensive plumbing solutions for both homeowners and business properties.",
    },
];

/// Icon + title + one-liner, used for differentiators and trust badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const DIFFERENTIATORS: [Highlight; 6] = [
    Highlight {
        icon: ICON_SHIELD,
        title: "Licensed & Insured",
        description: "Fully certified professionals for your peace of mind.",
    },
    Highlight {
        icon: ICON_CHECK_CIRCLE,
        title: "Upfront Pricing",
        description: "No hidden fees. You know the price before we start.",
    },
    Highlight {
        icon: ICON_CLOCK,
        title: "Same-Day Service",
        description: "Fast scheduling to get your home back to normal.",
    },
    Highlight {
        icon: ICON_HAMMER,
        title: "Experienced Techs",
        description: "Skilled plumbers with years of hands-on experience.",
    },
    Highlight {
        icon: ICON_PHONE,
        title: "24/7 Emergency",
        description: "We are always available when you need us most.",
    },
    Highlight {
        icon: ICON_STAR,
        title: "Satisfaction Guaranteed",
        description: "We stand behind our work with a 100% guarantee.",
    },
];

/// Badges under the hero call-to-action buttons.
pub const TRUST_BADGES: [Highlight; 3] = [
    Highlight { icon: ICON_SHIELD, title: "Licensed & Insured", description: "" },
    Highlight { icon: ICON_CLOCK, title: "24/7 Emergency", description: "" },
    Highlight { icon: ICON_STAR, title: "5-Star Rated", description: "" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
    pub stars: u8,
}

impl Testimonial {
    /// Letter shown in the avatar bubble.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Michael Chen",
        role: "Homeowner",
        text: "I had a burst pipe at 2 AM on a Sunday. Precision Plumbing was there in 45 minutes and fixed it fast. Lifesavers!",
        stars: 5,
    },
    Testimonial {
        name: "Jessica Williams",
        role: "Business Owner",
        text: "We use Precision for all our restaurant's plumbing needs. They are professional, clean, and always on time. Highly recommend.",
        stars: 5,
    },
    Testimonial {
        name: "Robert Davis",
        role: "Homeowner",
        text: "Honest pricing and great work. The technician explained everything clearly and didn't try to upsell me. Will definitely use again.",
        stars: 5,
    },
];

/// Review card overlapping the "why us" photo.
pub const FEATURED_REVIEW: Testimonial = Testimonial {
    name: "Sarah J.",
    role: "Local Resident",
    text: "Best plumbing service I have ever used!",
    stars: 5,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { value: "15+", label: "Years Experience" },
    Stat { value: "5k+", label: "Jobs Completed" },
    Stat { value: "24/7", label: "Support" },
];

pub const SERVICE_AREAS: [&str; 6] = [
    "Downtown",
    "Westside",
    "North Hills",
    "Suburban Valley",
    "River District",
    "East Lake",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const BUSINESS_HOURS: [OpeningHours; 3] = [
    OpeningHours { days: "Mon - Fri:", hours: "7:00 AM - 7:00 PM" },
    OpeningHours { days: "Saturday:", hours: "8:00 AM - 5:00 PM" },
    OpeningHours { days: "Sunday:", hours: "Emergency Only" },
];

/// Footer social placeholders; they link nowhere yet.
pub const SOCIAL_GLYPHS: [(&str, &str); 2] = [("Twitter", GLYPH_TWITTER), ("Facebook", GLYPH_FACEBOOK)];

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1581244277943-fe4a9c777189?ixlib=rb-4.0.3&auto=format&fit=crop&w=2000&q=80";

pub const WHY_US_IMAGE: &str = "https://images.unsplash.com/photo-1607472586893-edb57bdc0e39?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn service_titles_are_unique() {
        let titles: HashSet<_> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles.len(), SERVICES.len());
    }

    #[test]
    fn every_card_has_copy_and_icon() {
        for service in SERVICES {
            assert!(!service.description.is_empty(), "{}", service.title);
            assert!(service.icon.starts_with('M'));
            assert!(service.icon_class.contains(" text-"));
        }
        for item in DIFFERENTIATORS {
            assert!(!item.description.is_empty(), "{}", item.title);
        }
    }

    #[test]
    fn ratings_stay_within_five_stars() {
        for review in TESTIMONIALS.iter().chain([&FEATURED_REVIEW]) {
            assert!((1..=5).contains(&review.stars), "{}", review.name);
        }
    }

    #[test]
    fn avatar_initials() {
        let initials: String = TESTIMONIALS.iter().map(Testimonial::initial).collect();
        assert_eq!(initials, "MJR");

        let anonymous = Testimonial { name: "", ..FEATURED_REVIEW };
        assert_eq!(anonymous.initial(), '?');
    }

    #[test]
    fn hours_cover_the_week() {
        let days: Vec<_> = BUSINESS_HOURS.iter().map(|h| h.days).collect();
        assert_eq!(days, ["Mon - Fri:", "Saturday:", "Sunday:"]);
    }
}
