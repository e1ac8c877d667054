//! Precision Plumbing landing page.
//!
//! A single Leptos CSR page: sticky header, hero with a lead capture form,
//! services, why-us, about, testimonials, an emergency call band and a
//! footer. The view state (mobile menu, lead form status) lives in
//! [`state`] and is plain data so it can be tested off the browser.

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod sections;
pub mod state;

pub use config::{ConfigSource, SiteConfig};
pub use error::{Result, SiteError};
