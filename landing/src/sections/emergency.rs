use leptos::prelude::*;

use super::icons::*;
use crate::config::SiteConfig;

/// Full-width "Need Emergency Plumbing Help?" band.
#[component]
pub fn EmergencyCta() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <section class="py-20 bg-blue-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="text-3xl md:text-5xl font-extrabold text-white mb-6">"Need Emergency Plumbing Help?"</h2>
                <p class="text-xl text-blue-100 mb-10 max-w-2xl mx-auto">
                    "Don't wait for water damage to get worse. We are available 24/7 for urgent plumbing issues."
                </p>
                <a
                    href=config.tel_href()
                    class="inline-flex items-center gap-3 bg-white text-blue-700 px-10 py-5 rounded-xl font-bold text-xl shadow-xl hover:bg-blue-50 transition-all transform hover:-translate-y-1"
                >
                    <Icon path=ICON_PHONE class="w-6 h-6" />
                    {format!("Call {}", config.phone_display)}
                </a>
            </div>
        </section>
    }
}
