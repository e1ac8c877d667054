use leptos::prelude::*;

use super::icons::*;
use super::{LeadCaptureForm, use_navigator};
use crate::config::SiteConfig;
use crate::content::{HERO_IMAGE, TRUST_BADGES};
use crate::navigation::Section;

#[component]
pub fn Hero() -> impl IntoView {
    let nav = use_navigator();
    let config = expect_context::<SiteConfig>();

    view! {
        <section class="relative pt-28 pb-20 lg:pt-36 lg:pb-32 bg-slate-900 overflow-hidden">
            <div class="absolute inset-0 z-0">
                <img src=HERO_IMAGE alt="Professional plumber working" class="w-full h-full object-cover opacity-20" />
                <div class="absolute inset-0 bg-gradient-to-b from-slate-900/80 via-slate-900/60 to-slate-900/90"></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-12 lg:gap-8 items-center">
                    <div class="text-center lg:text-left space-y-8">
                        <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-blue-900/50 border border-blue-700/50 text-blue-300 text-sm font-medium mb-2">
                            <span class="relative flex h-2 w-2">
                                <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-blue-400 opacity-75"></span>
                                <span class="relative inline-flex rounded-full h-2 w-2 bg-blue-500"></span>
                            </span>
                            "Available 24/7 for Emergencies"
                        </div>

                        <h1 class="text-4xl sm:text-5xl lg:text-6xl font-extrabold text-white tracking-tight leading-tight">
                            {config.business_name.clone()}
                            <br />
                            <span class="text-blue-500">"Done Right the First Time."</span>
                        </h1>

                        <p class="text-xl text-slate-300 max-w-2xl mx-auto lg:mx-0">
                            "Fast, reliable plumbing services for homes and businesses. "
                            "We fix it properly so you don't have to worry."
                        </p>

                        <div class="flex flex-col sm:flex-row items-center justify-center lg:justify-start gap-4">
                            <button
                                class="w-full sm:w-auto px-8 py-4 bg-blue-600 hover:bg-blue-700 text-white rounded-xl font-bold text-lg shadow-lg shadow-blue-900/20 transition-all transform hover:-translate-y-1"
                                on:click=move |_| nav.go(Section::Contact)
                            >
                                "Get a Free Estimate"
                            </button>
                            <a
                                href=config.tel_href()
                                class="w-full sm:w-auto px-8 py-4 bg-white/10 hover:bg-white/20 backdrop-blur-sm border border-white/10 text-white rounded-xl font-bold text-lg transition-all flex items-center justify-center gap-2"
                            >
                                <Icon path=ICON_PHONE />
                                "Call Now"
                            </a>
                        </div>

                        <div class="pt-6 flex flex-wrap justify-center lg:justify-start gap-4 sm:gap-8 text-sm font-medium text-slate-400">
                            {TRUST_BADGES
                                .into_iter()
                                .map(|badge| {
                                    view! {
                                        <div class="flex items-center gap-2">
                                            <Icon path=badge.icon class="w-5 h-5 text-blue-500" />
                                            <span>{badge.title}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <LeadCaptureForm />
                </div>
            </div>
        </section>
    }
}
