use leptos::prelude::*;

use super::icons::*;
use crate::config::SiteConfig;
use crate::content::{BUSINESS_HOURS, SERVICE_AREAS, SOCIAL_GLYPHS};

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="bg-slate-900 text-slate-400 py-16 border-t border-slate-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-12 mb-12">
                    <div>
                        <div class="flex items-center gap-2 mb-6">
                            <div class="bg-blue-700 p-1.5 rounded-lg">
                                <Icon path=ICON_WRENCH class="w-5 h-5 text-white" />
                            </div>
                            <span class="text-xl font-bold text-white">{config.brand.clone()}</span>
                        </div>
                        <p class="mb-6">
                            "Professional plumbing services you can trust. Licensed, insured, and ready to help."
                        </p>
                        <div class="flex gap-4">
                            {SOCIAL_GLYPHS
                                .into_iter()
                                .map(|(label, glyph)| {
                                    view! {
                                        <div
                                            class="w-10 h-10 bg-slate-800 rounded-full flex items-center justify-center hover:bg-blue-700 transition-colors cursor-pointer"
                                            title=label
                                        >
                                            <Glyph path=glyph />
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h4 class="text-white font-bold mb-6">"Contact Info"</h4>
                        <ul class="space-y-4">
                            <li class="flex items-start gap-3">
                                <Icon path=ICON_MAP_PIN class="w-5 h-5 text-blue-500 flex-shrink-0" />
                                <span>{config.street.clone()} <br /> {config.city_line.clone()}</span>
                            </li>
                            <li class="flex items-center gap-3">
                                <Icon path=ICON_PHONE class="w-5 h-5 text-blue-500 flex-shrink-0" />
                                <a href=config.tel_href() class="hover:text-white transition-colors">
                                    {config.phone_display.clone()}
                                </a>
                            </li>
                            <li class="flex items-center gap-3">
                                <Icon path=ICON_MAIL class="w-5 h-5 text-blue-500 flex-shrink-0" />
                                <a href=config.mailto_href() class="hover:text-white transition-colors">
                                    {config.email.clone()}
                                </a>
                            </li>
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-white font-bold mb-6">"Service Areas"</h4>
                        <ul class="space-y-2">
                            {SERVICE_AREAS.into_iter().map(|area| view! { <li>{area}</li> }).collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-white font-bold mb-6">"Business Hours"</h4>
                        <ul class="space-y-2">
                            {BUSINESS_HOURS
                                .into_iter()
                                .map(|slot| {
                                    view! {
                                        <li class="flex justify-between">
                                            <span>{slot.days}</span>
                                            <span class="text-white">{slot.hours}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="pt-8 border-t border-slate-800 text-center text-sm">
                    <p>{format!("© {year} {}. All rights reserved.", config.business_name)}</p>
                </div>
            </div>
        </footer>
    }
}
