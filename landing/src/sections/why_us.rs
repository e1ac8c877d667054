use leptos::prelude::*;

use super::icons::*;
use crate::config::SiteConfig;
use crate::content::{DIFFERENTIATORS, FEATURED_REVIEW, WHY_US_IMAGE};
use crate::navigation::Section;

#[component]
pub fn WhyUs() -> impl IntoView {
    let business = expect_context::<SiteConfig>().business_name;

    view! {
        <section id=Section::WhyUs.anchor() class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="order-2 lg:order-1">
                        <h2 class="text-blue-700 font-bold tracking-wide uppercase text-sm mb-3">"Why Choose Us"</h2>
                        <h3 class="text-3xl md:text-4xl font-extrabold text-slate-900 mb-6">"The Precision Difference"</h3>
                        <p class="text-lg text-slate-600 mb-10">
                            "We don't just fix pipes; we build trust. Here is why thousands of local homeowners choose "
                            {business}
                            "."
                        </p>

                        <div class="grid sm:grid-cols-2 gap-6">
                            {DIFFERENTIATORS
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <div class="flex gap-4">
                                            <div class="flex-shrink-0 mt-1">
                                                <Icon path=item.icon class="w-6 h-6 text-blue-600" />
                                            </div>
                                            <div>
                                                <h4 class="font-bold text-slate-900">{item.title}</h4>
                                                <p class="text-sm text-slate-600 mt-1">{item.description}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="order-1 lg:order-2 relative">
                        <div class="absolute -inset-4 bg-blue-100 rounded-3xl transform rotate-3"></div>
                        <img
                            src=WHY_US_IMAGE
                            alt="Happy plumber with thumbs up"
                            class="relative rounded-2xl shadow-2xl w-full object-cover h-[500px]"
                        />
                        <div class="absolute bottom-8 left-8 bg-white p-6 rounded-xl shadow-xl max-w-xs">
                            <div class="flex items-center gap-1 text-yellow-400 mb-2">
                                <StarRow count=FEATURED_REVIEW.stars />
                            </div>
                            <p class="font-bold text-slate-900">{format!("\"{}\"", FEATURED_REVIEW.text)}</p>
                            <p class="text-sm text-slate-500 mt-2">
                                {format!("- {}, {}", FEATURED_REVIEW.name, FEATURED_REVIEW.role)}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// `count` filled stars in a row.
#[component]
pub fn StarRow(count: u8) -> impl IntoView {
    (0..count)
        .map(|_| view! { <Icon path=ICON_STAR class="w-5 h-5" filled=true /> })
        .collect_view()
}
