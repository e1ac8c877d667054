use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content::STATS;
use crate::navigation::Section;

#[component]
pub fn About() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let story = format!(
        "Founded in {}, {} has grown from a single van to a fleet of trusted professionals. \
         We are locally owned and operated, which means we care deeply about our community and our reputation. \
         Our commitment is simple: provide honest, high-quality work at a fair price. \
         When you call us, you are calling a neighbor who cares.",
        config.founded, config.business_name
    );

    view! {
        <section id=Section::About.anchor() class="py-20 bg-slate-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="max-w-4xl mx-auto text-center">
                    <h2 class="text-blue-400 font-bold tracking-wide uppercase text-sm mb-3">"About Us"</h2>
                    <h3 class="text-3xl md:text-4xl font-extrabold mb-6">"Locally Owned & Dedicated to Quality"</h3>
                    <p class="text-xl text-slate-300 leading-relaxed mb-8">{story}</p>
                    <div class="flex justify-center gap-8">
                        {STATS
                            .into_iter()
                            .map(|stat| {
                                view! {
                                    <div class="text-center">
                                        <div class="text-4xl font-bold text-blue-500 mb-1">{stat.value}</div>
                                        <div class="text-sm text-slate-400 uppercase tracking-wider">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
