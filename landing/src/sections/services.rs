use leptos::prelude::*;

use super::icons::*;
use super::use_navigator;
use crate::content::{SERVICES, ServiceCard};
use crate::navigation::Section;

#[component]
pub fn Services() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <section id=Section::Services.anchor() class="py-20 bg-slate-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <h2 class="text-blue-700 font-bold tracking-wide uppercase text-sm mb-3">"What We Do"</h2>
                    <h3 class="text-3xl md:text-4xl font-extrabold text-slate-900 mb-4">"Our Plumbing Services"</h3>
                    <p class="text-lg text-slate-600">
                        "From minor leaks to major installations, our expert team handles it all with precision and care."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SERVICES.into_iter().map(|card| view! { <ServiceCardView card=card /> }).collect_view()}
                </div>

                <div class="mt-16 text-center">
                    <button
                        class="bg-slate-900 hover:bg-slate-800 text-white px-8 py-4 rounded-xl font-bold text-lg shadow-lg transition-all transform hover:-translate-y-1"
                        on:click=move |_| nav.go(Section::Contact)
                    >
                        "Schedule Your Service Today"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCardView(card: ServiceCard) -> impl IntoView {
    let nav = use_navigator();

    view! {
        <article class="bg-white p-8 rounded-2xl shadow-sm hover:shadow-xl hover:-translate-y-1 transition-all border border-slate-100">
            <div class="bg-slate-50 w-16 h-16 rounded-xl flex items-center justify-center mb-6">
                <Icon path=card.icon class=card.icon_class />
            </div>
            <h4 class="text-xl font-bold text-slate-900 mb-3">{card.title}</h4>
            <p class="text-slate-600 leading-relaxed mb-6">{card.description}</p>
            <button
                class="text-blue-600 font-semibold flex items-center gap-2 hover:gap-3 transition-all group"
                on:click=move |_| nav.go(Section::Contact)
            >
                "Learn more"
                <Icon path=ICON_ARROW_RIGHT class="w-4 h-4" />
            </button>
        </article>
    }
}
