use leptos::prelude::*;

use super::why_us::StarRow;
use crate::content::{TESTIMONIALS, Testimonial};
use crate::navigation::Section;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id=Section::Testimonials.anchor() class="py-20 bg-slate-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-blue-700 font-bold tracking-wide uppercase text-sm mb-3">"Testimonials"</h2>
                    <h3 class="text-3xl md:text-4xl font-extrabold text-slate-900">"What Our Customers Say"</h3>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {TESTIMONIALS.into_iter().map(|review| view! { <ReviewCard review=review /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ReviewCard(review: Testimonial) -> impl IntoView {
    view! {
        <div class="bg-white p-8 rounded-2xl shadow-sm border border-slate-100">
            <div class="flex gap-1 text-yellow-400 mb-4">
                <StarRow count=review.stars />
            </div>
            <p class="text-slate-600 mb-6 italic">{format!("\"{}\"", review.text)}</p>
            <div class="flex items-center gap-3">
                <div class="w-10 h-10 bg-slate-200 rounded-full flex items-center justify-center font-bold text-slate-500">
                    {review.initial().to_string()}
                </div>
                <div>
                    <div class="font-bold text-slate-900">{review.name}</div>
                    <div class="text-xs text-slate-500 uppercase">{review.role}</div>
                </div>
            </div>
        </div>
    }
}
