use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::icons::*;
use crate::config::SiteConfig;
use crate::navigation::Section;
use crate::state::{FormStatus, LeadDraft, LeadForm, ServiceType};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-slate-300 focus:ring-2 focus:ring-blue-500 focus:border-blue-500 outline-none transition-all";

/// "Request Service Now" card. Submissions go nowhere: after the configured
/// delay the card flips to a confirmation.
#[component]
pub fn LeadCaptureForm() -> impl IntoView {
    let delay = expect_context::<SiteConfig>().submit_delay();
    let lead = RwSignal::new(LeadForm::new());
    let draft = RwSignal::new(LeadDraft::default());
    let status = move || lead.with(LeadForm::status);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut form = lead.get_untracked();
        match draft.with_untracked(|draft| form.submit(draft)) {
            // No sink for the request; it is dropped here.
            Ok(_request) => {
                lead.set(form);
                tracing::info!(status = %form.status(), "lead form submitted");
                set_timeout(
                    move || {
                        let mut form = lead.get_untracked();
                        match draft.try_update(|draft| form.complete(draft)) {
                            Some(Ok(())) => {
                                lead.set(form);
                                tracing::info!(status = %form.status(), "lead form completed");
                            }
                            Some(Err(err)) => tracing::warn!(error = %err, "submission timer fired late"),
                            None => tracing::debug!("lead form unmounted before the timer fired"),
                        }
                    },
                    delay,
                );
            }
            Err(err) => tracing::debug!(error = %err, "lead form not submitted"),
        }
    };

    let send_another = move |_: leptos::ev::MouseEvent| {
        lead.update(|form| match form.reset() {
            Ok(()) => tracing::info!(status = %form.status(), "lead form reset"),
            Err(err) => tracing::warn!(error = %err, "lead form reset ignored"),
        });
    };

    view! {
        <div id=Section::Contact.anchor() class="bg-white rounded-2xl shadow-2xl p-6 sm:p-8 lg:p-10 border border-slate-100">
            <div class="mb-6">
                <h3 class="text-2xl font-bold text-slate-900">"Request Service Now"</h3>
                <p class="text-slate-600 mt-1">"Fast response. 100% satisfaction guaranteed."</p>
            </div>

            <Show
                when=move || status() != FormStatus::Success
                fallback=move || view! { <Confirmation on_reset=send_another /> }
            >
                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label for="name" class="block text-sm font-medium text-slate-700 mb-1">"Full Name"</label>
                        <input
                            type="text"
                            id="name"
                            required
                            class=INPUT_CLASS
                            placeholder="John Doe"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                    </div>

                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div>
                            <label for="phone" class="block text-sm font-medium text-slate-700 mb-1">"Phone"</label>
                            <input
                                type="tel"
                                id="phone"
                                required
                                class=INPUT_CLASS
                                placeholder="(555) 123-4567"
                                prop:value=move || draft.with(|d| d.phone.clone())
                                on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="email" class="block text-sm font-medium text-slate-700 mb-1">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                required
                                class=INPUT_CLASS
                                placeholder="john@example.com"
                                prop:value=move || draft.with(|d| d.email.clone())
                                on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div>
                        <label for="service" class="block text-sm font-medium text-slate-700 mb-1">"Service Needed"</label>
                        <div class="relative">
                            <select
                                id="service"
                                class=format!("{INPUT_CLASS} appearance-none bg-white")
                                prop:value=move || draft.with(|d| d.service.label())
                                on:change=move |ev| {
                                    if let Ok(service) = event_target_value(&ev).parse::<ServiceType>() {
                                        draft.update(|d| d.service = service);
                                    }
                                }
                            >
                                {ServiceType::ALL
                                    .into_iter()
                                    .map(|service| view! { <option>{service.label()}</option> })
                                    .collect_view()}
                            </select>
                            <div class="absolute inset-y-0 right-0 flex items-center px-4 pointer-events-none text-slate-500">
                                <Icon path=ICON_CHEVRON_DOWN class="w-4 h-4" />
                            </div>
                        </div>
                    </div>

                    <div>
                        <label for="message" class="block text-sm font-medium text-slate-700 mb-1">"Short Message"</label>
                        <textarea
                            id="message"
                            rows="3"
                            class=format!("{INPUT_CLASS} resize-none")
                            placeholder="Describe your issue..."
                            prop:value=move || draft.with(|d| d.message.clone())
                            on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                        ></textarea>
                    </div>

                    <button
                        type="submit"
                        disabled=move || status() == FormStatus::Submitting
                        class="w-full bg-blue-600 hover:bg-blue-700 text-white font-bold py-4 rounded-xl shadow-lg shadow-blue-200 transition-all transform active:scale-[0.98] disabled:opacity-70 disabled:cursor-not-allowed flex items-center justify-center gap-2"
                    >
                        <Show
                            when=move || status() == FormStatus::Submitting
                            fallback=|| "Request Service Now"
                        >
                            <Spinner />
                            "Sending..."
                        </Show>
                    </button>

                    <p class="text-xs text-center text-slate-400 mt-4">
                        "No spam. Your information is kept private."
                    </p>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn Confirmation<F>(on_reset: F) -> impl IntoView
where
    F: Fn(leptos::ev::MouseEvent) + Copy + 'static,
{
    view! {
        <div class="bg-green-50 border border-green-200 rounded-xl p-8 text-center">
            <div class="w-16 h-16 bg-green-100 rounded-full flex items-center justify-center mx-auto mb-4">
                <Icon path=ICON_CHECK_CIRCLE class="w-8 h-8 text-green-600" />
            </div>
            <h4 class="text-xl font-bold text-green-900 mb-2">"Request Received!"</h4>
            <p class="text-green-700">"We'll call you shortly to confirm your appointment."</p>
            <button
                class="mt-6 text-sm font-semibold text-green-800 hover:text-green-900 underline"
                on:click=on_reset
            >
                "Send another request"
            </button>
        </div>
    }
}
