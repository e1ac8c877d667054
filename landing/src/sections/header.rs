use leptos::prelude::*;

use super::icons::*;
use super::use_navigator;
use crate::config::SiteConfig;
use crate::navigation::{NAV_ITEMS, Section};

#[component]
pub fn Header() -> impl IntoView {
    let nav = use_navigator();
    let config = expect_context::<SiteConfig>();
    let tel = config.tel_href();
    let phone = config.phone_display.clone();
    let (menu_tel, menu_phone) = (tel.clone(), phone.clone());

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/95 backdrop-blur-sm border-b border-slate-200 shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-20">
                    // Logo
                    <div class="flex items-center gap-2 cursor-pointer" on:click=move |_| nav.scroll_to_top()>
                        <div class="bg-blue-700 p-2 rounded-lg">
                            <Icon path=ICON_WRENCH class="w-6 h-6 text-white" />
                        </div>
                        <div>
                            <h1 class="text-xl font-bold text-slate-900 leading-none">{config.brand.clone()}</h1>
                            <p class="text-xs font-bold text-blue-700 tracking-widest uppercase">
                                {config.brand_suffix.clone()}
                            </p>
                        </div>
                    </div>

                    // Desktop nav
                    <nav class="hidden md:flex items-center gap-8">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <button
                                        class="text-sm font-medium text-slate-600 hover:text-blue-700 transition-colors"
                                        on:click=move |_| nav.go(item.target)
                                    >
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="flex items-center gap-4">
                        <a
                            href=tel
                            class="hidden md:flex items-center gap-2 text-slate-900 font-bold hover:text-blue-700 transition-colors"
                        >
                            <div class="bg-blue-100 p-2 rounded-full">
                                <Icon path=ICON_PHONE class="w-4 h-4 text-blue-700" />
                            </div>
                            <span>{phone}</span>
                        </a>
                        <button
                            class="hidden md:block bg-blue-700 hover:bg-blue-800 text-white px-6 py-2.5 rounded-lg font-semibold transition-all shadow-md hover:shadow-lg transform hover:-translate-y-0.5"
                            on:click=move |_| nav.go(Section::Contact)
                        >
                            "Get Estimate"
                        </button>

                        <button
                            class="md:hidden p-2 text-slate-600 hover:text-slate-900"
                            aria-label="Toggle menu"
                            on:click=move |_| nav.toggle_menu()
                        >
                            <Show
                                when=move || nav.menu_open()
                                fallback=|| view! { <Icon path=ICON_MENU class="w-7 h-7" /> }
                            >
                                <Icon path=ICON_CLOSE class="w-7 h-7" />
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || nav.menu_open()>
                <MobileMenu tel=menu_tel.clone() phone=menu_phone.clone() />
            </Show>
        </header>
    }
}

#[component]
fn MobileMenu(tel: String, phone: String) -> impl IntoView {
    let nav = use_navigator();

    view! {
        <div class="md:hidden bg-white border-b border-slate-200 overflow-hidden">
            <div class="px-4 py-6 space-y-4">
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        view! {
                            <button
                                class="block w-full text-left px-4 py-2 text-lg font-medium text-slate-900 hover:bg-slate-50 rounded-lg"
                                on:click=move |_| nav.go(item.target)
                            >
                                {item.label}
                            </button>
                        }
                    })
                    .collect_view()}
                <div class="pt-4 border-t border-slate-100">
                    <a
                        href=tel
                        class="flex items-center justify-center gap-2 w-full bg-slate-100 text-slate-900 font-bold py-3 rounded-lg mb-3"
                    >
                        <Icon path=ICON_PHONE />
                        {phone}
                    </a>
                    <button
                        class="w-full bg-blue-700 text-white font-bold py-3 rounded-lg shadow-md"
                        on:click=move |_| nav.go(Section::Contact)
                    >
                        "Get Free Estimate"
                    </button>
                </div>
            </div>
        </div>
    }
}
