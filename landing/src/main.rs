// Precision Plumbing landing page — Leptos 0.8 CSR

use leptos::prelude::*;
use precision_landing::sections::*;
use precision_landing::{SiteConfig, logging};

fn main() {
    logging::init();

    let (config, source) = SiteConfig::resolve();
    tracing::info!(?source, business = %config.business_name, "mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);
    provide_context(Navigator::new());

    view! {
        <div class="font-sans text-slate-900 bg-white antialiased selection:bg-blue-100 selection:text-blue-900">
            <Header />
            <main>
                <Hero />
                <Services />
                <WhyUs />
                <About />
                <Testimonials />
                <EmergencyCta />
            </main>
            <Footer />
        </div>
    }
}
