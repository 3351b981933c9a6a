// Bird marketing site — Leptos 0.8 CSR
// Home, product and contact pages over one shared layout.

mod fetch;
mod logging;
mod pages;
mod sections;

use bird_contact::ContactConfig;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::{ContactPage, HomePage, NotFoundPage, ProductPage};
use sections::{Footer, Toaster};

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!("mounting bird-site v{}", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Build-time configuration. `BIRD_CONTACT_ENDPOINT` overrides the POST target.
fn site_config() -> ContactConfig {
    ContactConfig::default().with_endpoint(option_env!("BIRD_CONTACT_ENDPOINT"))
}

#[component]
fn App() -> impl IntoView {
    let config = site_config();
    let toast_limit = config.toast_limit;
    provide_context(config);

    view! {
        <Toaster limit=toast_limit>
            <Router>
                <main>
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/product") view=ProductPage />
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </main>
                <Footer />
            </Router>
        </Toaster>
    }
}
