// Home page - hero + marketing sections
use crate::sections::{CallToAction, Features, Hero, Navbar, Showcase, Testimonials};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar />
        <Hero />
        <Showcase />
        <Features />
        <Testimonials />
        <CallToAction />
    }
}
