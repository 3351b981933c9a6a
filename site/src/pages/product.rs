// Product page
use crate::sections::{Navbar, ProductHero};
use leptos::prelude::*;

#[component]
pub fn ProductPage() -> impl IntoView {
    view! {
        <Navbar />
        <ProductHero />
    }
}
