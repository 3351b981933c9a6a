// Contact page - sales form
use crate::sections::{ContactForm, Navbar};
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Navbar />
        <ContactForm />
    }
}
