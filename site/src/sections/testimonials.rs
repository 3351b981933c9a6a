use leptos::prelude::*;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="customers" class="testimonials">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Customers"</p>
                    <h2 class="section-title">"Teams that switched and stayed"</h2>
                </div>
                <div class="testimonials-grid">
                    <Quote
                        text="We replaced three tools and a weekly status meeting. Nobody misses either."
                        author="Priya Raman"
                        role="Head of Delivery, Northwind"
                    />
                    <Quote
                        text="Our roadmap finally matches what engineering is actually building."
                        author="Daniel Okafor"
                        role="VP Product, Lumen Health"
                    />
                    <Quote
                        text="Onboarding 200 people took an afternoon. The templates did the rest."
                        author="Sofia Lindqvist"
                        role="Operations Lead, Fjord Logistics"
                    />
                </div>
                <div class="logo-strip">
                    <span class="logo-strip-label">"Trusted by 10,000+ teams"</span>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Quote(text: &'static str, author: &'static str, role: &'static str) -> impl IntoView {
    view! {
        <blockquote class="testimonial">
            <p class="testimonial-text">{text}</p>
            <footer class="testimonial-author">
                <strong>{author}</strong>
                <span class="testimonial-role">{role}</span>
            </footer>
        </blockquote>
    }
}
