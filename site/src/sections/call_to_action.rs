use leptos::prelude::*;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta-section">
            <div class="container">
                <div class="cta-box">
                    <h2 class="cta-title">"Ready to bring your projects together?"</h2>
                    <p class="cta-description">
                        "Talk to our sales team about plans for companies of every size."
                    </p>
                    <div class="cta-actions">
                        <a href="/contact" class="btn btn-primary">"Contact Sales"</a>
                        <a href="/product" class="btn btn-secondary">"Explore the product"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
