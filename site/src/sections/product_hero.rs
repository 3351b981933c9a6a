use leptos::prelude::*;

#[component]
pub fn ProductHero() -> impl IntoView {
    view! {
        <section class="product-hero">
            <div class="product-hero-content">
                <h1 class="product-hero-title">
                    "The #1 software in product and project management"
                </h1>
                <p class="product-hero-description">
                    "Bird connects company-wide goals to the work needed to achieve them, "
                    "across teams and functions."
                </p>
                <div class="product-hero-actions">
                    <a href="/contact" class="btn btn-primary">"Get Started"</a>
                    <a href="/contact" class="btn btn-secondary">"View Demo"</a>
                </div>
            </div>
            <img
                class="product-hero-image"
                src="/images/tab-6.webp"
                alt="Bird product overview"
                width="700"
                height="700"
            />
        </section>
    }
}
