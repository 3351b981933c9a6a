use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            "New: roadmaps that update themselves"
                        </div>
                        <h1 class="hero-title">
                            "One place for "
                            <span class="hero-title-accent">"every project"</span>
                            <br />
                            "your team ships."
                        </h1>
                        <p class="hero-description">
                            "Plan sprints, track goals and keep stakeholders in the loop. "
                            "Bird brings tasks, docs and timelines into a single workspace."
                        </p>
                        <div class="hero-actions">
                            <a href="/contact" class="btn btn-primary">"Get Started"</a>
                            <a href="/product" class="btn btn-secondary">"See the product →"</a>
                        </div>
                    </div>
                    <img
                        class="hero-image"
                        src="/images/hero-board.webp"
                        alt="Bird project board"
                        width="640"
                        height="480"
                    />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_calls_to_action() {
        let html = view! { <Hero /> }.to_html();

        assert!(html.contains("class=\"hero\""));
        assert!(html.contains("href=\"/contact\""));
        assert!(html.contains("Get Started"));
    }
}
