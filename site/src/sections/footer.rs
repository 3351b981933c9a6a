use leptos::prelude::*;
use super::BRAND;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <img class="footer-logo" src="/images/bird-logo.svg" alt=BRAND />
                    <span class="footer-title">{BRAND}</span>
                </div>
                <div class="footer-links">
                    <a href="/" class="footer-link">"Home"</a>
                    <a href="/product" class="footer-link">"Product"</a>
                    <a href="/contact" class="footer-link">"Contact"</a>
                </div>
                <p class="footer-copyright">"© 2025 Bird. All rights reserved."</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_links_and_copyright() {
        let html = view! { <Footer /> }.to_html();

        assert_eq!(html.matches("class=\"footer-link\"").count(), 3);
        assert!(html.contains("All rights reserved."));
    }
}
