use crate::sections::Navbar;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Navbar />
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Page not found"</h1>
                <p class="page-description">
                    "The page you are looking for does not exist. "
                    <a href="/">"Back to the home page"</a>
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_notice_with_link_home() {
        let html = Owner::new().with(|| view! { <NotFoundPage /> }.to_html());

        assert!(html.contains("Page not found"));
        assert!(html.contains("Back to the home page"));
        assert!(html.contains("class=\"nav\""));
    }
}
