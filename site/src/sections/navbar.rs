use leptos::prelude::*;
use super::BRAND;

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_| set_menu_open.set(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <img class="nav-logo" src="/images/bird-logo.svg" alt=BRAND />
                    <span class="nav-title">{BRAND}</span>
                </a>
                <div class="nav-links">
                    <a href="/product" class="nav-link">"Product"</a>
                    <a href="/#features" class="nav-link">"Features"</a>
                    <a href="/#customers" class="nav-link">"Customers"</a>
                    <a href="/contact" class="nav-link">"Contact Sales"</a>
                    <a href="/contact" class="nav-cta">"Get Started"</a>
                </div>
                <button
                    class=move || if menu_open.get() { "nav-toggle active" } else { "nav-toggle" }
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() { "Close" } else { "Menu" }}
                </button>
            </div>

            // Mobile drawer
            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    <a href="/product" class="nav-drawer-link" on:click=close_menu>"Product"</a>
                    <a href="/#features" class="nav-drawer-link" on:click=close_menu>"Features"</a>
                    <a href="/#customers" class="nav-drawer-link" on:click=close_menu>"Customers"</a>
                    <a href="/contact" class="nav-drawer-link" on:click=close_menu>"Contact Sales"</a>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_brand_and_page_links() {
        let html = Owner::new().with(|| view! { <Navbar /> }.to_html());

        assert!(html.contains("class=\"nav-title\""));
        assert!(html.contains(BRAND));
        for href in ["href=\"/\"", "href=\"/product\"", "href=\"/contact\""] {
            assert!(html.contains(href), "missing {href}");
        }
        assert!(html.contains("Get Started"));
        // drawer starts closed
        assert!(!html.contains("nav-drawer-link"));
    }
}
