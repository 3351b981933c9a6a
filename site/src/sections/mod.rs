// Page sections, in the order pages stack them.

/// Product name used across the site copy.
pub const BRAND: &str = "Bird";

mod call_to_action;
mod contact_form;
mod features;
mod footer;
mod hero;
mod navbar;
mod product_hero;
mod showcase;
mod testimonials;
mod toast;

pub use call_to_action::CallToAction;
pub use contact_form::ContactForm;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use product_hero::ProductHero;
pub use showcase::Showcase;
pub use testimonials::Testimonials;
pub use toast::{ToastHandle, Toaster};
