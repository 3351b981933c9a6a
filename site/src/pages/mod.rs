// Site routes

mod contact;
mod home;
mod not_found;
mod product;

pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use product::ProductPage;
