//! UI Components
//!
//! Reusable Leptos components.

mod add_button;
mod remove_button;
mod catalog_view;
mod wishlist_view;
mod search_bar;
mod signup_form;
mod login_form;
mod nav_bar;

pub use add_button::AddButton;
pub use remove_button::RemoveButton;
pub use catalog_view::CatalogView;
pub use wishlist_view::WishlistView;
pub use search_bar::SearchBar;
pub use signup_form::SignupForm;
pub use login_form::LoginForm;
pub use nav_bar::{NavBar, View};
