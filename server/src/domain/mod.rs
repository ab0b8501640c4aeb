//! Domain Layer
//!
//! Catalog and account entities plus the signup validation rules.

mod game;
mod signup;
mod user;

pub use game::Game;
pub use signup::SignupForm;
pub use user::User;
