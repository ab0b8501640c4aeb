//! User Entity

/// A registered account. The password is stored as an argon2 hash and
/// never serialized out.
#[derive(Debug, Clone)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub username: String,
    pub password_hash: String,
}
