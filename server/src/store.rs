//! List Store
//!
//! In-memory state behind one `RwLock`: the seeded catalog, registered
//! accounts, per-user wishlists, and live session tokens.

use std::collections::{BTreeMap, HashMap};

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::Engine;
use rand::RngCore;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::domain::{Game, SignupForm, User};

pub const MSG_EMAIL_AND_USERNAME_TAKEN: &str = "Email and username are already taken.";
pub const MSG_EMAIL_TAKEN: &str = "Email is already taken.";
pub const MSG_USERNAME_TAKEN: &str = "Username is already taken.";
pub const MSG_BAD_CREDENTIALS: &str = "Username or password incorrect.";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

/// Catalog game plus the requesting user's list membership
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub game: Game,
    pub in_list: bool,
}

/// Session handed out by a successful login
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

#[derive(Default)]
struct Inner {
    games: BTreeMap<u32, Game>,
    users: Vec<User>,
    /// Wishlisted game ids per user, in insertion order
    wishlists: HashMap<u32, Vec<u32>>,
    /// Session token -> user id
    sessions: HashMap<String, u32>,
    next_user_id: u32,
}

pub struct ListStore {
    inner: RwLock<Inner>,
}

impl ListStore {
    pub fn new(games: Vec<Game>) -> Self {
        let inner = Inner {
            games: games.into_iter().map(|g| (g.id, g)).collect(),
            next_user_id: 1,
            ..Inner::default()
        };
        Self {
            inner: RwLock::new(inner),
        }
    }

    // ========================
    // Accounts
    // ========================

    /// Register an account. Field rules come from [`SignupForm::validate`];
    /// uniqueness is checked here, with distinct messages so the form can
    /// say which field collided.
    pub async fn signup(&self, form: SignupForm) -> Result<u32, StoreError> {
        form.validate()
            .map_err(|messages| StoreError::Validation(messages.join(" ")))?;

        let mut inner = self.inner.write().await;
        let email_taken = inner.users.iter().any(|u| u.email == form.email);
        let username_taken = inner.users.iter().any(|u| u.username == form.username);
        let conflict = match (email_taken, username_taken) {
            (true, true) => Some(MSG_EMAIL_AND_USERNAME_TAKEN),
            (true, false) => Some(MSG_EMAIL_TAKEN),
            (false, true) => Some(MSG_USERNAME_TAKEN),
            (false, false) => None,
        };
        if let Some(message) = conflict {
            return Err(StoreError::Validation(message.to_string()));
        }

        let id = inner.next_user_id;
        inner.next_user_id += 1;
        let user = User {
            id,
            email: form.email,
            username: form.username,
            password_hash: hash_password(&form.password)?,
        };
        inner.users.push(user);
        Ok(id)
    }

    /// Verify credentials and mint a session token. Lookup is
    /// case-sensitive on both fields.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, StoreError> {
        let mut inner = self.inner.write().await;
        let user = inner
            .users
            .iter()
            .find(|u| u.username == username)
            .filter(|u| verify_password(password, &u.password_hash))
            .ok_or_else(|| StoreError::Unauthorized(MSG_BAD_CREDENTIALS.to_string()))?;

        let session = Session {
            token: generate_token(),
            username: user.username.clone(),
        };
        let user_id = user.id;
        inner.sessions.insert(session.token.clone(), user_id);
        Ok(session)
    }

    pub async fn logout(&self, token: &str) {
        self.inner.write().await.sessions.remove(token);
    }

    /// Resolve a session token to a user id
    pub async fn authenticate(&self, token: &str) -> Option<u32> {
        self.inner.read().await.sessions.get(token).copied()
    }

    // ========================
    // Catalog
    // ========================

    pub async fn catalog_for(&self, user: Option<u32>) -> Vec<CatalogEntry> {
        let inner = self.inner.read().await;
        inner
            .games
            .values()
            .map(|game| CatalogEntry {
                game: game.clone(),
                in_list: inner.is_listed(user, game.id),
            })
            .collect()
    }

    /// Case-insensitive title substring search
    pub async fn search(&self, query: &str, user: Option<u32>) -> Vec<CatalogEntry> {
        let needle = query.to_lowercase();
        let inner = self.inner.read().await;
        inner
            .games
            .values()
            .filter(|game| game.title.to_lowercase().contains(&needle))
            .map(|game| CatalogEntry {
                game: game.clone(),
                in_list: inner.is_listed(user, game.id),
            })
            .collect()
    }

    // ========================
    // Wishlists
    // ========================

    pub async fn wishlist(&self, user: u32) -> Vec<Game> {
        let inner = self.inner.read().await;
        inner
            .wishlists
            .get(&user)
            .into_iter()
            .flatten()
            .filter_map(|id| inner.games.get(id).cloned())
            .collect()
    }

    /// Put a game on the user's list. Re-adding a listed game is a no-op
    /// that still reports success, so a duplicate in-flight click cannot
    /// fail the second request.
    pub async fn add_to_list(&self, user: u32, game_id: u32) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.games.contains_key(&game_id) {
            return Err(StoreError::NotFound(format!("no game with id {game_id}")));
        }
        let list = inner.wishlists.entry(user).or_default();
        if !list.contains(&game_id) {
            list.push(game_id);
        }
        Ok(())
    }

    pub async fn remove_from_list(&self, user: u32, game_id: u32) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.games.contains_key(&game_id) {
            return Err(StoreError::NotFound(format!("no game with id {game_id}")));
        }
        let listed = inner
            .wishlists
            .get_mut(&user)
            .map(|list| {
                let before = list.len();
                list.retain(|id| *id != game_id);
                list.len() < before
            })
            .unwrap_or(false);
        if !listed {
            return Err(StoreError::NotFound(format!(
                "game {game_id} is not on the list"
            )));
        }
        Ok(())
    }
}

impl Inner {
    fn is_listed(&self, user: Option<u32>, game_id: u32) -> bool {
        user.and_then(|u| self.wishlists.get(&u))
            .map(|list| list.contains(&game_id))
            .unwrap_or(false)
    }
}

fn hash_password(password: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| StoreError::Internal(format!("failed to hash password: {e}")))
}

fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn seeded_store() -> ListStore {
        let games = (0..5)
            .map(|i| {
                Game::new(
                    i + 1,
                    format!("game{i}"),
                    NaiveDate::from_ymd_opt(2020, 1, i as u32 + 1).unwrap(),
                )
            })
            .collect();
        ListStore::new(games)
    }

    fn signup_form(email: &str, username: &str) -> SignupForm {
        SignupForm {
            email: email.to_string(),
            username: username.to_string(),
            password: "asdfasdf".to_string(),
            confirm: "asdfasdf".to_string(),
            accept_tos: true,
        }
    }

    #[tokio::test]
    async fn test_signup_and_login() {
        let store = seeded_store();
        store
            .signup(signup_form("asdf@mail.com", "asdf"))
            .await
            .expect("signup");

        let session = store.login("asdf", "asdfasdf").await.expect("login");
        assert_eq!(session.username, "asdf");
        assert!(store.authenticate(&session.token).await.is_some());
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let store = seeded_store();
        store
            .signup(signup_form("asdf@mail.com", "asdf"))
            .await
            .expect("signup");

        for (username, password) in [("asdf", "wrong"), ("ASDF", "asdfasdf"), ("nobody", "x")] {
            let err = store.login(username, password).await.unwrap_err();
            assert!(matches!(err, StoreError::Unauthorized(_)), "{username}");
        }
    }

    #[tokio::test]
    async fn test_signup_reports_which_field_is_taken() {
        let store = seeded_store();
        store
            .signup(signup_form("user1@mail.com", "user1234"))
            .await
            .expect("signup");

        let err = store
            .signup(signup_form("user1@mail.com", "user1234"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains(MSG_EMAIL_AND_USERNAME_TAKEN));

        let err = store
            .signup(signup_form("user1@mail.com", "newuser1"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains(MSG_EMAIL_TAKEN));

        let err = store
            .signup(signup_form("newuser1@mail.com", "user1234"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains(MSG_USERNAME_TAKEN));
    }

    #[tokio::test]
    async fn test_logout_invalidates_token() {
        let store = seeded_store();
        store
            .signup(signup_form("asdf@mail.com", "asdf"))
            .await
            .expect("signup");
        let session = store.login("asdf", "asdfasdf").await.expect("login");

        store.logout(&session.token).await;
        assert!(store.authenticate(&session.token).await.is_none());
    }

    #[tokio::test]
    async fn test_add_and_remove_round_trip() {
        let store = seeded_store();
        let user = store
            .signup(signup_form("asdf@mail.com", "asdf"))
            .await
            .expect("signup");

        store.add_to_list(user, 1).await.expect("add");
        store.add_to_list(user, 2).await.expect("add");
        let listed: Vec<String> = store
            .wishlist(user)
            .await
            .into_iter()
            .map(|g| g.title)
            .collect();
        assert_eq!(listed, vec!["game0", "game1"]);

        store.remove_from_list(user, 1).await.expect("remove");
        let listed: Vec<String> = store
            .wishlist(user)
            .await
            .into_iter()
            .map(|g| g.title)
            .collect();
        assert_eq!(listed, vec!["game1"]);
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let store = seeded_store();
        let user = store
            .signup(signup_form("asdf@mail.com", "asdf"))
            .await
            .expect("signup");

        store.add_to_list(user, 3).await.expect("add");
        store.add_to_list(user, 3).await.expect("second add");
        assert_eq!(store.wishlist(user).await.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_game_and_unlisted_removal_are_not_found() {
        let store = seeded_store();
        let user = store
            .signup(signup_form("asdf@mail.com", "asdf"))
            .await
            .expect("signup");

        let err = store.add_to_list(user, 99).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));

        let err = store.remove_from_list(user, 1).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_catalog_marks_listed_games() {
        let store = seeded_store();
        let user = store
            .signup(signup_form("asdf@mail.com", "asdf"))
            .await
            .expect("signup");
        store.add_to_list(user, 2).await.expect("add");

        let catalog = store.catalog_for(Some(user)).await;
        assert_eq!(catalog.len(), 5);
        for entry in &catalog {
            assert_eq!(entry.in_list, entry.game.id == 2, "game {}", entry.game.id);
        }

        let anonymous = store.catalog_for(None).await;
        assert!(anonymous.iter().all(|entry| !entry.in_list));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let store = seeded_store();
        let hits = store.search("GAME0", None).await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].game.title, "game0");

        let all = store.search("game", None).await;
        assert_eq!(all.len(), 5);

        assert!(store.search("zelda", None).await.is_empty());
    }
}
