//! Frontend Models
//!
//! Data structures matching backend payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog game.
///
/// Stored as a number, carried as a decimal string in the `/add` and
/// `/remove` payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u32);

impl GameId {
    /// Parse a wire identifier. Returns `None` for anything that is not
    /// a plain decimal number.
    pub fn parse(raw: &str) -> Option<GameId> {
        raw.trim().parse().ok().map(GameId)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Game data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub release_date: String,
}

/// Catalog entry with the signed-in user's list membership (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub game: Game,
    pub in_list: bool,
}

/// Body of `POST /add` and `POST /remove`
#[derive(Debug, Clone, Serialize)]
pub struct ListChangeRequest {
    pub response: String,
}

/// Success body of `POST /add` and `POST /remove`, echoing the identifier
#[derive(Debug, Clone, Deserialize)]
pub struct ListChangeResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupArgs {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm: String,
    pub accept_tos: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginArgs {
    pub username: String,
    pub password: String,
}

/// Session handed out by `POST /login` (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

/// Error body returned by the backend on any failed request
#[derive(Debug, Clone, Deserialize)]
pub struct ApiFailure {
    pub code: String,
    pub message: String,
}
