//! Game Entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A catalog game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Unique identifier; its decimal form is the wire identifier of
    /// the `/add` and `/remove` payloads
    pub id: u32,
    /// Display title
    pub title: String,
    /// Release date, serialized as `YYYY-MM-DD`
    pub release_date: NaiveDate,
}

impl Game {
    pub fn new(id: u32, title: impl Into<String>, release_date: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            release_date,
        }
    }
}
