//! GameList Backend
//!
//! Layered layout:
//! - domain: catalog and account entities, signup validation
//! - store: in-memory state behind one lock
//! - api: axum router and handlers

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;
use tower_http::services::ServeDir;
use tracing::info;

mod api;
mod config;
mod domain;
mod store;

use api::{build_router, AppState};
use config::{load_settings, Settings};
use domain::Game;
use store::ListStore;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    games: Vec<Game>,
}

/// Catalog from the configured seed file, or the built-in sample set.
fn load_catalog(settings: &Settings) -> anyhow::Result<Vec<Game>> {
    let Some(path) = &settings.catalog_path else {
        return Ok(sample_catalog());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    let file: CatalogFile = toml::from_str(&raw)
        .with_context(|| format!("failed to parse catalog file {}", path.display()))?;
    Ok(file.games)
}

fn sample_catalog() -> Vec<Game> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("static date");
    vec![
        Game::new(1, "Hades", date(2020, 9, 17)),
        Game::new(2, "Celeste", date(2018, 1, 25)),
        Game::new(3, "Hollow Knight", date(2017, 2, 24)),
        Game::new(4, "Stardew Valley", date(2016, 2, 26)),
        Game::new(5, "Outer Wilds", date(2019, 5, 28)),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let games = load_catalog(&settings)?;
    info!(count = games.len(), "catalog loaded");

    let state = Arc::new(AppState {
        store: ListStore::new(games),
    });
    let app = build_router(state).fallback_service(ServeDir::new(&settings.static_dir));

    let addr: SocketAddr = settings.bind_addr.parse().context("invalid bind address")?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_has_unique_ids() {
        let games = sample_catalog();
        let mut ids: Vec<u32> = games.iter().map(|g| g.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), games.len());
    }

    #[test]
    fn test_catalog_file_parses() {
        let raw = r#"
            [[games]]
            id = 1
            title = "Hades"
            release_date = "2020-09-17"

            [[games]]
            id = 2
            title = "Celeste"
            release_date = "2018-01-25"
        "#;
        let file: CatalogFile = toml::from_str(raw).expect("parse");
        assert_eq!(file.games.len(), 2);
        assert_eq!(file.games[1].title, "Celeste");
    }
}
