//! Catalog View Component
//!
//! The full game catalog with per-card add controls and a search bar.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AddButton, SearchBar};
use crate::context::AppContext;
use crate::dom;
use crate::models::CatalogEntry;

use super::add_button::ADDED_LABEL;

/// Catalog of all games, filtered by the search query when one is set
#[component]
pub fn CatalogView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (entries, set_entries) = signal(Vec::<CatalogEntry>::new());
    let (query, set_query) = signal(String::new());

    // Reload when the query, the session, or the reload trigger changes.
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let session = ctx.session.get();
        let q = query.get();
        spawn_local(async move {
            let token = session.as_ref().map(|s| s.token.as_str());
            let loaded = if q.trim().is_empty() {
                api::fetch_catalog(token).await
            } else {
                api::search_games(q.trim(), token).await
            };
            match loaded {
                Ok(entries) => set_entries.set(entries),
                Err(err) => {
                    web_sys::console::error_1(&format!("catalog load failed: {err}").into())
                }
            }
        });
    });

    view! {
        <section class="catalog">
            <SearchBar set_query=set_query />
            <ul class="game-cards">
                <For
                    each=move || entries.get()
                    key=|entry| entry.game.id
                    children=move |entry: CatalogEntry| {
                        let game = entry.game;
                        let status_class =
                            if entry.in_list { "list-status disabled" } else { "list-status" };
                        let status_label = if entry.in_list { ADDED_LABEL } else { "Not in list" };
                        view! {
                            <li class="game-card">
                                <span class="game-title">{game.title.clone()}</span>
                                <span class="release-date">{game.release_date.clone()}</span>
                                <span id=dom::catalog_status_id(game.id) class=status_class>
                                    {status_label}
                                </span>
                                <AddButton id=game.id listed=entry.in_list />
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
