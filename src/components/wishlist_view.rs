//! Wishlist View Component
//!
//! The signed-in user's game list, one removable row per game.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::RemoveButton;
use crate::context::AppContext;
use crate::dom;
use crate::models::{Game, GameId};

/// The user's wishlist; asks for a login when there is no session
#[component]
pub fn WishlistView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (games, set_games) = signal(Vec::<Game>::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let session = ctx.session.get();
        spawn_local(async move {
            let Some(session) = session else {
                set_games.set(Vec::new());
                return;
            };
            match api::fetch_wishlist(Some(&session.token)).await {
                Ok(loaded) => set_games.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(&format!("wishlist load failed: {err}").into())
                }
            }
        });
    });

    // The row is already faded out by the time this runs; dropping it
    // from the signal unmounts it and detaches the element.
    let on_removed = Callback::new(move |id: GameId| {
        set_games.update(|games| games.retain(|game| game.id != id));
    });

    view! {
        <section class="wishlist">
            <Show
                when=move || ctx.session.get().is_some()
                fallback=|| view! { <p class="login-hint">"Log in to see your list."</p> }
            >
                <ul class="my-games">
                    <For
                        each=move || games.get()
                        key=|game| game.id
                        children=move |game: Game| {
                            view! {
                                <li id=dom::wishlist_row_id(game.id) class="my-game-row">
                                    <span class="game-title">{game.title.clone()}</span>
                                    <span class="release-date">{game.release_date.clone()}</span>
                                    <RemoveButton id=game.id on_removed=on_removed />
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
