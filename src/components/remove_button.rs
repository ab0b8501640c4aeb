//! Remove Button Component
//!
//! The "remove" control on a wishlist row. On a successful `/remove`
//! echo the row fades out, then the owner drops it from the list signal,
//! which unmounts the element.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::dom;
use crate::models::GameId;

/// Per-row remove control, carrying the bare game id in its `id` attribute
///
/// # Arguments
/// * `on_removed` - Callback run after the fade-out, with the echoed id
#[component]
pub fn RemoveButton(id: GameId, #[prop(into)] on_removed: Callback<GameId>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_click = move |_ev: web_sys::MouseEvent| {
        let token = ctx.token();
        spawn_local(async move {
            match api::remove_from_list(id, token.as_deref()).await {
                Ok(reply) => {
                    let Some(echoed) = GameId::parse(&reply.response) else {
                        return;
                    };
                    if let Some(row) = dom::wishlist_row(echoed) {
                        dom::fade_out(&row).await;
                    }
                    on_removed.run(echoed);
                }
                Err(err) => web_sys::console::error_1(&format!("remove failed: {err}").into()),
            }
        });
    };

    view! {
        <button id=id.to_string() class="remove-button" on:click=on_click>
            "Remove"
        </button>
    }
}
