//! Add Button Component
//!
//! The "add" control on a catalog card. One click sends one `/add`
//! request; nothing is debounced, and nothing changes until the backend
//! echoes the identifier back.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::dom;
use crate::models::GameId;

/// Confirmation text written into the `game_<id>` status element
pub const ADDED_LABEL: &str = "Added to list";

/// Per-card add control, carrying the bare game id in its `id` attribute
#[component]
pub fn AddButton(id: GameId, #[prop(optional)] listed: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (added, set_added) = signal(listed);

    let on_click = move |_ev: web_sys::MouseEvent| {
        let token = ctx.token();
        spawn_local(async move {
            match api::add_to_list(id, token.as_deref()).await {
                Ok(reply) => {
                    // The control stays clickable until the echo lands.
                    set_added.set(true);
                    let Some(echoed) = GameId::parse(&reply.response) else {
                        return;
                    };
                    if let Some(status) = dom::catalog_status(echoed) {
                        status.set_text_content(Some(ADDED_LABEL));
                        let _ = status.class_list().add_1("disabled");
                    }
                }
                Err(err) => web_sys::console::error_1(&format!("add failed: {err}").into()),
            }
        });
    };

    view! {
        <button
            id=id.to_string()
            class="add-button"
            prop:disabled=move || added.get()
            on:click=on_click
        >
            "Add to list"
        </button>
    }
}
