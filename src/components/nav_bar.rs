//! Navigation Bar Component
//!
//! View switching tabs plus the session indicator.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;

/// Which top-level view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Catalog,
    Wishlist,
    Login,
    Signup,
}

const TABS: &[(View, &str)] = &[
    (View::Catalog, "Games"),
    (View::Wishlist, "My list"),
];

#[component]
pub fn NavBar(current: ReadSignal<View>, set_current: WriteSignal<View>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_logout = move |_ev: web_sys::MouseEvent| {
        let Some(token) = ctx.token() else { return };
        spawn_local(async move {
            if let Err(err) = api::logout(&token).await {
                web_sys::console::error_1(&format!("logout failed: {err}").into());
            }
            // The token is gone either way.
            ctx.clear_session();
            ctx.reload();
        });
    };

    view! {
        <nav class="nav-bar">
            {TABS
                .iter()
                .map(|(view, label)| {
                    let view = *view;
                    view! {
                        <button
                            class=move || {
                                if current.get() == view { "nav-tab active" } else { "nav-tab" }
                            }
                            on:click=move |_| set_current.set(view)
                        >
                            {*label}
                        </button>
                    }
                })
                .collect_view()}
            {move || match ctx.session.get() {
                Some(session) => {
                    view! {
                        <span class="session-box">
                            <span class="username">{session.username}</span>
                            <button class="nav-tab" on:click=on_logout>
                                "Log out"
                            </button>
                        </span>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <span class="session-box">
                            <button class="nav-tab" on:click=move |_| set_current.set(View::Login)>
                                "Log in"
                            </button>
                            <button class="nav-tab" on:click=move |_| set_current.set(View::Signup)>
                                "Sign up"
                            </button>
                        </span>
                    }
                        .into_any()
                }
            }}
        </nav>
    }
}
