//! GameList Frontend App
//!
//! Top-level component: provides the shared context and switches views.

use leptos::prelude::*;

use crate::components::{CatalogView, LoginForm, NavBar, SignupForm, View, WishlistView};
use crate::context::AppContext;
use crate::models::Session;

#[component]
pub fn App() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (session, set_session) = signal::<Option<Session>>(None);
    let (current_view, set_current_view) = signal(View::Catalog);

    // Provide context to all children
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (session, set_session),
    ));

    let after_login = Callback::new(move |()| set_current_view.set(View::Catalog));

    view! {
        <div class="app-layout">
            <h1>"Game List"</h1>
            <NavBar current=current_view set_current=set_current_view />
            <main class="main-content">
                {move || match current_view.get() {
                    View::Catalog => view! { <CatalogView /> }.into_any(),
                    View::Wishlist => view! { <WishlistView /> }.into_any(),
                    View::Login => view! { <LoginForm on_login=after_login /> }.into_any(),
                    View::Signup => view! { <SignupForm /> }.into_any(),
                }}
            </main>
        </div>
    }
}
