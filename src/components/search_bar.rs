//! Search Bar Component
//!
//! Title search over the catalog; submitting sets the owner's query signal.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Search form; an empty submission clears the filter
#[component]
pub fn SearchBar(set_query: WriteSignal<String>) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_query.set(text.get());
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                type="text"
                placeholder="Search games..."
                prop:value=move || text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_text.set(input.value());
                }
            />
            <button type="submit">"Search"</button>
        </form>
    }
}
