//! Signup Form Component
//!
//! Account registration; server-side validation messages are shown inline.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::models::SignupArgs;

fn input_value(ev: &web_sys::Event) -> String {
    let target = ev.target().unwrap();
    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
    input.value()
}

fn input_checked(ev: &web_sys::Event) -> bool {
    let target = ev.target().unwrap();
    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
    input.checked()
}

#[component]
pub fn SignupForm() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (accept_tos, set_accept_tos) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (created, set_created) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let args = SignupArgs {
            email: email.get(),
            username: username.get(),
            password: password.get(),
            confirm: confirm.get(),
            accept_tos: accept_tos.get(),
        };
        spawn_local(async move {
            match api::signup(&args).await {
                Ok(()) => {
                    set_error.set(None);
                    set_created.set(true);
                }
                Err(err) => set_error.set(Some(err)),
            }
        });
    };

    view! {
        <form class="signup-form" on:submit=on_submit>
            <h2>"Sign up"</h2>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <Show when=move || created.get()>
                <p class="form-success">"Account created. You can log in now."</p>
            </Show>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(input_value(&ev))
            />
            <input
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(input_value(&ev))
            />
            <input
                type="password"
                placeholder="Enter password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(input_value(&ev))
            />
            <input
                type="password"
                placeholder="Confirm password"
                prop:value=move || confirm.get()
                on:input=move |ev| set_confirm.set(input_value(&ev))
            />
            <label class="tos-row">
                <input
                    type="checkbox"
                    prop:checked=move || accept_tos.get()
                    on:change=move |ev| set_accept_tos.set(input_checked(&ev))
                />
                "I have read and agree to the Terms of Service"
            </label>
            <button type="submit">"Create account"</button>
        </form>
    }
}
