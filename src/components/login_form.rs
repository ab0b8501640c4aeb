//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::models::LoginArgs;

fn input_value(ev: &web_sys::Event) -> String {
    let target = ev.target().unwrap();
    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
    input.value()
}

#[component]
pub fn LoginForm(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let args = LoginArgs {
            username: username.get(),
            password: password.get(),
        };
        spawn_local(async move {
            match api::login(&args).await {
                Ok(session) => {
                    set_error.set(None);
                    ctx.set_session(session);
                    ctx.reload();
                    on_login.run(());
                }
                Err(err) => set_error.set(Some(err)),
            }
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <h2>"Log in"</h2>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <input
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(input_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(input_value(&ev))
            />
            <button type="submit">"Log in"</button>
        </form>
    }
}
