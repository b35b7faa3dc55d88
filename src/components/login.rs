//! Login Screen

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::auth;
use crate::context::AppContext;
use crate::router::Route;

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_pending.set(true);
        let email = email.get();
        let password = password.get();
        spawn_local(async move {
            // Success arrives through the session subscription; the public
            // gate then redirects off this screen
            if let Err(err) = auth::sign_in(&email, &password).await {
                set_error.set(Some(format!("Failed to sign in: {}", err)));
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <form class="card auth-form" on:submit=submit>
                <h1 class="brand">"Kaarya"</h1>
                <h2>"Welcome Back"</h2>

                {move || {
                    error.get().map(|message| view! { <p class="alert error">{message}</p> })
                }}

                <input
                    type="email"
                    placeholder="Email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_email.set(input.value());
                    }
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password.set(input.value());
                    }
                />
                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing In..." } else { "Sign In" }}
                </button>

                <p class="auth-switch">
                    "Don't have an account? "
                    <a on:click=move |_| ctx.navigate(Route::SignUp)>"Sign Up"</a>
                </p>
            </form>
        </div>
    }
}
